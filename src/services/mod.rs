pub mod adapters;

pub use adapters::process_command::CommandProcessRunner;
pub use adapters::workspace_filesystem::LocalWorkspaceFilesystem;
