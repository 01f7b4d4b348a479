mod process_runner;
mod workspace_filesystem;

pub use process_runner::ProcessRunner;
pub use workspace_filesystem::{EntryState, WorkspaceFilesystem};
