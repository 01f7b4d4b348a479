pub mod process_command;
pub mod workspace_filesystem;
