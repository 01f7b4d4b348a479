mod test_process_runner;
mod test_workspace_fs;

pub use self::test_process_runner::{FakeProcessRunner, RecordedRun};
pub use self::test_workspace_fs::MockWorkspaceFs;
