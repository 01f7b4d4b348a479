use crate::ports::{ProcessRunner, WorkspaceFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: WorkspaceFilesystem, P: ProcessRunner> {
    filesystem: F,
    runner: P,
}

impl<F: WorkspaceFilesystem, P: ProcessRunner> AppContext<F, P> {
    /// Create a new application context.
    pub fn new(filesystem: F, runner: P) -> Self {
        Self { filesystem, runner }
    }

    /// Get a reference to the workspace filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &P {
        &self.runner
    }
}
