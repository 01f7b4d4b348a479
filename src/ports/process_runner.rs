use std::path::Path;

use crate::domain::AppError;

/// Port for launching an external program and waiting for it.
pub trait ProcessRunner {
    /// Run `program` with `args` in `cwd`, adding `env` to the child only.
    ///
    /// Returns the child's exit code. A child killed by a signal reports `1`.
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        env: &[(&str, String)],
    ) -> Result<i32, AppError>;
}
