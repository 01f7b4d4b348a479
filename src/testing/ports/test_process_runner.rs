//! Test double for `ProcessRunner`.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// One recorded launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

/// Records launches and returns a canned exit code.
#[derive(Debug, Default)]
pub struct FakeProcessRunner {
    pub exit_code: i32,
    pub runs: RefCell<Vec<RecordedRun>>,
}

impl FakeProcessRunner {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code, runs: RefCell::new(Vec::new()) }
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        env: &[(&str, String)],
    ) -> Result<i32, AppError> {
        self.runs.borrow_mut().push(RecordedRun {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
            env: env.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        });
        Ok(self.exit_code)
    }
}
