//! Shared testing utilities for calws CLI and library tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stage directory names in canonical order.
#[allow(dead_code)]
pub const STAGES: [&str; 9] = [
    "uncal",
    "stage1",
    "stage1_processed",
    "stage1_nsclean",
    "stage2",
    "stage2_processed",
    "stage2_nsclean",
    "stage3",
    "stage3_processed",
];

/// Testing harness providing an isolated project directory.
///
/// Layout mirrors how the tool is used: commands run from `<root>/notebooks`,
/// so the default workspace root is the temp directory itself.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("notebooks");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Workspace root used when no `--root` is given.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `calws` binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `calws` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("calws").expect("Failed to locate calws binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// `<root>/data/<stage>`
    pub fn stage_path(&self, stage: &str) -> PathBuf {
        self.root().join("data").join(stage)
    }

    /// Write `calws.toml` at the root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("calws.toml"), content).expect("Failed to write calws.toml");
    }

    /// Assert that every stage directory exists.
    pub fn assert_workspace_exists(&self) {
        for stage in STAGES {
            let path = self.stage_path(stage);
            assert!(path.is_dir(), "{} should exist", path.display());
        }
    }

    /// Assert that no stage directory exists.
    pub fn assert_workspace_absent(&self) {
        assert!(!self.root().join("data").exists(), "data/ should not exist");
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Restore original CWD first (in case we're still in the temp dir)
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
