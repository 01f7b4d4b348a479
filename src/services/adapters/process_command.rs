use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Runs external programs with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessRunner;

impl CommandProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for CommandProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        env: &[(&str, String)],
    ) -> Result<i32, AppError> {
        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);
        for (name, value) in env {
            command.env(name, value);
        }

        let status = command.status().map_err(|e| AppError::Launch {
            program: program.to_string(),
            details: e.to_string(),
        })?;

        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn child_sees_injected_environment() {
        let temp = TempDir::new().unwrap();
        let runner = CommandProcessRunner::new();
        let script = r#"test "$CRDS_SERVER_URL" = "https://example.org" && pwd > seen_cwd"#;

        let code = runner
            .run(
                "sh",
                &["-c".to_string(), script.to_string()],
                temp.path(),
                &[("CRDS_SERVER_URL", "https://example.org".to_string())],
            )
            .unwrap();

        assert_eq!(code, 0);
        assert!(temp.path().join("seen_cwd").exists());
    }

    #[test]
    fn exit_code_is_propagated() {
        let temp = TempDir::new().unwrap();
        let code = CommandProcessRunner::new()
            .run("sh", &["-c".to_string(), "exit 3".to_string()], temp.path(), &[])
            .unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let temp = TempDir::new().unwrap();
        let err = CommandProcessRunner::new()
            .run("calws-no-such-program", &[], temp.path(), &[])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Launch { ref program, .. } if program == "calws-no-such-program"
        ));
    }
}
