//! `env` and `exec` commands.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::{AppError, ReferenceOverrides};

pub fn run_env(root: Option<PathBuf>, overrides: ReferenceOverrides) -> Result<(), AppError> {
    let root = api::resolve_workspace_root(root.as_deref())?;
    let reference = api::reference_at(root, &overrides)?;

    for line in reference.shell_exports() {
        println!("{}", line);
    }
    Ok(())
}

pub fn run_exec(
    root: Option<PathBuf>,
    overrides: ReferenceOverrides,
    command: Vec<String>,
) -> Result<i32, AppError> {
    let Some((program, args)) = command.split_first() else {
        return Err(AppError::config_error("No program given to exec"));
    };
    let root = api::resolve_workspace_root(root.as_deref())?;

    let outcome = api::launch_at(root, &overrides, program, args)?;
    if outcome.exit_code != 0 {
        tracing::warn!(program = %program, code = outcome.exit_code, "pipeline exited with failure");
    }
    Ok(outcome.exit_code)
}
