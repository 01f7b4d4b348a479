//! Launch the external pipeline against a provisioned workspace.

use crate::app::AppContext;
use crate::domain::{AppError, ReferenceConfig, WorkspaceLayout};
use crate::ports::{EntryState, ProcessRunner, WorkspaceFilesystem};

use super::provision::{self, ProvisionReport, not_a_directory};

#[derive(Debug)]
pub struct LaunchOutcome {
    pub report: ProvisionReport,
    pub exit_code: i32,
}

/// Provision the workspace and CRDS cache, then run `program` from the root.
///
/// The CRDS variables are set on the child process only.
pub fn execute<F, P>(
    ctx: &AppContext<F, P>,
    layout: &WorkspaceLayout,
    reference: &ReferenceConfig,
    program: &str,
    args: &[String],
) -> Result<LaunchOutcome, AppError>
where
    F: WorkspaceFilesystem,
    P: ProcessRunner,
{
    let report = provision::execute(ctx.filesystem(), layout)?;

    match ctx.filesystem().entry_state(&reference.crds_path)? {
        EntryState::Directory => {}
        EntryState::Missing => ctx.filesystem().create_dir_all(&reference.crds_path)?,
        EntryState::Other => return Err(not_a_directory(&reference.crds_path)),
    }

    tracing::info!(program, root = %layout.root().display(), "launching pipeline");
    let exit_code = ctx.runner().run(program, args, layout.root(), &reference.env_vars())?;

    Ok(LaunchOutcome { report, exit_code })
}
