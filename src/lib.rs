//! calws: Provision staged JWST calibration workspaces and launch the pipeline
//! with explicit CRDS reference settings.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DirStatus, LaunchOutcome, ProvisionOutcome, ProvisionReport, ProvisionedDir, StatusEntry,
    StatusReport, ensure_workspace, init, init_at, launch_at, paths_at, reference_at,
    resolve_workspace_root, status_at,
};
pub use domain::{
    AppError, CalwsConfig, ReferenceConfig, ReferenceOverrides, StageRole, WorkspaceLayout,
    WorkspacePath,
};
