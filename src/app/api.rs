//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together root resolution,
//! configuration loading and command execution. Functions without the `_at`
//! suffix derive the root from the current directory (its parent); the `_at`
//! variants take an explicit root, resolved against the current directory when
//! relative.

use std::path::{Path, PathBuf};

use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{launch, provision, status},
};
use crate::domain::{CalwsConfig, WorkspaceLayout, default_root, resolve_root};
use crate::services::{CommandProcessRunner, LocalWorkspaceFilesystem};

pub use crate::app::commands::launch::LaunchOutcome;
pub use crate::app::commands::provision::{ProvisionOutcome, ProvisionReport, ProvisionedDir};
pub use crate::app::commands::status::{DirStatus, StatusEntry, StatusReport};
pub use crate::domain::{AppError, ReferenceConfig, ReferenceOverrides, StageRole, WorkspacePath};

fn create_context() -> AppContext<LocalWorkspaceFilesystem, CommandProcessRunner> {
    AppContext::new(LocalWorkspaceFilesystem::new(), CommandProcessRunner::new())
}

/// Resolve an explicit or cwd-derived root to an absolute path.
///
/// The current directory is only consulted when the root is relative or omitted.
pub fn resolve_workspace_root(root: Option<&Path>) -> Result<PathBuf, AppError> {
    match root {
        Some(path) if path.is_absolute() => resolve_root(path, path),
        Some(path) => resolve_root(path, &std::env::current_dir()?),
        None => default_root(&std::env::current_dir()?),
    }
}

fn resolve_explicit_root(root: PathBuf) -> Result<PathBuf, AppError> {
    resolve_workspace_root(Some(root.as_path()))
}

fn load_layout(root: PathBuf) -> Result<(CalwsConfig, WorkspaceLayout), AppError> {
    let config = load_config(&root)?;
    let layout = config.layout(root)?;
    Ok((config, layout))
}

// =============================================================================
// Provisioning API
// =============================================================================

/// Ensure the nine stage directories exist under `root` and return their paths.
///
/// Uses the default layout; `calws.toml` is not consulted.
pub fn ensure_workspace(root: &Path) -> Result<Vec<WorkspacePath>, AppError> {
    let root = resolve_workspace_root(Some(root))?;
    provision::ensure_workspace(&LocalWorkspaceFilesystem::new(), &root)
}

/// Provision the workspace rooted at the parent of the current directory.
pub fn init() -> Result<ProvisionReport, AppError> {
    init_at(resolve_workspace_root(None)?)
}

/// Provision the workspace at `root`, applying `calws.toml` when present.
pub fn init_at(root: impl Into<PathBuf>) -> Result<ProvisionReport, AppError> {
    let root = resolve_explicit_root(root.into())?;
    let (_, layout) = load_layout(root)?;
    provision::execute(&LocalWorkspaceFilesystem::new(), &layout)
}

// =============================================================================
// Inspection API
// =============================================================================

/// Report which workspace directories exist under `root` without creating any.
pub fn status_at(root: impl Into<PathBuf>) -> Result<StatusReport, AppError> {
    let root = resolve_explicit_root(root.into())?;
    let (_, layout) = load_layout(root)?;
    status::execute(&LocalWorkspaceFilesystem::new(), &layout)
}

/// Compute the workspace paths for `root` without creating anything.
pub fn paths_at(root: impl Into<PathBuf>) -> Result<Vec<WorkspacePath>, AppError> {
    let root = resolve_explicit_root(root.into())?;
    let (_, layout) = load_layout(root)?;
    Ok(layout.workspace_paths())
}

// =============================================================================
// Reference Settings + Launch API
// =============================================================================

/// Reference settings for `root`: overrides, then `calws.toml`, then defaults.
pub fn reference_at(
    root: impl Into<PathBuf>,
    overrides: &ReferenceOverrides,
) -> Result<ReferenceConfig, AppError> {
    let root = resolve_explicit_root(root.into())?;
    let config = load_config(&root)?;
    config.reference(&root, &resolve_overrides(overrides)?)
}

/// Provision the workspace at `root` and run `program` with CRDS settings in its environment.
pub fn launch_at(
    root: impl Into<PathBuf>,
    overrides: &ReferenceOverrides,
    program: &str,
    args: &[String],
) -> Result<LaunchOutcome, AppError> {
    let root = resolve_explicit_root(root.into())?;
    let (config, layout) = load_layout(root)?;
    let reference = config.reference(layout.root(), &resolve_overrides(overrides)?)?;
    launch::execute(&create_context(), &layout, &reference, program, args)
}

fn resolve_overrides(overrides: &ReferenceOverrides) -> Result<ReferenceOverrides, AppError> {
    let crds_path =
        overrides.crds_path.as_deref().map(|p| resolve_workspace_root(Some(p))).transpose()?;
    Ok(ReferenceOverrides { crds_path, server_url: overrides.server_url.clone() })
}
