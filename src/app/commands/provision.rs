//! Workspace provisioning: create whichever stage directories are absent.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, WorkspaceLayout, WorkspacePath};
use crate::ports::{EntryState, WorkspaceFilesystem};

/// Whether a directory was created by this run or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionOutcome {
    Created,
    Existing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionedDir {
    #[serde(flatten)]
    pub entry: WorkspacePath,
    pub outcome: ProvisionOutcome,
}

/// Ordered result of a provisioning pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub root: PathBuf,
    pub entries: Vec<ProvisionedDir>,
}

impl ProvisionReport {
    pub fn created_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome == ProvisionOutcome::Created).count()
    }

    pub fn into_paths(self) -> Vec<WorkspacePath> {
        self.entries.into_iter().map(|e| e.entry).collect()
    }
}

/// Provision every directory of `layout`, in order.
///
/// Stops at the first failure; directories created before it are kept.
pub fn execute<F: WorkspaceFilesystem>(
    filesystem: &F,
    layout: &WorkspaceLayout,
) -> Result<ProvisionReport, AppError> {
    let mut entries = Vec::with_capacity(layout.stages().len());

    for entry in layout.workspace_paths() {
        let outcome = match filesystem.entry_state(&entry.path)? {
            EntryState::Directory => ProvisionOutcome::Existing,
            EntryState::Missing => {
                filesystem.create_dir_all(&entry.path)?;
                tracing::debug!(stage = %entry.role, path = %entry.path.display(), "created");
                ProvisionOutcome::Created
            }
            EntryState::Other => return Err(not_a_directory(&entry.path)),
        };
        entries.push(ProvisionedDir { entry, outcome });
    }

    let report = ProvisionReport { root: layout.root().to_path_buf(), entries };
    tracing::info!(
        root = %report.root.display(),
        created = report.created_count(),
        total = report.entries.len(),
        "workspace provisioned"
    );
    Ok(report)
}

/// Ensure the default nine-stage workspace exists under an absolute `root`.
pub fn ensure_workspace<F: WorkspaceFilesystem>(
    filesystem: &F,
    root: &Path,
) -> Result<Vec<WorkspacePath>, AppError> {
    let layout = WorkspaceLayout::new(root.to_path_buf())?;
    Ok(execute(filesystem, &layout)?.into_paths())
}

pub(crate) fn not_a_directory(path: &Path) -> AppError {
    AppError::Filesystem {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "exists and is not a directory"),
    }
}
