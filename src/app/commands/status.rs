//! Read-only workspace inspection.

use serde::Serialize;

use crate::domain::{AppError, WorkspaceLayout, WorkspacePath};
use crate::ports::{EntryState, WorkspaceFilesystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirStatus {
    Present,
    Missing,
    /// Path is taken by something that is not a directory.
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    #[serde(flatten)]
    pub entry: WorkspacePath,
    pub status: DirStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.status == DirStatus::Present)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_complete() { 0 } else { 1 }
    }
}

/// Inspect every directory of `layout`. A path that cannot be checked is an error.
pub fn execute<F: WorkspaceFilesystem>(
    filesystem: &F,
    layout: &WorkspaceLayout,
) -> Result<StatusReport, AppError> {
    let entries = layout
        .workspace_paths()
        .into_iter()
        .map(|entry| {
            let status = match filesystem.entry_state(&entry.path)? {
                EntryState::Directory => DirStatus::Present,
                EntryState::Missing => DirStatus::Missing,
                EntryState::Other => DirStatus::Blocked,
            };
            Ok(StatusEntry { entry, status })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok(StatusReport { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StageRole;
    use crate::testing::MockWorkspaceFs;
    use std::path::PathBuf;

    #[test]
    fn reports_each_state() {
        let fs = MockWorkspaceFs::new()
            .with_dir("/ws/data/uncal")
            .with_file("/ws/data/stage1");
        let layout = WorkspaceLayout::new(PathBuf::from("/ws"))
            .unwrap()
            .with_stages(vec![StageRole::Uncal, StageRole::Stage1, StageRole::Stage2])
            .unwrap();

        let report = execute(&fs, &layout).unwrap();
        let statuses: Vec<_> = report.entries.iter().map(|e| e.status).collect();

        assert_eq!(statuses, vec![DirStatus::Present, DirStatus::Blocked, DirStatus::Missing]);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn unreadable_path_is_an_error_not_blocked() {
        let fs = MockWorkspaceFs::new().unreadable("/ws/data/uncal");
        let layout = WorkspaceLayout::new(PathBuf::from("/ws")).unwrap();

        let err = execute(&fs, &layout).unwrap_err();

        assert!(matches!(err, AppError::PermissionDenied { .. }));
        assert!(err.to_string().contains("/ws/data/uncal"));
    }

    #[test]
    fn complete_workspace_exits_zero() {
        let fs = MockWorkspaceFs::new().with_dir("/ws/data/uncal");
        let layout = WorkspaceLayout::new(PathBuf::from("/ws"))
            .unwrap()
            .with_stages(vec![StageRole::Uncal])
            .unwrap();

        let report = execute(&fs, &layout).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.exit_code(), 0);
        assert!(fs.created.borrow().is_empty());
    }
}
