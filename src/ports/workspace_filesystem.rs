//! Filesystem operations needed to provision a workspace.
//!
//! The port only checks and creates directories; it never deletes or
//! rewrites existing entries.

use std::path::Path;

use crate::domain::AppError;

/// What currently occupies a workspace path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Missing,
    Directory,
    /// Something other than a directory (file, socket, dangling symlink).
    Other,
}

/// Port for directory checks and creation.
pub trait WorkspaceFilesystem {
    /// Inspect `path` without following into its contents.
    ///
    /// An absent path is `Missing`; a failed check (e.g. an unsearchable
    /// parent) is an error naming `path`.
    fn entry_state(&self, path: &Path) -> Result<EntryState, AppError>;

    /// Create `path` and any missing parents.
    ///
    /// Implementations must treat a directory that already exists, including
    /// one created concurrently by another process, as success.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
