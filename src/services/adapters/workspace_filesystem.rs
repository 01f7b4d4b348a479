use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{EntryState, WorkspaceFilesystem};

/// Workspace filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorkspaceFilesystem;

impl LocalWorkspaceFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceFilesystem for LocalWorkspaceFilesystem {
    fn entry_state(&self, path: &Path) -> Result<EntryState, AppError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(EntryState::Directory),
            Ok(_) => Ok(EntryState::Other),
            // A dangling symlink still occupies the path.
            Err(err) if err.kind() == io::ErrorKind::NotFound => match fs::symlink_metadata(path) {
                Ok(_) => Ok(EntryState::Other),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(EntryState::Missing),
                Err(err) => Err(AppError::from_io(path, err)),
            },
            Err(err) => Err(AppError::from_io(path, err)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        // std::fs::create_dir_all already tolerates concurrent creators.
        fs::create_dir_all(path).map_err(|err| AppError::from_io(path, err))
    }
}
