//! Test double for `WorkspaceFilesystem`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{EntryState, WorkspaceFilesystem};

/// In-memory implementation of `WorkspaceFilesystem` with failure injection.
#[derive(Debug, Default)]
pub struct MockWorkspaceFs {
    entries: RefCell<BTreeMap<PathBuf, EntryState>>,
    denied: RefCell<HashSet<PathBuf>>,
    unreadable: RefCell<HashSet<PathBuf>>,
    racing: RefCell<HashSet<PathBuf>>,
    pub created: RefCell<Vec<PathBuf>>,
}

impl MockWorkspaceFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.entries.borrow_mut().insert(path.into(), EntryState::Directory);
        self
    }

    /// Seed a non-directory entry.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.entries.borrow_mut().insert(path.into(), EntryState::Other);
        self
    }

    /// Creating `path` fails with permission denied.
    pub fn deny(self, path: impl Into<PathBuf>) -> Self {
        self.denied.borrow_mut().insert(path.into());
        self
    }

    /// Checking `path` fails with permission denied (unsearchable parent).
    pub fn unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.borrow_mut().insert(path.into());
        self
    }

    /// `path` looks missing, then another process creates it first.
    pub fn racing(self, path: impl Into<PathBuf>) -> Self {
        self.racing.borrow_mut().insert(path.into());
        self
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.entries.borrow().get(path) == Some(&EntryState::Directory)
    }
}

impl WorkspaceFilesystem for MockWorkspaceFs {
    fn entry_state(&self, path: &Path) -> Result<EntryState, AppError> {
        if self.unreadable.borrow().contains(path) {
            return Err(AppError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        Ok(self.entries.borrow().get(path).copied().unwrap_or(EntryState::Missing))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if self.denied.borrow().contains(path) {
            return Err(AppError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        if self.racing.borrow_mut().remove(path) {
            self.entries.borrow_mut().insert(path.to_path_buf(), EntryState::Directory);
            return Ok(());
        }

        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors() {
            if entries.get(ancestor) == Some(&EntryState::Other) {
                return Err(AppError::from_io(
                    path,
                    io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
                ));
            }
        }
        for ancestor in path.ancestors() {
            entries.insert(ancestor.to_path_buf(), EntryState::Directory);
        }
        self.created.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
