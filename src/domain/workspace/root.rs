//! Workspace root resolution.
//!
//! The root need not exist yet, so resolution is purely lexical: no
//! canonicalization and no symlink resolution.

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Resolve `input` to an absolute, normalized path. Relative input is joined onto `cwd`.
pub fn resolve_root(input: &Path, cwd: &Path) -> Result<PathBuf, AppError> {
    if input.as_os_str().is_empty() {
        return Err(AppError::invalid_path(input, "path is empty"));
    }

    let joined = if input.is_absolute() { input.to_path_buf() } else { cwd.join(input) };
    if !joined.is_absolute() {
        return Err(AppError::invalid_path(input, "cannot be resolved to an absolute path"));
    }

    normalize(&joined).ok_or_else(|| AppError::invalid_path(input, "escapes the filesystem root"))
}

/// Root derived from the working directory: its parent.
pub fn default_root(cwd: &Path) -> Result<PathBuf, AppError> {
    let cwd = resolve_root(cwd, Path::new("/"))?;
    cwd.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::invalid_path(&cwd, "working directory has no parent"))
}

fn normalize(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() || !normalized.has_root() {
                    return None;
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Some(normalized)
}
