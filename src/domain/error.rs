use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for calws operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure not tied to a workspace path.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Root (or another configured path) cannot be resolved to an absolute path.
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Checking or creating a workspace path refused by the filesystem.
    #[error("Permission denied at '{}': {source}", .path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Any other I/O failure while checking or creating a workspace path.
    #[error("Filesystem error at '{}': {source}", .path.display())]
    Filesystem { path: PathBuf, source: io::Error },

    /// Stage name is not one of the known processing stages.
    #[error(
        "Invalid stage '{0}': must be one of uncal, stage1, stage1_processed, stage1_nsclean, stage2, stage2_processed, stage2_nsclean, stage3, stage3_processed"
    )]
    InvalidStage(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// External program could not be started.
    #[error("Failed to launch '{program}': {details}")]
    Launch { program: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_path<S: Into<String>>(path: &Path, reason: S) -> Self {
        AppError::InvalidPath { path: path.display().to_string(), reason: reason.into() }
    }

    /// Classify an I/O failure that happened while operating on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => {
                AppError::PermissionDenied { path: path.to_path_buf(), source }
            }
            _ => AppError::Filesystem { path: path.to_path_buf(), source },
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } => source.kind(),
            AppError::PermissionDenied { .. } => io::ErrorKind::PermissionDenied,
            AppError::InvalidPath { .. }
            | AppError::InvalidStage(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::Launch { .. } => io::ErrorKind::Other,
        }
    }
}
