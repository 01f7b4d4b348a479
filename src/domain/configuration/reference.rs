//! CRDS reference-file settings handed to the calibration pipeline.

use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::workspace::paths;

/// Environment variable naming the CRDS cache directory.
pub const CRDS_PATH_VAR: &str = "CRDS_PATH";

/// Environment variable naming the CRDS server.
pub const CRDS_SERVER_URL_VAR: &str = "CRDS_SERVER_URL";

/// Public JWST CRDS server.
pub const DEFAULT_CRDS_SERVER_URL: &str = "https://jwst-crds.stsci.edu";

/// Reference-file cache and server used by the pipeline.
///
/// Passed explicitly to whoever launches the pipeline; the current process
/// environment is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceConfig {
    pub crds_path: PathBuf,
    pub crds_server_url: String,
}

/// Command-line overrides for reference settings. Paths must already be absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceOverrides {
    pub crds_path: Option<PathBuf>,
    pub server_url: Option<String>,
}

impl ReferenceConfig {
    /// Defaults for `root`: `<root>/CRDS/` and the public JWST server.
    pub fn for_root(root: &Path) -> Self {
        Self {
            crds_path: paths::crds_cache(root),
            crds_server_url: DEFAULT_CRDS_SERVER_URL.to_string(),
        }
    }

    pub fn with_server_url(mut self, url: &str) -> Result<Self, AppError> {
        validate_server_url(url)?;
        self.crds_server_url = url.to_string();
        Ok(self)
    }

    /// Variables to set on a pipeline child process.
    pub fn env_vars(&self) -> [(&'static str, String); 2] {
        [
            (CRDS_PATH_VAR, paths::display_dir(&self.crds_path)),
            (CRDS_SERVER_URL_VAR, self.crds_server_url.clone()),
        ]
    }

    /// POSIX shell `export` lines with single-quoted values.
    pub fn shell_exports(&self) -> Vec<String> {
        self.env_vars()
            .iter()
            .map(|(name, value)| format!("export {}='{}'", name, value.replace('\'', r"'\''")))
            .collect()
    }
}

/// Reject anything that is not an absolute `http`/`https` URL.
pub fn validate_server_url(url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(url)
        .map_err(|e| AppError::config_error(format!("Invalid server_url '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::config_error(format!(
            "Invalid server_url '{}': unsupported scheme '{}'",
            url, scheme
        ))),
    }
}
