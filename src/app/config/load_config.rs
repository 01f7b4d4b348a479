//! Workspace configuration loading from the root directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::workspace::paths;
use crate::domain::{AppError, CalwsConfig, parse_config_content};

/// Load `calws.toml` from `root`, or defaults when the file is absent.
pub fn load_config(root: &Path) -> Result<CalwsConfig, AppError> {
    let config_path = paths::config_file(root);
    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(CalwsConfig::default());
        }
        Err(err) => return Err(AppError::from_io(&config_path, err)),
    };
    parse_config_content(&content).map_err(|err| {
        AppError::config_error(format!("Failed to load {}: {}", config_path.display(), err))
    })
}
