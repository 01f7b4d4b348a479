//! Pure parse/validate for `calws.toml`.

use super::CalwsConfig;
use crate::domain::AppError;

/// Parse and validate workspace configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CalwsConfig, AppError> {
    let config: CalwsConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
