mod calws_config;
pub mod parse;
mod reference;

pub use calws_config::{CalwsConfig, ReferenceSection, WorkspaceSection};
pub use parse::parse_config_content;
pub use reference::{
    CRDS_PATH_VAR, CRDS_SERVER_URL_VAR, DEFAULT_CRDS_SERVER_URL, ReferenceConfig,
    ReferenceOverrides, validate_server_url,
};
