pub mod configuration;
pub mod error;
pub mod workspace;

pub use configuration::{CalwsConfig, ReferenceConfig, ReferenceOverrides, parse_config_content};
pub use error::AppError;
pub use workspace::{StageRole, WorkspaceLayout, WorkspacePath, default_root, resolve_root};
