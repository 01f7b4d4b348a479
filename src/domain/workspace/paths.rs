//! Type-safe path catalog for workspace artifacts.
//!
//! All logical workspace paths are defined here. Business logic modules must use
//! these accessors instead of ad-hoc `.join("...")` chains.

use std::path::{Path, PathBuf};

use super::StageRole;

/// Default directory holding the staged pipeline outputs.
pub const DATA_DIR: &str = "data";

/// Default CRDS reference-file cache directory name.
pub const CRDS_DIR: &str = "CRDS";

/// Optional per-root configuration file name.
pub const CONFIG_FILENAME: &str = "calws.toml";

/// `<root>/<data_dir>/`
pub fn data_dir(root: &Path, data_dir_name: &str) -> PathBuf {
    root.join(data_dir_name)
}

/// `<root>/<data_dir>/<stage>/`
pub fn stage_dir(root: &Path, data_dir_name: &str, stage: StageRole) -> PathBuf {
    data_dir(root, data_dir_name).join(stage.dir_name())
}

/// `<root>/CRDS/`
pub fn crds_cache(root: &Path) -> PathBuf {
    root.join(CRDS_DIR)
}

/// `<root>/calws.toml`
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILENAME)
}

/// Render a directory path with a trailing separator, e.g. `/tmp/ws/data/uncal/`.
pub fn display_dir(path: &Path) -> String {
    let mut rendered = path.display().to_string();
    if !rendered.ends_with(std::path::MAIN_SEPARATOR) {
        rendered.push(std::path::MAIN_SEPARATOR);
    }
    rendered
}
