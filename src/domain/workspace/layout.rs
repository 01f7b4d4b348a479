use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::{StageRole, paths};
use crate::domain::AppError;

/// A stage role paired with the absolute directory it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspacePath {
    pub role: StageRole,
    pub path: PathBuf,
}

impl WorkspacePath {
    /// Path rendered with a trailing separator (`/tmp/ws/data/uncal/`).
    pub fn display_path(&self) -> String {
        paths::display_dir(&self.path)
    }
}

/// Explicit inputs of the provisioner: absolute root, data directory and stage list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
    data_dir: String,
    stages: Vec<StageRole>,
}

impl WorkspaceLayout {
    /// Layout with the default data directory and all stages in canonical order.
    pub fn new(root: PathBuf) -> Result<Self, AppError> {
        if !root.is_absolute() {
            return Err(AppError::invalid_path(&root, "workspace root must be absolute"));
        }
        Ok(Self { root, data_dir: paths::DATA_DIR.to_string(), stages: StageRole::ALL.to_vec() })
    }

    /// Replace the data directory name. Must be a single relative path component.
    pub fn with_data_dir(mut self, name: &str) -> Result<Self, AppError> {
        validate_data_dir(name)?;
        self.data_dir = name.to_string();
        Ok(self)
    }

    /// Replace the stage list. Order is preserved; duplicates and empty lists are rejected.
    pub fn with_stages(mut self, stages: Vec<StageRole>) -> Result<Self, AppError> {
        if stages.is_empty() {
            return Err(AppError::config_error("Stage list must not be empty"));
        }
        let mut seen = HashSet::new();
        for stage in &stages {
            if !seen.insert(*stage) {
                return Err(AppError::config_error(format!(
                    "Stage '{}' is listed more than once",
                    stage
                )));
            }
        }
        self.stages = stages;
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn stages(&self) -> &[StageRole] {
        &self.stages
    }

    /// Role-to-path mappings in stage order.
    pub fn workspace_paths(&self) -> Vec<WorkspacePath> {
        self.stages
            .iter()
            .map(|&role| WorkspacePath {
                role,
                path: paths::stage_dir(&self.root, &self.data_dir, role),
            })
            .collect()
    }
}

fn validate_data_dir(name: &str) -> Result<(), AppError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(AppError::config_error(format!(
            "Invalid data_dir '{}': must be a single directory name",
            name
        ))),
    }
}
