use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::reference::{ReferenceConfig, ReferenceOverrides, validate_server_url};
use crate::domain::AppError;
use crate::domain::workspace::{StageRole, WorkspaceLayout, resolve_root};

/// Optional per-root configuration loaded from `calws.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalwsConfig {
    /// Workspace layout overrides.
    #[serde(default)]
    pub workspace: WorkspaceSection,
    /// CRDS reference-file settings.
    #[serde(default)]
    pub reference: ReferenceSection,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSection {
    /// Directory under the root that holds the stage directories.
    pub data_dir: Option<String>,
    /// Stage names to provision, in order.
    pub stages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReferenceSection {
    /// CRDS cache location; relative values resolve against the root.
    pub crds_path: Option<PathBuf>,
    /// CRDS server URL.
    pub server_url: Option<String>,
}

impl CalwsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.stage_list()?;
        if let Some(url) = &self.reference.server_url {
            validate_server_url(url)?;
        }
        Ok(())
    }

    /// Build the workspace layout for `root`, applying configured overrides.
    pub fn layout(&self, root: PathBuf) -> Result<WorkspaceLayout, AppError> {
        let mut layout = WorkspaceLayout::new(root)?;
        if let Some(data_dir) = &self.workspace.data_dir {
            layout = layout.with_data_dir(data_dir)?;
        }
        if let Some(stages) = self.stage_list()? {
            layout = layout.with_stages(stages)?;
        }
        Ok(layout)
    }

    /// Build reference settings for `root`. Precedence: overrides, then file, then defaults.
    pub fn reference(
        &self,
        root: &Path,
        overrides: &ReferenceOverrides,
    ) -> Result<ReferenceConfig, AppError> {
        let mut reference = ReferenceConfig::for_root(root);

        if let Some(path) = &self.reference.crds_path {
            reference.crds_path = resolve_root(path, root)?;
        }
        if let Some(url) = &self.reference.server_url {
            reference = reference.with_server_url(url)?;
        }

        if let Some(path) = &overrides.crds_path {
            reference.crds_path = path.clone();
        }
        if let Some(url) = &overrides.server_url {
            reference = reference.with_server_url(url)?;
        }

        Ok(reference)
    }

    fn stage_list(&self) -> Result<Option<Vec<StageRole>>, AppError> {
        self.workspace
            .stages
            .as_ref()
            .map(|names| {
                names.iter().map(|name| name.parse::<StageRole>()).collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }
}
