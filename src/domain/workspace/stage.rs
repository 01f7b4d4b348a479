use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::AppError;

/// Processing stages that get their own output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageRole {
    /// Raw uncalibrated exposures.
    Uncal,
    /// Detector-level (calwebb_detector1) products.
    Stage1,
    Stage1Processed,
    /// Stage 1 products after 1/f noise cleaning.
    Stage1Nsclean,
    /// Spectroscopic (calwebb_spec2) products.
    Stage2,
    Stage2Processed,
    Stage2Nsclean,
    /// Combined (calwebb_spec3) products.
    Stage3,
    /// Post-pipeline processing.
    Stage3Processed,
}

impl StageRole {
    /// All stages in canonical order.
    pub const ALL: [StageRole; 9] = [
        StageRole::Uncal,
        StageRole::Stage1,
        StageRole::Stage1Processed,
        StageRole::Stage1Nsclean,
        StageRole::Stage2,
        StageRole::Stage2Processed,
        StageRole::Stage2Nsclean,
        StageRole::Stage3,
        StageRole::Stage3Processed,
    ];

    /// Directory name for this stage, identical to its role name.
    pub fn dir_name(&self) -> &'static str {
        match self {
            StageRole::Uncal => "uncal",
            StageRole::Stage1 => "stage1",
            StageRole::Stage1Processed => "stage1_processed",
            StageRole::Stage1Nsclean => "stage1_nsclean",
            StageRole::Stage2 => "stage2",
            StageRole::Stage2Processed => "stage2_processed",
            StageRole::Stage2Nsclean => "stage2_nsclean",
            StageRole::Stage3 => "stage3",
            StageRole::Stage3Processed => "stage3_processed",
        }
    }

    /// Parse a stage from its directory name.
    pub fn from_dir_name(name: &str) -> Option<StageRole> {
        StageRole::ALL.into_iter().find(|stage| stage.dir_name() == name)
    }
}

impl FromStr for StageRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageRole::from_dir_name(s).ok_or_else(|| AppError::InvalidStage(s.to_string()))
    }
}

impl fmt::Display for StageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

impl Serialize for StageRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.dir_name())
    }
}
