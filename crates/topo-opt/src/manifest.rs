use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};

use crate::config::OptimizerConfig;
use crate::kernel::RunSummary;
use crate::restarts::RestartRecord;

/// Structured record of a completed optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// When the manifest was produced.
    pub created_at: DateTime<Utc>,
    /// Configuration used for the run.
    pub config: OptimizerConfig,
    /// Master seed the restarts were derived from.
    pub master_seed: u64,
    /// Every restart, in index order.
    pub restarts: Vec<RestartRecord>,
    /// Index of the restart whose graph was kept.
    pub best_index: usize,
    /// Summary of the kept run.
    pub summary: RunSummary,
    /// Edge-list file holding the kept graph.
    pub edges_file: Option<PathBuf>,
}

impl RunManifest {
    /// Writes the manifest as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<(), TopoError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| TopoError::io("manifest-mkdir", err, parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            TopoError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        fs::write(path, json).map_err(|err| TopoError::io("manifest-write", err, path.display()))
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, TopoError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| TopoError::io("manifest-read", err, path.display()))?;
        serde_json::from_str(&contents).map_err(|err| {
            TopoError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }
}
