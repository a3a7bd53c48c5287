//! The on-disk deployment history log.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_DIR;
use crate::error::{Result, ZkwasmError};

use super::history::DeploymentRecord;

/// File name of the log inside the project config directory.
pub const HISTORY_FILE: &str = "history.json";

/// Records kept after each append.
pub const MAX_RECORDS: usize = 100;

/// Deployment history, most recent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    #[serde(default)]
    pub records: Vec<DeploymentRecord>,
}

impl HistoryLog {
    /// Path of the log for a project.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(HISTORY_FILE)
    }

    /// Load the log, or an empty one if it does not exist yet.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| ZkwasmError::ConfigParseError {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the log using write-to-temp-then-rename.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Add a record at the front, pruning to [`MAX_RECORDS`].
    pub fn record(&mut self, record: DeploymentRecord) {
        self.records.insert(0, record);
        self.prune(MAX_RECORDS);
    }

    /// Most recent records, up to `limit`.
    pub fn recent(&self, limit: usize) -> &[DeploymentRecord] {
        let len = self.records.len().min(limit);
        &self.records[..len]
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&DeploymentRecord> {
        self.records.first()
    }

    /// Keep only the `keep` most recent records.
    pub fn prune(&mut self, keep: usize) {
        self.records.truncate(keep);
    }

    /// Load, append and save in one step.
    pub fn append(project_root: &Path, record: DeploymentRecord) -> Result<()> {
        let mut log = Self::load(project_root)?;
        log.record(record);
        log.save(project_root)
    }
}
