// ============================================================
// Layer 6 — Config Store
// ============================================================
// Loads and saves IngestionConfig as pretty-printed JSON.
//
// Every field is optional in the file; anything left out keeps
// its default value. Example:
//
//   {
//     "store": { "database": "students", "collection": "performance" },
//     "test_fraction": 0.25
//   }
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::ingest_use_case::IngestionConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the config file at this path.
    pub fn load(&self) -> Result<IngestionConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded config from '{}'", self.path.display());
        Ok(cfg)
    }

    /// Write `cfg` to this path, replacing any existing file.
    pub fn save(&self, cfg: &IngestionConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;
        Ok(())
    }
}
