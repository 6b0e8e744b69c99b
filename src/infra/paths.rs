// ============================================================
// Layer 6 — Dataset Paths
// ============================================================
// The three output locations of a run:
//
//   data/
//     raw.csv    ← full snapshot of the collection
//     train.csv  ← training partition
//     test.csv   ← test partition
//
// Paths are fixed for the duration of a run. Directories are
// created up front, before anything is written, so a run that
// cannot create them leaves no partial output behind.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::error::IngestError;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const RAW_FILE_NAME:    &str = "raw.csv";
pub const TRAIN_FILE_NAME:  &str = "train.csv";
pub const TEST_FILE_NAME:   &str = "test.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub raw:   PathBuf,
    pub train: PathBuf,
    pub test:  PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::under(DEFAULT_DATA_DIR)
    }
}

impl DatasetPaths {
    /// Standard file names inside `dir`.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            raw:   dir.join(RAW_FILE_NAME),
            train: dir.join(TRAIN_FILE_NAME),
            test:  dir.join(TEST_FILE_NAME),
        }
    }

    /// Distinct parent directories of the three paths, in
    /// raw/train/test order. Bare file names have none.
    pub fn parent_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for path in [&self.raw, &self.train, &self.test] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !dirs.contains(&parent) {
                    dirs.push(parent);
                }
            }
        }
        dirs
    }

    /// Create every parent directory, like `mkdir -p`.
    /// Already-existing directories are fine.
    pub fn ensure_parent_dirs(&self) -> Result<(), IngestError> {
        for dir in self.parent_dirs() {
            fs::create_dir_all(dir).map_err(|e| IngestError::io(dir, e))?;
            tracing::debug!("Output directory ready: '{}'", dir.display());
        }
        Ok(())
    }
}
