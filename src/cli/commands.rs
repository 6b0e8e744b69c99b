// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Every flag is optional. Values are layered:
//
//   built-in defaults  <  --config file  <  --data-dir  <  other flags
//
// so a bare `performance-ingest` reproduces the default run.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::ingest_use_case::IngestionConfig;
use crate::infra::{config_store::ConfigStore, paths::DatasetPaths};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the collection and write raw/train/test CSV files
    Ingest(IngestArgs),

    /// Print the resolved configuration, or save it with --output
    Config(ConfigArgs),
}

/// Overrides for one ingestion run.
#[derive(Args, Debug, Default)]
pub struct IngestArgs {
    /// JSON config file; flags below take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// MongoDB connection string, e.g. mongodb://localhost:27017/
    #[arg(long)]
    pub connection_string: Option<String>,

    /// Database holding the collection
    #[arg(long)]
    pub database: Option<String>,

    /// Collection to ingest
    #[arg(long)]
    pub collection: Option<String>,

    /// Directory for raw.csv, train.csv and test.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(long)]
    pub raw_path: Option<PathBuf>,

    #[arg(long)]
    pub train_path: Option<PathBuf>,

    #[arg(long)]
    pub test_path: Option<PathBuf>,

    /// Fraction of rows held out for the test file, in (0, 1)
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Shuffle seed; the same seed gives the same split
    #[arg(long)]
    pub seed: Option<u64>,
}

impl IngestArgs {
    /// Build the effective configuration and validate it.
    pub fn resolve(self) -> Result<IngestionConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::new(path).load()?,
            None       => IngestionConfig::default(),
        };

        if let Some(v) = self.connection_string { cfg.store.connection_string = v; }
        if let Some(v) = self.database          { cfg.store.database = v; }
        if let Some(v) = self.collection        { cfg.store.collection = v; }

        if let Some(dir) = self.data_dir { cfg.paths = DatasetPaths::under(dir); }
        if let Some(p) = self.raw_path   { cfg.paths.raw = p; }
        if let Some(p) = self.train_path { cfg.paths.train = p; }
        if let Some(p) = self.test_path  { cfg.paths.test = p; }

        if let Some(v) = self.test_size { cfg.test_fraction = v; }
        if let Some(v) = self.seed      { cfg.seed = v; }

        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Write the configuration to this JSON file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
