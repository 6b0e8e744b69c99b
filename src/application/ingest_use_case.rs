// ============================================================
// Layer 2 — DataIngestion
// ============================================================
// Runs the ingestion pipeline in order:
//
//   Step 1: Connect to the store          (Layer 4 - data)
//   Step 2: Fetch every document          (Layer 4 - data)
//   Step 3: Create output directories     (Layer 6 - infra)
//   Step 4: Write raw snapshot            (Layer 6 - infra)
//   Step 5: Split train / test            (Layer 4 - data)
//   Step 6: Write train, then test        (Layer 6 - infra)
//
// The first failure stops the run. It is reported as an
// IngestionFailure naming the stage that was running; files
// written by earlier steps are left in place.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::{
    mongo_store::MongoStore,
    splitter::{self, split_table, DEFAULT_SEED, DEFAULT_TEST_FRACTION},
};
use crate::domain::{
    error::{IngestError, IngestionFailure},
    stage::IngestionStage,
    table::Table,
    traits::DocumentStore,
};
use crate::infra::{csv_writer::write_table, paths::DatasetPaths};

pub const DEFAULT_CONNECTION_STRING: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE:          &str = "students";
pub const DEFAULT_COLLECTION:        &str = "performance";

// ─── Configuration ───────────────────────────────────────────────────────────
/// Where to read documents from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub connection_string: String,
    pub database:          String,
    pub collection:        String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
            database:          DEFAULT_DATABASE.to_string(),
            collection:        DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Everything one run needs. Serialisable so it can be kept in
/// a JSON file and reloaded (see infra::config_store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub store:         StoreSettings,
    pub paths:         DatasetPaths,
    pub test_fraction: f64,
    pub seed:          u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            store:         StoreSettings::default(),
            paths:         DatasetPaths::default(),
            test_fraction: DEFAULT_TEST_FRACTION,
            seed:          DEFAULT_SEED,
        }
    }
}

impl IngestionConfig {
    /// Check the settings before anything is contacted or written.
    pub fn validate(&self) -> Result<(), IngestError> {
        let s = &self.store;
        for (name, value) in [
            ("connection string", &s.connection_string),
            ("database name",     &s.database),
            ("collection name",   &s.collection),
        ] {
            if value.trim().is_empty() {
                return Err(IngestError::Configuration(format!("{name} must not be empty")));
            }
        }
        splitter::validate_test_fraction(self.test_fraction)
            .map_err(|e| IngestError::Configuration(e.to_string()))
    }
}

// ─── Stages ──────────────────────────────────────────────────────────────────
/// Attach the running stage to an operation's error.
trait AtStage<T> {
    fn at(self, stage: IngestionStage) -> Result<T, IngestionFailure>;
}

impl<T> AtStage<T> for Result<T, IngestError> {
    fn at(self, stage: IngestionStage) -> Result<T, IngestionFailure> {
        self.map_err(|cause| IngestionFailure::new(stage, cause))
    }
}

// ─── Result of a run ─────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionArtifacts {
    pub train_path: PathBuf,
    pub test_path:  PathBuf,
    pub raw_rows:   usize,
    pub train_rows: usize,
    pub test_rows:  usize,
}

impl IngestionArtifacts {
    /// The (train, test) path pair.
    pub fn into_paths(self) -> (PathBuf, PathBuf) {
        (self.train_path, self.test_path)
    }
}

// ─── DataIngestion ───────────────────────────────────────────────────────────
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Open the MongoDB collection named by the arguments.
    pub fn connect(
        &self,
        connection_string: &str,
        database_name:     &str,
        collection_name:   &str,
    ) -> Result<MongoStore, IngestError> {
        MongoStore::connect(connection_string, database_name, collection_name)
    }

    /// Read every record of `store` into a Table.
    pub fn fetch(&self, store: &impl DocumentStore) -> Result<Table, IngestError> {
        let table = store.fetch_all()?;
        if table.is_empty() {
            tracing::warn!("{} returned no documents", store.describe());
        }
        Ok(table)
    }

    /// Run the whole pipeline against the configured MongoDB store.
    pub fn run(&self) -> Result<IngestionArtifacts, IngestionFailure> {
        self.run_with(|s| self.connect(&s.connection_string, &s.database, &s.collection))
    }

    /// Run the whole pipeline with the store produced by `connect`.
    ///
    /// The store is dropped before this returns, on success and on
    /// every failure path.
    pub fn run_with<S, F>(&self, connect: F) -> Result<IngestionArtifacts, IngestionFailure>
    where
        S: DocumentStore,
        F: FnOnce(&StoreSettings) -> Result<S, IngestError>,
    {
        let cfg   = &self.config;
        let paths = &cfg.paths;

        let enter = |stage: IngestionStage| tracing::debug!("Stage: {stage}");

        tracing::info!("Initiating data ingestion process");
        enter(IngestionStage::Validating);
        cfg.validate().at(IngestionStage::Validating)?;

        // ── Step 1: Connect ──────────────────────────────────────────────────
        enter(IngestionStage::Connecting);
        let store = connect(&cfg.store).at(IngestionStage::Connecting)?;

        // ── Step 2: Fetch ────────────────────────────────────────────────────
        enter(IngestionStage::Fetching);
        let raw = self.fetch(&store).at(IngestionStage::Fetching)?;
        drop(store);
        tracing::info!("Fetched {} rows with {} columns", raw.len(), raw.columns().len());

        // ── Step 3: Output directories ───────────────────────────────────────
        enter(IngestionStage::PreparingOutput);
        paths.ensure_parent_dirs().at(IngestionStage::PreparingOutput)?;

        // ── Step 4: Raw snapshot ─────────────────────────────────────────────
        enter(IngestionStage::WritingRaw);
        write_table(&paths.raw, &raw).at(IngestionStage::WritingRaw)?;
        let raw_rows = raw.len();

        // ── Step 5: Train / test split ───────────────────────────────────────
        enter(IngestionStage::Splitting);
        tracing::info!("Train-test split initiated");
        let (train, test) = split_table(raw, cfg.test_fraction, cfg.seed)
            .at(IngestionStage::Splitting)?;

        // ── Step 6: Partitions ───────────────────────────────────────────────
        enter(IngestionStage::WritingTrain);
        write_table(&paths.train, &train).at(IngestionStage::WritingTrain)?;
        enter(IngestionStage::WritingTest);
        write_table(&paths.test,  &test).at(IngestionStage::WritingTest)?;
        enter(IngestionStage::Done);

        tracing::info!(
            "Ingestion of the data is completed: {} train, {} test",
            train.len(),
            test.len()
        );

        Ok(IngestionArtifacts {
            train_path: paths.train.clone(),
            test_path:  paths.test.clone(),
            raw_rows,
            train_rows: train.len(),
            test_rows:  test.len(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_store::InMemoryStore;
    use crate::domain::error::ErrorKind;
    use crate::domain::record::Record;
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn student(i: i64) -> Record {
        Record::new()
            .with("_id", format!("{i:024x}"))
            .with("math", 50 + i)
            .with("reading", 60 + i)
            .with("writing", 70 + i)
    }

    fn config_in(dir: &Path) -> IngestionConfig {
        IngestionConfig {
            paths: DatasetPaths::under(dir.join("data")),
            ..IngestionConfig::default()
        }
    }

    fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let header  = rdr.headers().unwrap().iter().map(String::from).collect();
        let rows    = rdr
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    fn run_memory(cfg: IngestionConfig, records: Vec<Record>) -> Result<IngestionArtifacts, IngestionFailure> {
        DataIngestion::new(cfg).run_with(|s| Ok(InMemoryStore::new(&s.collection, records)))
    }

    #[test]
    fn test_ten_documents_scenario() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path());
        let out = run_memory(cfg.clone(), (0..10).map(student).collect()).unwrap();

        assert_eq!((out.raw_rows, out.train_rows, out.test_rows), (10, 8, 2));

        let (raw_h,   raw)   = read_csv(&cfg.paths.raw);
        let (train_h, train) = read_csv(&cfg.paths.train);
        let (test_h,  test)  = read_csv(&cfg.paths.test);

        assert_eq!(raw_h, vec!["math", "reading", "writing"]);
        assert_eq!(train_h, raw_h);
        assert_eq!(test_h, raw_h);
        assert_eq!((raw.len(), train.len(), test.len()), (10, 8, 2));

        // Partitions are disjoint and together rebuild the raw rows
        let train_set: HashSet<Vec<String>> = train.into_iter().collect();
        let test_set:  HashSet<Vec<String>> = test.into_iter().collect();
        assert!(train_set.is_disjoint(&test_set));
        let union: HashSet<Vec<String>> = train_set.union(&test_set).cloned().collect();
        let raw_set: HashSet<Vec<String>> = raw.into_iter().collect();
        assert_eq!(union, raw_set);

        assert_eq!(out.into_paths(), (cfg.paths.train.clone(), cfg.paths.test.clone()));
    }

    #[test]
    fn test_identifier_never_written() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path());
        run_memory(cfg.clone(), (0..5).map(student).collect()).unwrap();

        for path in [&cfg.paths.raw, &cfg.paths.train, &cfg.paths.test] {
            let (header, _) = read_csv(path);
            assert!(!header.iter().any(|h| h == "_id"));
        }
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let cfg_a = config_in(a.path());
        let cfg_b = config_in(b.path());
        run_memory(cfg_a.clone(), (0..25).map(student).collect()).unwrap();
        run_memory(cfg_b.clone(), (0..25).map(student).collect()).unwrap();

        assert_eq!(fs::read(&cfg_a.paths.train).unwrap(), fs::read(&cfg_b.paths.train).unwrap());
        assert_eq!(fs::read(&cfg_a.paths.test).unwrap(),  fs::read(&cfg_b.paths.test).unwrap());
    }

    #[test]
    fn test_empty_collection() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path());
        let out = run_memory(cfg.clone(), Vec::new()).unwrap();

        assert_eq!((out.raw_rows, out.train_rows, out.test_rows), (0, 0, 0));
        for path in [&cfg.paths.raw, &cfg.paths.train, &cfg.paths.test] {
            assert_eq!(fs::read_to_string(path).unwrap(), "");
        }
    }

    #[test]
    fn test_connection_failure_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path());

        let err = DataIngestion::new(cfg.clone())
            .run_with(|_| -> Result<InMemoryStore, IngestError> {
                Err(IngestError::connection("connection refused on port 27018"))
            })
            .unwrap_err();

        assert_eq!(err.stage, IngestionStage::Connecting);
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert!(err.to_string().contains("port 27018"));
        assert!(!dir.path().join("data").exists());
    }

    #[test]
    fn test_fetch_failure_is_reported_at_fetch() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path());

        let err = DataIngestion::new(cfg)
            .run_with(|s| Ok(InMemoryStore::failing(&s.collection, "cursor killed")))
            .unwrap_err();

        assert_eq!(err.stage, IngestionStage::Fetching);
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(!dir.path().join("data").exists());
    }

    #[test]
    fn test_unwritable_output_dir_writes_no_files() {
        let dir     = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "plain file").unwrap();

        let cfg = IngestionConfig {
            paths: DatasetPaths::under(blocker.join("data")),
            ..IngestionConfig::default()
        };
        let err = run_memory(cfg.clone(), (0..10).map(student).collect()).unwrap_err();

        assert_eq!(err.stage, IngestionStage::PreparingOutput);
        assert_eq!(err.kind(), ErrorKind::Write);
        for path in [&cfg.paths.raw, &cfg.paths.train, &cfg.paths.test] {
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_test_write_failure_keeps_train_file() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config_in(dir.path());
        // A directory where the test file should go makes File::create fail
        cfg.paths.test = dir.path().join("data").join("test_dir");
        fs::create_dir_all(&cfg.paths.test).unwrap();

        let err = run_memory(cfg.clone(), (0..10).map(student).collect()).unwrap_err();

        assert_eq!(err.stage, IngestionStage::WritingTest);
        assert!(cfg.paths.train.exists());
    }

    #[test]
    fn test_invalid_fraction_stops_before_connecting() {
        let cfg = IngestionConfig { test_fraction: 1.0, ..IngestionConfig::default() };
        let mut connected = false;

        let err = DataIngestion::new(cfg)
            .run_with(|s| {
                connected = true;
                Ok(InMemoryStore::new(&s.collection, Vec::new()))
            })
            .unwrap_err();

        assert_eq!(err.stage, IngestionStage::Validating);
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!connected);
    }

    #[test]
    fn test_validate_rejects_blank_store_settings() {
        let mut cfg = IngestionConfig::default();
        cfg.store.database = "  ".to_string();
        assert!(matches!(cfg.validate(), Err(IngestError::Configuration(_))));
        assert!(IngestionConfig::default().validate().is_ok());
    }
}
