// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Every layer below the CLI reports failures with IngestError.
// The application layer wraps the first failure of a run in an
// IngestionFailure that also records which stage was running.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::stage::IngestionStage;

/// Failure of a single pipeline operation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("error connecting to document store: {reason}")]
    Connection { reason: String },
    #[error("error fetching documents from '{collection}': {reason}")]
    Fetch { collection: String, reason: String },
    #[error("error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid train/test split: {0}")]
    Split(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Discriminant of [`IngestError`] for callers that branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Fetch,
    Write,
    Split,
    Configuration,
}

impl IngestError {
    pub fn connection(reason: impl ToString) -> Self {
        IngestError::Connection { reason: reason.to_string() }
    }

    pub fn fetch(collection: impl Into<String>, reason: impl ToString) -> Self {
        IngestError::Fetch {
            collection: collection.into(),
            reason:     reason.to_string(),
        }
    }

    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        IngestError::Write { path: path.into(), source: csv::Error::from(err) }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            IngestError::Connection { .. } => ErrorKind::Connection,
            IngestError::Fetch { .. }      => ErrorKind::Fetch,
            IngestError::Write { .. }      => ErrorKind::Write,
            IngestError::Split(_)          => ErrorKind::Split,
            IngestError::Configuration(_)  => ErrorKind::Configuration,
        }
    }
}

/// The single error a run reports: the stage that failed and why.
#[derive(Debug, Error)]
#[error("data ingestion failed while {stage}: {cause}")]
pub struct IngestionFailure {
    pub stage: IngestionStage,
    #[source]
    pub cause: IngestError,
}

impl IngestionFailure {
    pub fn new(stage: IngestionStage, cause: IngestError) -> Self {
        Self { stage, cause }
    }

    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}
