// ============================================================
// Layer 4 — In-Memory Document Store
// ============================================================
// Holds a fixed list of records and hands them back on
// fetch_all(), applying the same `_id` stripping as MongoStore.
// A failing variant reproduces a mid-query store error.

use crate::domain::error::IngestError;
use crate::domain::record::Record;
use crate::domain::table::Table;
use crate::domain::traits::DocumentStore;

pub struct InMemoryStore {
    name:    String,
    records: Vec<Record>,
    failure: Option<String>,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self { name: name.into(), records, failure: None }
    }

    /// A store whose fetch always fails with `reason`.
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { name: name.into(), records: Vec::new(), failure: Some(reason.into()) }
    }
}

impl DocumentStore for InMemoryStore {
    fn describe(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn fetch_all(&self) -> Result<Table, IngestError> {
        if let Some(reason) = &self.failure {
            return Err(IngestError::fetch(&self.name, reason));
        }
        let rows = self
            .records
            .iter()
            .cloned()
            .map(Record::strip_store_id)
            .collect();
        Ok(Table::from_records(rows))
    }
}
