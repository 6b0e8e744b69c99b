// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline only needs one thing from a store: every record
// of one collection, as a Table. MongoStore (Layer 4) talks to a
// live database; InMemoryStore serves fixed records so the full
// run can be exercised without one.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::IngestError;
use crate::domain::table::Table;

// ─── DocumentStore ────────────────────────────────────────────────────────────
/// A connected collection that can be read in full.
///
/// Implementations:
///   - MongoStore    → a MongoDB collection
///   - InMemoryStore → records held in memory
pub trait DocumentStore {
    /// Short human-readable name of the collection, for logs.
    fn describe(&self) -> String;

    /// Fetch every record with the store identifier removed.
    /// An empty collection yields an empty Table, not an error.
    fn fetch_all(&self) -> Result<Table, IngestError>;
}
