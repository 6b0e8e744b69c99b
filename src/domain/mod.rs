// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what the ingestion pipeline
// moves around:
//
//   record.rs — one document as ordered (field, value) pairs
//   table.rs  — an ordered set of records sharing a column set
//   traits.rs — the DocumentStore capability the pipeline reads from
//   error.rs  — the error kinds every layer reports with
//   stage.rs  — the pipeline stages a run moves through
//
// Rules for this layer:
//   - NO database driver types
//   - NO file I/O
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single document materialised as a row
pub mod record;

// Column-ordered collection of records
pub mod table;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Error kinds shared by all layers
pub mod error;

// Pipeline stages, used to label failures
pub mod stage;
