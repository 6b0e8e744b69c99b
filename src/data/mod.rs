// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the document store and a pair of
// train/test Tables.
//
//   document store
//       │
//       ▼
//   MongoStore / InMemoryStore  → fetch all documents as a Table
//       │
//       ▼
//   split_table                 → seeded shuffle into train / test
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads a MongoDB collection through the synchronous driver
pub mod mongo_store;

/// Serves fixed records from memory
pub mod memory_store;

/// Shuffles and splits rows into train/test partitions
pub mod splitter;
