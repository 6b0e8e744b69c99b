// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns used by the application layer:
//
//   csv_writer.rs   — Table persistence
//                     Writes a Table as a comma-separated file
//                     with a header row and no index column.
//
//   paths.rs        — Output locations
//                     The raw/train/test file paths and the
//                     creation of their parent directories.
//
//   config_store.rs — Configuration persistence
//                     Loads and saves IngestionConfig as JSON
//                     so a run can be reproduced from a file.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

/// CSV output for Tables
pub mod csv_writer;

/// Raw/train/test paths and directory preparation
pub mod paths;

/// JSON configuration file load/save
pub mod config_store;
