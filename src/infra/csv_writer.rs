// ============================================================
// Layer 6 — CSV Writer
// ============================================================
// Writes a Table to disk:
//   - UTF-8, comma separated
//   - first line is the header (Table column order)
//   - one record per line, no index column
//   - quoting only where a cell needs it
//
// Example output:
//   math,reading,writing
//   72,72,74
//   69,90,88
//
// A Table with no columns (empty collection) produces an empty
// file: there is no header to write.
//
// Reference: csv crate documentation (Writer)

use std::fs::File;
use std::path::Path;

use crate::domain::error::IngestError;
use crate::domain::table::Table;

/// Write `table` to `path`, replacing any existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<(), IngestError> {
    let wrap = |source: csv::Error| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| IngestError::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !table.columns().is_empty() {
        wtr.write_record(table.columns()).map_err(wrap)?;
    }

    for row in table.rows() {
        wtr.write_record(table.row_values(row).map(|v| v.to_cell()))
            .map_err(wrap)?;
    }

    wtr.flush().map_err(|e| IngestError::io(path, e))?;

    tracing::debug!("Wrote {} rows to '{}'", table.len(), path.display());
    Ok(())
}
