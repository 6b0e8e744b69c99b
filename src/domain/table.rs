// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// An ordered sequence of Records plus the column list used as
// the header row. Columns are the union of every record's
// fields in first-seen order; a record that lacks a column
// simply has no value for it.
//
// Reference: Rust Book §8 (Collections)

use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows:    Vec<Record>,
}

impl Table {
    /// Build a table from records, deriving the column list.
    pub fn from_records(rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for name in row.field_names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        Self { columns, rows }
    }

    /// Build a table that keeps an existing column list.
    /// Used for partitions, which must share the raw header.
    pub fn with_columns(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell values of one row in column order.
    /// Missing fields come back as `FieldValue::Null`.
    pub fn row_values<'a>(&'a self, row: &'a Record) -> impl Iterator<Item = &'a FieldValue> + 'a {
        const NULL: &FieldValue = &FieldValue::Null;
        self.columns.iter().map(move |c| row.get(c).unwrap_or(NULL))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
        (self.columns, self.rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_first_seen_union() {
        let t = Table::from_records(vec![
            Record::new().with("math", 1).with("reading", 2),
            Record::new().with("writing", 3).with("math", 4),
        ]);
        assert_eq!(t.columns(), &["math", "reading", "writing"]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_missing_fields_are_null() {
        let t = Table::from_records(vec![
            Record::new().with("math", 1).with("reading", 2),
            Record::new().with("math", 4),
        ]);
        let second: Vec<&FieldValue> = t.row_values(&t.rows()[1]).collect();
        assert_eq!(second, vec![&FieldValue::Int(4), &FieldValue::Null]);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::from_records(Vec::new());
        assert!(t.is_empty());
        assert!(t.columns().is_empty());
    }
}
