// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One document fetched from the store, minus its store-internal
// identifier. Fields keep the order the store returned them in,
// which becomes the column order of the output files.
//
// Reference: Rust Book §6 (Enums), §8 (Vectors)

use serde::{Deserialize, Serialize};

/// Name of the identifier field every stored document carries.
/// It never reaches a Table.
pub const STORE_ID_FIELD: &str = "_id";

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Render the value the way it appears in a CSV cell.
    ///
    /// Integral floats keep a trailing `.0` so a float column stays
    /// recognisable as one; NaN is written as an empty cell.
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Null        => String::new(),
            FieldValue::Bool(true)  => "True".to_string(),
            FieldValue::Bool(false) => "False".to_string(),
            FieldValue::Int(i)      => i.to_string(),
            FieldValue::Float(f)    => format_float(*f),
            FieldValue::Text(s)     => s.clone(),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return String::new();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let s = f.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s.to_string()) }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self { FieldValue::Int(i) }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self { FieldValue::Int(i64::from(i)) }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self { FieldValue::Float(f) }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self { FieldValue::Bool(b) }
}

/// One document as ordered `(field, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an existing field in place
    /// so the original field order is preserved.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name  = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None       => self.fields.push((name, value)),
        }
    }

    /// Builder-style variant of [`Record::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Drop the store identifier if present. Absence is not an error.
    pub fn strip_store_id(mut self) -> Self {
        self.fields.retain(|(n, _)| n != STORE_ID_FIELD);
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let r = Record::new()
            .with("math", 70)
            .with("reading", 80)
            .with("math", 90);
        let names: Vec<&str> = r.field_names().collect();
        assert_eq!(names, vec!["math", "reading"]);
        assert_eq!(r.get("math"), Some(&FieldValue::Int(90)));
    }

    #[test]
    fn test_strip_store_id() {
        let r = Record::new().with("_id", "abc").with("math", 1);
        let r = r.strip_store_id();
        assert!(r.get("_id").is_none());
        assert_eq!(r.len(), 1);

        // Missing identifier is fine
        let r = Record::new().with("math", 1).strip_store_id();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(FieldValue::Null.to_cell(), "");
        assert_eq!(FieldValue::Bool(true).to_cell(), "True");
        assert_eq!(FieldValue::Int(-3).to_cell(), "-3");
        assert_eq!(FieldValue::Float(72.0).to_cell(), "72.0");
        assert_eq!(FieldValue::Float(72.5).to_cell(), "72.5");
        assert_eq!(FieldValue::Float(f64::NAN).to_cell(), "");
        assert_eq!(FieldValue::from("group A").to_cell(), "group A");
    }
}
