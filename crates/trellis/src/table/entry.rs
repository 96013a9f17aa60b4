//! One row of named, typed values with per-cell provenance.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::provenance::Provenance;
use crate::value::PrimitiveValue;

/// One row of a table: an ordered mapping from column name to value,
/// with an optional provenance tag per column.
///
/// Entries are immutable once added to a table; transformations produce
/// new entries rather than editing existing ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    values: IndexMap<String, PrimitiveValue>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    provenance: IndexMap<String, Provenance>,
}

impl TableEntry {
    /// Creates an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, normalizing raw input through the casting rules.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<PrimitiveValue>) {
        self.values.insert(column.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_value(
        mut self,
        column: impl Into<String>,
        value: impl Into<PrimitiveValue>,
    ) -> Self {
        self.set(column, value);
        self
    }

    /// Builder-style [`set_provenance`](Self::set_provenance).
    pub fn with_provenance(mut self, column: impl Into<String>, provenance: Provenance) -> Self {
        self.set_provenance(column, provenance);
        self
    }

    /// The value stored under `column`, if any.
    pub fn get(&self, column: &str) -> Option<&PrimitiveValue> {
        self.values.get(column)
    }

    /// Tags the cell under `column` with its upstream origin.
    pub fn set_provenance(&mut self, column: impl Into<String>, provenance: Provenance) {
        self.provenance.insert(column.into(), provenance);
    }

    /// Removes the provenance tag for `column`.
    pub fn clear_provenance(&mut self, column: &str) {
        self.provenance.shift_remove(column);
    }

    /// The provenance tag for `column`, when one was recorded.
    pub fn provenance(&self, column: &str) -> Option<&Provenance> {
        self.provenance.get(column)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrimitiveValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of cells in this entry.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the entry has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance::CellRef;

    #[test]
    fn test_set_casts_raw_text() {
        let entry = TableEntry::new()
            .with_value("n", "12")
            .with_value("label", "fast");

        assert_eq!(entry.get("n"), Some(&PrimitiveValue::Int(12)));
        assert_eq!(
            entry.get("label"),
            Some(&PrimitiveValue::Text("fast".to_string()))
        );
    }

    #[test]
    fn test_column_order_is_insertion_order() {
        let entry = TableEntry::new()
            .with_value("z", 1)
            .with_value("a", 2)
            .with_value("m", 3);

        let columns: Vec<&str> = entry.columns().collect();
        assert_eq!(columns, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_provenance_lookup_is_total() {
        let entry = TableEntry::new()
            .with_value("x", 1)
            .with_provenance("x", Provenance::Cell(CellRef::new(4, 0, "x")));

        assert!(entry.provenance("x").is_some());
        assert!(entry.provenance("missing").is_none());
    }
}
