//! Pivoting a column of labels into new columns.

use indexmap::IndexMap;

use crate::table::{TableEntry, TempTable};

use super::TableTransformation;

/// Turns the values of one column into new columns, populated from a
/// second column.
///
/// Rows that agree on every remaining column are merged into a single
/// output row; those remaining columns act as the merge key. Generated
/// columns appear in first-seen order after the key columns. A pivoted
/// cell inherits the provenance of the value cell it was read from; when
/// the same `(key, label)` pair occurs twice, the later row wins.
#[derive(Debug, Clone)]
pub struct ExpandAsColumns {
    header: String,
    value: String,
}

impl ExpandAsColumns {
    /// Pivot on `header`, filling the new columns from `value`.
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

impl TableTransformation for ExpandAsColumns {
    fn transform(&self, input: &TempTable) -> TempTable {
        let key_columns: Vec<String> = input
            .columns()
            .iter()
            .filter(|c| **c != self.header && **c != self.value)
            .cloned()
            .collect();

        let mut columns: Vec<String> = key_columns.clone();
        let mut groups: IndexMap<Vec<String>, TableEntry> = IndexMap::new();

        for entry in input.entries() {
            let key: Vec<String> = key_columns
                .iter()
                .map(|c| entry.get(c).map(|v| v.to_string()).unwrap_or_default())
                .collect();

            let merged = groups.entry(key).or_insert_with(|| {
                let mut out = TableEntry::new();
                for column in &key_columns {
                    if let Some(value) = entry.get(column) {
                        out.set(column.clone(), value.clone());
                    }
                    if let Some(provenance) = entry.provenance(column) {
                        out.set_provenance(column.clone(), provenance.clone());
                    }
                }
                out
            });

            let Some(label) = entry.get(&self.header).filter(|v| !v.is_absent()) else {
                continue;
            };
            let column = label.to_string();
            if !columns.contains(&column) {
                columns.push(column.clone());
            }

            if let Some(value) = entry.get(&self.value) {
                merged.set(column.clone(), value.clone());
                match entry.provenance(&self.value) {
                    Some(provenance) => merged.set_provenance(column, provenance.clone()),
                    None => merged.clear_provenance(&column),
                }
            }
        }

        input.derive_with_columns(columns, groups.into_values().collect())
    }
}
