//! Column projection.

use crate::table::{TableEntry, TempTable};

use super::TableTransformation;

/// Keeps a subset of columns, in the requested order.
///
/// Cells are direct copies and keep their provenance. Requested names
/// the input does not have are ignored.
#[derive(Debug, Clone)]
pub struct Project {
    columns: Vec<String>,
}

impl Project {
    /// Projects onto `columns`.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

impl TableTransformation for Project {
    fn transform(&self, input: &TempTable) -> TempTable {
        let kept: Vec<String> = self
            .columns
            .iter()
            .filter(|column| input.columns().contains(*column))
            .cloned()
            .collect();

        let entries: Vec<TableEntry> = input
            .entries()
            .iter()
            .map(|entry| {
                let mut out = TableEntry::new();
                for column in &kept {
                    if let Some(value) = entry.get(column) {
                        out.set(column.clone(), value.clone());
                    }
                    if let Some(provenance) = entry.provenance(column) {
                        out.set_provenance(column.clone(), provenance.clone());
                    }
                }
                out
            })
            .collect();

        input.derive_with_columns(kept, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveValue;

    #[test]
    fn test_project_keeps_requested_order() {
        let entries = vec![
            TableEntry::new()
                .with_value("a", 1)
                .with_value("b", 2)
                .with_value("c", 3),
        ];
        let input = TempTable::from_entries(1, entries, &[]);

        let output = Project::new(["c", "a", "ghost"]).transform(&input);

        assert_eq!(output.columns(), ["c", "a"]);
        assert_eq!(output.get(0, "c"), Some(&PrimitiveValue::Int(3)));
        assert!(output.get(0, "b").is_none());
    }
}
