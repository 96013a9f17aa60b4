//! Row filtering.

use std::fmt;

use crate::table::{TableEntry, TempTable};

use super::TableTransformation;

/// Keeps the rows matching a predicate.
///
/// Surviving rows are direct copies and keep their provenance.
pub struct FilterRows {
    predicate: Box<dyn Fn(&TableEntry) -> bool + Send + Sync>,
}

impl FilterRows {
    /// Creates a filter from a predicate over entries.
    pub fn new(predicate: impl Fn(&TableEntry) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for FilterRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRows").finish_non_exhaustive()
    }
}

impl TableTransformation for FilterRows {
    fn transform(&self, input: &TempTable) -> TempTable {
        let entries: Vec<TableEntry> = input
            .entries()
            .iter()
            .filter(|entry| (self.predicate)(entry))
            .cloned()
            .collect();
        input.derive(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveValue;

    #[test]
    fn test_filter_keeps_matching_rows() {
        let entries = vec![
            TableEntry::new().with_value("n", 1),
            TableEntry::new().with_value("n", 5),
            TableEntry::new().with_value("n", 2),
        ];
        let input = TempTable::from_entries(1, entries, &[]);

        let filter = FilterRows::new(|e| {
            e.get("n").and_then(PrimitiveValue::as_f64).unwrap_or(0.0) >= 2.0
        });
        let output = filter.transform(&input);

        assert_eq!(output.row_count(), 2);
        assert_eq!(output.get(0, "n"), Some(&PrimitiveValue::Int(5)));
        // Input untouched.
        assert_eq!(input.row_count(), 3);
    }
}
