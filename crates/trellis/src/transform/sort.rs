//! Row reordering.

use std::cmp::Ordering;

use crate::table::TempTable;
use crate::value::PrimitiveValue;

use super::TableTransformation;

/// Reorders rows by one or more key columns.
///
/// Numeric values compare numerically and sort before text; text
/// compares lexicographically; absent cells sort last. The underlying
/// sort is stable, so ties keep their insertion order. Cells are direct
/// copies and keep their provenance.
#[derive(Debug, Clone)]
pub struct SortRows {
    keys: Vec<String>,
    descending: bool,
}

impl SortRows {
    /// Sorts ascending by `keys`, compared left to right.
    pub fn by(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            descending: false,
        }
    }

    /// Reverses the sort direction.
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

impl TableTransformation for SortRows {
    fn transform(&self, input: &TempTable) -> TempTable {
        let mut entries = input.entries().to_vec();
        entries.sort_by(|a, b| {
            let mut ordering = Ordering::Equal;
            for key in &self.keys {
                ordering = compare_cells(a.get(key), b.get(key));
                if ordering != Ordering::Equal {
                    break;
                }
            }
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        input.derive(entries)
    }
}

fn compare_cells(a: Option<&PrimitiveValue>, b: Option<&PrimitiveValue>) -> Ordering {
    let a = a.filter(|v| !v.is_absent());
    let b = b.filter(|v| !v.is_absent());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(m), Some(n)) => m.partial_cmp(&n).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => x.to_string().cmp(&y.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableEntry;

    fn table() -> TempTable {
        let entries = vec![
            TableEntry::new().with_value("n", 3).with_value("tag", "c"),
            TableEntry::new().with_value("tag", "a"),
            TableEntry::new().with_value("n", 1).with_value("tag", "b"),
        ];
        TempTable::from_entries(1, entries, &[])
    }

    #[test]
    fn test_sort_numeric_with_absent_last() {
        let output = SortRows::by(["n"]).transform(&table());
        let tags: Vec<String> = (0..3)
            .map(|row| output.get(row, "tag").unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_descending() {
        let output = SortRows::by(["n"]).descending().transform(&table());
        assert_eq!(output.get(0, "tag").unwrap().to_string(), "a");
    }

    #[test]
    fn test_text_sorts_after_numbers() {
        let entries = vec![
            TableEntry::new().with_value("k", "zebra"),
            TableEntry::new().with_value("k", 10),
        ];
        let input = TempTable::from_entries(1, entries, &[]);
        let output = SortRows::by(["k"]).transform(&input);
        assert_eq!(output.get(0, "k"), Some(&PrimitiveValue::Int(10)));
    }
}
