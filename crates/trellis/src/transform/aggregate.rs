//! Group-and-fold aggregation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::provenance::Provenance;
use crate::table::{TableEntry, TempTable};
use crate::value::PrimitiveValue;

use super::TableTransformation;

/// The fold applied to each non-key column of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateFunction {
    /// Sum of the numeric values.
    Sum,
    /// Arithmetic mean of the numeric values.
    Mean,
    /// Smallest numeric value.
    Min,
    /// Largest numeric value.
    Max,
    /// Number of present cells, numeric or not.
    Count,
}

impl AggregateFunction {
    /// Folds one group's column. `numbers` holds the numeric values of
    /// the group, `present` the count of non-absent cells.
    fn fold(self, numbers: &[f64], present: usize) -> PrimitiveValue {
        match self {
            Self::Count => PrimitiveValue::Int(present as i64),
            Self::Sum | Self::Mean | Self::Min | Self::Max if numbers.is_empty() => {
                PrimitiveValue::Absent
            }
            Self::Sum => PrimitiveValue::Float(numbers.iter().sum()),
            Self::Mean => {
                PrimitiveValue::Float(numbers.iter().sum::<f64>() / numbers.len() as f64)
            }
            Self::Min => PrimitiveValue::Float(numbers.iter().copied().fold(f64::INFINITY, f64::min)),
            Self::Max => {
                PrimitiveValue::Float(numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            }
        }
    }
}

/// One output row per distinct combination of key-column values.
///
/// Key cells are direct copies from the first row of their group and
/// keep its provenance. Every other column is folded with the aggregate
/// function; a folded cell carries derived provenance listing every
/// contributing cell, in input-row order. Non-numeric values are skipped
/// by the numeric folds; a fold over no values yields an absent cell.
#[derive(Debug, Clone)]
pub struct Aggregate {
    group_by: Vec<String>,
    function: AggregateFunction,
}

impl Aggregate {
    /// Groups by `group_by` and folds the remaining columns with
    /// `function`.
    pub fn new(
        group_by: impl IntoIterator<Item = impl Into<String>>,
        function: AggregateFunction,
    ) -> Self {
        Self {
            group_by: group_by.into_iter().map(Into::into).collect(),
            function,
        }
    }
}

impl TableTransformation for Aggregate {
    fn transform(&self, input: &TempTable) -> TempTable {
        let keys: Vec<String> = input
            .columns()
            .iter()
            .filter(|c| self.group_by.contains(*c))
            .cloned()
            .collect();
        let folded: Vec<String> = input
            .columns()
            .iter()
            .filter(|c| !self.group_by.contains(*c))
            .cloned()
            .collect();

        // Row indices per distinct key, in first-seen order.
        let mut groups: IndexMap<Vec<String>, Vec<usize>> = IndexMap::new();
        for (row, entry) in input.entries().iter().enumerate() {
            let key: Vec<String> = keys
                .iter()
                .map(|c| entry.get(c).map(|v| v.to_string()).unwrap_or_default())
                .collect();
            groups.entry(key).or_default().push(row);
        }

        let mut entries = Vec::with_capacity(groups.len());
        for rows in groups.values() {
            let first = &input.entries()[rows[0]];
            let mut out = TableEntry::new();
            for column in &keys {
                if let Some(value) = first.get(column) {
                    out.set(column.clone(), value.clone());
                }
                if let Some(provenance) = first.provenance(column) {
                    out.set_provenance(column.clone(), provenance.clone());
                }
            }

            for column in &folded {
                let mut numbers = Vec::new();
                let mut present = 0usize;
                let mut sources = Vec::new();
                for &row in rows {
                    let entry = &input.entries()[row];
                    let Some(value) = entry.get(column).filter(|v| !v.is_absent()) else {
                        continue;
                    };
                    present += 1;
                    if let Some(number) = value.as_f64() {
                        numbers.push(number);
                    }
                    if let Some(provenance) = entry.provenance(column) {
                        sources.extend(provenance.sources().iter().cloned());
                    }
                }

                out.set(column.clone(), self.function.fold(&numbers, present));
                if !sources.is_empty() {
                    out.set_provenance(column.clone(), Provenance::Derived(sources));
                }
            }
            entries.push(out);
        }

        let columns = keys.into_iter().chain(folded).collect();
        input.derive_with_columns(columns, entries)
    }
}
