//! The rendering contract consumed by external renderers.

use serde_json::json;

use crate::error::Result;
use crate::provenance::Provenance;
use crate::value::PrimitiveValue;

use super::hard::HardTable;
use super::temp::TempTable;

/// The finalized, read-only surface a renderer works from.
///
/// Lookups are total: out-of-range rows and unknown columns yield `None`
/// rather than an error, so speculative lookups during rendering never
/// abort a chain.
pub trait TableView {
    /// The table's numeric ID.
    fn id(&self) -> u64;

    /// The table's title, derived from the ID when none was set.
    fn title(&self) -> String;

    /// The table's nickname; empty when unset.
    fn nickname(&self) -> &str;

    /// Ordered, duplicate-free column names.
    fn column_names(&self) -> Vec<String>;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// The value at `(row, column)`, if the row exists and the cell is
    /// present.
    fn value_at(&self, row: usize, column: &str) -> Option<&PrimitiveValue>;

    /// The provenance of the cell at `(row, col)`, with `col` an index
    /// into [`column_names`](Self::column_names). `None` outside valid
    /// bounds.
    fn provenance_at(&self, row: usize, col: usize) -> Option<&Provenance>;

    /// Serializes the table to delimited text.
    ///
    /// The header row comes first. Absent cells are written as `missing`,
    /// so formatting code never sees a raw missing value. Output is
    /// stable: serializing the same table twice yields identical bytes,
    /// and re-parsing with the same delimiter recovers the same column
    /// and row counts.
    fn to_delimited_text(&self, delimiter: u8, missing: &str) -> Result<String> {
        let columns = self.column_names();
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        writer.write_record(&columns)?;
        for row in 0..self.row_count() {
            let fields: Vec<String> = columns
                .iter()
                .map(|column| match self.value_at(row, column) {
                    Some(value) if !value.is_absent() => value.to_string(),
                    _ => missing.to_string(),
                })
                .collect();
            writer.write_record(&fields)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// [`to_delimited_text`](Self::to_delimited_text) with a comma and an
    /// empty-string missing token.
    fn to_csv_text(&self) -> Result<String> {
        self.to_delimited_text(b',', "")
    }

    /// Serializes the finalized snapshot as JSON: identity, column list,
    /// and rows in column order (absent cells become `null`).
    fn to_json(&self) -> Result<String> {
        let columns = self.column_names();
        let rows: Vec<Vec<serde_json::Value>> = (0..self.row_count())
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        self.value_at(row, column)
                            .and_then(|v| serde_json::to_value(v).ok())
                            .unwrap_or(serde_json::Value::Null)
                    })
                    .collect()
            })
            .collect();

        let doc = json!({
            "id": self.id(),
            "title": self.title(),
            "columns": columns,
            "rows": rows,
        });
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl TableView for HardTable {
    fn id(&self) -> u64 {
        HardTable::id(self)
    }

    fn title(&self) -> String {
        HardTable::title(self)
    }

    fn nickname(&self) -> &str {
        HardTable::nickname(self)
    }

    fn column_names(&self) -> Vec<String> {
        HardTable::column_names(self)
    }

    fn row_count(&self) -> usize {
        HardTable::row_count(self)
    }

    fn value_at(&self, row: usize, column: &str) -> Option<&PrimitiveValue> {
        self.get(row, column)
    }

    fn provenance_at(&self, row: usize, col: usize) -> Option<&Provenance> {
        let entry = self.entries().get(row)?;
        let column = HardTable::column_names(self).into_iter().nth(col)?;
        entry.provenance(&column)
    }
}

impl TableView for TempTable {
    fn id(&self) -> u64 {
        TempTable::id(self)
    }

    fn title(&self) -> String {
        TempTable::title(self)
    }

    fn nickname(&self) -> &str {
        TempTable::nickname(self)
    }

    fn column_names(&self) -> Vec<String> {
        self.columns().to_vec()
    }

    fn row_count(&self) -> usize {
        TempTable::row_count(self)
    }

    fn value_at(&self, row: usize, column: &str) -> Option<&PrimitiveValue> {
        self.get(row, column)
    }

    fn provenance_at(&self, row: usize, col: usize) -> Option<&Provenance> {
        let entry = self.entries().get(row)?;
        let column = self.columns().get(col)?;
        entry.provenance(column)
    }
}
