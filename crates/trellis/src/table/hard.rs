//! The incrementally populated, identity-bearing table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};
use crate::provenance::{CellRef, Provenance};
use crate::value::PrimitiveValue;

use super::column_union;
use super::entry::TableEntry;
use super::id::next_table_id;
use super::temp::TempTable;

/// An identified, named collection of rows, populated incrementally.
///
/// Every table draws a unique ID from a process-wide counter at
/// construction. The column list is the union of the columns of all
/// entries: a cell missing from some row is treated as absent, never as
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardTable {
    id: u64,
    title: Option<String>,
    nickname: String,
    ordering: Vec<String>,
    entries: Vec<TableEntry>,
}

impl HardTable {
    /// Creates an empty table with a fresh counter-assigned ID.
    pub fn new() -> Self {
        Self {
            id: next_table_id(),
            title: None,
            nickname: String::new(),
            ordering: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Creates an empty table with a preferred column ordering. Columns
    /// not listed are appended in first-seen order.
    pub fn with_ordering(ordering: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut table = Self::new();
        table.ordering = ordering.into_iter().map(Into::into).collect();
        table
    }

    /// Builds a table from delimited text, casting every field through
    /// the value-casting rules. The first record is the header row; empty
    /// fields become absent cells.
    pub fn from_delimited_text(text: &str, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(TrellisError::EmptyData("no columns found".to_string()));
        }

        let mut table = Self::with_ordering(headers.clone());
        for record in reader.records() {
            let record = record?;
            let mut entry = TableEntry::new();
            for (i, column) in headers.iter().enumerate() {
                match record.get(i) {
                    Some(field) if !field.is_empty() => {
                        entry.set(column.clone(), PrimitiveValue::from(field));
                    }
                    _ => entry.set(column.clone(), PrimitiveValue::Absent),
                }
            }
            table.add(entry);
        }
        Ok(table)
    }

    /// [`from_delimited_text`](Self::from_delimited_text) with a comma.
    pub fn from_csv(text: &str) -> Result<Self> {
        Self::from_delimited_text(text, b',')
    }

    /// The table's process-unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The table's title, deriving "Table N" when none was set.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Table {}", self.id))
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Builder-style [`set_title`](Self::set_title).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// A short alias for the table; empty when unset.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Sets the nickname.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Appends a row. Rows keep their insertion order.
    pub fn add(&mut self, entry: TableEntry) {
        self.entries.push(entry);
    }

    /// The rows in insertion order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    /// Ordered, duplicate-free column names: the preferred ordering
    /// first, then remaining columns in first-seen order.
    pub fn column_names(&self) -> Vec<String> {
        column_union(&self.ordering, &self.entries)
    }

    /// The value at `(row, column)`, or `None` when the row is out of
    /// range or the cell is missing.
    pub fn get(&self, row: usize, column: &str) -> Option<&PrimitiveValue> {
        self.entries.get(row).and_then(|e| e.get(column))
    }

    /// Produces the immutable snapshot renderers work from.
    ///
    /// The snapshot keeps this table's ID. Cells that carry no upstream
    /// provenance are stamped with a reference to this table, so chained
    /// transformations stay traceable to their origin.
    pub fn materialize(&self) -> TempTable {
        let columns = self.column_names();
        let mut entries = self.entries.clone();
        for (row, entry) in entries.iter_mut().enumerate() {
            let names: Vec<String> = entry.columns().map(str::to_string).collect();
            for column in names {
                if entry.provenance(&column).is_none() {
                    let origin = CellRef::new(self.id, row, column.clone());
                    entry.set_provenance(column, Provenance::Cell(origin));
                }
            }
        }
        TempTable::with_meta(self.id, self.title.clone(), self.nickname.clone(), columns, entries)
    }
}

impl Default for HardTable {
    fn default() -> Self {
        Self::new()
    }
}
