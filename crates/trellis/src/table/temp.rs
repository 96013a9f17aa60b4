//! Disposable, single-use table snapshots handed to renderers.

use serde::{Deserialize, Serialize};

use crate::value::PrimitiveValue;

use super::column_union;
use super::entry::TableEntry;

/// A table snapshot meant to be consumed once, typically as the final
/// product of a rendering-oriented transformation chain.
///
/// The column list is frozen at construction. The snapshot carries the
/// ID of the table it was derived from rather than drawing a fresh one;
/// a downstream numbering scheme (e.g. a plot) may rebase it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempTable {
    id: u64,
    title: Option<String>,
    nickname: String,
    columns: Vec<String>,
    entries: Vec<TableEntry>,
}

impl TempTable {
    /// Builds a snapshot from entries, deriving the column list as the
    /// preferred ordering followed by the union of entry columns in
    /// first-seen order.
    pub fn from_entries(id: u64, entries: Vec<TableEntry>, ordering: &[String]) -> Self {
        let columns = column_union(ordering, &entries);
        Self {
            id,
            title: None,
            nickname: String::new(),
            columns,
            entries,
        }
    }

    /// An empty snapshot with a fixed column list.
    pub fn empty(id: u64, columns: Vec<String>) -> Self {
        Self {
            id,
            title: None,
            nickname: String::new(),
            columns,
            entries: Vec::new(),
        }
    }

    pub(crate) fn with_meta(
        id: u64,
        title: Option<String>,
        nickname: String,
        columns: Vec<String>,
        entries: Vec<TableEntry>,
    ) -> Self {
        Self {
            id,
            title,
            nickname,
            columns,
            entries,
        }
    }

    /// A sibling snapshot carrying the same identity but new entries.
    pub fn derive(&self, entries: Vec<TableEntry>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            nickname: self.nickname.clone(),
            columns: self.columns.clone(),
            entries,
        }
    }

    /// A sibling snapshot with a new column list and new entries.
    pub fn derive_with_columns(&self, columns: Vec<String>, entries: Vec<TableEntry>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            nickname: self.nickname.clone(),
            columns,
            entries,
        }
    }

    /// The ID this snapshot currently answers to.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Reassigns this snapshot's ID to align with a downstream numbering
    /// scheme, e.g. the plot it is rendered for.
    pub fn rebase_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Snapshots are always temporary.
    pub fn is_temporary(&self) -> bool {
        true
    }

    /// The title, deriving "Table N" when none was set.
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Table {}", self.id))
    }

    /// A short alias; empty when unset.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The frozen column list.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows in order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    /// The value at `(row, column)`, or `None` when the row is out of
    /// range or the cell is missing.
    pub fn get(&self, row: usize, column: &str) -> Option<&PrimitiveValue> {
        self.entries.get(row).and_then(|e| e.get(column))
    }
}
