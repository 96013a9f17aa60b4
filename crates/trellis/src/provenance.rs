//! Traceable links from output cells back to the data that produced them.

use serde::{Deserialize, Serialize};

/// A reference to one cell of an identified table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// ID of the table the cell belongs to.
    pub table_id: u64,
    /// Row index within that table.
    pub row: usize,
    /// Column name within that table.
    pub column: String,
}

impl CellRef {
    /// A reference to `(table, row, column)`.
    pub fn new(table_id: u64, row: usize, column: impl Into<String>) -> Self {
        Self {
            table_id,
            row,
            column: column.into(),
        }
    }
}

/// Where a cell's value came from.
///
/// Lookups degrade rather than fail: a cell outside a table's bounds, or
/// one that was never tagged, simply has no provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Provenance {
    /// A direct copy or projection of exactly one upstream cell.
    Cell(CellRef),
    /// A value computed from several upstream cells, e.g. an aggregate.
    /// Contributors are listed in input-row order.
    Derived(Vec<CellRef>),
}

impl Provenance {
    /// The first upstream cell this value depends on.
    pub fn primary(&self) -> Option<&CellRef> {
        match self {
            Self::Cell(cell) => Some(cell),
            Self::Derived(sources) => sources.first(),
        }
    }

    /// Every upstream cell this value depends on.
    pub fn sources(&self) -> &[CellRef] {
        match self {
            Self::Cell(cell) => std::slice::from_ref(cell),
            Self::Derived(sources) => sources,
        }
    }
}
