//! Pure table-to-table transformations that re-derive provenance.
//!
//! A transformation consumes a materialized [`TempTable`] and produces a
//! new one; the input is never mutated. Output cells that are direct
//! copies keep a [`Cell`](crate::Provenance::Cell) link to the input cell
//! they came from; computed cells carry
//! [`Derived`](crate::Provenance::Derived) links to every contributor.

mod aggregate;
mod chain;
mod filter;
mod pivot;
mod project;
mod sort;

pub use aggregate::{Aggregate, AggregateFunction};
pub use chain::Chain;
pub use filter::FilterRows;
pub use pivot::ExpandAsColumns;
pub use project::Project;
pub use sort::SortRows;

use crate::table::TempTable;

/// A pure function reshaping one materialized table into another.
///
/// Implementations must not mutate their input and must re-derive
/// provenance for every output cell. They carry no shared mutable state,
/// so distinct tables can be transformed concurrently.
pub trait TableTransformation: Send + Sync {
    /// Produces the transformed table. The input is left untouched.
    fn transform(&self, input: &TempTable) -> TempTable;
}
