//! Trellis: assemble, transform, and plot tabular results with per-cell
//! provenance.
//!
//! A [`HardTable`] is populated incrementally with [`TableEntry`] rows,
//! materialized into a disposable [`TempTable`] snapshot, optionally
//! reshaped through [`TableTransformation`]s, and handed to renderers
//! through the [`TableView`] contract. Every rendered cell can be traced
//! back to the input cell(s) that produced it.
//!
//! # Core Principles
//!
//! - **Total lookups**: out-of-range access answers `None`, never panics
//! - **Non-destructive**: transformations return new tables; inputs are
//!   never modified
//! - **Full provenance**: every output cell links back to its origin
//!
//! # Example
//!
//! ```
//! use trellis::{HardTable, TableEntry, TableView};
//!
//! let mut table = HardTable::new();
//! table.add(TableEntry::new().with_value("n", 1).with_value("time", 8.2));
//! table.add(TableEntry::new().with_value("n", 2).with_value("time", 9.7));
//!
//! let snapshot = table.materialize();
//! assert_eq!(snapshot.column_names(), vec!["n", "time"]);
//! assert!(snapshot.provenance_at(0, 1).is_some());
//! ```

pub mod error;
pub mod plot;
pub mod provenance;
pub mod table;
pub mod transform;
pub mod value;

pub use error::{Result, TrellisError};
pub use plot::{ImageFormat, Plot, PlotBackend, reset_plot_id_counter};
pub use provenance::{CellRef, Provenance};
pub use table::{HardTable, TableEntry, TableView, TempTable, reset_table_id_counter};
pub use transform::{
    Aggregate, AggregateFunction, Chain, ExpandAsColumns, FilterRows, Project, SortRows,
    TableTransformation,
};
pub use value::{CRLF, PrimitiveValue, is_numeric_string, round_to_significant_figures};
