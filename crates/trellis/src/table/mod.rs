//! Tables: entries, identity, and materialized snapshots.

mod entry;
mod hard;
mod id;
mod temp;
mod view;

pub use entry::TableEntry;
pub use hard::HardTable;
pub use id::reset_table_id_counter;
pub use temp::TempTable;
pub use view::TableView;

use indexmap::IndexSet;

/// Duplicate-free column list: the preferred ordering first, then the
/// remaining entry columns in first-seen order.
pub(crate) fn column_union(ordering: &[String], entries: &[TableEntry]) -> Vec<String> {
    let mut names: IndexSet<String> = ordering.iter().cloned().collect();
    for entry in entries {
        for column in entry.columns() {
            if !names.contains(column) {
                names.insert(column.to_string());
            }
        }
    }
    names.into_iter().collect()
}
