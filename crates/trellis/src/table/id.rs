//! Process-wide table ID allocation.

use std::sync::atomic::{AtomicU64, Ordering};

static TABLE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Draws the next table ID. Gap-free under concurrent construction.
pub(crate) fn next_table_id() -> u64 {
    TABLE_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Resets the table ID counter so that the next constructed table
/// receives ID 1.
///
/// Destructive, intended for test isolation only. Not safe to call
/// concurrently with table construction.
pub fn reset_table_id_counter() {
    TABLE_COUNTER.store(1, Ordering::SeqCst);
}
