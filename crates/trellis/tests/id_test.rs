//! ID counter behavior.
//!
//! Kept in its own integration binary with a single test function: the
//! assertions below would race against any other test constructing
//! tables or plots on a sibling thread.

use std::thread;

use trellis::{HardTable, Plot, reset_plot_id_counter, reset_table_id_counter};

#[test]
fn test_counters_are_gap_free_and_resettable() {
    reset_table_id_counter();
    assert_eq!(HardTable::new().id(), 1);

    // Sequential construction yields consecutive IDs.
    let ids: Vec<u64> = (0..5).map(|_| HardTable::new().id()).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 6]);

    // Concurrent construction never duplicates or skips an ID.
    reset_table_id_counter();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| (0..50).map(|_| HardTable::new().id()).collect::<Vec<u64>>())
        })
        .collect();
    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=400).collect::<Vec<u64>>());

    // The plot counter follows the same rules, independently.
    reset_plot_id_counter();
    let table = HardTable::new();
    let plot_ids: Vec<u64> = (0..3).map(|_| Plot::new(&table).id()).collect();
    assert_eq!(plot_ids, vec![1, 2, 3]);
}
