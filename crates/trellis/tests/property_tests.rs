//! Property-based tests for trellis invariants.
//!
//! These tests use proptest to generate random inputs and verify that
//! the core maintains its invariants under all conditions:
//!
//! 1. **No panics**: casting and lookups never crash on any input
//! 2. **Idempotence**: casting twice equals casting once
//! 3. **Totality**: provenance queries answer for arbitrary indices
//! 4. **Shape stability**: delimited round trips preserve row/column
//!    counts
//! 5. **Purity**: transformations leave their input untouched

use proptest::prelude::*;

use trellis::{
    FilterRows, HardTable, PrimitiveValue, TableEntry, TableTransformation, TableView,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cell content that cannot collide with the delimiter under test.
fn cell_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,10}"
}

/// A rectangular grid: a column count and rows of exactly that width.
fn grid() -> impl Strategy<Value = (usize, Vec<Vec<String>>)> {
    (1usize..6).prop_flat_map(|columns| {
        (
            Just(columns),
            proptest::collection::vec(
                proptest::collection::vec(cell_value(), columns..=columns),
                0..8,
            ),
        )
    })
}

// =============================================================================
// Casting
// =============================================================================

proptest! {
    /// Casting never panics and is idempotent on any string.
    #[test]
    fn prop_cast_is_idempotent(raw in any::<String>()) {
        let once = PrimitiveValue::Text(raw).cast();
        let twice = once.clone().cast();
        // Debug formatting compares NaN == NaN, which PartialEq does not.
        prop_assert_eq!(format!("{:?}", once), format!("{:?}", twice));
    }

    /// Reading a float never coerces text, even numeric-looking text.
    #[test]
    fn prop_text_is_never_read_as_number(raw in any::<String>()) {
        prop_assert_eq!(PrimitiveValue::Text(raw).as_f64(), None);
    }
}

// =============================================================================
// Provenance totality
// =============================================================================

proptest! {
    /// Provenance lookups answer for arbitrary indices, including
    /// wildly out-of-range ones, without ever panicking.
    #[test]
    fn prop_provenance_lookup_is_total(row in any::<usize>(), col in any::<usize>()) {
        let mut table = HardTable::new();
        table.add(TableEntry::new().with_value("a", 1).with_value("b", 2));
        let snapshot = table.materialize();

        let lookup = snapshot.provenance_at(row, col);
        if row < 1 && col < 2 {
            prop_assert!(lookup.is_some());
        } else {
            prop_assert!(lookup.is_none());
        }
    }
}

// =============================================================================
// Serialization shape
// =============================================================================

proptest! {
    /// Writing and re-parsing with the same delimiter recovers the same
    /// column and row counts.
    #[test]
    fn prop_round_trip_preserves_shape((columns, rows) in grid()) {
        let mut table = HardTable::with_ordering((0..columns).map(|i| format!("c{i}")));
        for row in &rows {
            let mut entry = TableEntry::new();
            for (i, cell) in row.iter().enumerate() {
                entry.set(format!("c{i}"), cell.as_str());
            }
            table.add(entry);
        }

        let text = table.materialize().to_delimited_text(b';', "NA").unwrap();
        let parsed = HardTable::from_delimited_text(&text, b';').unwrap();

        prop_assert_eq!(parsed.row_count(), table.row_count());
        prop_assert_eq!(parsed.column_names().len(), table.column_names().len());
    }
}

// =============================================================================
// Transformation purity
// =============================================================================

proptest! {
    /// Applying a filter twice produces equal outputs and leaves the
    /// input untouched.
    #[test]
    fn prop_transformations_do_not_mutate_input(
        values in proptest::collection::vec(-100i64..100, 0..20),
        threshold in -100i64..100,
    ) {
        let mut table = HardTable::new();
        for value in &values {
            table.add(TableEntry::new().with_value("v", *value));
        }
        let input = table.materialize();
        let before = input.clone();

        let limit = threshold as f64;
        let filter = FilterRows::new(move |e: &TableEntry| {
            e.get("v")
                .and_then(PrimitiveValue::as_f64)
                .is_some_and(|v| v >= limit)
        });

        let first = filter.transform(&input);
        let second = filter.transform(&input);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&input, &before);
        prop_assert!(first.row_count() <= input.row_count());
    }
}
