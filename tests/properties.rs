//! Property checks for erased ranges over arbitrary vectors.

use anyiter::{slice_iterable, to_iterable};
use proptest::prelude::*;

proptest! {
    /// Iterating the erased range yields the container's elements in order.
    #[test]
    fn preserves_order(data in prop::collection::vec(any::<i64>(), 0..64)) {
        let seen: Vec<i64> = to_iterable(&data).into_iter().copied().collect();
        prop_assert_eq!(seen, data.clone());
        let seen: Vec<i64> = slice_iterable(&data).into_iter().copied().collect();
        prop_assert_eq!(seen, data);
    }

    /// Advancing begin once per element lands exactly on end.
    #[test]
    fn begin_reaches_end(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let range = to_iterable(&data);
        let end = range.end();
        let mut it = range.begin();
        for _ in 0..data.len() {
            prop_assert!(it != end);
            it.advance();
        }
        prop_assert!(it == end);
    }

    /// Advancing a copy never moves the original.
    #[test]
    fn clones_are_independent(
        data in prop::collection::vec(any::<u32>(), 1..32),
        steps in 0usize..32
    ) {
        let range = to_iterable(&data);
        let original = range.begin();
        let mut copy = original.clone();
        for _ in 0..steps.min(data.len()) {
            copy.advance();
        }
        prop_assert_eq!(*original, data[0]);
        prop_assert_eq!(original.position().unwrap().index(), 0);
        prop_assert_eq!(copy.position().unwrap().index(), steps.min(data.len()));
    }
}
