#![cfg(feature = "collection")]
//! Property-based tests for the iteration core.
//!
//! - **Map**: preserves length and order
//! - **Partition**: `filter` and `reject` split a sequence for boolean predicates
//! - **Reduce/Fold**: a seeded `reduce` is a `fold`; an unseeded one seeds
//!   with the first element
//! - **Duality**: `some(p)` is `!every(!p)`

use proptest::prelude::*;
use underbar::collection::{contains, every, filter, fold, index_of, map, reduce, reject, some};

// =============================================================================
// Map Law
// =============================================================================

proptest! {
    /// map agrees with Iterator::map
    #[test]
    fn prop_map_matches_iterator(sequence in prop::collection::vec(any::<i32>(), 0..50)) {
        let mapped = map(&sequence, |number| i64::from(*number) * 3);
        let expected: Vec<i64> = sequence.iter().map(|number| i64::from(*number) * 3).collect();
        prop_assert_eq!(mapped, expected);
    }
}

// =============================================================================
// Partition Law
// =============================================================================

proptest! {
    /// filter and reject keep complementary elements in original order
    #[test]
    fn prop_filter_reject_partition(sequence in prop::collection::vec(any::<u8>(), 0..50), divisor in 1_u8..8) {
        let kept = filter(&sequence, |number| number % divisor == 0);
        let removed = reject(&sequence, |number| number % divisor == 0);
        prop_assert_eq!(kept.len() + removed.len(), sequence.len());
        prop_assert!(kept.iter().all(|number| number % divisor == 0));
        prop_assert!(removed.iter().all(|number| number % divisor != 0));
    }
}

// =============================================================================
// Reduce/Fold Law
// =============================================================================

proptest! {
    /// A seeded reduce equals a fold from the same seed
    #[test]
    fn prop_seeded_reduce_is_fold(sequence in prop::collection::vec(any::<i32>(), 0..50), seed in any::<i32>()) {
        let step = |accumulator: i32, element: &i32| accumulator.wrapping_add(*element);
        prop_assert_eq!(reduce(&sequence, step, Some(seed)), Some(fold(&sequence, seed, step)));
    }
}

proptest! {
    /// An unseeded reduce seeds with the first element and folds the rest
    #[test]
    fn prop_unseeded_reduce_uses_first_element(sequence in prop::collection::vec(any::<i32>(), 1..50)) {
        let step = |accumulator: i32, element: &i32| accumulator.wrapping_sub(*element);
        let expected = fold(&sequence[1..], sequence[0], step);
        prop_assert_eq!(reduce(&sequence, step, None), Some(expected));
    }
}

// =============================================================================
// Duality Law
// =============================================================================

proptest! {
    /// some(p) == !every(!p)
    #[test]
    fn prop_some_every_duality(sequence in prop::collection::vec(any::<i16>(), 0..30), threshold in any::<i16>()) {
        let any_above = some(&sequence, |number| *number > threshold);
        let none_above = every(&sequence, |number| *number <= threshold);
        prop_assert_eq!(any_above, !none_above);
    }
}

proptest! {
    /// contains agrees with index_of
    #[test]
    fn prop_contains_matches_index_of(sequence in prop::collection::vec(0_u8..10, 0..30), target in 0_u8..10) {
        prop_assert_eq!(contains(&sequence, &target), index_of(&sequence, &target).is_some());
    }
}
