#![cfg(feature = "collection")]
//! Integration tests for the iteration core and its derivatives.
//!
//! Tests cover:
//! - Visiting order and arity of `each`
//! - `map` over sequences, maps and dynamic values
//! - Strict `filter` versus truthy `reject`/`every`/`some`
//! - Seeded and unseeded `reduce`
//! - `contains`, `index_of` and `pluck`

use std::collections::{BTreeMap, HashMap, VecDeque};

use rstest::rstest;
use underbar::collection::{
    Collection, ValueKey, contains, each, every, filter, fold, index_of, map, pluck, reduce,
    reject, some,
};
use underbar::value::Value;
use underbar::values;

// =============================================================================
// each
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(64)]
fn each_visits_every_index_in_ascending_order(#[case] length: usize) {
    let sequence: Vec<usize> = (0..length).map(|index| index * 10).collect();
    let mut probe = Vec::new();
    each(&sequence, |element, index, _| probe.push((index, *element)));

    let expected: Vec<(usize, usize)> = (0..length).map(|index| (index, index * 10)).collect();
    assert_eq!(probe, expected);
}

#[rstest]
fn each_over_deque_uses_positions() {
    let mut queue = VecDeque::from([2, 3]);
    queue.push_front(1);
    let mut probe = Vec::new();
    each(&queue, |element, index, _| probe.push((index, *element)));
    assert_eq!(probe, vec![(0, 1), (1, 2), (2, 3)]);
}

#[rstest]
fn each_over_mapping_value_passes_names() {
    let record = Value::mapping([("first", 1), ("second", 2)]);
    let mut names = Vec::new();
    each(&record, |_, key, _| {
        if let ValueKey::Name(name) = key {
            names.push(name.to_owned());
        }
    });
    assert_eq!(names, vec!["first", "second"]);
}

#[rstest]
fn each_over_scalar_value_visits_nothing() {
    let mut visits = 0;
    each(&Value::from(42), |_, _, _| visits += 1);
    assert_eq!(visits, 0);
    assert_eq!(Value::from("text").size(), 0);
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_preserves_order_and_length() {
    let words = vec!["a", "bb", "ccc"];
    assert_eq!(map(&words, |word| word.len()), vec![1, 2, 3]);
}

#[rstest]
fn map_over_hash_map_visits_every_value() {
    let prices = HashMap::from([("tea", 3), ("coffee", 4)]);
    let mut doubled = map(&prices, |price| price * 2);
    doubled.sort_unstable();
    assert_eq!(doubled, vec![6, 8]);
}

// =============================================================================
// filter / reject
// =============================================================================

#[rstest]
fn filter_excludes_truthy_non_boolean_results() {
    let kept = filter(&values![1, 2, 3], |_| Value::Number(1.0));
    assert!(kept.is_empty());
}

#[rstest]
fn filter_includes_boolean_true_values() {
    let kept = filter(&values![1, 2, 3], |value| Value::Bool(value.to_number() > 1.0));
    assert_eq!(kept, values![2, 3]);
}

#[rstest]
fn reject_removes_truthy_non_boolean_results() {
    let kept = reject(&values!["", "x", 0, 7], |value| value.clone());
    assert_eq!(kept, values!["", 0]);
}

#[rstest]
fn filter_and_reject_partition_boolean_predicates() {
    let numbers: Vec<i32> = (0..20).collect();
    let mut kept = filter(&numbers, |number| number % 3 == 0);
    let removed = reject(&numbers, |number| number % 3 == 0);
    assert_eq!(kept.len() + removed.len(), numbers.len());
    kept.extend(removed);
    kept.sort_unstable();
    assert_eq!(kept, numbers);
}

// =============================================================================
// reduce / fold
// =============================================================================

#[rstest]
fn reduce_single_element_without_seed_skips_iterator() {
    let mut calls = 0;
    let result = reduce(
        &["a".to_owned()],
        |accumulator, _| {
            calls += 1;
            accumulator
        },
        None,
    );
    assert_eq!(result.as_deref(), Some("a"));
    assert_eq!(calls, 0);
}

#[rstest]
fn reduce_with_seed_calls_iterator_once_per_element() {
    let mut calls = Vec::new();
    let result = reduce(
        &[2, 3],
        |accumulator, element| {
            calls.push((accumulator, *element));
            accumulator * 10 + element
        },
        Some(1),
    );
    assert_eq!(calls, vec![(1, 2), (12, 3)]);
    assert_eq!(result, Some(123));
}

#[rstest]
fn reduce_distinguishes_zero_seed_from_missing_seed() {
    let subtract = |accumulator: i32, element: &i32| accumulator - element;
    assert_eq!(reduce(&[5, 1], subtract, Some(0)), Some(-6));
    assert_eq!(reduce(&[5, 1], subtract, None), Some(4));
}

#[rstest]
fn reduce_of_empty_collection() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce(&empty, |a, b| a + b, None), None);
    assert_eq!(reduce(&empty, |a, b| a + b, Some(9)), Some(9));
}

#[rstest]
fn fold_accumulates_into_another_type() {
    let ages = BTreeMap::from([("al", 30), ("bo", 12)]);
    let adults = fold(&ages, Vec::new(), |mut adults, age| {
        if *age >= 18 {
            adults.push(*age);
        }
        adults
    });
    assert_eq!(adults, vec![30]);
}

// =============================================================================
// Derivatives
// =============================================================================

#[rstest]
#[case(values![], true, false)]
#[case(values![1, "a", true], true, true)]
#[case(values![1, 0, true], false, true)]
#[case(values![0, "", null_value()], false, false)]
fn every_and_some_use_truthiness(
    #[case] sequence: Vec<Value>,
    #[case] all: bool,
    #[case] any: bool,
) {
    assert_eq!(every(&sequence, |value| value.clone()), all);
    assert_eq!(some(&sequence, |value| value.clone()), any);
}

fn null_value() -> Value {
    Value::Null
}

#[rstest]
fn contains_and_index_of_agree() {
    let letters = ['x', 'y', 'z', 'y'];
    assert!(contains(&letters, &'y'));
    assert_eq!(index_of(&letters, &'y'), Some(1));
    assert!(!contains(&letters, &'w'));
    assert_eq!(index_of(&letters, &'w'), None);
}

#[rstest]
fn pluck_reads_fields_of_mapping_values() {
    let inventory = Value::mapping([
        ("apples", Value::mapping([("count", 3)])),
        ("pears", Value::mapping([("colour", "green")])),
    ]);
    assert_eq!(pluck(&inventory, "count"), vec![Value::from(3), Value::Undefined]);
}
