//! Stable sort by a derived key.
//!
//! Elements are decorated with their original index before sorting and the
//! index is the final tie-break, so the result never depends on the
//! stability of the underlying algorithm. Keys fall into three ranks:
//!
//! 1. Keys that compare with themselves, in ascending key order.
//! 2. Keys that do not (such as `NaN`), in original order.
//! 3. Missing keys (`None`), in original order.
//!
//! Comparators over loosely typed keys are not guaranteed to be a total
//! order, so the decorated elements are ordered with a merge sort that
//! tolerates inconsistent comparisons instead of `slice::sort_by`.

use std::cmp::Ordering;

use crate::collection::{Collection, each};
use crate::value::Value;

/// Returns the elements sorted ascending by `derive(element)`.
///
/// `None` marks a missing key; those elements sort after every element
/// with a key and keep their original relative order. Elements with equal
/// keys also keep their original relative order.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::sort_by;
///
/// let scores = vec![("bo", Some(3)), ("al", None), ("cy", Some(1)), ("di", Some(3))];
/// let sorted = sort_by(&scores, |(_, score)| *score);
/// assert_eq!(
///     sorted,
///     vec![("cy", Some(1)), ("bo", Some(3)), ("di", Some(3)), ("al", None)]
/// );
/// ```
pub fn sort_by<C, K, D>(collection: &C, derive: D) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    D: FnMut(&C::Item) -> Option<K>,
{
    stable_sort(collection, derive, K::partial_cmp)
}

/// Returns the elements sorted ascending by their `name` field.
///
/// Field values are compared with [`Value::loose_cmp`]. Elements whose
/// field is missing or [`Value::Undefined`] sort last in original order.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::sort_by_field;
/// use underbar::value::Value;
///
/// let people = vec![
///     Value::mapping([("name", Value::from("moe")), ("age", Value::from(40))]),
///     Value::mapping([("name", "curly")]),
///     Value::mapping([("name", Value::from("larry")), ("age", Value::from(9))]),
/// ];
/// let names: Vec<String> = sort_by_field(&people, "age")
///     .iter()
///     .map(|person| person.field("name").to_string())
///     .collect();
/// assert_eq!(names, vec!["larry", "moe", "curly"]);
/// ```
pub fn sort_by_field<C>(collection: &C, name: &str) -> Vec<Value>
where
    C: Collection<Item = Value> + ?Sized,
{
    stable_sort(
        collection,
        |element: &Value| match element.field(name) {
            Value::Undefined => None,
            key => Some(key.clone()),
        },
        Value::loose_cmp,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Comparable,
    Incomparable,
    Missing,
}

struct Decorated<'a, T, K> {
    rank: Rank,
    key: Option<K>,
    index: usize,
    element: &'a T,
}

fn stable_sort<C, K, D, O>(collection: &C, mut derive: D, compare: O) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    D: FnMut(&C::Item) -> Option<K>,
    O: Fn(&K, &K) -> Option<Ordering>,
{
    let mut decorated = Vec::with_capacity(collection.size());
    each(collection, |element, _, _| {
        let key = derive(element);
        let rank = match &key {
            None => Rank::Missing,
            Some(key) if compare(key, key).is_some() => Rank::Comparable,
            Some(_) => Rank::Incomparable,
        };
        let index = decorated.len();
        decorated.push(Decorated {
            rank,
            key,
            index,
            element,
        });
    });
    merge_sort(decorated, &compare)
        .into_iter()
        .map(|entry| entry.element.clone())
        .collect()
}

fn order<T, K, O>(left: &Decorated<'_, T, K>, right: &Decorated<'_, T, K>, compare: &O) -> Ordering
where
    O: Fn(&K, &K) -> Option<Ordering>,
{
    let both_comparable = left.rank == Rank::Comparable && right.rank == Rank::Comparable;
    let by_key = match (&left.key, &right.key) {
        (Some(left_key), Some(right_key)) if both_comparable => {
            compare(left_key, right_key).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    };
    left.rank
        .cmp(&right.rank)
        .then(by_key)
        .then(left.index.cmp(&right.index))
}

fn merge_sort<'a, T, K, O>(mut items: Vec<Decorated<'a, T, K>>, compare: &O) -> Vec<Decorated<'a, T, K>>
where
    O: Fn(&K, &K) -> Option<Ordering>,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(left_item), Some(right_item)) => {
                order(left_item, right_item, compare) != Ordering::Greater
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn incomparable_keys_sort_between_defined_and_missing() {
        let keys = vec![Some(f64::NAN), None, Some(2.0), Some(1.0)];
        let sorted = sort_by(&keys, |key| *key);
        assert_eq!(sorted[0], Some(1.0));
        assert_eq!(sorted[1], Some(2.0));
        assert!(sorted[2].is_some_and(f64::is_nan));
        assert_eq!(sorted[3], None);
    }

    #[rstest]
    fn equal_keys_keep_original_order() {
        let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = sort_by(&pairs, |pair| Some(pair.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[rstest]
    fn sort_by_over_mapping_sorts_values() {
        let record = Value::mapping([("a", 3), ("b", 1), ("c", 2)]);
        let sorted = sort_by(&record, |value| Some(value.to_number()));
        assert_eq!(sorted, crate::values![1, 2, 3]);
    }

    #[rstest]
    fn sort_by_field_mixes_numeric_strings_and_numbers() {
        let rows = vec![
            Value::mapping([("k", Value::from("10"))]),
            Value::mapping([("k", Value::from(9))]),
        ];
        let sorted = sort_by_field(&rows, "k");
        assert_eq!(sorted[0].field("k"), &Value::from(9));
    }
}
