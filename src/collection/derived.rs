//! Operations derived from the iteration core.

use super::{Collection, Truth, each, filter, fold, map};
use crate::value::Value;

/// Returns the elements, in order, for which `predicate` is falsy.
///
/// This is the complement of [`filter`] under truthiness, so a predicate
/// returning `Value::Number(0.0)` rejects nothing and one returning
/// `Value::from("yes")` rejects everything.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |number| number % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<C, R, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    R: Truth,
    P: FnMut(&C::Item) -> R,
{
    filter(collection, |element| !predicate(element).is_truthy())
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20], &30), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |element, index, _| {
        if found.is_none() && element == target {
            found = Some(index);
        }
    });
    found
}

/// Returns whether any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::contains;
///
/// let stock = HashMap::from([("apples", 3), ("pears", 0)]);
/// assert!(contains(&stock, &0));
/// assert!(!contains(&stock, &7));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |found, element| found || element == target)
}

/// Returns whether `predicate` is truthy for every element.
///
/// An empty collection passes. Evaluation stops at the first falsy result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4], |number| number % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
pub fn every<C, R, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    R: Truth,
    P: FnMut(&C::Item) -> R,
{
    collection
        .entries()
        .all(|(_, element)| predicate(element).is_truthy())
}

/// Returns whether `predicate` is truthy for at least one element.
///
/// An empty collection fails. Evaluation stops at the first truthy result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// let mixed = underbar::values![0, "", "ok"];
/// assert!(some(&mixed, |value| value.clone()));
/// assert!(!some(&[] as &[i32], |_| true));
/// ```
pub fn some<C, R, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    R: Truth,
    P: FnMut(&C::Item) -> R,
{
    !every(collection, |element| !predicate(element).is_truthy())
}

/// Returns the named field of every element.
///
/// Elements without the field contribute [`Value::Undefined`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use underbar::value::Value;
///
/// let people = vec![
///     Value::mapping([("name", "ada")]),
///     Value::mapping([("name", "grace")]),
/// ];
/// assert_eq!(pluck(&people, "name"), underbar::values!["ada", "grace"]);
/// ```
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Value>
where
    C: Collection<Item = Value> + ?Sized,
{
    map(collection, |element| element.field(name).clone())
}
