//! The iteration core: `each`, `map`, `filter`, `fold` and `reduce`.
//!
//! Every other traversal in the crate is built on these functions.

use super::{Collection, Truth};

/// Calls `iterator(element, key, collection)` for every entry.
///
/// Sequences are visited in ascending index order; mappings in their own
/// enumeration order. The iterator is called exactly once per entry and
/// its return value is ignored.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut visited = Vec::new();
/// each(&["a", "b", "c"], |letter, index, _| visited.push((index, *letter)));
/// assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c")]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    for (key, element) in collection.entries() {
        iterator(element, key, collection);
    }
}

/// Returns a new sequence holding `iterator(element)` for every entry, in
/// visiting order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |number| number * number), vec![1, 4, 9]);
/// ```
pub fn map<C, U, F>(collection: &C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(collection.size());
    each(collection, |element, _, _| mapped.push(iterator(element)));
    mapped
}

/// Returns the elements, in order, for which `predicate` returned exactly
/// `true`.
///
/// A predicate that returns a truthy value other than boolean `true` (for
/// example `Value::Number(1.0)`) does not select the element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
/// use underbar::value::Value;
///
/// let evens = filter(&[1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
///
/// let none = filter(&[1, 2], |_| Value::Number(1.0));
/// assert!(none.is_empty());
/// ```
pub fn filter<C, R, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    R: Truth,
    P: FnMut(&C::Item) -> R,
{
    let mut selected = Vec::new();
    each(collection, |element, _, _| {
        if predicate(element).is_true() {
            selected.push(element.clone());
        }
    });
    selected
}

/// Folds the entries from left to right, starting from `seed`.
///
/// The iterator is called once per entry, starting with the first.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::fold;
///
/// let joined = fold(&["a", "b"], String::new(), |mut text, letter| {
///     text.push_str(letter);
///     text
/// });
/// assert_eq!(joined, "ab");
/// ```
pub fn fold<C, A, F>(collection: &C, seed: A, mut iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection
        .entries()
        .fold(seed, |accumulator, (_, element)| iterator(accumulator, element))
}

/// Folds the entries from left to right with an optional seed.
///
/// - With `Some(seed)`, the iterator is called once per entry starting
///   with the first, exactly like [`fold`].
/// - With `None`, the first element becomes the accumulator and the
///   iterator is first called with the second element. A single-element
///   collection is returned as-is without calling the iterator, and an
///   empty collection yields `None`.
///
/// An explicit seed is never mistaken for an omitted one: `Some(0)` is a
/// seed of zero.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number, Some(0)), Some(6));
/// assert_eq!(reduce(&[5], |total, number| total + number * number, None), Some(5));
/// assert_eq!(reduce(&[] as &[i32], |total, number| total + number, None), None);
/// ```
pub fn reduce<C, F>(collection: &C, mut iterator: F, seed: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    match seed {
        Some(seed) => Some(fold(collection, seed, iterator)),
        None => {
            let mut entries = collection.entries();
            let (_, first) = entries.next()?;
            Some(entries.fold(first.clone(), |accumulator, (_, element)| {
                iterator(accumulator, element)
            }))
        }
    }
}
