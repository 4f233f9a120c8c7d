//! Membership-based set operations over sequences.
//!
//! These functions treat sequences as sets while keeping first-occurrence
//! order. They differ in how they decide that two values are the same:
//!
//! - [`uniq`] uses coerced identity, so `1` and `"1"` are duplicates.
//! - [`intersection`] and [`difference`] use typed identity, so `1` and
//!   `"1"` are different values.
//!
//! See [`Coercible`] for both notions.
//!
//! # Examples
//!
//! ```rust
//! use underbar::set::{difference, intersection, uniq};
//! use underbar::values;
//!
//! assert_eq!(uniq(&values![1, "1", 1]), values![1]);
//! assert_eq!(intersection(&[values![1, "1"], values![1]]), values![1]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[vec![2], vec![4, 5]]), vec![1, 3]);
//! ```

use std::collections::{HashMap, HashSet};

use crate::collection::filter;
use crate::value::{Coercible, TypedKey};

/// Returns the sequence without later duplicates.
///
/// Duplicates are detected by primitive string form, which is weaker than
/// equality: `1`, `1.0` and `"1"` all collapse to whichever came first.
///
/// # Examples
///
/// ```rust
/// use underbar::set::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Coercible + Clone,
{
    let mut seen = HashSet::new();
    filter(sequence, |element| seen.insert(element.coerce_to_string()))
}

/// Returns the values present in every input sequence.
///
/// Each sequence is de-duplicated by typed identity before counting, so a
/// value repeated within one sequence still counts once for it. A value is
/// emitted, at most once, at the point in the concatenated inputs where it
/// has been seen in every sequence. No inputs yield an empty result.
///
/// # Examples
///
/// ```rust
/// use underbar::set::intersection;
///
/// let shared = intersection(&[vec!["a", "b", "c"], vec!["b", "c", "d"], vec!["c", "b"]]);
/// assert_eq!(shared, vec!["c", "b"]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Coercible + Clone,
    S: AsRef<[T]>,
{
    let required = sequences.len();
    let mut counts: HashMap<TypedKey, usize> = HashMap::new();
    let mut shared = Vec::new();
    for sequence in sequences {
        for element in distinct(sequence.as_ref()) {
            let count = counts.entry(element.typed_key()).or_default();
            *count += 1;
            if *count == required {
                shared.push(element.clone());
            }
        }
    }
    shared
}

/// Returns the values of `first` that appear in none of `others`.
///
/// Values are compared by typed identity and each is returned at most
/// once, in first-occurrence order.
///
/// # Examples
///
/// ```rust
/// use underbar::set::difference;
/// use underbar::values;
///
/// let remaining = difference(&values![1, "1", 2, 1], &[values!["2"]]);
/// assert_eq!(remaining, values![1, "1", 2]);
/// ```
pub fn difference<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: Coercible + Clone,
    S: AsRef<[T]>,
{
    let excluded: HashSet<TypedKey> = others
        .iter()
        .flat_map(|sequence| sequence.as_ref().iter().map(Coercible::typed_key))
        .collect();
    distinct(first)
        .into_iter()
        .filter(|element| !excluded.contains(&element.typed_key()))
        .cloned()
        .collect()
}

fn distinct<T: Coercible>(sequence: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    sequence
        .iter()
        .filter(|element| seen.insert(element.typed_key()))
        .collect()
}
