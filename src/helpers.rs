//! Small pass-through and object helpers.
//!
//! - [`identity`]: the default iterator, returns its argument
//! - [`first`] / [`first_n`] and [`last`] / [`last_n`]: slice ends
//! - [`extend`] / [`defaults`]: merge keys into a [`Mapping`]

use crate::value::{Mapping, Value};

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use underbar::helpers::identity;
///
/// assert_eq!(identity(42), 42);
/// let names: Vec<&str> = vec!["a", "b"].into_iter().map(identity).collect();
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// The first element, or `None` for an empty slice.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The leading `count` elements, clamped to the slice length.
///
/// # Examples
///
/// ```
/// use underbar::helpers::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// The last element, or `None` for an empty slice.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The trailing `count` elements, clamped to the slice length.
///
/// # Examples
///
/// ```
/// use underbar::helpers::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), &[] as &[i32]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Copies every key of every source into `target`, in order.
///
/// Later sources overwrite earlier ones. Keys new to `target` are appended
/// after its existing keys.
///
/// # Examples
///
/// ```
/// use underbar::helpers::extend;
/// use underbar::value::{Mapping, Value};
///
/// let mut target = Mapping::new();
/// target.insert("name".to_owned(), Value::from("moe"));
/// let source = Value::mapping([("name", "larry"), ("role", "stooge")]);
/// extend(&mut target, [source.as_mapping().unwrap()]);
/// assert_eq!(target["name"], Value::from("larry"));
/// assert_eq!(target.len(), 2);
/// ```
pub fn extend<'a, I>(target: &mut Mapping, sources: I) -> &mut Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fills keys of `target` that are absent or [`Value::Undefined`].
///
/// The first source providing a key wins; keys already holding any other
/// value, including [`Value::Null`], are left alone.
///
/// # Examples
///
/// ```
/// use underbar::helpers::defaults;
/// use underbar::value::{Mapping, Value};
///
/// let mut options = Mapping::new();
/// options.insert("depth".to_owned(), Value::Null);
/// let fallback = Value::mapping([("depth", 3), ("width", 8)]);
/// defaults(&mut options, [fallback.as_mapping().unwrap()]);
/// assert_eq!(options["depth"], Value::Null);
/// assert_eq!(options["width"], Value::from(8));
/// ```
pub fn defaults<'a, I>(target: &mut Mapping, sources: I) -> &mut Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    for source in sources {
        for (key, value) in source {
            let slot = target.entry(key.clone()).or_insert(Value::Undefined);
            if slot.is_undefined() {
                *slot = value.clone();
            }
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], None, None)]
    #[case(&[7], Some(&7), Some(&7))]
    #[case(&[1, 2, 3], Some(&1), Some(&3))]
    fn ends_of_slices(
        #[case] sequence: &[i32],
        #[case] head: Option<&i32>,
        #[case] tail: Option<&i32>,
    ) {
        assert_eq!(first(sequence), head);
        assert_eq!(last(sequence), tail);
    }

    #[rstest]
    fn counted_ends_of_empty_slice() {
        let empty: &[u8] = &[];
        assert!(first_n(empty, 3).is_empty());
        assert!(last_n(empty, 3).is_empty());
    }

    #[rstest]
    fn extend_later_sources_win() {
        let mut target = Mapping::new();
        let first_source = Value::mapping([("a", 1), ("b", 1)]);
        let second_source = Value::mapping([("b", 2)]);
        let sources = [&first_source, &second_source]
            .into_iter()
            .filter_map(Value::as_mapping);
        extend(&mut target, sources);
        assert_eq!(Value::Mapping(target), Value::mapping([("a", 1), ("b", 2)]));
    }

    #[rstest]
    fn defaults_first_source_wins_and_fills_undefined() {
        let mut target = Mapping::new();
        target.insert("a".to_owned(), Value::Undefined);
        target.insert("b".to_owned(), Value::from(false));
        let first_source = Value::mapping([("a", 1), ("c", 1)]);
        let second_source = Value::mapping([("a", 2), ("b", 2), ("c", 2)]);
        let sources = [&first_source, &second_source]
            .into_iter()
            .filter_map(Value::as_mapping);
        defaults(&mut target, sources);
        assert_eq!(target["a"], Value::from(1));
        assert_eq!(target["b"], Value::from(false));
        assert_eq!(target["c"], Value::from(1));
    }
}
