//! Argument-keyed result caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use super::key;

/// Wraps a function and caches its results by argument list.
///
/// Arguments are keyed by a structural JSON encoding: tuples encode as
/// arrays, which keeps `(1, 2)` apart from `(2, 1)`, and a sequence `[1, 2]`
/// apart from the string `"1,2"`. Values plain JSON would merge get tagged
/// keys, so `NaN`, the infinities, [`Value::Null`] and [`Value::Undefined`]
/// never share a key. Mappings that differ only in entry order do share
/// one. The cache is unbounded and lives as long as the wrapper.
///
/// The cache is not borrowed while the function runs, so the function may
/// call other memoized wrappers or inspect this one.
///
/// [`Value::Undefined`]: crate::value::Value::Undefined
/// [`Value::Null`]: crate::value::Value::Null
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::memoize;
///
/// let calls = Cell::new(0);
/// let area = memoize(|(width, height): (u32, u32)| {
///     calls.set(calls.get() + 1);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(calls.get(), 1);
/// assert_eq!(area.call((4, 3)), 12);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoize<A, R, F> {
    function: F,
    cache: RefCell<HashMap<String, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    #[must_use]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::new()),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for `arguments`, calling the function on a
    /// miss.
    ///
    /// Arguments that fail to encode (for example an `i128`, or a type
    /// whose `Serialize` impl errors) bypass the cache and always call the
    /// function.
    pub fn call(&self, arguments: A) -> R {
        let key = match key::encode(&arguments) {
            Ok(key) => key,
            Err(error) => {
                tracing::warn!(%error, "memoize key encoding failed, bypassing cache");
                return (self.function)(arguments);
            }
        };
        let cached = self.cache.borrow().get(&key).cloned();
        if let Some(result) = cached {
            tracing::trace!(%key, "memoize cache hit");
            return result;
        }
        tracing::trace!(%key, "memoize cache miss");
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns `true` if a result is cached for `arguments`.
    pub fn contains(&self, arguments: &A) -> bool {
        key::encode(arguments).is_ok_and(|key| self.cache.borrow().contains_key(&key))
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.try_borrow().map(|cache| cache.len()).ok())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`Memoize`].
#[must_use]
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoize::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[rstest]
    fn sequence_and_joined_string_do_not_collide() {
        let calls = Cell::new(0);
        let describe = memoize(|argument: Value| {
            calls.set(calls.get() + 1);
            argument.coerce_to_string()
        });
        describe.call(Value::Sequence(crate::values![1, 2]));
        describe.call(Value::from("1,2"));
        assert_eq!(calls.get(), 2);
        assert_eq!(describe.len(), 2);
    }

    #[rstest]
    fn contains_reports_cached_arguments() {
        let square = memoize(|value: i64| value * value);
        assert!(square.is_empty());
        square.call(7);
        assert!(square.contains(&7));
        assert!(!square.contains(&8));
    }

    #[rstest]
    fn unencodable_arguments_bypass_the_cache() {
        let calls = Cell::new(0);
        let halve = memoize(|value: i128| {
            calls.set(calls.get() + 1);
            value / 2
        });
        assert_eq!(halve.call(10), 5);
        assert_eq!(halve.call(10), 5);
        assert_eq!(calls.get(), 2);
        assert!(halve.is_empty());
        assert!(!halve.contains(&10));
    }

    #[rstest]
    fn maps_with_compound_keys_are_cached() {
        let calls = Cell::new(0);
        let count = memoize(|keys: BTreeMap<(u8, u8), u8>| {
            calls.set(calls.get() + 1);
            keys.len()
        });
        let arguments = BTreeMap::from([((1, 2), 3)]);
        assert_eq!(count.call(arguments.clone()), 1);
        assert_eq!(count.call(arguments), 1);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn null_and_undefined_are_cached_separately() {
        let check = memoize(|argument: Value| argument.is_undefined());
        assert!(!check.call(Value::Null));
        assert!(check.call(Value::Undefined));
        assert_eq!(check.len(), 2);
    }

    #[rstest]
    fn function_may_inspect_other_wrappers_while_running() {
        let inner = memoize(|value: u32| value + 1);
        let outer = memoize(|value: u32| inner.call(value) * 2);
        assert_eq!(outer.call(1), 4);
        assert_eq!(outer.call(1), 4);
        assert_eq!(inner.len(), 1);
    }
}
