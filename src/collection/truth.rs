//! Truth tests for iterator results.

use crate::value::Value;

/// Results that a predicate may return.
///
/// Two readings are offered because they are used by different
/// operations: [`filter`](super::filter) keeps an element only when the
/// predicate returned exactly `true`, while [`reject`](super::reject),
/// [`every`](super::every) and [`some`](super::some) accept any truthy
/// result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truth;
/// use underbar::value::Value;
///
/// assert!(Value::Bool(true).is_true());
/// assert!(!Value::Number(1.0).is_true());
/// assert!(Value::Number(1.0).is_truthy());
/// ```
pub trait Truth {
    /// Whether the result is exactly boolean `true`.
    fn is_true(&self) -> bool;

    /// Whether the result counts as true in a boolean context.
    fn is_truthy(&self) -> bool;
}

impl Truth for bool {
    #[inline]
    fn is_true(&self) -> bool {
        *self
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truth for Value {
    #[inline]
    fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    #[inline]
    fn is_truthy(&self) -> bool {
        Self::is_truthy(self)
    }
}

impl<T: Truth> Truth for Option<T> {
    fn is_true(&self) -> bool {
        self.as_ref().is_some_and(Truth::is_true)
    }

    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truth::is_truthy)
    }
}
