//! A function that runs at most once.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

enum OnceState<R, F> {
    Pending(F),
    Called(R),
    Poisoned,
}

/// Wraps a function so that only its first invocation runs.
///
/// The first [`call`](Self::call) runs the function with its arguments and
/// caches the result. Every later call returns a clone of that result,
/// whatever arguments it is given. Multi-argument functions take a tuple.
///
/// This type is NOT thread-safe: state lives in a `RefCell`.
///
/// # Panics
///
/// If the wrapped function panics, the wrapper becomes poisoned and every
/// later call panics. A call made from inside the wrapped function also
/// panics, since the first call has not produced a result yet.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
///
/// let initialize = once(|seed: i32| seed * 10);
/// assert_eq!(initialize.call(4), 40);
/// assert_eq!(initialize.call(9), 40);
/// assert!(initialize.is_called());
/// ```
pub struct Once<A, R, F> {
    state: RefCell<OnceState<R, F>>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Wraps `function` without calling it.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }

    /// Runs the function on the first call; returns the cached result
    /// afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper is poisoned or called re-entrantly.
    pub fn call(&self, arguments: A) -> R {
        // The state is left poisoned while the function runs so that a
        // panic or a re-entrant call cannot observe a half-initialized
        // wrapper.
        let function = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Poisoned) {
                OnceState::Pending(function) => function,
                OnceState::Called(result) => {
                    let cached = result.clone();
                    *state = OnceState::Called(result);
                    return cached;
                }
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
            }
        };
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the function has completed.
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns `true` if the function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns the cached result without calling the function.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Called(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow().as_deref() {
            Ok(OnceState::Pending(_)) => formatter.write_str("Once(<pending>)"),
            Ok(OnceState::Called(result)) => formatter.debug_tuple("Once").field(result).finish(),
            Ok(OnceState::Poisoned) => formatter.write_str("Once(<poisoned>)"),
            Err(_) => formatter.write_str("Once(<running>)"),
        }
    }
}

/// Wraps `function` in a [`Once`].
#[inline]
pub const fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn result_is_empty_until_called() {
        let wrapper = once(|(): ()| "ready");
        assert_eq!(wrapper.result(), None);
        assert!(!wrapper.is_called());
        assert_eq!(wrapper.call(()), "ready");
        assert_eq!(wrapper.result(), Some("ready"));
    }

    #[rstest]
    fn moved_captures_are_consumed_once() {
        let owned = String::from("token");
        let wrapper = once(move |suffix: &str| owned + suffix);
        assert_eq!(wrapper.call("-a"), "token-a");
        assert_eq!(wrapper.call("-b"), "token-a");
    }

    #[rstest]
    fn panicking_function_poisons_the_wrapper() {
        let attempts = Cell::new(0);
        let wrapper = once(|(): ()| -> i32 {
            attempts.set(attempts.get() + 1);
            panic!("boom")
        });
        assert!(catch_unwind(AssertUnwindSafe(|| wrapper.call(()))).is_err());
        assert!(wrapper.is_poisoned());
        assert!(catch_unwind(AssertUnwindSafe(|| wrapper.call(()))).is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[rstest]
    fn debug_shows_state() {
        let wrapper = once(|value: u8| value);
        assert_eq!(format!("{wrapper:?}"), "Once(<pending>)");
        wrapper.call(3);
        assert_eq!(format!("{wrapper:?}"), "Once(3)");
    }
}
