//! Rate limiting with dropped (not queued) calls.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use crate::schedule::{Scheduler, Task};

enum Gate<R> {
    Open(Option<R>),
    Blocked(R),
}

impl<R> Gate<R> {
    fn reopen(&mut self) {
        *self = match std::mem::replace(self, Self::Open(None)) {
            Self::Blocked(last) => Self::Open(Some(last)),
            open @ Self::Open(_) => open,
        };
    }
}

/// Wraps a function so that it runs at most once per `wait` window.
///
/// - The first call runs the function immediately, caches the result and
///   blocks the wrapper.
/// - Calls made while blocked do not run the function. They are dropped
///   and return the cached result.
/// - `wait` after the call that blocked it, the scheduler reopens the
///   wrapper and the next call runs the function again.
///
/// The wrapper can be shared between threads. The function and the gate
/// sit behind separate mutexes, and only the function's is held while it
/// runs: the function may drive the scheduler or query [`is_blocked`] and
/// [`last`] on this wrapper, and concurrent callers wait for its result.
/// Calling [`call`] on the same wrapper from inside the function deadlocks.
///
/// [`is_blocked`]: Self::is_blocked
/// [`last`]: Self::last
/// [`call`]: Self::call
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::decorator::throttle;
/// use underbar::schedule::ManualScheduler;
///
/// let clock = ManualScheduler::new();
/// let mut hits = 0;
/// let tick = throttle(
///     move |(): ()| {
///         hits += 1;
///         hits
///     },
///     Duration::from_millis(100),
///     clock.clone(),
/// );
///
/// assert_eq!(tick.call(()), 1);
/// assert_eq!(tick.call(()), 1);
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(tick.call(()), 2);
/// ```
pub struct Throttle<A, R, F, S> {
    function: Mutex<F>,
    gate: Arc<Mutex<Gate<R>>>,
    wait: Duration,
    scheduler: S,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F, S> Throttle<A, R, F, S>
where
    R: Clone + Send + 'static,
    F: FnMut(A) -> R + Send + 'static,
    S: Scheduler,
{
    /// Wraps `function`, using `scheduler` to reopen the gate after `wait`.
    pub fn new(function: F, wait: Duration, scheduler: S) -> Self {
        Self {
            function: Mutex::new(function),
            gate: Arc::new(Mutex::new(Gate::Open(None))),
            wait,
            scheduler,
            _arguments: PhantomData,
        }
    }

    /// Runs the function unless the wrapper is blocked, and returns the
    /// most recent result.
    pub fn call(&self, arguments: A) -> R {
        let mut function = self.function.lock();
        if let Gate::Blocked(last) = &*self.gate.lock() {
            tracing::trace!("throttled call dropped");
            return last.clone();
        }
        let result = (*function)(arguments);
        *self.gate.lock() = Gate::Blocked(result.clone());
        drop(function);
        self.schedule_reopen();
        result
    }

    fn schedule_reopen(&self) {
        let gate: Weak<Mutex<Gate<R>>> = Arc::downgrade(&self.gate);
        let reopen: Task = Box::new(move || {
            if let Some(gate) = gate.upgrade() {
                gate.lock().reopen();
            }
        });
        if let Err(error) = self.scheduler.schedule(self.wait, reopen) {
            tracing::warn!(%error, "failed to schedule throttle reopen, reopening now");
            self.gate.lock().reopen();
        }
    }
}

impl<A, R, F, S> Throttle<A, R, F, S> {
    /// Returns `true` while calls are being dropped.
    pub fn is_blocked(&self) -> bool {
        matches!(*self.gate.lock(), Gate::Blocked(_))
    }

    /// The most recent result, if the function has run.
    pub fn last(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.gate.lock() {
            Gate::Open(last) => last.clone(),
            Gate::Blocked(last) => Some(last.clone()),
        }
    }

    /// The window length.
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A, R, F, S: fmt::Debug> fmt::Debug for Throttle<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocked = self
            .gate
            .try_lock()
            .map(|gate| matches!(*gate, Gate::Blocked(_)));
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("blocked", &blocked)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` in a [`Throttle`].
pub fn throttle<A, R, F, S>(function: F, wait: Duration, scheduler: S) -> Throttle<A, R, F, S>
where
    R: Clone + Send + 'static,
    F: FnMut(A) -> R + Send + 'static,
    S: Scheduler,
{
    Throttle::new(function, wait, scheduler)
}
