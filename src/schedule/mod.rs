//! Deferred execution for the timer-based decorators.
//!
//! [`delay`](crate::decorator::delay) and [`Throttle`](crate::decorator::Throttle)
//! never sleep on the caller's thread. They hand a [`Task`] to a
//! [`Scheduler`], which promises to run it at most once and no earlier
//! than the requested delay. There is no ordering guarantee between tasks
//! beyond that.
//!
//! - [`ThreadScheduler`]: a named OS thread per task
//! - [`ManualScheduler`]: a virtual clock advanced explicitly, for tests and
//!   simulations
//! - `TokioScheduler` (feature `async`): a task on a Tokio runtime
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//! use underbar::schedule::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&fired);
//! scheduler
//!     .schedule(Duration::from_millis(50), Box::new(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }))
//!     .unwrap();
//!
//! scheduler.advance(Duration::from_millis(49));
//! assert_eq!(fired.load(Ordering::SeqCst), 0);
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! ```

mod manual;
mod thread;
#[cfg(feature = "async")]
mod runtime;

use std::sync::Arc;
use std::time::Duration;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;
#[cfg(feature = "async")]
pub use runtime::TokioScheduler;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Errors raised when a task cannot be scheduled.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The operating system refused to start a timer thread.
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// No async runtime was available to host the timer.
    #[error("no async runtime is available to run the timer")]
    NoRuntime,
}

/// A deferred-execution facility.
///
/// Implementations must run `task` at most once and not before `delay` has
/// elapsed since the call to `schedule`. `schedule` itself must return
/// without waiting for the delay.
pub trait Scheduler {
    /// Registers `task` to run after `delay`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the facility cannot accept the task.
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError>;
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        (**self).schedule(delay, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        (**self).schedule(delay, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        (**self).schedule(delay, task)
    }
}
