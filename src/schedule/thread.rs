use std::thread;
use std::time::Duration;

use super::{ScheduleError, Scheduler, Task};

/// Runs each task on its own named thread after sleeping for the delay.
///
/// Suitable for low-volume timers in synchronous programs. Each scheduled
/// task costs one OS thread for the duration of its delay.
///
/// # Examples
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underbar::schedule::{Scheduler, ThreadScheduler};
///
/// let (sender, receiver) = mpsc::channel();
/// ThreadScheduler::new()
///     .schedule(Duration::from_millis(5), Box::new(move || sender.send(7).unwrap()))
///     .unwrap();
/// assert_eq!(receiver.recv().unwrap(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler {
    _private: (),
}

impl ThreadScheduler {
    /// Creates a thread scheduler.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        tracing::debug!(?delay, "scheduling task on timer thread");
        thread::Builder::new()
            .name("underbar-timer".to_owned())
            .spawn(move || {
                thread::sleep(delay);
                task();
            })?;
        Ok(())
    }
}
