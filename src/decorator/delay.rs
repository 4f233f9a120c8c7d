use std::time::Duration;

use crate::schedule::{ScheduleError, Scheduler};

/// Schedules `function(arguments)` to run once, no earlier than `wait`
/// from now.
///
/// Returns as soon as the call is handed to `scheduler`; the result of
/// `function` is discarded. Multi-argument functions take a tuple. There is
/// no cancellation: once scheduled, the call will run.
///
/// # Errors
///
/// Returns [`ScheduleError`] if the scheduler cannot accept the task, in
/// which case `function` never runs.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use underbar::decorator::delay;
/// use underbar::schedule::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
/// delay(
///     &scheduler,
///     Duration::from_millis(100),
///     move |(word, count): (&str, usize)| sink.lock().unwrap().push(word.repeat(count)),
///     ("ha", 2),
/// )
/// .unwrap();
///
/// assert!(log.lock().unwrap().is_empty());
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(*log.lock().unwrap(), vec!["haha".to_owned()]);
/// ```
pub fn delay<S, A, R, F>(
    scheduler: &S,
    wait: Duration,
    function: F,
    arguments: A,
) -> Result<(), ScheduleError>
where
    S: Scheduler + ?Sized,
    A: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    tracing::debug!(?wait, "delaying invocation");
    scheduler.schedule(
        wait,
        Box::new(move || {
            let _ = function(arguments);
        }),
    )
}
