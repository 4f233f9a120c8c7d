use std::time::Duration;

use tokio::runtime::Handle;

use super::{ScheduleError, Scheduler, Task};

/// Runs tasks on a Tokio runtime after a `tokio::time::sleep`.
///
/// The runtime handle is captured at construction, so the scheduler can be
/// used from synchronous code running outside the runtime's threads.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::schedule::{Scheduler, TokioScheduler};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let scheduler = TokioScheduler::current().unwrap();
///     let (sender, receiver) = tokio::sync::oneshot::channel();
///     scheduler
///         .schedule(Duration::from_millis(1), Box::new(move || {
///             let _ = sender.send("done");
///         }))
///         .unwrap();
///     assert_eq!(receiver.await.unwrap(), "done");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Captures the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NoRuntime`] when called outside a Tokio
    /// runtime.
    pub fn current() -> Result<Self, ScheduleError> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| ScheduleError::NoRuntime)
    }

    /// Uses an explicit runtime handle.
    #[inline]
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        tracing::debug!(?delay, "scheduling task on tokio runtime");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Ok(())
    }
}
