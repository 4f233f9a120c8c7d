use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{ScheduleError, Scheduler, Task};

/// A scheduler driven by a virtual clock.
///
/// Time only moves when [`advance`](Self::advance) is called, which makes
/// timer-based behavior deterministic. Clones share the same clock and
/// queue, so a clone can be handed to a decorator while the original is
/// kept to drive time.
///
/// Tasks run on the thread calling `advance`, outside the internal lock, so
/// a task may schedule further tasks. Those run in the same `advance` when
/// they fall due before its end.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::schedule::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// scheduler.schedule(Duration::from_secs(1), Box::new(|| {})).unwrap();
/// assert_eq!(scheduler.pending(), 1);
/// assert_eq!(scheduler.advance(Duration::from_secs(1)), 1);
/// assert_eq!(scheduler.now(), Duration::from_secs(1));
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Arc<Mutex<Timeline>>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    sequence: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

struct Entry {
    due: Duration,
    sequence: u64,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.lock().now
    }

    /// Number of tasks that have not run yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timeline.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks run in deadline order, and in scheduling order for equal
    /// deadlines. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.timeline.lock().now.saturating_add(by);
        let mut ran = 0;
        while let Some(task) = self.next_due(target) {
            task();
            ran += 1;
        }
        self.timeline.lock().now = target;
        ran
    }

    fn next_due(&self, target: Duration) -> Option<Task> {
        let mut timeline = self.timeline.lock();
        let due = timeline.queue.peek().map(|Reverse(entry)| entry.due)?;
        if due > target {
            return None;
        }
        let Reverse(entry) = timeline.queue.pop()?;
        timeline.now = timeline.now.max(entry.due);
        Some(entry.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<(), ScheduleError> {
        let mut timeline = self.timeline.lock();
        let due = timeline.now.saturating_add(delay);
        let sequence = timeline.sequence;
        timeline.sequence += 1;
        tracing::debug!(?delay, ?due, "scheduling task on virtual clock");
        timeline.queue.push(Reverse(Entry {
            due,
            sequence,
            task,
        }));
        Ok(())
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.timeline.lock();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &timeline.now)
            .field("pending", &timeline.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let shared = Arc::clone(&shared);
            Box::new(move || shared.lock().push(label))
        };
        (log, make)
    }

    #[rstest]
    fn tasks_run_in_deadline_then_scheduling_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(30), task("late")).unwrap();
        scheduler.schedule(Duration::from_millis(10), task("first")).unwrap();
        scheduler.schedule(Duration::from_millis(10), task("second")).unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(100)), 3);
        assert_eq!(*log.lock(), vec!["first", "second", "late"]);
    }

    #[rstest]
    fn tasks_are_not_run_early() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(10), task("tick")).unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(9)), 0);
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[rstest]
    fn tasks_scheduled_while_advancing_run_when_due() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let inner = scheduler.clone();
        let follow_up = task("follow-up");
        let outer = task("outer");
        scheduler
            .schedule(
                Duration::from_millis(5),
                Box::new(move || {
                    outer();
                    inner.schedule(Duration::from_millis(5), follow_up).unwrap();
                }),
            )
            .unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(10)), 2);
        assert_eq!(*log.lock(), vec!["outer", "follow-up"]);
        assert_eq!(scheduler.now(), Duration::from_millis(10));
    }

    #[rstest]
    fn delays_are_relative_to_the_virtual_clock() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_secs(5));
        scheduler.schedule(Duration::from_secs(1), Box::new(|| {})).unwrap();
        assert_eq!(scheduler.advance(Duration::from_millis(999)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    }
}
