//! Deferred-task scheduling.
//!
//! DESIGN
//! ======
//! Everything in this crate runs on one cooperative thread: a task deferred
//! here runs later on the same thread, never concurrently with its caller.
//! Tasks are plain `FnOnce` closures and need not be `Send`, which lets them
//! capture `Rc` handles and DOM nodes.
//!
//! There is no cancellation. Once deferred, a task runs.
//!
//! IMPLEMENTATIONS
//! ===============
//! - [`ManualScheduler`]: a virtual clock advanced explicitly. Used by tests
//!   and by headless callers that drive time themselves.
//! - [`TokioScheduler`] (`native`): sleeps on tokio timers inside a `LocalSet`.
//! - `web::BrowserScheduler` (`hydrate`): `setTimeout` via `gloo-timers`.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Single-threaded deferred execution.
pub trait Scheduler {
    /// Time elapsed on this scheduler's clock.
    fn now(&self) -> Duration;

    /// Run `task` once `delay` has elapsed.
    fn defer(&self, delay: Duration, task: Task);
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

#[derive(Default)]
struct Timeline {
    now: Duration,
    seq: u64,
    pending: BTreeMap<(Duration, u64), Task>,
}

/// Virtual-time scheduler. Time only moves through [`ManualScheduler::advance`].
///
/// Tasks due at the same instant run in the order they were deferred. A task
/// that defers another task whose due time falls inside the current
/// `advance` window sees it run within the same call.
#[derive(Default)]
pub struct ManualScheduler {
    timeline: RefCell<Timeline>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.timeline.borrow().now + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.timeline.borrow_mut().now = target;
    }

    /// Number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timeline.borrow().pending.len()
    }

    // The borrow is released before the task runs so tasks may defer more work.
    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut timeline = self.timeline.borrow_mut();
        let (&(due, _), _) = timeline.pending.first_key_value()?;
        if due > target {
            return None;
        }
        timeline.now = due;
        timeline.pending.pop_first().map(|(_, task)| task)
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    fn defer(&self, delay: Duration, task: Task) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + delay;
        let seq = timeline.seq;
        timeline.seq += 1;
        timeline.pending.insert((due, seq), task);
    }
}

// =============================================================================
// TOKIO SCHEDULER
// =============================================================================

/// Scheduler backed by tokio timers.
///
/// Tasks are spawned with `tokio::task::spawn_local`, so every call to
/// [`Scheduler::defer`] must happen inside a `tokio::task::LocalSet`.
#[cfg(feature = "native")]
pub struct TokioScheduler {
    origin: tokio::time::Instant,
}

#[cfg(feature = "native")]
impl Default for TokioScheduler {
    fn default() -> Self {
        Self { origin: tokio::time::Instant::now() }
    }
}

#[cfg(feature = "native")]
impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "native")]
impl Scheduler for TokioScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn defer(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
