#![forbid(unsafe_code)]

//! Cancelable deferred tasks.
//!
//! A [`Scheduler`] is a small timer queue owned by a component. Scheduling
//! returns a [`TaskHandle`] the component keeps in its state; cancelling is
//! explicit and by handle, never by dropping a closure.
//!
//! # Invariants
//!
//! 1. [`Scheduler::drain_due`] yields tasks ordered by due time, ties broken
//!    by scheduling order.
//! 2. A cancelled or drained task never fires again.
//! 3. Tasks due strictly after `now` stay queued.
//!
//! # Failure Modes
//!
//! - Cancelling an unknown or already-fired handle returns `None`.

use std::collections::BTreeMap;
use web_time::{Duration, Instant};

/// Opaque, per-scheduler task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    id: TaskId,
    due: Instant,
}

impl TaskHandle {
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// When the task becomes due.
    #[must_use]
    pub const fn due(&self) -> Instant {
        self.due
    }
}

/// Timer queue of `T` payloads.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Instant, u64), T>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` at `due`.
    pub fn schedule_at(&mut self, due: Instant, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.insert((due, seq), task);
        TaskHandle {
            id: TaskId(seq),
            due,
        }
    }

    /// Schedule `task` at `now + delay`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        self.schedule_at(now + delay, task)
    }

    /// Cancel a pending task, returning its payload.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        self.queue.remove(&(handle.due, handle.id.0))
    }

    /// Whether `handle` is still queued.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.queue.contains_key(&(handle.due, handle.id.0))
    }

    /// Remove and return every task due at or before `now`, in due order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (at, seq) = *entry.key();
            if at > now {
                break;
            }
            let task = entry.remove();
            due.push((
                TaskHandle {
                    id: TaskId(seq),
                    due: at,
                },
                task,
            ));
        }
        due
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Drop every pending task. Returns how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
