#![forbid(unsafe_code)]

//! Host time sources.
//!
//! Every timed transition in Atelier takes `now` as an argument instead of
//! reading a clock itself, so the host decides where time comes from. In a
//! browser that is `performance.now()` (via `web_time`); in tests it is a
//! [`ManualClock`] advanced by hand so every timing assertion is exact.
//!
//! # Invariants
//!
//! 1. `now()` never goes backwards for a given clock.
//! 2. All clones of a [`ManualClock`] observe the same time.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use web_time::{Duration, Instant};

/// Source of monotonic timestamps.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Instant;
}

/// Wall-clock time via `web_time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually-advanceable clock for deterministic hosts and tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    epoch: Instant,
    offset_us: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at `Instant::now()` with zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            offset_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance by `delta`.
    pub fn advance(&self, delta: Duration) {
        let us = delta.as_micros().min(u64::MAX as u128) as u64;
        self.offset_us.fetch_add(us, Ordering::Release);
    }

    /// Advance by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.offset_us.load(Ordering::Acquire))
    }

    /// The instant the clock started at.
    #[must_use]
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + self.elapsed()
    }
}
