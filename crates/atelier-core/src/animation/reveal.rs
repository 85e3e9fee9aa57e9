#![forbid(unsafe_code)]

//! One-shot staggered reveal triggered by viewport entry.
//!
//! A [`RevealOnScroll`] watches one section surface. The first intersection
//! report at or above the configured threshold schedules every child to
//! become visible after `index * stagger`; the host calls
//! [`tick`](RevealOnScroll::tick) with the current time and applies the
//! returned indices (e.g. adds a `visible` class).
//!
//! # Invariants
//!
//! 1. The reveal fires at most once. The `triggered` latch is the only
//!    fires-once discipline: it is set before anything is scheduled and never
//!    cleared, so leaving and re-entering the viewport is ignored.
//! 2. Once triggered, the observation is disconnected; disconnection is
//!    resource release, not the guard.
//! 3. Children become visible in strictly increasing index order.
//! 4. After [`teardown`](RevealOnScroll::teardown) no child is revealed and
//!    no observation remains. Teardown is final: later reports and
//!    [`mount`](RevealOnScroll::mount) calls are ignored.
//!
//! # Failure Modes
//!
//! - Reports for another surface are ignored.
//! - A section with zero children latches and completes immediately.

use web_time::{Duration, Instant};

use crate::event::SurfaceId;
use crate::schedule::Scheduler;
use crate::viewport::{IntersectionEntry, ObservationId, ViewportObserver};

/// Reveal tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the section that must be visible, `(0.0, 1.0]`.
    pub threshold: f32,
    /// Delay between consecutive children.
    pub stagger: Duration,
}

impl RevealConfig {
    pub const DEFAULT_THRESHOLD: f32 = 0.15;
    pub const DEFAULT_STAGGER: Duration = Duration::from_millis(80);

    #[must_use]
    pub const fn new(threshold: f32, stagger: Duration) -> Self {
        Self { threshold, stagger }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_STAGGER)
    }
}

/// Staggered one-shot reveal for the children of one section.
#[derive(Debug)]
pub struct RevealOnScroll {
    target: SurfaceId,
    config: RevealConfig,
    visible: Vec<bool>,
    triggered: bool,
    torn_down: bool,
    observation: Option<ObservationId>,
    pending: Scheduler<usize>,
}

impl RevealOnScroll {
    /// Create a reveal for `children` marked elements of `target`.
    #[must_use]
    pub fn new(target: SurfaceId, children: usize, config: RevealConfig) -> Self {
        Self {
            target,
            config,
            visible: vec![false; children],
            triggered: false,
            torn_down: false,
            observation: None,
            pending: Scheduler::new(),
        }
    }

    /// Start observing. Call before the first paint so content that starts
    /// in view still gets its first report.
    ///
    /// Returns `false` if already observing, triggered or torn down.
    pub fn mount(&mut self, observer: &mut dyn ViewportObserver) -> bool {
        if self.triggered || self.torn_down || self.observation.is_some() {
            return false;
        }
        self.observation = Some(observer.observe(self.target, self.config.threshold));
        tracing::debug!(
            message = "reveal.mount",
            target = self.target.raw(),
            threshold = self.config.threshold
        );
        true
    }

    /// Feed an intersection report. Returns `true` if this report triggered
    /// the reveal.
    pub fn on_intersection(
        &mut self,
        entry: &IntersectionEntry,
        now: Instant,
        observer: &mut dyn ViewportObserver,
    ) -> bool {
        if self.triggered
            || self.torn_down
            || entry.target != self.target
            || !entry.meets(self.config.threshold)
        {
            return false;
        }
        self.triggered = true;
        for index in 0..self.visible.len() {
            self.pending
                .schedule_after(now, self.delay_for(index), index);
        }
        if let Some(id) = self.observation.take() {
            observer.disconnect(id);
        }
        tracing::debug!(
            message = "reveal.trigger",
            target = self.target.raw(),
            ratio = entry.ratio,
            children = self.visible.len()
        );
        true
    }

    /// Reveal every child whose delay has elapsed. Returns newly visible
    /// indices in increasing order.
    pub fn tick(&mut self, now: Instant) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (_, index) in self.pending.drain_due(now) {
            if let Some(slot) = self.visible.get_mut(index) {
                *slot = true;
                revealed.push(index);
            }
        }
        revealed
    }

    /// Release the observation and cancel pending reveals.
    pub fn teardown(&mut self, observer: &mut dyn ViewportObserver) {
        self.torn_down = true;
        if let Some(id) = self.observation.take() {
            observer.disconnect(id);
        }
        let cancelled = self.pending.clear();
        if cancelled > 0 {
            tracing::debug!(
                message = "reveal.teardown",
                target = self.target.raw(),
                cancelled
            );
        }
    }

    /// Nominal delay of child `index` after the trigger.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.config.stagger.saturating_mul(index)
    }

    #[must_use]
    pub fn target(&self) -> SurfaceId {
        self.target
    }

    #[must_use]
    pub fn config(&self) -> RevealConfig {
        self.config
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Triggered and every child revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.triggered && self.pending.is_empty()
    }

    /// When the next child is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.next_due()
    }
}
