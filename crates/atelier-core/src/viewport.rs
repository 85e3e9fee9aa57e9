#![forbid(unsafe_code)]

//! Viewport intersection contract.
//!
//! The host owns the real observer (e.g. an `IntersectionObserver`). Atelier
//! only asks it to start or stop watching a surface at a visibility
//! threshold, and receives [`IntersectionEntry`] reports as
//! [`Event::Intersection`](crate::event::Event::Intersection).

use crate::event::SurfaceId;

/// Identifier for an active observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationId(pub u64);

/// A visibility report for an observed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SurfaceId,
    /// Fraction of the surface inside the viewport, `0.0..=1.0`.
    pub ratio: f32,
}

impl IntersectionEntry {
    #[must_use]
    pub const fn new(target: SurfaceId, ratio: f32) -> Self {
        Self { target, ratio }
    }

    #[must_use]
    pub fn is_intersecting(&self) -> bool {
        self.ratio > 0.0
    }

    /// Whether at least `threshold` of the surface is visible.
    #[must_use]
    pub fn meets(&self, threshold: f32) -> bool {
        self.is_intersecting() && self.ratio >= threshold
    }
}

/// Host capability: observe surfaces for viewport visibility.
pub trait ViewportObserver {
    /// Start observing `target`; reports arrive once it crosses `threshold`.
    fn observe(&mut self, target: SurfaceId, threshold: f32) -> ObservationId;

    /// Stop an observation. Unknown ids are ignored.
    fn disconnect(&mut self, id: ObservationId);
}

/// An active observation recorded by [`RecordingObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub id: ObservationId,
    pub target: SurfaceId,
    pub threshold: f32,
}

/// In-memory observer that records what is being watched.
///
/// Hosts without a native observer can compute ratios themselves and use
/// this to know which surfaces still need reports.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    next_id: u64,
    active: Vec<Observation>,
    disconnects: usize,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> &[Observation] {
        &self.active
    }

    #[must_use]
    pub fn is_observing(&self, target: SurfaceId) -> bool {
        self.active.iter().any(|o| o.target == target)
    }

    /// Total successful disconnects so far.
    #[must_use]
    pub fn disconnects(&self) -> usize {
        self.disconnects
    }
}

impl ViewportObserver for RecordingObserver {
    fn observe(&mut self, target: SurfaceId, threshold: f32) -> ObservationId {
        let id = ObservationId(self.next_id);
        self.next_id += 1;
        self.active.push(Observation {
            id,
            target,
            threshold,
        });
        id
    }

    fn disconnect(&mut self, id: ObservationId) {
        let before = self.active.len();
        self.active.retain(|o| o.id != id);
        if self.active.len() < before {
            self.disconnects += 1;
        }
    }
}
