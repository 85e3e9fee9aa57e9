#![forbid(unsafe_code)]

//! Vertical drag-to-dismiss gesture.

/// What a released drag resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Travel exceeded the threshold; the overlay should close.
    Dismiss { delta: f32 },
    /// Travel stayed within the threshold; animate back from `delta` to 0.
    SnapBack { delta: f32 },
}

impl DragOutcome {
    #[must_use]
    pub fn delta(self) -> f32 {
        match self {
            Self::Dismiss { delta } | Self::SnapBack { delta } => delta,
        }
    }

    #[must_use]
    pub fn is_dismiss(self) -> bool {
        matches!(self, Self::Dismiss { .. })
    }
}

/// An active touch drag. Upward travel is clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    start_y: f32,
    delta: f32,
}

impl DragGesture {
    #[must_use]
    pub fn start(y: f32) -> Self {
        Self {
            start_y: y,
            delta: 0.0,
        }
    }

    /// Track the pointer at `y` and return the new downward delta.
    pub fn update(&mut self, y: f32) -> f32 {
        self.delta = (y - self.start_y).max(0.0);
        self.delta
    }

    #[must_use]
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Resolve the gesture. Dismisses only when `delta > threshold`.
    #[must_use]
    pub fn release(self, threshold: f32) -> DragOutcome {
        if self.delta > threshold {
            DragOutcome::Dismiss { delta: self.delta }
        } else {
            DragOutcome::SnapBack { delta: self.delta }
        }
    }
}
