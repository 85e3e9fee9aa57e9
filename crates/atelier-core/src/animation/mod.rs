#![forbid(unsafe_code)]

//! Animation primitives.
//!
//! - [`Tween`]: an ease-out interpolation between two values, sampled at an
//!   explicit elapsed time.
//! - [`reveal::RevealOnScroll`]: one-shot staggered reveal on viewport entry.
//!
//! Time only advances when the host says so (an explicit `now` or
//! `elapsed`), so animations are deterministic under a
//! [`ManualClock`](crate::clock::ManualClock).

pub mod reveal;

use web_time::Duration;

pub use reveal::{RevealConfig, RevealOnScroll};

/// Cubic ease-out of `t`, clamped to `0.0..=1.0`.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Eased interpolation from `from` to `to` over `duration`.
///
/// A zero-length tween sits at `to` immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Interpolated value `elapsed` after the start.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }
}
