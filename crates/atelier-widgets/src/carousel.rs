#![forbid(unsafe_code)]

//! Horizontal carousel scroll position.
//!
//! The host reports the scrollable content width and the visible width;
//! the carousel keeps an offset in `[0, content_width - viewport_width]` and
//! moves it by a fixed step per button press.

use atelier_core::event::{KeyCode, KeyEvent};

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Carousel scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    step: f32,
    offset: f32,
    content_width: f32,
    viewport_width: f32,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

impl Carousel {
    pub const DEFAULT_STEP: f32 = 400.0;

    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            offset: 0.0,
            content_width: 0.0,
            viewport_width: 0.0,
        }
    }

    /// Report new extents. The offset is clamped into the new range.
    pub fn set_extent(&mut self, content_width: f32, viewport_width: f32) {
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    #[must_use]
    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.offset > 0.0,
            ScrollDirection::Right => self.offset < self.max_offset(),
        }
    }

    /// Move one step. Returns `false` if already at that edge.
    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        if !self.can_scroll(direction) {
            return false;
        }
        let target = match direction {
            ScrollDirection::Left => self.offset - self.step,
            ScrollDirection::Right => self.offset + self.step,
        };
        self.offset = target.clamp(0.0, self.max_offset());
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "carousel.scroll", ?direction, offset = self.offset);
        true
    }

    /// Follow a scroll the user made directly (wheel, swipe).
    pub fn sync_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// `Left` / `Right` arrow keys scroll.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !key.is_press() {
            return false;
        }
        match key.code {
            KeyCode::Left => self.scroll(ScrollDirection::Left),
            KeyCode::Right => self.scroll(ScrollDirection::Right),
            _ => false,
        }
    }
}
