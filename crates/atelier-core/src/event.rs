#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts translate whatever their platform delivers (DOM events, terminal
//! input, a test script) into these types and feed them to the page.
//! Coordinates are logical pixels; `y` grows downwards.

/// Identifier of a surface the host can hit-test and observe: a section, an
/// overlay panel, a backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    /// Create a surface id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    Pointer(PointerEvent),
    /// A viewport intersection report for an observed surface.
    Intersection(crate::viewport::IntersectionEntry),
    Scroll(ScrollEvent),
    Resize { width: f32, height: f32 },
}

/// Keyboard key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Char(char),
}

/// Key press or release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press)
    }
}

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The platform aborted the interaction (e.g. a scroll took over).
    Cancel,
}

/// What the pointer hit, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// Inside an overlay panel or other interactive surface.
    Surface(SurfaceId),
    /// The dimmed backdrop belonging to an overlay surface.
    Backdrop(SurfaceId),
    /// Anywhere else on the page.
    Page,
}

/// A pointer (mouse, touch, pen) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Touch event at vertical position `y` on `target`.
    #[must_use]
    pub const fn touch(phase: PointerPhase, y: f32, target: PointerTarget) -> Self {
        Self {
            source: PointerSource::Touch,
            phase,
            x: 0.0,
            y,
            target,
        }
    }

    /// Mouse event at `(x, y)` on `target`.
    #[must_use]
    pub const fn mouse(phase: PointerPhase, x: f32, y: f32, target: PointerTarget) -> Self {
        Self {
            source: PointerSource::Mouse,
            phase,
            x,
            y,
            target,
        }
    }

    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch)
    }
}

/// Page scroll position report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub scroll_y: f32,
    pub viewport_height: f32,
}
