#![forbid(unsafe_code)]

//! Dismissible overlay: a panel that opens over the page, closes through a
//! grace period so its exit transition can play, and can be dragged down to
//! dismiss on touch devices.
//!
//! The overlay owns its timers and its hold on the page-global resources.
//! While it is not closed it holds one [`ScrollLockGuard`] and one keyboard
//! plus one outside-pointer listener; all of them are released when it
//! reaches [`OverlayState::Closed`], on [`DismissibleOverlay::force_reset`],
//! and on drop.
//!
//! # Invariants
//!
//! 1. Open only reaches Closed through Closing, unless forcibly reset.
//! 2. Closing has exactly one pending auto-clear; Open and Closed have none.
//! 3. Resources are held iff the state is Open or Closing.
//! 4. A drag gesture exists only while Open.
//!
//! # Failure Modes
//!
//! None. Close requests while not Open, drags while not Open, and events
//! addressed to other surfaces are ignored and return `false`/`None`.

mod drag;

pub use drag::{DragGesture, DragOutcome};

use std::fmt;

use atelier_core::animation::Tween;
use atelier_core::event::{Event, KeyCode, PointerEvent, PointerPhase, PointerTarget, SurfaceId};
use atelier_core::listener::{ListenerGuard, ListenerKind, ListenerRegistry};
use atelier_core::schedule::{Scheduler, TaskHandle};
use web_time::{Duration, Instant};

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Timing and gesture parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// Delay between a close request and the state clearing.
    pub grace: Duration,
    /// Downward travel (px) that must be exceeded to dismiss by drag.
    pub drag_threshold: f32,
    /// Duration of the eased return after a short drag.
    pub snap_back: Duration,
}

impl OverlayConfig {
    pub const DEFAULT_GRACE: Duration = Duration::from_millis(300);
    pub const DEFAULT_DRAG_THRESHOLD: f32 = 100.0;
    pub const DEFAULT_SNAP_BACK: Duration = Duration::from_millis(200);

    #[must_use]
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_snap_back(mut self, duration: Duration) -> Self {
        self.snap_back = duration;
        self
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            grace: Self::DEFAULT_GRACE,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
            snap_back: Self::DEFAULT_SNAP_BACK,
        }
    }
}

/// Page-global resources an overlay borrows while visible.
#[derive(Debug, Clone, Default)]
pub struct OverlayEnv {
    pub listeners: ListenerRegistry,
    pub scroll_lock: ScrollLock,
}

/// Lifecycle state. `P` is the content shown (an image index, a service).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState<P> {
    Closed,
    Open(P),
    /// Exit transition in progress; content stays renderable.
    Closing(P),
}

impl<P> Default for OverlayState<P> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<P> OverlayState<P> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Closing(_))
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Content for Open and Closing.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        match self {
            Self::Open(p) | Self::Closing(p) => Some(p),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open(_) => "open",
            Self::Closing(_) => "closing",
        }
    }
}

/// Why a close was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    DragRelease,
}

impl CloseReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CloseButton => "close_button",
            Self::Backdrop => "backdrop",
            Self::Escape => "escape",
            Self::DragRelease => "drag_release",
        }
    }
}

/// Vertical offset for the panel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub translate_y: f32,
    /// `Some` while a snap-back is easing toward zero; hosts with their own
    /// transitions can animate to 0 over this duration instead of sampling.
    pub transition: Option<Duration>,
}

impl SurfaceTransform {
    pub const REST: Self = Self {
        translate_y: 0.0,
        transition: None,
    };
}

#[derive(Debug, Clone, Copy)]
struct SnapBack {
    tween: Tween,
    started: Instant,
}

/// State machine for a dismissible overlay.
pub struct DismissibleOverlay<P> {
    surface: SurfaceId,
    config: OverlayConfig,
    env: OverlayEnv,
    state: OverlayState<P>,
    timers: Scheduler<()>,
    auto_clear: Option<TaskHandle>,
    drag: Option<DragGesture>,
    snap_back: Option<SnapBack>,
    release_offset: f32,
    opened_at: Option<Instant>,
    scroll_guard: Option<ScrollLockGuard>,
    listeners: Vec<ListenerGuard>,
}

impl<P: fmt::Debug> fmt::Debug for DismissibleOverlay<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissibleOverlay")
            .field("surface", &self.surface)
            .field("state", &self.state)
            .field("auto_clear", &self.auto_clear)
            .field("drag", &self.drag)
            .field("listeners", &self.listeners.len())
            .field("holds_scroll_lock", &self.scroll_guard.is_some())
            .finish()
    }
}

impl<P> DismissibleOverlay<P> {
    #[must_use]
    pub fn new(surface: SurfaceId, env: OverlayEnv) -> Self {
        Self {
            surface,
            config: OverlayConfig::default(),
            env,
            state: OverlayState::Closed,
            timers: Scheduler::new(),
            auto_clear: None,
            drag: None,
            snap_back: None,
            release_offset: 0.0,
            opened_at: None,
            scroll_guard: None,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState<P> {
        &self.state
    }

    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        self.state.payload()
    }

    /// When the current Open state began.
    #[must_use]
    pub fn opened_at(&self) -> Option<Instant> {
        self.opened_at
    }

    /// Due time of the pending auto-clear, if Closing.
    #[must_use]
    pub fn auto_clear_due(&self) -> Option<Instant> {
        self.auto_clear.map(|h| h.due())
    }

    /// Number of timers this overlay has pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest time [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let snap_end = self
            .snap_back
            .map(|snap| snap.started + snap.tween.duration());
        match (self.timers.next_due(), snap_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn holds_resources(&self) -> bool {
        self.scroll_guard.is_some() || !self.listeners.is_empty()
    }

    /// Show `payload`, from any state.
    ///
    /// Supersedes a pending close: the auto-clear is canceled so it cannot
    /// wipe the new content.
    pub fn open(&mut self, payload: P, now: Instant) {
        if let Some(handle) = self.auto_clear.take() {
            self.timers.cancel(handle);
        }
        self.drag = None;
        self.snap_back = None;
        self.release_offset = 0.0;
        self.acquire_resources();
        #[cfg(feature = "tracing")]
        let from = self.state.label();
        self.state = OverlayState::Open(payload);
        self.opened_at = Some(now);
        #[cfg(feature = "tracing")]
        self.log_transition(from, "open");
    }

    /// Begin closing. Only effective while Open.
    pub fn request_close(&mut self, reason: CloseReason, now: Instant) -> bool {
        let payload = match std::mem::take(&mut self.state) {
            OverlayState::Open(payload) => payload,
            other => {
                self.state = other;
                return false;
            }
        };
        self.state = OverlayState::Closing(payload);
        self.drag = None;
        self.snap_back = None;
        self.auto_clear = Some(self.timers.schedule_after(now, self.config.grace, ()));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "overlay.transition",
            surface = self.surface.raw(),
            from = "open",
            to = "closing",
            reason = reason.as_str()
        );
        #[cfg(not(feature = "tracing"))]
        let _ = reason;
        true
    }

    /// Fire due timers and finish animations. Returns `true` if the overlay
    /// became Closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(snap) = self.snap_back
            && now.saturating_duration_since(snap.started) >= snap.tween.duration()
        {
            self.snap_back = None;
        }
        let mut closed = false;
        for (handle, ()) in self.timers.drain_due(now) {
            if self.auto_clear == Some(handle) {
                self.finish_close();
                closed = true;
            }
        }
        closed
    }

    /// Go straight to Closed, canceling timers and releasing resources.
    pub fn force_reset(&mut self) -> bool {
        let changed = !self.state.is_closed();
        self.timers.clear();
        self.finish_close();
        changed
    }

    /// Release everything ahead of unmount. No timer can fire afterwards.
    pub fn teardown(&mut self) {
        let pending = self.timers.clear();
        self.finish_close();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "overlay.teardown",
            surface = self.surface.raw(),
            canceled = pending
        );
        #[cfg(not(feature = "tracing"))]
        let _ = pending;
    }

    /// Touch start on the panel.
    pub fn drag_start(&mut self, y: f32) -> bool {
        if !self.state.is_open() || self.drag.is_some() {
            return false;
        }
        self.snap_back = None;
        self.drag = Some(DragGesture::start(y));
        true
    }

    /// Touch move; returns the new translate offset.
    pub fn drag_move(&mut self, y: f32) -> Option<f32> {
        self.drag.as_mut().map(|drag| drag.update(y))
    }

    /// Touch end. Dismisses when travel exceeds the threshold, otherwise
    /// eases back to rest.
    pub fn drag_end(&mut self, now: Instant) -> Option<DragOutcome> {
        let drag = self.drag.take()?;
        let outcome = drag.release(self.config.drag_threshold);
        match outcome {
            DragOutcome::Dismiss { delta } => {
                self.request_close(CloseReason::DragRelease, now);
                self.release_offset = delta;
            }
            DragOutcome::SnapBack { delta } => self.start_snap_back(delta, now),
        }
        Some(outcome)
    }

    /// The platform aborted the touch; treat as a short drag.
    pub fn drag_cancel(&mut self, now: Instant) -> bool {
        match self.drag.take() {
            Some(drag) => {
                self.start_snap_back(drag.delta(), now);
                true
            }
            None => false,
        }
    }

    /// Where to draw the panel at `now`.
    #[must_use]
    pub fn surface_transform(&self, now: Instant) -> SurfaceTransform {
        if let Some(drag) = &self.drag {
            return SurfaceTransform {
                translate_y: drag.delta(),
                transition: None,
            };
        }
        if let Some(snap) = &self.snap_back {
            let elapsed = now.saturating_duration_since(snap.started);
            return SurfaceTransform {
                translate_y: snap.tween.sample(elapsed),
                transition: Some(snap.tween.duration()),
            };
        }
        if self.state.is_closing() {
            return SurfaceTransform {
                translate_y: self.release_offset,
                transition: None,
            };
        }
        SurfaceTransform::REST
    }

    /// Route a page event. Returns `true` if the overlay consumed it.
    ///
    /// - `Escape` press closes while Open
    /// - pointer down on this overlay's backdrop closes
    /// - touch down/move/up on the panel drives the drag gesture
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        match event {
            Event::Key(key) if key.is_press() && key.code == KeyCode::Escape => {
                self.request_close(CloseReason::Escape, now)
            }
            Event::Pointer(pointer) => self.handle_pointer(pointer, now),
            _ => false,
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent, now: Instant) -> bool {
        match (pointer.phase, pointer.target) {
            (PointerPhase::Down, PointerTarget::Backdrop(id)) if id == self.surface => {
                self.request_close(CloseReason::Backdrop, now)
            }
            (PointerPhase::Down, PointerTarget::Surface(id))
                if id == self.surface && pointer.is_touch() =>
            {
                self.drag_start(pointer.y)
            }
            (PointerPhase::Move, _) if pointer.is_touch() => self.drag_move(pointer.y).is_some(),
            (PointerPhase::Up, _) if pointer.is_touch() => self.drag_end(now).is_some(),
            (PointerPhase::Cancel, _) => self.drag_cancel(now),
            _ => false,
        }
    }

    fn start_snap_back(&mut self, delta: f32, now: Instant) {
        if delta <= 0.0 {
            self.snap_back = None;
            return;
        }
        self.snap_back = Some(SnapBack {
            tween: Tween::new(delta, 0.0, self.config.snap_back),
            started: now,
        });
    }

    fn acquire_resources(&mut self) {
        if self.scroll_guard.is_none() {
            self.scroll_guard = Some(self.env.scroll_lock.acquire());
        }
        if self.listeners.is_empty() {
            self.listeners.push(
                self.env
                    .listeners
                    .attach(ListenerKind::Keyboard, self.surface),
            );
            self.listeners.push(
                self.env
                    .listeners
                    .attach(ListenerKind::OutsidePointer, self.surface),
            );
        }
    }

    fn finish_close(&mut self) {
        #[cfg(feature = "tracing")]
        let from = self.state.label();
        self.state = OverlayState::Closed;
        self.auto_clear = None;
        self.drag = None;
        self.snap_back = None;
        self.release_offset = 0.0;
        self.opened_at = None;
        self.scroll_guard = None;
        self.listeners.clear();
        #[cfg(feature = "tracing")]
        self.log_transition(from, "closed");
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&self, from: &'static str, to: &'static str) {
        if from == to {
            return;
        }
        tracing::debug!(
            message = "overlay.transition",
            surface = self.surface.raw(),
            from,
            to
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::clock::{Clock, ManualClock};
    use atelier_core::event::KeyEvent;

    const SURFACE: SurfaceId = SurfaceId(1);

    fn overlay() -> (DismissibleOverlay<u32>, OverlayEnv, ManualClock) {
        let env = OverlayEnv {
            listeners: ListenerRegistry::new(),
            scroll_lock: ScrollLock::new(15.0),
        };
        (
            DismissibleOverlay::new(SURFACE, env.clone()),
            env,
            ManualClock::new(),
        )
    }

    #[test]
    fn open_acquires_resources() {
        let (mut o, env, clock) = overlay();
        o.open(7, clock.now());
        assert_eq!(o.state(), &OverlayState::Open(7));
        assert!(env.scroll_lock.is_locked());
        assert!(env.listeners.is_attached(ListenerKind::Keyboard, SURFACE));
        assert!(env.listeners.is_attached(ListenerKind::OutsidePointer, SURFACE));
    }

    #[test]
    fn reopen_does_not_double_acquire() {
        let (mut o, env, clock) = overlay();
        o.open(1, clock.now());
        o.open(2, clock.now());
        assert_eq!(env.scroll_lock.holders(), 1);
        assert_eq!(env.listeners.count(ListenerKind::Keyboard), 1);
        assert_eq!(o.payload(), Some(&2));
    }

    #[test]
    fn close_goes_through_grace_period() {
        let (mut o, env, clock) = overlay();
        o.open(3, clock.now());
        assert!(o.request_close(CloseReason::CloseButton, clock.now()));
        assert_eq!(o.state(), &OverlayState::Closing(3));
        assert_eq!(o.payload(), Some(&3));

        clock.advance_ms(299);
        assert!(!o.tick(clock.now()));
        assert!(o.state().is_closing());

        clock.advance_ms(1);
        assert!(o.tick(clock.now()));
        assert!(o.state().is_closed());
        assert!(!env.scroll_lock.is_locked());
        assert!(env.listeners.is_empty());
    }

    #[test]
    fn release_padding_is_not_animated() {
        let (mut o, env, clock) = overlay();
        o.open(3, clock.now());
        o.request_close(CloseReason::Backdrop, clock.now());
        clock.advance_ms(300);
        o.tick(clock.now());
        let style = env.scroll_lock.body_style();
        assert_eq!(style.padding_right, 0.0);
        assert!(!style.animate_padding);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        assert!(o.request_close(CloseReason::CloseButton, clock.now()));
        clock.advance_ms(100);
        assert!(!o.request_close(CloseReason::Escape, clock.now()));
        assert_eq!(o.pending_timers(), 1);
        assert_eq!(
            o.auto_clear_due(),
            Some(clock.epoch() + Duration::from_millis(300))
        );
    }

    #[test]
    fn close_while_closed_is_ignored() {
        let (mut o, _env, clock) = overlay();
        assert!(!o.request_close(CloseReason::Escape, clock.now()));
        assert_eq!(o.pending_timers(), 0);
    }

    #[test]
    fn reopen_during_grace_supersedes_close() {
        let (mut o, env, clock) = overlay();
        o.open(1, clock.now());
        o.request_close(CloseReason::CloseButton, clock.now());
        clock.advance_ms(100);
        o.open(2, clock.now());
        assert_eq!(o.pending_timers(), 0);
        clock.advance_ms(500);
        assert!(!o.tick(clock.now()));
        assert_eq!(o.state(), &OverlayState::Open(2));
        assert!(env.scroll_lock.is_locked());
    }

    #[test]
    fn force_reset_releases_everything() {
        let (mut o, env, clock) = overlay();
        o.open(1, clock.now());
        o.request_close(CloseReason::CloseButton, clock.now());
        assert!(o.force_reset());
        assert!(o.state().is_closed());
        assert_eq!(o.pending_timers(), 0);
        assert!(!env.scroll_lock.is_locked());
        assert!(!o.force_reset());
    }

    #[test]
    fn teardown_cancels_auto_clear() {
        let (mut o, env, clock) = overlay();
        o.open(1, clock.now());
        o.request_close(CloseReason::CloseButton, clock.now());
        o.teardown();
        assert_eq!(o.pending_timers(), 0);
        assert!(!o.holds_resources());
        assert!(env.listeners.is_empty());
    }

    #[test]
    fn drop_releases_resources() {
        let (mut o, env, clock) = overlay();
        o.open(1, clock.now());
        drop(o);
        assert!(!env.scroll_lock.is_locked());
        assert!(env.listeners.is_empty());
    }

    #[test]
    fn escape_key_closes() {
        let (mut o, _env, clock) = overlay();
        let esc = Event::Key(KeyEvent::press(KeyCode::Escape));
        assert!(!o.handle_event(&esc, clock.now()));
        o.open(1, clock.now());
        assert!(o.handle_event(&esc, clock.now()));
        assert!(o.state().is_closing());
    }

    #[test]
    fn backdrop_click_closes_only_own_backdrop() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        let other = Event::Pointer(PointerEvent::mouse(
            PointerPhase::Down,
            0.0,
            0.0,
            PointerTarget::Backdrop(SurfaceId(9)),
        ));
        assert!(!o.handle_event(&other, clock.now()));
        let own = Event::Pointer(PointerEvent::mouse(
            PointerPhase::Down,
            0.0,
            0.0,
            PointerTarget::Backdrop(SURFACE),
        ));
        assert!(o.handle_event(&own, clock.now()));
        assert!(o.state().is_closing());
    }

    #[test]
    fn click_inside_panel_does_not_close() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        let inside = Event::Pointer(PointerEvent::mouse(
            PointerPhase::Down,
            10.0,
            10.0,
            PointerTarget::Surface(SURFACE),
        ));
        assert!(!o.handle_event(&inside, clock.now()));
        assert!(o.state().is_open());
    }

    #[test]
    fn short_drag_snaps_back() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        assert!(o.drag_start(200.0));
        assert_eq!(o.drag_move(299.0), Some(99.0));
        assert_eq!(
            o.surface_transform(clock.now()),
            SurfaceTransform {
                translate_y: 99.0,
                transition: None
            }
        );
        let outcome = o.drag_end(clock.now());
        assert_eq!(outcome, Some(DragOutcome::SnapBack { delta: 99.0 }));
        assert!(o.state().is_open());

        let t = o.surface_transform(clock.now());
        assert_eq!(t.translate_y, 99.0);
        assert_eq!(t.transition, Some(Duration::from_millis(200)));

        clock.advance_ms(200);
        o.tick(clock.now());
        assert_eq!(o.surface_transform(clock.now()), SurfaceTransform::REST);
    }

    #[test]
    fn long_drag_dismisses() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        o.drag_start(200.0);
        o.drag_move(301.0);
        let outcome = o.drag_end(clock.now());
        assert!(outcome.is_some_and(DragOutcome::is_dismiss));
        assert!(o.state().is_closing());
        assert_eq!(o.surface_transform(clock.now()).translate_y, 101.0);
    }

    #[test]
    fn drag_requires_open() {
        let (mut o, _env, _clock) = overlay();
        assert!(!o.drag_start(0.0));
        assert_eq!(o.drag_move(50.0), None);
    }

    #[test]
    fn touch_events_drive_drag() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        let t = clock.now();
        let down = PointerEvent::touch(PointerPhase::Down, 100.0, PointerTarget::Surface(SURFACE));
        let mv = PointerEvent::touch(PointerPhase::Move, 250.0, PointerTarget::Page);
        let up = PointerEvent::touch(PointerPhase::Up, 250.0, PointerTarget::Page);
        assert!(o.handle_event(&Event::Pointer(down), t));
        assert!(o.is_dragging());
        assert!(o.handle_event(&Event::Pointer(mv), t));
        assert!(o.handle_event(&Event::Pointer(up), t));
        assert!(o.state().is_closing());
    }

    #[test]
    fn mouse_down_on_panel_does_not_drag() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        let down = PointerEvent::mouse(
            PointerPhase::Down,
            0.0,
            100.0,
            PointerTarget::Surface(SURFACE),
        );
        assert!(!o.handle_event(&Event::Pointer(down), clock.now()));
        assert!(!o.is_dragging());
    }

    #[test]
    fn escape_mid_drag_drops_gesture() {
        let (mut o, _env, clock) = overlay();
        o.open(1, clock.now());
        o.drag_start(0.0);
        o.drag_move(40.0);
        o.handle_event(&Event::Key(KeyEvent::press(KeyCode::Escape)), clock.now());
        assert!(!o.is_dragging());
        assert_eq!(o.drag_end(clock.now()), None);
    }

    #[test]
    fn two_overlays_share_lock() {
        let env = OverlayEnv {
            listeners: ListenerRegistry::new(),
            scroll_lock: ScrollLock::new(15.0),
        };
        let clock = ManualClock::new();
        let t = clock.now();
        let mut a: DismissibleOverlay<u8> = DismissibleOverlay::new(SurfaceId(1), env.clone());
        let mut b: DismissibleOverlay<u8> = DismissibleOverlay::new(SurfaceId(2), env.clone());
        a.open(0, t);
        b.open(0, t);
        assert_eq!(env.scroll_lock.holders(), 2);
        a.force_reset();
        assert!(env.scroll_lock.is_locked());
        b.force_reset();
        assert!(!env.scroll_lock.is_locked());
    }

    #[test]
    fn custom_grace_period() {
        let env = OverlayEnv::default();
        let clock = ManualClock::new();
        let mut o: DismissibleOverlay<()> = DismissibleOverlay::new(SURFACE, env)
            .with_config(OverlayConfig::default().with_grace(Duration::from_millis(50)));
        o.open((), clock.now());
        o.request_close(CloseReason::CloseButton, clock.now());
        clock.advance_ms(50);
        assert!(o.tick(clock.now()));
    }

    #[test]
    fn next_deadline_reports_auto_clear() {
        let (mut o, _env, clock) = overlay();
        assert_eq!(o.next_deadline(), None);
        o.open(1, clock.now());
        o.request_close(CloseReason::CloseButton, clock.now());
        assert_eq!(o.next_deadline(), o.auto_clear_due());
    }
}
