//! Property-based invariant tests for DismissibleOverlay.
//!
//! 1. Closing always has exactly one pending auto-clear; other states none.
//! 2. Resources are held iff the overlay is not Closed.
//! 3. Repeated close requests never add timers or move the deadline.
//! 4. Re-opening during the grace period supersedes the close.
//! 5. A drag of exactly the threshold snaps back; anything beyond dismisses.

use atelier_core::clock::{Clock, ManualClock};
use atelier_core::event::SurfaceId;
use atelier_core::listener::ListenerRegistry;
use atelier_widgets::{
    CloseReason, DismissibleOverlay, DragOutcome, OverlayEnv, OverlayState, ScrollLock,
};
use proptest::prelude::*;
use web_time::Duration;

const SURFACE: SurfaceId = SurfaceId(3);

#[derive(Debug, Clone)]
enum Op {
    Open(u8),
    Close,
    Advance(u64),
    ForceReset,
    Drag(f32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Open),
        Just(Op::Close),
        (0u64..400).prop_map(Op::Advance),
        Just(Op::ForceReset),
        (0.0f32..250.0).prop_map(Op::Drag),
    ]
}

fn env() -> OverlayEnv {
    OverlayEnv {
        listeners: ListenerRegistry::new(),
        scroll_lock: ScrollLock::new(15.0),
    }
}

proptest! {
    #[test]
    fn timers_and_resources_track_state(ops in proptest::collection::vec(op(), 0..50)) {
        let env = env();
        let clock = ManualClock::new();
        let mut o: DismissibleOverlay<u8> = DismissibleOverlay::new(SURFACE, env.clone());

        for op in ops {
            match op {
                Op::Open(p) => o.open(p, clock.now()),
                Op::Close => { o.request_close(CloseReason::CloseButton, clock.now()); }
                Op::Advance(ms) => {
                    clock.advance_ms(ms);
                    o.tick(clock.now());
                }
                Op::ForceReset => { o.force_reset(); }
                Op::Drag(d) => {
                    if o.drag_start(0.0) {
                        o.drag_move(d);
                        o.drag_end(clock.now());
                    }
                }
            }
            let expected_timers = usize::from(o.state().is_closing());
            prop_assert_eq!(o.pending_timers(), expected_timers);
            let held = !o.state().is_closed();
            prop_assert_eq!(env.scroll_lock.is_locked(), held);
            prop_assert_eq!(env.listeners.is_empty(), !held);
            if o.is_dragging() {
                prop_assert!(o.state().is_open());
            }
        }
    }

    #[test]
    fn repeated_close_is_idempotent(
        repeats in 1usize..8,
        gaps in proptest::collection::vec(0u64..299, 8),
    ) {
        let clock = ManualClock::new();
        let mut o: DismissibleOverlay<u8> = DismissibleOverlay::new(SURFACE, env());
        o.open(1, clock.now());
        prop_assert!(o.request_close(CloseReason::CloseButton, clock.now()));
        let deadline = o.auto_clear_due();
        let mut elapsed = 0;
        for gap in gaps.iter().take(repeats) {
            if elapsed + gap >= 300 {
                break;
            }
            elapsed += gap;
            clock.advance_ms(*gap);
            o.tick(clock.now());
            prop_assert!(!o.request_close(CloseReason::Escape, clock.now()));
            prop_assert_eq!(o.pending_timers(), 1);
            prop_assert_eq!(o.auto_clear_due(), deadline);
        }
    }

    #[test]
    fn reopen_during_grace_stays_open(delay in 0u64..300, later in 0u64..2000) {
        let clock = ManualClock::new();
        let mut o: DismissibleOverlay<u8> = DismissibleOverlay::new(SURFACE, env());
        o.open(1, clock.now());
        o.request_close(CloseReason::Backdrop, clock.now());
        clock.advance_ms(delay);
        o.tick(clock.now());
        o.open(2, clock.now());
        clock.advance_ms(later);
        o.tick(clock.now());
        prop_assert_eq!(o.state(), &OverlayState::Open(2));
    }

    #[test]
    fn drag_threshold_is_strict(travel_px in 0u16..300) {
        let travel = f32::from(travel_px);
        let clock = ManualClock::new();
        let mut o: DismissibleOverlay<u8> = DismissibleOverlay::new(SURFACE, env());
        o.open(1, clock.now());
        o.drag_start(50.0);
        o.drag_move(50.0 + travel);
        let outcome = o.drag_end(clock.now());
        let delta = o.surface_transform(clock.now()).translate_y;
        if travel > 100.0 {
            prop_assert!(matches!(outcome, Some(DragOutcome::Dismiss { .. })), "expected Dismiss outcome");
            prop_assert!(o.state().is_closing());
        } else {
            prop_assert!(matches!(outcome, Some(DragOutcome::SnapBack { .. })), "expected SnapBack outcome");
            prop_assert!(o.state().is_open());
            prop_assert!(delta <= 100.0);
        }
    }
}

#[test]
fn drag_of_99_snaps_back_and_101_closes() {
    let clock = ManualClock::new();
    let mut o: DismissibleOverlay<u8> = DismissibleOverlay::new(SURFACE, env());
    o.open(1, clock.now());
    o.drag_start(0.0);
    o.drag_move(99.0);
    assert_eq!(
        o.drag_end(clock.now()),
        Some(DragOutcome::SnapBack { delta: 99.0 })
    );
    assert!(o.state().is_open());

    o.drag_start(0.0);
    o.drag_move(101.0);
    assert_eq!(
        o.drag_end(clock.now()),
        Some(DragOutcome::Dismiss { delta: 101.0 })
    );
    assert!(o.state().is_closing());
    clock.advance(Duration::from_millis(300));
    assert!(o.tick(clock.now()));
    assert!(o.state().is_closed());
}
