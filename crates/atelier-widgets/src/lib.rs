#![forbid(unsafe_code)]

//! Headless widget state for the studio page.
//!
//! Each widget is a plain state machine: the host feeds it input and the
//! current time, and reads back what to draw. Nothing here renders.

pub mod carousel;
pub mod disclosure;
pub mod header;
pub mod overlay;
pub mod scroll_lock;
pub mod shuffle;
pub mod submission;

pub use carousel::{Carousel, ScrollDirection};
pub use disclosure::{DisclosureItem, DisclosureList};
pub use header::{HeaderChrome, NAV_LINKS, TextTone};
pub use overlay::{
    CloseReason, DismissibleOverlay, DragOutcome, OverlayConfig, OverlayEnv, OverlayState,
    SurfaceTransform,
};
pub use scroll_lock::{BodyStyle, ScrollLock, ScrollLockGuard};
pub use shuffle::{MarqueeItem, marquee_items, shuffled};
pub use submission::{RelayOutcome, SubmissionStatus, SubmissionTicket, SubmissionTracker};
