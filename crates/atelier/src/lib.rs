#![forbid(unsafe_code)]

//! Atelier public facade crate.
//!
//! Re-exports the layer crates under short names, plus the types most hosts
//! touch when driving a page.

pub use atelier_core as core;
#[cfg(feature = "runtime")]
pub use atelier_runtime as runtime;
pub use atelier_style as style;
pub use atelier_widgets as widgets;

pub mod prelude {
    pub use atelier_core as core;
    #[cfg(feature = "runtime")]
    pub use atelier_runtime as runtime;
    pub use atelier_style as style;
    pub use atelier_widgets as widgets;

    pub use atelier_core::animation::{RevealConfig, RevealOnScroll};
    pub use atelier_core::clock::{Clock, ManualClock, SystemClock};
    pub use atelier_core::event::{
        Event, KeyCode, KeyEvent, PointerEvent, PointerPhase, PointerTarget, ScrollEvent,
        SurfaceId,
    };
    pub use atelier_core::viewport::{IntersectionEntry, RecordingObserver, ViewportObserver};
    #[cfg(feature = "runtime")]
    pub use atelier_runtime::{
        PageAction, PageConfig, PageContent, PageShell, ThemeContext, ThemeReader,
    };
    pub use atelier_style::{
        FixedPreference, JsonFileStore, MemoryStore, Section, SystemPreference, ThemeMode,
        ThemeStore,
    };
    pub use atelier_widgets::{
        CloseReason, DisclosureItem, DisclosureList, DismissibleOverlay, OverlayState,
    };
}
