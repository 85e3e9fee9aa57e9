#![forbid(unsafe_code)]

//! Page runtime for Atelier: reactive theme state, configuration and the
//! page shell that composes every widget.

pub mod config;
pub mod content;
pub mod page;
pub mod reactive;
pub mod theme_context;

pub use config::{ConfigError, OverlaySettings, PageConfig, RevealSettings};
pub use content::{FaqEntry, LookbookImage, PageContent, ServiceEntry};
pub use page::{PageAction, PageShell, TickReport, section_surface};
pub use reactive::{Computed, Observable, Subscription};
pub use theme_context::{ThemeContext, ThemeReader};
