#![forbid(unsafe_code)]

//! Style: theme mode, color, section palettes, and the theme controller with
//! its persistence and system-preference contracts.

pub mod color;
pub mod palette;
pub mod persist;
pub mod system;
pub mod theme;

pub use color::Rgba;
pub use palette::{Palette, Section};
pub use persist::{JsonFileStore, MemoryStore, PersistError, ThemeStore};
pub use system::{EnvPreference, FixedPreference, SystemPreference};
pub use theme::{ThemeController, ThemeMode, ThemeSource};
