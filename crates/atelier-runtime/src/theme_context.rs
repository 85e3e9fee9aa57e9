#![forbid(unsafe_code)]

//! Process-scoped theme store.
//!
//! One [`ThemeContext`] exists per page session. It owns the
//! [`ThemeController`] (and through it, persistence) and mirrors the current
//! mode into an [`Observable`]. Sections get a [`ThemeReader`], which can
//! read and subscribe but not write, and derive their palettes from it.

use std::cell::RefCell;
use std::rc::Rc;

use atelier_style::{Palette, Section, SystemPreference, ThemeController, ThemeMode, ThemeSource, ThemeStore};

use crate::reactive::{Computed, Observable, Subscription};

/// Writable theme handle. Clones share state.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    controller: Rc<RefCell<ThemeController>>,
    mode: Observable<ThemeMode>,
}

impl ThemeContext {
    #[must_use]
    pub fn new(controller: ThemeController) -> Self {
        let mode = Observable::new(controller.mode());
        Self {
            controller: Rc::new(RefCell::new(controller)),
            mode,
        }
    }

    /// Load the controller under `key` and wrap it.
    #[must_use]
    pub fn load(key: &str, store: Box<dyn ThemeStore>, system: &dyn SystemPreference) -> Self {
        Self::new(ThemeController::load_with_key(key, store, system))
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Where the current mode came from.
    #[must_use]
    pub fn source(&self) -> ThemeSource {
        self.controller.borrow().source()
    }

    /// Flip and persist. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mode = self.controller.borrow_mut().toggle();
        self.mode.set(mode);
        mode
    }

    /// Assign and persist. Returns `false` if unchanged.
    pub fn set(&self, mode: ThemeMode) -> bool {
        let changed = self.controller.borrow_mut().set(mode);
        if changed {
            self.mode.set(mode);
        }
        changed
    }

    /// Read-only handle for consumers.
    #[must_use]
    pub fn reader(&self) -> ThemeReader {
        ThemeReader {
            mode: self.mode.clone(),
        }
    }
}

/// Read-only view of the page theme.
#[derive(Debug, Clone)]
pub struct ThemeReader {
    mode: Observable<ThemeMode>,
}

impl ThemeReader {
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Call `callback` whenever the page mode changes.
    #[must_use = "dropping the subscription unsubscribes"]
    pub fn subscribe(&self, callback: impl Fn(ThemeMode) + 'static) -> Subscription {
        self.mode.subscribe(move |mode| callback(*mode))
    }

    /// Palette for `section`, recomputed after each theme change. Inverting
    /// sections apply their inversion locally.
    #[must_use]
    pub fn palette(&self, section: Section) -> Computed<Palette> {
        Computed::from_observable(&self.mode, move |mode| Palette::for_section(section, *mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_style::{FixedPreference, MemoryStore};
    use std::cell::Cell;

    fn context(store: &MemoryStore, system: FixedPreference) -> ThemeContext {
        ThemeContext::load("darkMode", Box::new(store.clone()), &system)
    }

    #[test]
    fn toggle_updates_readers_and_store() {
        let store = MemoryStore::new();
        let ctx = context(&store, FixedPreference::LIGHT);
        let reader = ctx.reader();
        let seen = Rc::new(Cell::new(None));
        let s = Rc::clone(&seen);
        let _sub = reader.subscribe(move |m| s.set(Some(m)));

        assert_eq!(ctx.toggle(), ThemeMode::Dark);
        assert!(reader.is_dark());
        assert_eq!(seen.get(), Some(ThemeMode::Dark));
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn set_same_mode_is_silent() {
        let store = MemoryStore::new();
        let ctx = context(&store, FixedPreference::DARK);
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let _sub = ctx.reader().subscribe(move |_| c.set(c.get() + 1));
        assert!(!ctx.set(ThemeMode::Dark));
        assert_eq!(calls.get(), 0);
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn section_palette_follows_theme() {
        let store = MemoryStore::new();
        let ctx = context(&store, FixedPreference::LIGHT);
        let reader = ctx.reader();
        let about = reader.palette(Section::About);
        let services = reader.palette(Section::Services);
        assert_eq!(about.get(), Palette::for_mode(ThemeMode::Light));
        assert_eq!(services.get(), Palette::for_mode(ThemeMode::Dark));

        ctx.toggle();
        assert_eq!(about.get(), Palette::for_mode(ThemeMode::Dark));
        assert_eq!(services.get(), Palette::for_mode(ThemeMode::Light));
        assert_eq!(reader.mode(), ThemeMode::Dark);
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let a = context(&store, FixedPreference::UNKNOWN);
        let b = a.clone();
        b.toggle();
        assert!(a.is_dark());
        assert_eq!(a.source(), ThemeSource::User);
    }
}
