#![forbid(unsafe_code)]

//! Fixed header chrome: scroll-dependent styling and the mobile menu.
//!
//! Two scroll flags drive the header. `has_scrolled` turns on the backdrop
//! blur as soon as the page leaves the top. `past_hero` switches the header
//! from light-on-photo text to the theme's own colors once the hero image is
//! no longer behind it.

use atelier_core::event::{Event, ScrollEvent};
use atelier_style::{Palette, Rgba, ThemeMode};

/// Anchor and label for each primary navigation link.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("about", "About"),
    ("services", "Services"),
    ("lookbook", "Lookbook"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// Header text treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    /// White with a drop shadow, over the hero photo in either theme.
    OverHero,
    /// Cream text on the dark header.
    Light,
    /// Espresso text on the light header.
    Dark,
}

/// Header state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderChrome {
    has_scrolled: bool,
    past_hero: bool,
    menu_open: bool,
    hero_bottom: Option<f32>,
    header_height: f32,
}

impl Default for HeaderChrome {
    fn default() -> Self {
        Self {
            has_scrolled: false,
            past_hero: false,
            menu_open: false,
            hero_bottom: None,
            header_height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl HeaderChrome {
    pub const DEFAULT_HEIGHT: f32 = 80.0;
    /// Fallback hero extent, as a fraction of viewport height, when the
    /// hero's position is unknown.
    pub const HERO_FALLBACK_FRACTION: f32 = 0.9;
    const SOLID_ALPHA: f32 = 0.95;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    /// Record where the hero section ends in page coordinates.
    pub fn set_hero_bottom(&mut self, bottom: Option<f32>) {
        self.hero_bottom = bottom;
    }

    /// Recompute scroll flags. Returns `true` if either changed.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> bool {
        let has_scrolled = scroll_y > 0.0;
        let past_hero = match self.hero_bottom {
            Some(bottom) => scroll_y > bottom - self.header_height,
            None => scroll_y > viewport_height * Self::HERO_FALLBACK_FRACTION,
        };
        let changed = has_scrolled != self.has_scrolled || past_hero != self.past_hero;
        self.has_scrolled = has_scrolled;
        self.past_hero = past_hero;
        changed
    }

    /// Scroll events update the flags; everything else is ignored.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Scroll(ScrollEvent {
                scroll_y,
                viewport_height,
            }) => self.on_scroll(*scroll_y, *viewport_height),
            _ => false,
        }
    }

    #[must_use]
    pub fn has_scrolled(&self) -> bool {
        self.has_scrolled
    }

    #[must_use]
    pub fn past_hero(&self) -> bool {
        self.past_hero
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu; returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the mobile menu, e.g. after following a link.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    #[must_use]
    pub fn text_tone(&self, mode: ThemeMode) -> TextTone {
        if !self.past_hero {
            TextTone::OverHero
        } else if mode.is_dark() {
            TextTone::Light
        } else {
            TextTone::Dark
        }
    }

    /// Header fill: transparent over the hero, near-opaque theme background
    /// after it.
    #[must_use]
    pub fn background(&self, mode: ThemeMode) -> Option<Rgba> {
        self.past_hero
            .then(|| Palette::for_mode(mode).background.with_alpha(Self::SOLID_ALPHA))
    }

    /// Accessible label for the theme toggle button.
    #[must_use]
    pub fn theme_toggle_label(mode: ThemeMode) -> &'static str {
        if mode.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}
