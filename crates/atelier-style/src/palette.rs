#![forbid(unsafe_code)]

//! Section palettes as pure functions of the theme mode.
//!
//! Every color decision on the page is `Palette::for_section(section, mode)`.
//! Nothing is cached: the theme flag is the single source of truth and the
//! palette is recomputed from it on every read.
//!
//! Services and Lookbook deliberately invert the page theme for contrast;
//! that inversion happens here on a local copy of the mode.

use crate::color::Rgba;
use crate::theme::ThemeMode;

pub const CREAM: Rgba = Rgba::rgb(0xFA, 0xF8, 0xF5);
pub const CREAM_DARK: Rgba = Rgba::rgb(0xF0, 0xEB, 0xE3);
pub const ESPRESSO: Rgba = Rgba::rgb(0x1A, 0x16, 0x14);
pub const ESPRESSO_LIGHT: Rgba = Rgba::rgb(0x2A, 0x24, 0x20);
pub const STONE: Rgba = Rgba::rgb(0x5C, 0x54, 0x4D);
pub const TERRACOTTA: Rgba = Rgba::rgb(0xC0, 0x57, 0x3A);
pub const CARD_DARK: Rgba = Rgba::rgb(0x24, 0x21, 0x20);
pub const CARD_LIGHT: Rgba = Rgba::rgb(0xD5, 0xCF, 0xC6);

/// Page sections with their own background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Services,
    Lookbook,
    Faq,
    Contact,
    Marquee,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::About,
        Self::Services,
        Self::Lookbook,
        Self::Faq,
        Self::Contact,
        Self::Marquee,
    ];

    /// Whether the section inverts the page theme.
    #[must_use]
    pub const fn inverts(self) -> bool {
        matches!(self, Self::Services | Self::Lookbook)
    }

    /// Mode the section actually renders in.
    #[must_use]
    pub const fn effective_mode(self, page: ThemeMode) -> ThemeMode {
        if self.inverts() { page.inverted() } else { page }
    }
}

/// Resolved colors for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub heading: Rgba,
    pub body: Rgba,
    pub accent: Rgba,
    /// Card background inside the section.
    pub surface: Rgba,
    /// Text on `surface`.
    pub on_surface: Rgba,
}

impl Palette {
    /// Page-level palette for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: CREAM,
                heading: ESPRESSO,
                body: STONE,
                accent: TERRACOTTA,
                surface: CARD_DARK,
                on_surface: CREAM,
            },
            ThemeMode::Dark => Self {
                background: ESPRESSO,
                heading: CREAM,
                body: CREAM.with_alpha(0.85),
                accent: TERRACOTTA,
                surface: CARD_LIGHT,
                on_surface: ESPRESSO,
            },
        }
    }

    /// Palette for `section` when the page is in `page` mode.
    #[must_use]
    pub fn for_section(section: Section, page: ThemeMode) -> Self {
        let mode = section.effective_mode(page);
        let base = Self::for_mode(mode);
        let background = match (section, mode) {
            (Section::Lookbook, ThemeMode::Light) | (Section::Contact, ThemeMode::Light) => {
                CREAM_DARK
            }
            (Section::Contact, ThemeMode::Dark) => ESPRESSO_LIGHT,
            (Section::Marquee, ThemeMode::Light) => Rgba::rgb(0xE8, 0xE4, 0xDE),
            (Section::Marquee, ThemeMode::Dark) => Rgba::rgb(0x13, 0x11, 0x0F),
            _ => base.background,
        };
        Self { background, ..base }
    }

    /// Body color composited over the background.
    #[must_use]
    pub fn body_opaque(&self) -> Rgba {
        self.body.over(self.background)
    }
}
