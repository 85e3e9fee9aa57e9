#![forbid(unsafe_code)]

//! Minimal sRGB color with alpha, plus WCAG luminance and contrast.

use std::fmt;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rrggbb`. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same color with opacity `a` (clamped).
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite over an opaque background.
    #[must_use]
    pub fn over(self, bg: Rgba) -> Rgba {
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = f32::from(fg) * self.a + f32::from(bg) * (1.0 - self.a);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgba::rgb(mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b))
    }

    /// WCAG relative luminance of the opaque color, `0.0..=1.0`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
        }
    }
}

/// WCAG contrast ratio between two opaque colors, `1.0..=21.0`.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Rgba::from_hex("#1A1614"), Some(Rgba::rgb(0x1a, 0x16, 0x14)));
        assert_eq!(Rgba::from_hex("1A1614"), None);
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#zz0000"), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Rgba::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(
            Rgba::rgb(250, 248, 245).with_alpha(0.8).to_string(),
            "rgba(250, 248, 245, 0.80)"
        );
    }

    #[test]
    fn contrast_extremes() {
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        assert!((contrast_ratio(black, white) - 21.0).abs() < 0.01);
        assert!((contrast_ratio(white, white) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn alpha_composite_endpoints() {
        let fg = Rgba::rgb(200, 100, 0);
        let bg = Rgba::rgb(0, 0, 0);
        assert_eq!(fg.over(bg), fg);
        assert_eq!(fg.with_alpha(0.0).over(bg), bg);
    }
}
