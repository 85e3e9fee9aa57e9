#![forbid(unsafe_code)]

//! Host color-scheme preference.

use std::env;

/// Capability: read the host's reported light/dark preference.
pub trait SystemPreference {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if unknown.
    fn prefers_dark(&self) -> Option<bool>;
}

/// A fixed answer, for hosts that already resolved the preference and for
/// tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<bool>);

impl FixedPreference {
    pub const DARK: Self = Self(Some(true));
    pub const LIGHT: Self = Self(Some(false));
    pub const UNKNOWN: Self = Self(None);
}

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Reads the preference from an environment variable (`dark` / `light`,
/// case-insensitive). Anything else is unknown.
#[derive(Debug, Clone)]
pub struct EnvPreference {
    var: String,
}

impl EnvPreference {
    pub const DEFAULT_VAR: &'static str = "ATELIER_COLOR_SCHEME";

    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Interpret a raw scheme string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(true),
            "light" => Some(false),
            _ => None,
        }
    }
}

impl Default for EnvPreference {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl SystemPreference for EnvPreference {
    fn prefers_dark(&self) -> Option<bool> {
        env::var(&self.var).ok().and_then(|v| Self::parse(&v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_preference() {
        assert_eq!(FixedPreference::DARK.prefers_dark(), Some(true));
        assert_eq!(FixedPreference::UNKNOWN.prefers_dark(), None);
    }

    #[test]
    fn parse_scheme() {
        assert_eq!(EnvPreference::parse(" Dark "), Some(true));
        assert_eq!(EnvPreference::parse("LIGHT"), Some(false));
        assert_eq!(EnvPreference::parse("no-preference"), None);
    }

    #[test]
    fn unset_variable_is_unknown() {
        let pref = EnvPreference::new("ATELIER_TEST_SCHEME_THAT_IS_NEVER_SET");
        assert_eq!(pref.prefers_dark(), None);
    }
}
