#![forbid(unsafe_code)]

//! Light/dark theme flag with persistence.
//!
//! # Initialization order
//!
//! First match wins:
//!
//! 1. A previously persisted explicit choice (key `darkMode`, JSON boolean).
//! 2. The host's reported color-scheme preference.
//! 3. Light.
//!
//! # Invariants
//!
//! 1. Every change made through [`ThemeController::set`] or
//!    [`ThemeController::toggle`] is written to the store before the call
//!    returns.
//! 2. Loading never consults the system preference when a valid persisted
//!    value exists. A mode resolved from anywhere else is written back at
//!    load, so the first visit fixes the theme for later ones.
//! 3. Sections that invert the theme use [`ThemeMode::inverted`] on a local
//!    copy; the controller is never mutated for presentation.
//!
//! # Failure Modes
//!
//! - Store read fails or holds a malformed value: logged at `warn`, the
//!   controller falls through to the system preference.
//! - Store write fails (at load or on change): logged at `warn`, the
//!   in-memory mode still applies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::persist::{PersistError, ThemeStore};
use crate::system::SystemPreference;

/// Storage key used for the persisted flag.
pub const DEFAULT_THEME_KEY: &str = "darkMode";

/// Light or dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Local inversion for sections that contrast against the page theme.
    #[must_use]
    pub const fn inverted(self) -> Self {
        self.toggled()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    Persisted,
    System,
    Default,
    /// Set explicitly during this session.
    User,
}

/// Owner of the theme flag and its persistence.
pub struct ThemeController {
    mode: ThemeMode,
    source: ThemeSource,
    key: String,
    store: Box<dyn ThemeStore>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("key", &self.key)
            .finish()
    }
}

impl ThemeController {
    /// Initialize under [`DEFAULT_THEME_KEY`].
    #[must_use]
    pub fn load(store: Box<dyn ThemeStore>, system: &dyn SystemPreference) -> Self {
        Self::load_with_key(DEFAULT_THEME_KEY, store, system)
    }

    /// Initialize under a custom key.
    #[must_use]
    pub fn load_with_key(
        key: impl Into<String>,
        store: Box<dyn ThemeStore>,
        system: &dyn SystemPreference,
    ) -> Self {
        let key = key.into();
        let (mode, source) = match Self::read_persisted(store.as_ref(), &key) {
            Some(is_dark) => (ThemeMode::from_is_dark(is_dark), ThemeSource::Persisted),
            None => match system.prefers_dark() {
                Some(is_dark) => (ThemeMode::from_is_dark(is_dark), ThemeSource::System),
                None => (ThemeMode::default(), ThemeSource::Default),
            },
        };
        tracing::debug!(message = "theme.load", mode = mode.as_str(), ?source);
        let mut controller = Self {
            mode,
            source,
            key,
            store,
        };
        if source != ThemeSource::Persisted {
            controller.persist();
        }
        controller
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.key, &encode(self.mode)) {
            tracing::warn!(key = %self.key, error = %err, "theme store write failed");
        }
    }

    fn read_persisted(store: &dyn ThemeStore, key: &str) -> Option<bool> {
        let raw = match store.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "theme store read failed");
                return None;
            }
        };
        match decode(key, &raw) {
            Ok(is_dark) => Some(is_dark),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed persisted theme");
                None
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    #[must_use]
    pub fn source(&self) -> ThemeSource {
        self.source
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Flip the mode and persist it. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    /// Assign the mode and persist it. Returns `false` if unchanged (nothing
    /// is written).
    pub fn set(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        let from = self.mode;
        self.mode = mode;
        self.source = ThemeSource::User;
        self.persist();
        tracing::debug!(
            message = "theme.switch",
            from = from.as_str(),
            to = mode.as_str()
        );
        true
    }
}

/// Persisted encoding: a JSON boolean (`true` / `false`).
#[must_use]
pub fn encode(mode: ThemeMode) -> String {
    serde_json::Value::Bool(mode.is_dark()).to_string()
}

/// Decode a persisted value.
pub fn decode(key: &str, raw: &str) -> Result<bool, PersistError> {
    serde_json::from_str::<bool>(raw.trim()).map_err(|_| PersistError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
