#![forbid(unsafe_code)]

//! Page configuration.
//!
//! Every tunable of the page lives in [`PageConfig`]. Defaults reproduce the
//! production page; a JSON file may override any subset of fields.
//!
//! ```json
//! { "faq_window": 3, "overlay": { "grace_ms": 250 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use atelier_core::animation::RevealConfig;
use atelier_style::theme::DEFAULT_THEME_KEY;
use atelier_widgets::{Carousel, OverlayConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

/// Errors loading or validating a [`PageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reveal tuning for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealSettings {
    pub threshold: f32,
    pub stagger_ms: u64,
}

impl RevealSettings {
    #[must_use]
    pub fn to_config(self) -> RevealConfig {
        RevealConfig::new(self.threshold, Duration::from_millis(self.stagger_ms))
    }
}

/// Overlay timing and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlaySettings {
    pub grace_ms: u64,
    pub drag_threshold: f32,
    pub snap_back_ms: u64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            grace_ms: 300,
            drag_threshold: OverlayConfig::DEFAULT_DRAG_THRESHOLD,
            snap_back_ms: 200,
        }
    }
}

impl OverlaySettings {
    #[must_use]
    pub fn to_config(self) -> OverlayConfig {
        OverlayConfig::default()
            .with_grace(Duration::from_millis(self.grace_ms))
            .with_drag_threshold(self.drag_threshold)
            .with_snap_back(Duration::from_millis(self.snap_back_ms))
    }
}

/// All page tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Storage key for the persisted theme flag.
    pub theme_key: String,
    /// Reveal tuning for every section except Services and Contact.
    pub reveal: RevealSettings,
    pub services_reveal: RevealSettings,
    /// Contact reveals its form and details together.
    pub contact_reveal: RevealSettings,
    pub overlay: OverlaySettings,
    /// FAQ rows visible at once.
    pub faq_window: usize,
    /// Lookbook arrow-button scroll distance, px.
    pub carousel_step: f32,
    /// Width compensated while the page scroll is locked, px.
    pub scrollbar_width: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            reveal: RevealSettings {
                threshold: 0.15,
                stagger_ms: 80,
            },
            services_reveal: RevealSettings {
                threshold: 0.10,
                stagger_ms: 100,
            },
            contact_reveal: RevealSettings {
                threshold: 0.10,
                stagger_ms: 0,
            },
            overlay: OverlaySettings::default(),
            faq_window: 4,
            carousel_step: Carousel::DEFAULT_STEP,
            scrollbar_width: 0.0,
        }
    }
}

impl PageConfig {
    /// Parse and validate JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(message = "config.load", path = %path.display());
        Ok(config)
    }

    /// Reject values no page could use.
    pub fn validate(&self) -> Result<()> {
        if self.theme_key.trim().is_empty() {
            return Err(invalid("theme_key", "must not be empty"));
        }
        for (field, reveal) in [
            ("reveal", self.reveal),
            ("services_reveal", self.services_reveal),
            ("contact_reveal", self.contact_reveal),
        ] {
            if reveal.threshold.is_nan() || reveal.threshold <= 0.0 || reveal.threshold > 1.0 {
                return Err(invalid(
                    field,
                    format!("threshold {} outside (0, 1]", reveal.threshold),
                ));
            }
        }
        if self.faq_window == 0 {
            return Err(invalid("faq_window", "must be at least 1"));
        }
        if self.overlay.drag_threshold < 0.0 {
            return Err(invalid(
                "overlay.drag_threshold",
                format!("{} is negative", self.overlay.drag_threshold),
            ));
        }
        if self.carousel_step <= 0.0 {
            return Err(invalid("carousel_step", "must be positive"));
        }
        if self.scrollbar_width < 0.0 {
            return Err(invalid("scrollbar_width", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_page() {
        let c = PageConfig::default();
        assert_eq!(c.theme_key, "darkMode");
        assert_eq!(c.faq_window, 4);
        assert_eq!(c.carousel_step, 400.0);
        assert_eq!(c.reveal.to_config(), RevealConfig::default());
        assert_eq!(
            c.services_reveal.to_config(),
            RevealConfig::new(0.10, Duration::from_millis(100))
        );
        assert_eq!(
            c.contact_reveal.to_config(),
            RevealConfig::new(0.10, Duration::ZERO)
        );
        assert_eq!(c.overlay.to_config(), OverlayConfig::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = PageConfig::from_json_str(r#"{ "faq_window": 3, "overlay": { "grace_ms": 250 } }"#)
            .expect("valid config");
        assert_eq!(c.faq_window, 3);
        assert_eq!(c.overlay.grace_ms, 250);
        assert_eq!(c.overlay.snap_back_ms, 200);
        assert_eq!(c.carousel_step, 400.0);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PageConfig::from_json_str(r#"{ "faq_windw": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_window_is_invalid() {
        let err = PageConfig::from_json_str(r#"{ "faq_window": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "faq_window", .. }));
    }

    #[test]
    fn threshold_out_of_range_is_invalid() {
        let err = PageConfig::from_json_str(
            r#"{ "reveal": { "threshold": 1.5, "stagger_ms": 80 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "reveal", .. }));
        let err = PageConfig::from_json_str(
            r#"{ "services_reveal": { "threshold": 0.0, "stagger_ms": 80 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "services_reveal", .. }));
    }

    #[test]
    fn negative_drag_threshold_is_invalid() {
        let err = PageConfig::from_json_str(r#"{ "overlay": { "drag_threshold": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "overlay.drag_threshold", .. }
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "carousel_step": 320.0 }}"#).expect("write");
        let c = PageConfig::from_path(file.path()).expect("load");
        assert_eq!(c.carousel_step, 320.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let err = PageConfig::from_path(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn serializes_round_trip() {
        let c = PageConfig::default();
        let json = serde_json::to_string(&c).expect("serialize");
        assert_eq!(PageConfig::from_json_str(&json).expect("parse"), c);
    }
}
