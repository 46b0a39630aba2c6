//! Overlay style and label settings stored in `overlay.toml`.
//!
//! The file is optional: a missing file or missing keys fall back to the
//! built-in dark palette. Colors are kept as strings and only parsed when the
//! overlay snapshots its brushes, so a typo surfaces as a style error at that
//! point instead of failing the whole load.

use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirError};
use crate::overlay::{Localizer, OverlayMetrics, StyleError, StyleKey, StyleSettings};

/// File name of the settings inside the app directory.
pub const SETTINGS_FILE_NAME: &str = "overlay.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings directory unavailable: {0}")]
    Directory(#[from] AppDirError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid settings at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid display.{field} = {value} in {path}: {reason}")]
    InvalidDisplay {
        path: PathBuf,
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("Failed to serialize settings for {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Everything the overlay reads from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub labels: LabelSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Hex colors (`#RRGGBB` or `#RRGGBBAA`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: default_background(),
            text: default_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default = "default_loading_label")]
    pub loading: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            loading: default_loading_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Used when the host cannot report its zoom. TOML has no null, so an
    /// omitted key loads as `1.0`; `None` can only be set in code and is
    /// saved as an omitted key.
    #[serde(
        default = "default_magnification",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_magnification: Option<f32>,
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_magnification: default_magnification(),
            margin: default_margin(),
            corner_radius: default_corner_radius(),
            font_size: default_font_size(),
        }
    }
}

impl DisplaySettings {
    pub fn metrics(&self) -> OverlayMetrics {
        OverlayMetrics {
            margin: self.margin,
            corner_radius: self.corner_radius,
            font_size: self.font_size,
        }
    }

    /// Reject metrics that would draw outside the surface or with no text.
    fn validate(&self, path: &Path) -> Result<(), SettingsError> {
        let invalid = |field: &'static str, value: f32, reason: &'static str| {
            SettingsError::InvalidDisplay {
                path: path.to_path_buf(),
                field,
                value,
                reason,
            }
        };
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(invalid("margin", self.margin, "must be zero or more"));
        }
        for (field, value) in [("corner_radius", self.corner_radius), ("font_size", self.font_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, value, "must be greater than zero"));
            }
        }
        Ok(())
    }
}

impl StyleSettings for OverlaySettings {
    fn color(&self, key: StyleKey) -> Result<Color32, StyleError> {
        let value = match key {
            StyleKey::Background => &self.colors.background,
            StyleKey::Text => &self.colors.text,
        };
        parse_color(key, value)
    }

    fn default_magnification(&self) -> Option<f32> {
        self.display.default_magnification
    }
}

impl Localizer for OverlaySettings {
    fn loading_label(&self) -> String {
        self.labels.loading.clone()
    }
}

fn parse_color(key: StyleKey, value: &str) -> Result<Color32, StyleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StyleError::Missing { key });
    }
    let digits = value.len().saturating_sub(1);
    if !value.starts_with('#') || !matches!(digits, 6 | 8) {
        return Err(StyleError::InvalidColor {
            key,
            value: value.to_string(),
        });
    }
    Color32::from_hex(value).map_err(|_| StyleError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

/// Location of `overlay.toml` in the app directory.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::file_in_root(SETTINGS_FILE_NAME)?)
}

/// Load settings from the app directory, using defaults when the file is absent.
pub fn load_or_default() -> Result<OverlaySettings, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from `path`, using defaults when the file is absent.
pub fn load_from(path: &Path) -> Result<OverlaySettings, SettingsError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No overlay settings file; using defaults");
        return Ok(OverlaySettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: OverlaySettings = toml::from_str(&text).map_err(|source| SettingsError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    settings.display.validate(path)?;
    Ok(settings)
}

/// Write `settings` as pretty TOML, replacing the file only once fully written.
pub fn save_to(settings: &OverlaySettings, path: &Path) -> Result<(), SettingsError> {
    let write_error = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let data = toml::to_string_pretty(settings).map_err(|source| SettingsError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, data).map_err(write_error)?;
    std::fs::rename(&staging, path).map_err(write_error)
}

fn default_background() -> String {
    "#1A1C1E".to_string()
}

fn default_text() -> String {
    "#B9C0C8".to_string()
}

fn default_loading_label() -> String {
    "Loading...".to_string()
}

fn default_magnification() -> Option<f32> {
    Some(1.0)
}

fn default_margin() -> f32 {
    OverlayMetrics::default().margin
}

fn default_corner_radius() -> f32 {
    OverlayMetrics::default().corner_radius
}

fn default_font_size() -> f32 {
    OverlayMetrics::default().font_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, OverlaySettings::default());
        assert_eq!(settings.display.metrics(), OverlayMetrics::default());
        assert_eq!(settings.loading_label(), "Loading...");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            "[colors]\nbackground = \"#FF000080\"\n\n[labels]\nloading = \"Chargement...\"\n",
        )
        .unwrap();

        let settings = load_from(&path).unwrap();
        assert_eq!(
            settings.color(StyleKey::Background).unwrap(),
            Color32::from_rgba_unmultiplied(255, 0, 0, 128)
        );
        assert_eq!(settings.colors.text, default_text());
        assert_eq!(settings.loading_label(), "Chargement...");
        assert_eq!(settings.default_magnification(), Some(1.0));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let mut settings = OverlaySettings::default();
        settings.display.margin = 12.0;
        settings.colors.text = "#00FF00".to_string();

        save_to(&settings, &path).unwrap();

        assert_eq!(load_from(&path).unwrap(), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn malformed_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "[colors\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::ParseToml { .. }));
        assert!(err.to_string().contains(SETTINGS_FILE_NAME));
    }

    #[test]
    fn unset_default_magnification_reloads_as_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let mut settings = OverlaySettings::default();
        settings.display.default_magnification = None;

        save_to(&settings, &path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(!saved.contains("default_magnification"));
        assert_eq!(load_from(&path).unwrap().default_magnification(), Some(1.0));
    }

    fn load_display(body: &str) -> Result<OverlaySettings, SettingsError> {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, format!("[display]\n{body}\n")).unwrap();
        load_from(&path)
    }

    #[test]
    fn negative_margin_is_rejected() {
        let err = load_display("margin = -30.0").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidDisplay { field: "margin", value, .. } if value == -30.0
        ));
        assert!(err.to_string().contains(SETTINGS_FILE_NAME));
    }

    #[test]
    fn zero_margin_is_allowed() {
        let settings = load_display("margin = 0.0").unwrap();
        assert_eq!(settings.display.metrics().margin, 0.0);
    }

    #[test]
    fn non_positive_font_size_is_rejected() {
        for body in ["font_size = 0.0", "font_size = -4.0", "font_size = nan"] {
            assert!(
                matches!(
                    load_display(body),
                    Err(SettingsError::InvalidDisplay { field: "font_size", .. })
                ),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn non_positive_corner_radius_is_rejected() {
        for body in ["corner_radius = 0.0", "corner_radius = -1.0", "corner_radius = inf"] {
            assert!(
                matches!(
                    load_display(body),
                    Err(SettingsError::InvalidDisplay { field: "corner_radius", .. })
                ),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn color_parsing_rejects_bad_values() {
        assert_eq!(
            parse_color(StyleKey::Text, "  "),
            Err(StyleError::Missing { key: StyleKey::Text })
        );
        for bad in ["red", "#FFF", "#GGGGGG", "00FF00"] {
            assert!(
                matches!(
                    parse_color(StyleKey::Text, bad),
                    Err(StyleError::InvalidColor { .. })
                ),
                "{bad} should be rejected"
            );
        }
        assert_eq!(
            parse_color(StyleKey::Text, "#102030").unwrap(),
            Color32::from_rgb(16, 32, 48)
        );
    }
}
