// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[sheet]` - Sheet heights, margin, corner radius and backdrop dimming
//! - `[animation]` - Slide, fade and snap durations
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SHEET_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_sheet::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting and write it next to the working directory
//! config.sheet.default_height = Some(320.0);
//!
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::sheet::{SheetConfig, SheetMetrics, Timing};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Bottom sheet metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetSection {
    /// Resting height after presentation.
    #[serde(default = "default_sheet_height", skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f32>,

    /// Release height below which the sheet is dismissed.
    #[serde(
        default = "default_dismissible_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismissible_height: Option<f32>,

    /// Gap kept above a fully expanded sheet.
    #[serde(default = "default_top_margin", skip_serializing_if = "Option::is_none")]
    pub top_margin: Option<f32>,

    /// Corner radius of the panel's top edge.
    #[serde(
        default = "default_corner_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub corner_radius: Option<f32>,

    /// Backdrop opacity once presented (0.0 to 1.0).
    #[serde(default = "default_dimmed_alpha", skip_serializing_if = "Option::is_none")]
    pub dimmed_alpha: Option<f32>,
}

impl Default for SheetSection {
    fn default() -> Self {
        Self {
            default_height: default_sheet_height(),
            dismissible_height: default_dismissible_height(),
            top_margin: default_top_margin(),
            corner_radius: default_corner_radius(),
            dimmed_alpha: default_dimmed_alpha(),
        }
    }
}

/// Animation durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationSection {
    #[serde(default = "default_slide_ms", skip_serializing_if = "Option::is_none")]
    pub slide_ms: Option<u64>,

    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    #[serde(default = "default_snap_ms", skip_serializing_if = "Option::is_none")]
    pub snap_ms: Option<u64>,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            slide_ms: default_slide_ms(),
            fade_ms: default_fade_ms(),
            snap_ms: default_snap_ms(),
        }
    }
}

/// Initial window size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSection {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sheet: SheetSection,

    #[serde(default)]
    pub animation: AnimationSection,

    #[serde(default)]
    pub window: WindowSection,
}

impl Config {
    /// Sheet metrics with missing values filled from defaults.
    #[must_use]
    pub fn sheet_metrics(&self) -> SheetMetrics {
        SheetMetrics {
            default_height: self.sheet.default_height.unwrap_or(DEFAULT_SHEET_HEIGHT),
            dismissible_height: self
                .sheet
                .dismissible_height
                .unwrap_or(DEFAULT_DISMISSIBLE_HEIGHT),
            top_margin: self.sheet.top_margin.unwrap_or(DEFAULT_TOP_MARGIN).max(0.0),
        }
    }

    /// Animation timings, each clamped to `MAX_ANIMATION_MS`.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let millis = |value: Option<u64>, fallback: u64| {
            Duration::from_millis(value.unwrap_or(fallback).min(MAX_ANIMATION_MS))
        };
        Timing {
            slide: millis(self.animation.slide_ms, DEFAULT_SLIDE_MS),
            fade: millis(self.animation.fade_ms, DEFAULT_FADE_MS),
            snap: millis(self.animation.snap_ms, DEFAULT_SNAP_MS),
        }
    }

    /// Full sheet configuration handed to the state machine.
    #[must_use]
    pub fn sheet_config(&self) -> SheetConfig {
        SheetConfig {
            metrics: self.sheet_metrics(),
            dimmed_alpha: self
                .sheet
                .dimmed_alpha
                .unwrap_or(DEFAULT_DIMMED_ALPHA)
                .clamp(0.0, 1.0),
            timing: self.timing(),
        }
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.sheet
            .corner_radius
            .unwrap_or(DEFAULT_CORNER_RADIUS)
            .max(0.0)
    }

    /// Initial window size, never below the supported minimum.
    #[must_use]
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.window
                .width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_WIDTH),
            self.window
                .height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_HEIGHT),
        )
    }

    /// Checks that the configured sheet metrics form valid bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Geometry`] when the heights are inconsistent.
    pub fn validate(&self) -> Result<()> {
        let metrics = self.sheet_metrics();
        crate::domain::sheet::SheetGeometry::for_viewport(metrics, 0.0)?;
        Ok(())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_sheet_height() -> Option<f32> {
    Some(DEFAULT_SHEET_HEIGHT)
}

fn default_dismissible_height() -> Option<f32> {
    Some(DEFAULT_DISMISSIBLE_HEIGHT)
}

fn default_top_margin() -> Option<f32> {
    Some(DEFAULT_TOP_MARGIN)
}

fn default_corner_radius() -> Option<f32> {
    Some(DEFAULT_CORNER_RADIUS)
}

fn default_dimmed_alpha() -> Option<f32> {
    Some(DEFAULT_DIMMED_ALPHA)
}

fn default_slide_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_snap_ms() -> Option<u64> {
    Some(DEFAULT_SNAP_MS)
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails or the
/// sheet metrics are inconsistent, returns the default config with a
/// warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => match config.validate() {
            Ok(()) => (config, None),
            Err(err) => {
                let mut fallback = config;
                fallback.sheet = SheetSection::default();
                (
                    fallback,
                    Some(format!("{}: {err}; using default sheet metrics", path.display())),
                )
            }
        },
        Err(err) => (
            Config::default(),
            Some(format!("{}: {err}; using defaults", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            sheet: SheetSection {
                default_height: Some(320.0),
                dismissible_height: Some(180.0),
                ..SheetSection::default()
            },
            animation: AnimationSection {
                slide_ms: Some(250),
                ..AnimationSection::default()
            },
            window: WindowSection::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.sheet, SheetSection::default());
        assert_eq!(loaded.timing(), Timing::default());
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_warns_on_parse_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[sheet\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn inconsistent_sheet_metrics_fall_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"light\"\n[sheet]\ndefault_height = 150.0\ndismissible_height = 200.0\n",
        )
        .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config.sheet, SheetSection::default());
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert!(warning.expect("warning").contains("dismissible height"));
    }

    #[test]
    fn saved_settings_file_is_found_by_directory_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("save");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn timing_is_clamped() {
        let config = Config {
            animation: AnimationSection {
                fade_ms: Some(60_000),
                ..AnimationSection::default()
            },
            ..Config::default()
        };
        assert_eq!(config.timing().fade, Duration::from_millis(MAX_ANIMATION_MS));
    }

    #[test]
    fn dimmed_alpha_is_clamped() {
        let config = Config {
            sheet: SheetSection {
                dimmed_alpha: Some(3.0),
                ..SheetSection::default()
            },
            ..Config::default()
        };
        assert_eq!(config.sheet_config().dimmed_alpha, 1.0);
    }

    #[test]
    fn window_size_respects_minimum() {
        let config = Config {
            window: WindowSection {
                width: Some(100.0),
                height: None,
            },
            ..Config::default()
        };
        assert_eq!(config.window_size(), (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
