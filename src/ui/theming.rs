// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{palette, opacity};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color palette for the sheet and home screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Sheet panel background.
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Grab handle at the top of the sheet.
    pub grabber: Color,
    /// Backdrop color at full opacity; the sheet scales its alpha.
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            grabber: palette::GRAY_200,
            backdrop: palette::BLACK,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_850,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            grabber: palette::GRAY_400,
            backdrop: palette::BLACK,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Backdrop color at the given opacity.
    #[must_use]
    pub fn backdrop_at(&self, alpha: f32) -> Color {
        Color {
            a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
            ..self.backdrop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        assert!(ColorScheme::dark().surface.r < 0.2);
    }

    #[test]
    fn backdrop_alpha_is_clamped() {
        let scheme = ColorScheme::light();
        assert_eq!(scheme.backdrop_at(0.6).a, 0.6);
        assert_eq!(scheme.backdrop_at(2.0).a, 1.0);
        assert_eq!(scheme.backdrop_at(-1.0).a, 0.0);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
