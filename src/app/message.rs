// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::sheet;
use crate::ui::theming::ThemeMode;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Sheet(sheet::Message),
    WindowResized(Size),
    EscapePressed,
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHEET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; wins over the configured theme mode.
    pub theme: Option<ThemeMode>,
}
