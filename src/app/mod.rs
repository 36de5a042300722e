// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home screen and the
//! presented sheet.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::ui::sheet::ModalHost;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

const TITLE: &str = "Bottom Sheet";

/// Root Iced application state.
pub struct App {
    host: ModalHost,
    config: Config,
    theme_mode: ThemeMode,
    /// Resolved from `theme_mode` at startup.
    theme: Theme,
    /// Last known window size; new sheets are sized against it.
    viewport: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("viewport", &self.viewport)
            .field("sheet_presented", &self.host.is_presenting())
            .finish()
    }
}

/// Builds the window settings from the configured size.
#[must_use]
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();
    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let (config, warning) = config::load();
    match warning {
        Some(warning) => log::warn!("{warning}"),
        None => log::info!("Configuration loaded"),
    }
    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone(), config.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    fn with_config(config: Config) -> Self {
        let (width, height) = config.window_size();
        Self {
            host: ModalHost::default(),
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.to_iced_theme(),
            config,
            viewport: Size::new(width, height),
        }
    }

    fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let mut app = Self::with_config(config);
        if let Some(theme) = flags.theme {
            app.theme_mode = theme;
            app.theme = theme.to_iced_theme();
        }
        log::info!(
            "Starting with theme {:?} and a {}x{} window",
            app.theme_mode,
            app.viewport.width,
            app.viewport.height
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.host.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            host: &mut self.host,
            config: &self.config,
            theme_mode: self.theme_mode,
            viewport: &mut self.viewport,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext { host: &self.host })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::home;
    use crate::ui::sheet;
    use std::time::{Duration, Instant};

    #[test]
    fn default_app_has_no_sheet() {
        let app = App::default();
        assert!(!app.host.is_presenting());
        assert_eq!(app.viewport, Size::new(420.0, 820.0));
    }

    #[test]
    fn theme_flag_overrides_config() {
        let flags = Flags {
            theme: Some(ThemeMode::Dark),
            ..Flags::default()
        };
        let (app, _) = App::new(flags, Config::default());
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let mut config = Config::default();
        config.window.width = Some(100.0);
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, config::MIN_WINDOW_WIDTH);
        assert_eq!(
            settings.min_size,
            Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT))
        );
    }

    #[test]
    fn present_then_drag_down_dismisses() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::GetStartedPressed));
        let _ = app.update(Message::Sheet(sheet::Message::Appeared));
        let settled = Instant::now() + Duration::from_secs(1);
        let _ = app.update(Message::Tick(settled));
        assert!(app.host.is_presenting());
        assert!(!app.host.is_animating());

        let press = iced::Point::new(200.0, 700.0);
        for message in [
            sheet::drag::Message::Pressed(press),
            sheet::drag::Message::Moved(iced::Point::new(200.0, 850.0)),
            sheet::drag::Message::Released,
        ] {
            let _ = app.update(Message::Sheet(sheet::Message::Pointer(message)));
        }
        assert!(app.host.is_animating());

        let gone = Instant::now() + Duration::from_secs(2);
        let _ = app.update(Message::Tick(gone));
        assert!(!app.host.is_presenting());
    }
}
