// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::config::Config;
use super::Message;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::sheet::{self, ModalHost};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{Size, Task};
use std::time::Instant;

/// Mutable application state handed to the update handlers.
pub struct UpdateContext<'a> {
    pub host: &'a mut ModalHost,
    pub config: &'a Config,
    pub theme_mode: ThemeMode,
    pub viewport: &'a mut Size,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Home(msg) => handle_home_message(ctx, &msg),
        Message::Sheet(msg) => handle_sheet_message(ctx, msg, Instant::now()),
        Message::WindowResized(size) => {
            *ctx.viewport = size;
            handle_sheet_message(ctx, sheet::Message::ViewportResized(size), Instant::now())
        }
        Message::EscapePressed => {
            handle_sheet_message(ctx, sheet::Message::CloseRequested, Instant::now())
        }
        Message::Tick(now) => handle_sheet_message(ctx, sheet::Message::Tick(now), now),
    }
}

fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::PresentSheet => present_sheet(ctx),
    }
}

fn present_sheet(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let presented = ctx.host.present(
        ctx.config.sheet_config(),
        ColorScheme::for_mode(ctx.theme_mode),
        ctx.config.corner_radius(),
        *ctx.viewport,
    );
    match presented {
        Ok(task) => task.map(Message::Sheet),
        Err(err) => {
            log::error!("Failed to present sheet: {err}");
            Task::none()
        }
    }
}

fn handle_sheet_message(
    ctx: &mut UpdateContext<'_>,
    message: sheet::Message,
    now: Instant,
) -> Task<Message> {
    ctx.host.handle(message, now);
    Task::none()
}
