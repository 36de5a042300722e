// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the sheet through its canvas. Only window-level
//! events (open, resize, Escape) are routed from here.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval used while a sheet animation runs.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Maps a native event to an application message. The window size is taken
/// from `Opened` as well as `Resized`, so sheets are sized against the real
/// window even when it opens at a size other than the configured one.
fn route_event(
    event: event::Event,
    _status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Creates a frame tick subscription, active only while something animates.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn window_open_reports_actual_size() {
        let opened = event::Event::Window(window::Event::Opened {
            position: None,
            size: Size::new(400.0, 800.0),
        });
        let message = route_event(opened, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::WindowResized(size)) if size == Size::new(400.0, 800.0)
        ));
    }

    #[test]
    fn window_resize_is_routed() {
        let resized = event::Event::Window(window::Event::Resized(Size::new(500.0, 900.0)));
        let message = route_event(resized, event::Status::Ignored, window::Id::unique());
        assert!(matches!(message, Some(Message::WindowResized(_))));
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let focused = event::Event::Window(window::Event::Focused);
        assert!(route_event(focused, event::Status::Ignored, window::Id::unique()).is_none());
    }
}
