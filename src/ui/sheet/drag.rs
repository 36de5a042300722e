// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking that turns raw press/move/release samples into drag
//! gestures with a cumulative translation.

use crate::domain::sheet::{DragGesture, Translation};
use iced::Point;

/// Drag tracker state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    /// Where the pointer went down, while a drag is active.
    origin: Option<Point>,
    translation: Translation,
}

/// Pointer samples, in sheet-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pressed(Point),
    Moved(Point),
    Released,
    /// The pointer went away without a release (cursor left the window,
    /// touch lost, focus lost).
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Gesture(DragGesture),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed(position) => {
                self.origin = Some(position);
                self.translation = Translation::ZERO;
                Effect::Gesture(DragGesture::began())
            }
            Message::Moved(position) => match self.origin {
                Some(origin) => {
                    self.translation = Translation::new(position.x - origin.x, position.y - origin.y);
                    Effect::Gesture(DragGesture::changed(self.translation))
                }
                None => Effect::None,
            },
            Message::Released => match self.origin.take() {
                Some(_) => Effect::Gesture(DragGesture::ended(self.translation)),
                None => Effect::None,
            },
            Message::Lost => match self.origin.take() {
                Some(_) => Effect::Gesture(DragGesture::cancelled(self.translation)),
                None => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::GesturePhase;

    fn gesture(effect: Effect) -> DragGesture {
        match effect {
            Effect::Gesture(gesture) => gesture,
            Effect::None => panic!("expected a gesture"),
        }
    }

    #[test]
    fn press_begins_with_zero_translation() {
        let mut state = State::default();
        let began = gesture(state.handle(Message::Pressed(Point::new(10.0, 500.0))));
        assert_eq!(began.phase, GesturePhase::Began);
        assert_eq!(began.translation, Translation::ZERO);
        assert!(state.is_dragging());
    }

    #[test]
    fn moves_report_cumulative_translation() {
        let mut state = State::default();
        state.handle(Message::Pressed(Point::new(10.0, 500.0)));
        state.handle(Message::Moved(Point::new(12.0, 480.0)));
        let changed = gesture(state.handle(Message::Moved(Point::new(15.0, 450.0))));
        assert_eq!(changed.phase, GesturePhase::Changed);
        assert_eq!(changed.translation, Translation::new(5.0, -50.0));
    }

    #[test]
    fn release_ends_with_last_translation() {
        let mut state = State::default();
        state.handle(Message::Pressed(Point::new(0.0, 400.0)));
        state.handle(Message::Moved(Point::new(0.0, 520.0)));
        let ended = gesture(state.handle(Message::Released));
        assert_eq!(ended.phase, GesturePhase::Ended);
        assert_eq!(ended.translation.y, 120.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn lost_pointer_cancels() {
        let mut state = State::default();
        state.handle(Message::Pressed(Point::new(0.0, 400.0)));
        state.handle(Message::Moved(Point::new(0.0, 380.0)));
        let cancelled = gesture(state.handle(Message::Lost));
        assert_eq!(cancelled.phase, GesturePhase::Cancelled);
        assert_eq!(cancelled.translation.y, -20.0);
    }

    #[test]
    fn samples_without_press_are_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Moved(Point::ORIGIN)), Effect::None);
        assert_eq!(state.handle(Message::Released), Effect::None);
        assert_eq!(state.handle(Message::Lost), Effect::None);
    }
}
