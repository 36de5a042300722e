// SPDX-License-Identifier: MPL-2.0
//! Canvas program that paints the backdrop and the sheet panel, and turns
//! mouse and touch input into sheet messages.
//!
//! The window size reaches the sheet through window events, never through
//! pointer input.

use super::drag;
use super::Message;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Path, Text};
use iced::{mouse, touch, window, Font, Point, Rectangle, Size};

const TITLE: &str = "Bottom Sheet";

const BODY: [&str; 3] = [
    "Drag the handle up to expand the sheet.",
    "Drag it down to collapse or dismiss it.",
    "Tap outside or press Esc to close.",
];

/// Snapshot of everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub height: f32,
    pub bottom_offset: f32,
    pub backdrop_alpha: f32,
    pub colors: ColorScheme,
    pub corner_radius: f32,
}

/// Which pointer currently owns the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    Idle,
    Mouse,
    Finger(touch::Finger),
}

impl Surface {
    /// Panel rectangle in canvas-local coordinates.
    #[must_use]
    pub fn panel(&self, bounds: Size) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: bounds.height - self.height + self.bottom_offset,
            width: bounds.width,
            height: self.height,
        }
    }

    fn press(&self, state: &mut Pointer, owner: Pointer, position: Point, bounds: Size) -> Message {
        if self.panel(bounds).contains(position) {
            *state = owner;
            Message::Pointer(drag::Message::Pressed(position))
        } else {
            Message::BackdropTapped
        }
    }
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for Surface {
    type State = Pointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let message = match (event, *state) {
            (iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), Pointer::Idle) => {
                let position = cursor.position_in(bounds)?;
                self.press(state, Pointer::Mouse, position, bounds.size())
            }
            (iced::Event::Mouse(mouse::Event::CursorMoved { position }), Pointer::Mouse) => {
                Message::Pointer(drag::Message::Moved(local(*position, bounds)))
            }
            (iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), Pointer::Mouse) => {
                *state = Pointer::Idle;
                Message::Pointer(drag::Message::Released)
            }
            (iced::Event::Mouse(mouse::Event::CursorLeft), Pointer::Mouse) => {
                *state = Pointer::Idle;
                Message::Pointer(drag::Message::Lost)
            }
            (iced::Event::Touch(touch::Event::FingerPressed { id, position }), Pointer::Idle) => {
                if !bounds.contains(*position) {
                    return None;
                }
                self.press(state, Pointer::Finger(*id), local(*position, bounds), bounds.size())
            }
            (iced::Event::Touch(touch::Event::FingerMoved { id, position }), Pointer::Finger(owner))
                if *id == owner =>
            {
                Message::Pointer(drag::Message::Moved(local(*position, bounds)))
            }
            (iced::Event::Touch(touch::Event::FingerLifted { id, .. }), Pointer::Finger(owner))
                if *id == owner =>
            {
                *state = Pointer::Idle;
                Message::Pointer(drag::Message::Released)
            }
            (iced::Event::Touch(touch::Event::FingerLost { id, .. }), Pointer::Finger(owner))
                if *id == owner =>
            {
                *state = Pointer::Idle;
                Message::Pointer(drag::Message::Lost)
            }
            (iced::Event::Window(window::Event::Unfocused), Pointer::Mouse | Pointer::Finger(_)) => {
                *state = Pointer::Idle;
                Message::Pointer(drag::Message::Lost)
            }
            _ => return None,
        };

        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            self.colors.backdrop_at(self.backdrop_alpha),
        );

        let panel = self.panel(bounds.size());
        if panel.y >= bounds.height {
            return vec![frame.into_geometry()];
        }

        // Extend below the window edge so only the top corners show.
        let body = Path::rounded_rectangle(
            panel.position(),
            Size::new(panel.width, panel.height + self.corner_radius),
            self.corner_radius.into(),
        );
        frame.fill(&body, self.colors.surface);

        let grabber = Path::rounded_rectangle(
            Point::new(
                (panel.width - sizing::GRABBER_WIDTH) / 2.0,
                panel.y + spacing::XS,
            ),
            Size::new(sizing::GRABBER_WIDTH, sizing::GRABBER_HEIGHT),
            radius::FULL.min(sizing::GRABBER_HEIGHT / 2.0).into(),
        );
        frame.fill(&grabber, self.colors.grabber);

        let mut y = panel.y + spacing::LG + spacing::XS;
        frame.fill_text(Text {
            content: TITLE.to_string(),
            position: Point::new(spacing::LG, y),
            color: self.colors.text_primary,
            size: typography::TITLE_MD.into(),
            font: Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            },
            ..Text::default()
        });

        y += typography::TITLE_MD + spacing::MD;
        for line in BODY {
            frame.fill_text(Text {
                content: line.to_string(),
                position: Point::new(spacing::LG, y),
                color: self.colors.text_secondary,
                size: typography::BODY.into(),
                ..Text::default()
            });
            y += typography::BODY + spacing::XS;
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if *state == Pointer::Mouse {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.panel(bounds.size()).contains(position) => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}
