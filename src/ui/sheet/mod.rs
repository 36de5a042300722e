// SPDX-License-Identifier: MPL-2.0
//! Modal bottom sheet component.
//!
//! The component wires three pieces together:
//! - [`drag`] turns pointer samples into drag gestures,
//! - the [`SheetDriver`] applies events to the sheet state machine,
//! - the [`Animator`] renders the resulting layout and animation commands.
//!
//! Completed animations are fed back to the driver on each tick, which is how
//! presentation settles and how dismissal ends in a single `Removed` event.

pub mod animator;
pub mod drag;
pub mod host;
pub mod surface;

pub use animator::Animator;
pub use host::ModalHost;

use crate::domain::sheet::{
    self as domain, resolve_release, Command, DragGesture, GesturePhase, Phase,
    Sheet, SheetDriver,
};
use crate::ui::theming::ColorScheme;
use iced::widget::{canvas, opaque};
use iced::{Element, Length, Size};
use std::mem;
use std::time::Instant;
use surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The sheet has been mounted and should start its entrance.
    Appeared,
    Pointer(drag::Message),
    BackdropTapped,
    /// Close request from outside the sheet (keyboard, host).
    CloseRequested,
    ViewportResized(Size),
    Tick(Instant),
}

/// Events propagated to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The exit animation completed; the host must drop the sheet.
    Removed,
}

/// Sheet component state.
#[derive(Debug, Clone)]
pub struct State {
    driver: SheetDriver,
    animator: Animator,
    drag: drag::State,
    colors: ColorScheme,
    corner_radius: f32,
    viewport: Option<Size>,
    removed: bool,
}

impl State {
    #[must_use]
    pub fn new(sheet: Sheet, colors: ColorScheme, corner_radius: f32, viewport: Option<Size>) -> Self {
        Self {
            animator: Animator::new(&sheet),
            driver: SheetDriver::new(sheet),
            drag: drag::State::default(),
            colors,
            corner_radius,
            viewport,
            removed: false,
        }
    }

    /// Handle a sheet message. `now` is the clock used to start and advance
    /// animations.
    pub fn handle(&mut self, message: Message, now: Instant) -> Event {
        if self.removed {
            return Event::None;
        }

        match message {
            Message::Appeared => self.driver.push(domain::Event::Appeared),
            Message::Pointer(pointer) => {
                if let drag::Effect::Gesture(gesture) = self.drag.handle(pointer) {
                    self.log_release(gesture);
                    self.driver.push(domain::Event::Gesture(gesture));
                }
            }
            Message::BackdropTapped | Message::CloseRequested => {
                self.driver.push(domain::Event::DismissRequested);
            }
            Message::ViewportResized(size) => {
                if self.viewport != Some(size) {
                    self.viewport = Some(size);
                    self.driver.push(domain::Event::ViewportChanged(size.height));
                }
            }
            Message::Tick(instant) => {
                for property in self.animator.tick(instant) {
                    self.driver.push(domain::Event::AnimationFinished(property));
                }
            }
        }

        self.apply_pending(now)
    }

    fn log_release(&self, gesture: DragGesture) {
        let Phase::Dragging(session) = self.phase() else {
            return;
        };
        let translation = match gesture.phase {
            GesturePhase::Ended => gesture.translation,
            GesturePhase::Cancelled => session.last_translation,
            GesturePhase::Began | GesturePhase::Changed => return,
        };
        let candidate = session.candidate(translation);
        let release = resolve_release(
            self.sheet().geometry(),
            candidate,
            session.relative(translation).is_downward(),
        );
        log::debug!("released at {candidate:.1}: {release:?}");
    }

    fn apply_pending(&mut self, now: Instant) -> Event {
        let before = self.driver.sheet().phase();
        let commands = self.driver.drain();
        let after = self.driver.sheet().phase();
        if mem::discriminant(&before) != mem::discriminant(&after) {
            log::debug!("sheet phase {before:?} -> {after:?}");
        }

        let mut event = Event::None;
        for command in commands {
            if command == Command::Remove {
                self.removed = true;
                event = Event::Removed;
            } else {
                self.animator.apply(command, now);
            }
        }
        event
    }

    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let surface = Surface {
            height: self.animator.height(),
            bottom_offset: self.animator.bottom_offset(),
            backdrop_alpha: self.animator.backdrop_alpha(),
            colors: self.colors,
            corner_radius: self.corner_radius,
        };

        opaque(canvas(surface).width(Length::Fill).height(Length::Fill))
    }

    /// Whether a tick subscription is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.removed && self.animator.is_animating()
    }

    #[must_use]
    pub fn sheet(&self) -> &Sheet {
        self.driver.sheet()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.driver.sheet().phase()
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
