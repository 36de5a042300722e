// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine of a bottom sheet.
//!
//! A [`Sheet`] is a plain `Copy` value. [`Sheet::step`] consumes it together
//! with one [`Event`] and returns the next sheet plus the [`Command`]s the
//! layout layer has to carry out. Nothing here knows about widgets, clocks
//! or input devices: gesture samples, animation completions and dismissal
//! requests all arrive as events.
//!
//! ```text
//! Initializing ─Appeared─▶ Presenting ─both animations done─▶ Resting
//!                                                            │    ▲
//!                                                   Changed  ▼    │ Ended/Cancelled
//!                                                          Dragging
//!                                                            │ release below threshold
//!                                                            ▼
//!                           Dismissed ◀─alpha done─ Dismissing
//! ```

use super::animation::{Easing, Property, Timing};
use super::error::GeometryError;
use super::geometry::{candidate_height, SheetGeometry, SheetMetrics};
use super::gesture::{DragGesture, GesturePhase, Translation};
use std::time::Duration;

/// Backdrop opacity once the sheet is fully presented.
pub const DEFAULT_DIMMED_ALPHA: f32 = 0.6;

/// Lifecycle phase of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Initializing,
    Presenting,
    Resting,
    Dragging(DragSession),
    Dismissing,
    Dismissed,
}

/// Bookkeeping for an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Committed height when the drag started.
    pub start_height: f32,
    /// Translation the gesture had already accumulated when the session
    /// opened. Movement before that point never reaches the sheet.
    pub base_translation: Translation,
    /// Most recent translation reported by the gesture source.
    pub last_translation: Translation,
}

impl DragSession {
    /// Translation accumulated since the session opened.
    #[must_use]
    pub fn relative(&self, translation: Translation) -> Translation {
        Translation::new(
            translation.x - self.base_translation.x,
            translation.y - self.base_translation.y,
        )
    }

    /// Height proposed by `translation`, measured from the session start.
    #[must_use]
    pub fn candidate(&self, translation: Translation) -> f32 {
        candidate_height(self.start_height, self.relative(translation).y)
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The sheet became visible for the first time.
    Appeared,
    /// A drag gesture sample.
    Gesture(DragGesture),
    /// An animation started by a [`Command::Animate`] reached its target.
    AnimationFinished(Property),
    /// Backdrop tap, Escape key or any other explicit close request.
    DismissRequested,
    /// The container height changed.
    ViewportChanged(f32),
}

/// Eased, time-boxed transition of one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub property: Property,
    pub target: f32,
    pub duration: Duration,
    pub easing: Easing,
}

/// Side effects requested from the layout layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Write a value immediately, cancelling any animation of that property.
    Layout { property: Property, value: f32 },
    /// Start an animation from the currently displayed value.
    Animate(Animation),
    /// Remove the sheet from its host without further animation.
    Remove,
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Dismiss,
    SnapToDefault,
    SnapToMaximum,
    Stay,
}

/// Decides where a released sheet goes. Rules are checked in order and the
/// first match wins.
#[must_use]
pub fn resolve_release(geometry: &SheetGeometry, candidate: f32, dragging_down: bool) -> Release {
    if candidate < geometry.dismissible_height() {
        Release::Dismiss
    } else if candidate < geometry.default_height() {
        Release::SnapToDefault
    } else if candidate < geometry.maximum_height() && dragging_down {
        Release::SnapToDefault
    } else if candidate > geometry.default_height() && !dragging_down {
        Release::SnapToMaximum
    } else {
        Release::Stay
    }
}

/// Animations that have been started and not yet reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Pending([bool; 3]);

impl Pending {
    fn insert(&mut self, property: Property) {
        self.0[property.index()] = true;
    }

    fn remove(&mut self, property: Property) {
        self.0[property.index()] = false;
    }

    fn contains(self, property: Property) -> bool {
        self.0[property.index()]
    }

    fn is_empty(self) -> bool {
        !self.0.iter().any(|pending| *pending)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub sheet: Sheet,
    pub commands: Vec<Command>,
}

/// Static configuration of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    pub metrics: SheetMetrics,
    pub dimmed_alpha: f32,
    pub timing: Timing,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            metrics: SheetMetrics::default(),
            dimmed_alpha: DEFAULT_DIMMED_ALPHA,
            timing: Timing::default(),
        }
    }
}

/// Owned state of one sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sheet {
    geometry: SheetGeometry,
    phase: Phase,
    backdrop_alpha: f32,
    dimmed_alpha: f32,
    metrics: SheetMetrics,
    timing: Timing,
    pending: Pending,
    /// Translation of the gesture in progress, tracked in every phase.
    gesture_translation: Translation,
}

impl Sheet {
    /// Creates an initializing sheet sized for `viewport_height`.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured metrics violate the height bounds.
    pub fn new(config: SheetConfig, viewport_height: f32) -> Result<Self, GeometryError> {
        let geometry = SheetGeometry::for_viewport(config.metrics, viewport_height)?;
        Ok(Self {
            geometry,
            phase: Phase::Initializing,
            backdrop_alpha: 0.0,
            dimmed_alpha: config.dimmed_alpha.clamp(0.0, 1.0),
            metrics: config.metrics,
            timing: config.timing,
            pending: Pending::default(),
            gesture_translation: Translation::ZERO,
        })
    }

    /// Creates an initializing sheet from explicit geometry.
    #[must_use]
    pub fn with_geometry(geometry: SheetGeometry, dimmed_alpha: f32, timing: Timing) -> Self {
        let metrics = SheetMetrics {
            default_height: geometry.default_height(),
            dismissible_height: geometry.dismissible_height(),
            ..SheetMetrics::default()
        };
        Self {
            geometry,
            phase: Phase::Initializing,
            backdrop_alpha: 0.0,
            dimmed_alpha: dimmed_alpha.clamp(0.0, 1.0),
            metrics,
            timing,
            pending: Pending::default(),
            gesture_translation: Translation::ZERO,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn backdrop_alpha(&self) -> f32 {
        self.backdrop_alpha
    }

    #[must_use]
    pub fn dimmed_alpha(&self) -> f32 {
        self.dimmed_alpha
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// Whether the sheet is on its way out or already gone.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Dismissing | Phase::Dismissed)
    }

    /// Applies one event.
    #[must_use]
    pub fn step(mut self, event: Event) -> Transition {
        let mut commands = Vec::new();
        match event {
            Event::Appeared => self.on_appeared(&mut commands),
            Event::Gesture(gesture) => self.on_gesture(gesture, &mut commands),
            Event::AnimationFinished(property) => self.on_animation_finished(property, &mut commands),
            Event::DismissRequested => self.on_dismiss_requested(&mut commands),
            Event::ViewportChanged(height) => self.on_viewport_changed(height, &mut commands),
        }
        Transition {
            sheet: self,
            commands,
        }
    }

    fn on_appeared(&mut self, commands: &mut Vec<Command>) {
        if self.phase != Phase::Initializing {
            return;
        }
        self.phase = Phase::Presenting;
        self.backdrop_alpha = self.dimmed_alpha;
        self.geometry.set_bottom_offset(0.0);
        self.animate(Property::BackdropAlpha, self.dimmed_alpha, self.timing.fade, commands);
        self.animate(Property::BottomOffset, 0.0, self.timing.slide, commands);
    }

    fn on_gesture(&mut self, gesture: DragGesture, commands: &mut Vec<Command>) {
        let previous = self.gesture_translation;
        self.gesture_translation = match gesture.phase {
            GesturePhase::Changed => gesture.translation,
            GesturePhase::Began | GesturePhase::Ended | GesturePhase::Cancelled => {
                Translation::ZERO
            }
        };

        match (gesture.phase, self.phase) {
            (GesturePhase::Changed, Phase::Resting) => {
                // A drag takes over any height snap still in flight.
                self.pending.remove(Property::Height);
                let session = DragSession {
                    start_height: self.geometry.current_height(),
                    base_translation: previous,
                    last_translation: gesture.translation,
                };
                self.track(session, commands);
            }
            (GesturePhase::Changed, Phase::Dragging(mut session)) => {
                session.last_translation = gesture.translation;
                self.track(session, commands);
            }
            (GesturePhase::Ended, Phase::Dragging(session)) => {
                self.release(session, gesture.translation, commands);
            }
            (GesturePhase::Cancelled, Phase::Dragging(session)) => {
                self.release(session, session.last_translation, commands);
            }
            _ => {}
        }
    }

    fn track(&mut self, session: DragSession, commands: &mut Vec<Command>) {
        self.phase = Phase::Dragging(session);
        let candidate = session.candidate(session.last_translation);
        if candidate < self.geometry.maximum_height() {
            self.geometry.set_current_height(candidate);
            commands.push(Command::Layout {
                property: Property::Height,
                value: candidate,
            });
        }
    }

    fn release(&mut self, session: DragSession, translation: Translation, commands: &mut Vec<Command>) {
        let candidate = session.candidate(translation);
        let dragging_down = session.relative(translation).is_downward();
        match resolve_release(&self.geometry, candidate, dragging_down) {
            Release::Dismiss => self.enter_dismissing(commands),
            Release::SnapToDefault => self.snap(self.geometry.default_height(), commands),
            Release::SnapToMaximum => self.snap(self.geometry.maximum_height(), commands),
            Release::Stay => self.phase = Phase::Resting,
        }
    }

    fn snap(&mut self, height: f32, commands: &mut Vec<Command>) {
        self.phase = Phase::Resting;
        self.geometry.set_current_height(height);
        self.animate(Property::Height, height, self.timing.snap, commands);
    }

    fn on_animation_finished(&mut self, property: Property, commands: &mut Vec<Command>) {
        if !self.pending.contains(property) {
            return;
        }
        self.pending.remove(property);
        match self.phase {
            Phase::Presenting if self.pending.is_empty() => self.phase = Phase::Resting,
            Phase::Dismissing if property == Property::BackdropAlpha => {
                self.phase = Phase::Dismissed;
                self.pending = Pending::default();
                commands.push(Command::Remove);
            }
            _ => {}
        }
    }

    fn on_dismiss_requested(&mut self, commands: &mut Vec<Command>) {
        match self.phase {
            Phase::Initializing => {
                self.phase = Phase::Dismissed;
                commands.push(Command::Remove);
            }
            Phase::Presenting | Phase::Resting | Phase::Dragging(_) => {
                self.enter_dismissing(commands);
            }
            Phase::Dismissing | Phase::Dismissed => {}
        }
    }

    fn enter_dismissing(&mut self, commands: &mut Vec<Command>) {
        self.phase = Phase::Dismissing;
        self.pending = Pending::default();
        self.backdrop_alpha = 0.0;
        let offset = self.geometry.default_height();
        self.geometry.set_bottom_offset(offset);
        self.animate(Property::BottomOffset, offset, self.timing.slide, commands);
        self.animate(Property::BackdropAlpha, 0.0, self.timing.fade, commands);
    }

    fn on_viewport_changed(&mut self, height: f32, commands: &mut Vec<Command>) {
        if !height.is_finite() || height <= 0.0 {
            return;
        }
        let maximum = self.metrics.maximum_for_viewport(height);
        if let Some(clamped) = self.geometry.set_maximum_height(maximum) {
            if !self.is_leaving() {
                self.pending.remove(Property::Height);
                commands.push(Command::Layout {
                    property: Property::Height,
                    value: clamped,
                });
            }
        }
    }

    fn animate(
        &mut self,
        property: Property,
        target: f32,
        duration: Duration,
        commands: &mut Vec<Command>,
    ) {
        self.pending.insert(property);
        commands.push(Command::Animate(Animation {
            property,
            target,
            duration,
            easing: Easing::EaseInOut,
        }));
    }
}
