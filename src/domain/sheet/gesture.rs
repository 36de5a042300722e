// SPDX-License-Identifier: MPL-2.0
//! Continuous drag gesture samples.

/// Phase of a drag gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// The platform took the gesture away (focus loss, finger lost).
    Cancelled,
}

/// Cumulative translation since the gesture began, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Translation = Translation { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Positive vertical translation means the finger moved down.
    #[must_use]
    pub fn is_downward(self) -> bool {
        self.y > 0.0
    }
}

/// One sample delivered by the gesture source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub phase: GesturePhase,
    pub translation: Translation,
}

impl DragGesture {
    #[must_use]
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: Translation::ZERO,
        }
    }

    #[must_use]
    pub fn changed(translation: Translation) -> Self {
        Self {
            phase: GesturePhase::Changed,
            translation,
        }
    }

    #[must_use]
    pub fn ended(translation: Translation) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation,
        }
    }

    #[must_use]
    pub fn cancelled(translation: Translation) -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            translation,
        }
    }
}
