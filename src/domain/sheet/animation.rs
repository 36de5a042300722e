// SPDX-License-Identifier: MPL-2.0
//! Time-boxed interpolation for sheet properties.

use std::time::{Duration, Instant};

/// Properties of a sheet that can be written or animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Panel height.
    Height,
    /// Distance of the panel below the container bottom.
    BottomOffset,
    /// Opacity of the dimmed backdrop.
    BackdropAlpha,
}

impl Property {
    pub const ALL: [Property; 3] = [
        Property::Height,
        Property::BottomOffset,
        Property::BackdropAlpha,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Property::Height => 0,
            Property::BottomOffset => 1,
            Property::BackdropAlpha => 2,
        }
    }
}

/// Easing curves applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the curve used for every sheet transition.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Durations of the three kinds of sheet animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Panel slide in and out.
    pub slide: Duration,
    /// Backdrop fade in and out.
    pub fade: Duration,
    /// Height snap after a release.
    pub snap: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            slide: Duration::from_millis(300),
            fade: Duration::from_millis(400),
            snap: Duration::from_millis(400),
        }
    }
}

/// A single interpolation from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Instant,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Instant, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`; exactly `to` once finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}
