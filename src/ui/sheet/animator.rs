// SPDX-License-Identifier: MPL-2.0
//! Displayed values of a sheet and the tweens driving them.
//!
//! The state machine only knows committed targets. The animator owns what is
//! on screen right now: it applies [`Command`]s as they are produced and
//! advances running tweens on every tick.

use crate::domain::sheet::{Animation, Command, Property, Sheet, Tween};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    values: [f32; 3],
    tweens: [Option<Tween>; 3],
}

impl Animator {
    /// Starts from the values a freshly created sheet reports.
    #[must_use]
    pub fn new(sheet: &Sheet) -> Self {
        let geometry = sheet.geometry();
        let mut values = [0.0; 3];
        values[Property::Height.index()] = geometry.current_height();
        values[Property::BottomOffset.index()] = geometry.bottom_offset();
        values[Property::BackdropAlpha.index()] = sheet.backdrop_alpha();
        Self {
            values,
            tweens: [None; 3],
        }
    }

    #[must_use]
    pub fn value(&self, property: Property) -> f32 {
        self.values[property.index()]
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.value(Property::Height)
    }

    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        self.value(Property::BottomOffset)
    }

    #[must_use]
    pub fn backdrop_alpha(&self) -> f32 {
        self.value(Property::BackdropAlpha)
    }

    /// Applies a layout or animation command. Returns `false` for commands
    /// the animator does not handle.
    pub fn apply(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Layout { property, value } => {
                self.tweens[property.index()] = None;
                self.values[property.index()] = value;
                true
            }
            Command::Animate(animation) => {
                self.start(animation, now);
                true
            }
            Command::Remove => false,
        }
    }

    fn start(&mut self, animation: Animation, now: Instant) {
        let index = animation.property.index();
        // Retargeting mid-flight starts from what is currently displayed.
        if let Some(tween) = self.tweens[index] {
            self.values[index] = tween.sample(now);
        }
        self.tweens[index] = Some(Tween::new(
            self.values[index],
            animation.target,
            animation.duration,
            now,
            animation.easing,
        ));
    }

    /// Advances every running tween and returns the properties that reached
    /// their target.
    pub fn tick(&mut self, now: Instant) -> Vec<Property> {
        let mut finished = Vec::new();
        for property in Property::ALL {
            let index = property.index();
            let Some(tween) = self.tweens[index] else {
                continue;
            };
            self.values[index] = tween.sample(now);
            if tween.is_finished(now) {
                self.values[index] = tween.target();
                self.tweens[index] = None;
                finished.push(property);
            }
        }
        finished
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(Option::is_some)
    }

    #[must_use]
    pub fn is_animating_property(&self, property: Property) -> bool {
        self.tweens[property.index()].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::{Easing, SheetGeometry, Timing};
    use std::time::Duration;

    fn sheet() -> Sheet {
        let geometry = SheetGeometry::new(300.0, 200.0, 700.0).expect("valid bounds");
        Sheet::with_geometry(geometry, 0.6, Timing::default())
    }

    fn animate(property: Property, target: f32, millis: u64) -> Command {
        Command::Animate(Animation {
            property,
            target,
            duration: Duration::from_millis(millis),
            easing: Easing::Linear,
        })
    }

    #[test]
    fn starts_hidden_below_the_window() {
        let animator = Animator::new(&sheet());
        assert_eq!(animator.height(), 300.0);
        assert_eq!(animator.bottom_offset(), 300.0);
        assert_eq!(animator.backdrop_alpha(), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn layout_overrides_running_tween() {
        let now = Instant::now();
        let mut animator = Animator::new(&sheet());
        animator.apply(animate(Property::Height, 700.0, 400), now);
        assert!(animator.is_animating_property(Property::Height));

        animator.apply(
            Command::Layout {
                property: Property::Height,
                value: 420.0,
            },
            now,
        );
        assert_eq!(animator.height(), 420.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn tick_reports_finished_properties_once() {
        let start = Instant::now();
        let mut animator = Animator::new(&sheet());
        animator.apply(animate(Property::BottomOffset, 0.0, 300), start);
        animator.apply(animate(Property::BackdropAlpha, 0.6, 400), start);

        let halfway = animator.tick(start + Duration::from_millis(150));
        assert!(halfway.is_empty());
        assert!((animator.bottom_offset() - 150.0).abs() < 0.01);

        let first = animator.tick(start + Duration::from_millis(300));
        assert_eq!(first, vec![Property::BottomOffset]);
        assert_eq!(animator.bottom_offset(), 0.0);

        let second = animator.tick(start + Duration::from_millis(500));
        assert_eq!(second, vec![Property::BackdropAlpha]);
        assert_eq!(animator.backdrop_alpha(), 0.6);
        assert!(animator.tick(start + Duration::from_millis(600)).is_empty());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let mut animator = Animator::new(&sheet());
        animator.apply(animate(Property::BottomOffset, 0.0, 300), start);

        let midway = start + Duration::from_millis(150);
        animator.apply(animate(Property::BottomOffset, 300.0, 300), midway);
        animator.tick(midway);
        assert!((animator.bottom_offset() - 150.0).abs() < 0.01);
    }

    #[test]
    fn remove_is_not_handled() {
        let mut animator = Animator::new(&sheet());
        assert!(!animator.apply(Command::Remove, Instant::now()));
    }
}
