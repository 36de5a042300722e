// SPDX-License-Identifier: MPL-2.0
//! Bottom sheet domain: geometry, gestures, animation timing and the
//! presentation state machine.
//!
//! Everything here is pure and clock-free except [`animation::Tween`], which
//! samples against an [`std::time::Instant`] supplied by the caller.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod machine;
pub mod queue;

pub use animation::{Easing, Property, Timing, Tween};
pub use error::GeometryError;
pub use geometry::{candidate_height, SheetGeometry, SheetMetrics};
pub use gesture::{DragGesture, GesturePhase, Translation};
pub use machine::{
    resolve_release, Animation, Command, DragSession, Event, Phase, Release, Sheet, SheetConfig,
    Transition, DEFAULT_DIMMED_ALPHA,
};
pub use queue::SheetDriver;
