// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core interaction logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) so that the
//! sheet behavior can be tested without a window or a renderer.
//!
//! # Modules
//!
//! - [`sheet`]: Bottom sheet geometry ([`SheetGeometry`](sheet::SheetGeometry)),
//!   gesture samples ([`DragGesture`](sheet::DragGesture)), tweens
//!   ([`Tween`](sheet::Tween)) and the state machine ([`Sheet`](sheet::Sheet))

pub mod sheet;
