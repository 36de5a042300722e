// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `Message` type, handles it, and reports an `Event` to its
//! parent.
//!
//! # Screens
//!
//! - [`home`] - Landing screen with the "Get Started" call to action
//! - [`sheet`] - Draggable, dismissible modal bottom sheet and its host
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod home;
pub mod sheet;
pub mod styles;
pub mod theming;
