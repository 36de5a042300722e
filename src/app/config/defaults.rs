// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Sheet**: Panel heights, margins and backdrop dimming
//! - **Animation**: Slide, fade and snap durations
//! - **Window**: Initial window size

// ==========================================================================
// Sheet Defaults
// ==========================================================================

/// Resting height of the sheet after presentation.
pub const DEFAULT_SHEET_HEIGHT: f32 = 300.0;

/// Release height below which the sheet is dismissed.
pub const DEFAULT_DISMISSIBLE_HEIGHT: f32 = 200.0;

/// Gap between the top of the window and a fully expanded sheet.
pub const DEFAULT_TOP_MARGIN: f32 = 64.0;

/// Corner radius of the sheet's top edge.
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Backdrop opacity once the sheet is presented.
pub use crate::domain::sheet::DEFAULT_DIMMED_ALPHA;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Panel slide in/out duration (milliseconds).
pub const DEFAULT_SLIDE_MS: u64 = 300;

/// Backdrop fade in/out duration (milliseconds).
pub const DEFAULT_FADE_MS: u64 = 400;

/// Height snap duration after a release (milliseconds).
pub const DEFAULT_SNAP_MS: u64 = 400;

/// Longest accepted animation duration (milliseconds).
pub const MAX_ANIMATION_MS: u64 = 5_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width, roughly a phone in portrait.
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Smallest window the layout supports.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height; leaves room for a default sheet plus margin.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
