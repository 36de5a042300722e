// SPDX-License-Identifier: MPL-2.0
//! Sheet geometry value object and the drag-to-height transform.
//!
//! The geometry bundles the bounds a sheet may occupy together with its
//! current height and bottom offset. Bounds are validated once at
//! construction so that the release rules in [`super::machine`] can rely on
//! `0 <= dismissible < default <= maximum` without re-checking.

use super::error::GeometryError;

/// Bounds and live values of a sheet panel, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    current_height: f32,
    default_height: f32,
    dismissible_height: f32,
    maximum_height: f32,
    bottom_offset: f32,
}

/// Static sheet metrics, independent of the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetMetrics {
    /// Resting height after presentation.
    pub default_height: f32,
    /// Release threshold below which the sheet dismisses.
    pub dismissible_height: f32,
    /// Gap kept between the top of the viewport and a fully expanded sheet.
    pub top_margin: f32,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            default_height: 300.0,
            dismissible_height: 200.0,
            top_margin: 64.0,
        }
    }
}

impl SheetMetrics {
    /// Maximum height for a viewport, never below the default height.
    #[must_use]
    pub fn maximum_for_viewport(&self, viewport_height: f32) -> f32 {
        (viewport_height - self.top_margin).max(self.default_height)
    }
}

impl SheetGeometry {
    /// Creates a geometry resting at `default_height`, fully off-screen.
    ///
    /// # Errors
    ///
    /// Returns an error unless all values are finite and
    /// `0 <= dismissible_height < default_height <= maximum_height`.
    pub fn new(
        default_height: f32,
        dismissible_height: f32,
        maximum_height: f32,
    ) -> Result<Self, GeometryError> {
        if !default_height.is_finite()
            || !dismissible_height.is_finite()
            || !maximum_height.is_finite()
        {
            return Err(GeometryError::NonFinite);
        }
        if dismissible_height < 0.0 {
            return Err(GeometryError::NegativeThreshold(dismissible_height));
        }
        if dismissible_height >= default_height {
            return Err(GeometryError::ThresholdAboveDefault {
                dismissible: dismissible_height,
                default: default_height,
            });
        }
        if default_height > maximum_height {
            return Err(GeometryError::DefaultAboveMaximum {
                default: default_height,
                maximum: maximum_height,
            });
        }

        Ok(Self {
            current_height: default_height,
            default_height,
            dismissible_height,
            maximum_height,
            bottom_offset: default_height,
        })
    }

    /// Creates a geometry whose maximum height is derived from the viewport.
    ///
    /// # Errors
    ///
    /// Returns an error when the metrics themselves violate the bounds.
    pub fn for_viewport(metrics: SheetMetrics, viewport_height: f32) -> Result<Self, GeometryError> {
        Self::new(
            metrics.default_height,
            metrics.dismissible_height,
            metrics.maximum_for_viewport(viewport_height),
        )
    }

    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    #[must_use]
    pub fn default_height(&self) -> f32 {
        self.default_height
    }

    #[must_use]
    pub fn dismissible_height(&self) -> f32 {
        self.dismissible_height
    }

    #[must_use]
    pub fn maximum_height(&self) -> f32 {
        self.maximum_height
    }

    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        self.bottom_offset
    }

    pub(crate) fn set_current_height(&mut self, height: f32) {
        self.current_height = height;
    }

    pub(crate) fn set_bottom_offset(&mut self, offset: f32) {
        self.bottom_offset = offset;
    }

    /// Replaces the maximum height, keeping it at or above the default.
    ///
    /// Returns the clamped current height if it no longer fits.
    pub(crate) fn set_maximum_height(&mut self, maximum: f32) -> Option<f32> {
        self.maximum_height = maximum.max(self.default_height);
        if self.current_height > self.maximum_height {
            self.current_height = self.maximum_height;
            Some(self.current_height)
        } else {
            None
        }
    }
}

/// Height a drag proposes: dragging down (positive translation) shrinks
/// the sheet, dragging up grows it.
#[must_use]
pub fn candidate_height(drag_start_height: f32, translation_y: f32) -> f32 {
    drag_start_height - translation_y
}
