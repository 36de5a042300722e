// SPDX-License-Identifier: MPL-2.0
//! Geometry validation errors.

use std::fmt;

/// Reasons a set of sheet bounds is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the values is NaN or infinite.
    NonFinite,

    /// The dismissible threshold is below zero.
    NegativeThreshold(f32),

    /// The dismissible threshold is not strictly below the default height.
    ThresholdAboveDefault { dismissible: f32, default: f32 },

    /// The default height exceeds the maximum height.
    DefaultAboveMaximum { default: f32, maximum: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonFinite => write!(f, "sheet heights must be finite"),
            GeometryError::NegativeThreshold(value) => {
                write!(f, "dismissible height {value} is negative")
            }
            GeometryError::ThresholdAboveDefault {
                dismissible,
                default,
            } => write!(
                f,
                "dismissible height {dismissible} must be below default height {default}"
            ),
            GeometryError::DefaultAboveMaximum { default, maximum } => write!(
                f,
                "default height {default} exceeds maximum height {maximum}"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_bounds() {
        let err = GeometryError::DefaultAboveMaximum {
            default: 300.0,
            maximum: 250.0,
        };
        let message = err.to_string();
        assert!(message.contains("300"));
        assert!(message.contains("250"));
    }
}
