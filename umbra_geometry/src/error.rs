// Copyright 2025 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors for geometric values.

use thiserror::Error;

/// Reasons a geometric value could not be constructed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// The two endpoints of a segment coincide within [`POINT_EPSILON`](crate::POINT_EPSILON).
    #[error("segment endpoints coincide")]
    ZeroLengthSegment,
    /// A coordinate or parameter was NaN or infinite.
    #[error("coordinate is not finite")]
    NonFinite,
    /// A circle radius was zero or negative.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    /// A rectangle width or height was zero or negative.
    #[error("size must be positive, got {width}x{height}")]
    NonPositiveSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            GeometryError::NonPositiveRadius(-2.0).to_string(),
            "radius must be positive, got -2"
        );
        assert_eq!(
            GeometryError::NonPositiveSize {
                width: 0.0,
                height: 3.5
            }
            .to_string(),
            "size must be positive, got 0x3.5"
        );
    }
}
