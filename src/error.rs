//! Error types for trueno-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Line rasterization is total over `i32` endpoints; only circle construction
/// can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Circle radius below zero.
    #[error("Invalid radius: {radius} (must be non-negative)")]
    NegativeRadius {
        /// Radius value.
        radius: i32,
    },

    /// Circle boundary would leave the `i32` coordinate range.
    #[error("Coordinate overflow: radius {radius} around ({x}, {y}) exceeds the i32 range")]
    CoordinateOverflow {
        /// Radius value.
        radius: i32,
        /// Center x coordinate.
        x: i32,
        /// Center y coordinate.
        y: i32,
    },
}
