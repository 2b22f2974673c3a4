//! Rasterization of geometric primitives.
//!
//! Converts line segments and circles into the integer grid points that best
//! approximate them, using integer arithmetic only.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: octant-agnostic, single decision predicate
//! - **Midpoint Circle**: first-octant arc mirrored through eight-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;

use crate::geometry::Point;

pub use circle::{circle, circle_point_count, first_octant, rasterize_circle, OctantLayout};
pub use line::{line, rasterize_line, rasterize_line_specialized};

/// Trait for shapes that rasterize to grid points.
///
/// Each call allocates a fresh buffer owned by the caller; nothing is cached
/// between calls.
pub trait Rasterize {
    /// Grid points approximating this shape.
    fn rasterize(&self) -> Vec<Point>;

    /// Number of points [`Rasterize::rasterize`] returns.
    fn pixel_count(&self) -> usize {
        self.rasterize().len()
    }
}
