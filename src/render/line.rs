//! Line rasterization.
//!
//! A generalized Bresenham variant that handles every octant with a single
//! integer decision predicate. The axis with the larger delta drives the
//! iteration and advances every step; the orthogonal axis advances only when
//! the predicate fires.
//!
//! # Decision Predicate
//!
//! With `N = |Δ_I|` driving steps and `s = sgn(Δ_O)`, the orthogonal coordinate
//! advances after step `n` when
//!
//! ```text
//! 2·s·(n·Δ_O − N·O_n) ≥ T,    T = N − 2·s·((N − 1)·O_1 + O_2) + [s > 0]
//! ```
//!
//! where `O_n` is the orthogonal coordinate of the point already placed at step
//! `n`. The `[s > 0]` term resolves exact half-pixel ties toward the smaller
//! orthogonal coordinate regardless of travel direction, so a segment and its
//! reverse rasterize to the same pixels.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use super::Rasterize;
use crate::geometry::{Point, Segment};

/// Rasterize the segment from `(x1, y1)` to `(x2, y2)`.
///
/// Returns `max(|Δx|, |Δy|) + 1` points, ordered from start to end.
///
/// ```
/// use trueno_raster::{line, Point};
///
/// let points = line(0, 0, 3, 3);
/// assert_eq!(points, vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]);
/// ```
#[must_use]
pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Point> {
    rasterize_line(Segment::from_coords(x1, y1, x2, y2))
}

/// Rasterize a segment with the general single-formula algorithm.
///
/// Horizontal, vertical and 45° segments need no special handling: the
/// predicate degenerates to "never" or "always" for them.
#[must_use]
pub fn rasterize_line(segment: Segment) -> Vec<Point> {
    let Segment { start, end } = segment;
    let (dx, dy) = segment.deltas();

    let non_steep = dx.abs() > dy.abs();
    let (delta_i, delta_o) = if non_steep { (dx, dy) } else { (dy, dx) };
    let (o_start, o_end) = if non_steep { (start.y, end.y) } else { (start.x, end.x) };

    let step_x = unit_step(dx);
    let step_y = unit_step(dy);

    let steps = delta_i.unsigned_abs();

    // Products of a u32-sized step count and i32-sized coordinates overflow i64.
    let n = i128::from(steps);
    let delta_o = i128::from(delta_o);
    let sgn_o: i128 = if delta_o >= 0 { 1 } else { -1 };
    let threshold = n - 2 * sgn_o * ((n - 1) * i128::from(o_start) + i128::from(o_end))
        + i128::from(sgn_o > 0);

    let mut points = Vec::with_capacity(steps as usize + 1);
    points.push(start);

    let mut current = start;
    for step in 0..steps.saturating_sub(1) {
        let o_n = i128::from(if non_steep { current.y } else { current.x });
        let advance = 2 * sgn_o * (i128::from(step) * delta_o - n * o_n) >= threshold;

        current = Point::new(
            current.x + if non_steep || advance { step_x } else { 0 },
            current.y + if !non_steep || advance { step_y } else { 0 },
        );
        points.push(current);
    }

    if steps > 0 {
        points.push(end);
    }

    debug_assert_eq!(points.len() as u64, steps + 1);
    points
}

/// Rasterize a segment with dedicated fast paths for vertical, horizontal and
/// 45° segments.
///
/// Those three slopes reduce to a fixed unit step on one or both axes, so no
/// decision needs to be evaluated. Every other slope falls through to
/// [`rasterize_line`]. Output is identical to [`rasterize_line`] for all
/// inputs.
#[must_use]
pub fn rasterize_line_specialized(segment: Segment) -> Vec<Point> {
    let (dx, dy) = segment.deltas();

    if dx == 0 {
        unit_run(segment, 0, unit_step(dy), dy.unsigned_abs())
    } else if dy == 0 {
        unit_run(segment, unit_step(dx), 0, dx.unsigned_abs())
    } else if dx.abs() == dy.abs() {
        unit_run(segment, unit_step(dx), unit_step(dy), dx.unsigned_abs())
    } else {
        rasterize_line(segment)
    }
}

/// Walk `steps` fixed unit steps from the segment start, pinning the end.
fn unit_run(segment: Segment, step_x: i32, step_y: i32, steps: u64) -> Vec<Point> {
    let mut points = Vec::with_capacity(steps as usize + 1);
    points.push(segment.start);

    let mut current = segment.start;
    for _ in 0..steps.saturating_sub(1) {
        current = current.offset(step_x, step_y);
        points.push(current);
    }

    if steps > 0 {
        points.push(segment.end);
    }
    points
}

/// `+1` for non-negative deltas, `-1` otherwise.
#[inline]
fn unit_step(delta: i64) -> i32 {
    if delta >= 0 {
        1
    } else {
        -1
    }
}

impl Rasterize for Segment {
    fn rasterize(&self) -> Vec<Point> {
        rasterize_line(*self)
    }

    fn pixel_count(&self) -> usize {
        self.step_count() as usize + 1
    }
}

// ============================================================================
// Tests
// ============================================================================
