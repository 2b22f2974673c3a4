//! Geometric primitives for rasterization.
//!
//! Provides the integer value types the rasterizers consume and produce.

use crate::error::{Error, Result};

/// A grid point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the point by `(dx, dy)`.
    ///
    /// Panics on `i32` overflow in debug builds, like any integer addition.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// A line segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// The same segment traversed from `end` to `start`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// True when start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Signed `(Δx, Δy)`, widened so extreme endpoints cannot overflow.
    #[must_use]
    pub fn deltas(&self) -> (i64, i64) {
        (
            i64::from(self.end.x) - i64::from(self.start.x),
            i64::from(self.end.y) - i64::from(self.start.y),
        )
    }

    /// Number of steps along the driving axis: `max(|Δx|, |Δy|)`.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        let (dx, dy) = self.deltas();
        dx.unsigned_abs().max(dy.unsigned_abs())
    }
}

/// A circle described by an integer radius and a center point.
///
/// Only constructible through [`CircleSpec::new`], so every value is known to
/// have a non-negative radius and a boundary that fits in `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleSpec {
    radius: i32,
    center: Point,
}

impl CircleSpec {
    /// Create a circle, validating the radius and the coordinate range.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeRadius`] if `radius < 0`, and
    /// [`Error::CoordinateOverflow`] if `center ± radius` leaves the `i32` range
    /// on either axis.
    pub fn new(radius: i32, center: Point) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius { radius });
        }

        let fits = |c: i32| c.checked_add(radius).is_some() && c.checked_sub(radius).is_some();
        if !fits(center.x) || !fits(center.y) {
            return Err(Error::CoordinateOverflow {
                radius,
                x: center.x,
                y: center.y,
            });
        }

        Ok(Self { radius, center })
    }

    /// Circle radius, always `>= 0`.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(3, -4).offset(-3, 4);
        assert_eq!(p, Point::ORIGIN);
    }

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point = (7, -2).into();
        assert_eq!(p, Point::new(7, -2));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (7, -2));
    }

    #[test]
    fn test_segment_step_count() {
        assert_eq!(Segment::from_coords(0, 0, 5, 2).step_count(), 5);
        assert_eq!(Segment::from_coords(0, 0, -2, -7).step_count(), 7);
        assert_eq!(Segment::from_coords(4, 4, 4, 4).step_count(), 0);
    }

    #[test]
    fn test_segment_step_count_extreme() {
        let seg = Segment::from_coords(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(seg.step_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_segment_reversed() {
        let seg = Segment::from_coords(1, 2, 3, 4);
        assert_eq!(seg.reversed(), Segment::from_coords(3, 4, 1, 2));
        assert!(!seg.is_degenerate());
        assert!(Segment::from_coords(5, 5, 5, 5).is_degenerate());
    }

    #[test]
    fn test_circle_spec_rejects_negative_radius() {
        let err = CircleSpec::new(-1, Point::ORIGIN).unwrap_err();
        assert_eq!(err, Error::NegativeRadius { radius: -1 });
    }

    #[test]
    fn test_circle_spec_rejects_overflow() {
        assert!(matches!(
            CircleSpec::new(1, Point::new(i32::MAX, 0)),
            Err(Error::CoordinateOverflow { .. })
        ));
        assert!(matches!(
            CircleSpec::new(1, Point::new(0, i32::MIN)),
            Err(Error::CoordinateOverflow { .. })
        ));
    }

    #[test]
    fn test_circle_spec_accepts_boundary() {
        let spec = CircleSpec::new(10, Point::new(i32::MAX - 10, i32::MIN + 10)).unwrap();
        assert_eq!(spec.radius(), 10);
        assert_eq!(spec.center(), Point::new(i32::MAX - 10, i32::MIN + 10));
        assert!(CircleSpec::new(0, Point::new(i32::MAX, i32::MIN)).is_ok());
    }
}
