//! Circle rasterization.
//!
//! Midpoint circle algorithm with eight-way symmetry. Only the first-octant
//! arc, from `(r, 0)` up to the 45° diagonal, is generated; the other seven
//! octants are mirror images placed by index into a single output buffer.
//!
//! # Output Layout
//!
//! With `N` first-octant points, the output holds `4·Q` points where
//! `Q = 2N − 1 − overflow`. The buffer walks the circumference
//! counter-clockwise (y-up) starting at `(cx + r, cy)`, and index `k·Q` holds
//! the axis anchor of quadrant `k`. When the arc ends exactly on the diagonal
//! (`overflow`), that point is shared by two octants and placed once per
//! quadrant.

use super::Rasterize;
use crate::error::{Error, Result};
use crate::geometry::{CircleSpec, Point};

/// Rasterize the circle of `radius` around `(x_center, y_center)`.
///
/// # Errors
///
/// [`Error::NegativeRadius`] for `radius < 0`; [`Error::CoordinateOverflow`]
/// if the circle leaves the `i32` coordinate range.
///
/// ```
/// use trueno_raster::{circle, Point};
///
/// let points = circle(1, 0, 0)?;
/// assert_eq!(points, vec![Point::new(1, 0), Point::new(0, 1), Point::new(-1, 0), Point::new(0, -1)]);
/// # Ok::<(), trueno_raster::Error>(())
/// ```
pub fn circle(radius: i32, x_center: i32, y_center: i32) -> Result<Vec<Point>> {
    let spec = CircleSpec::new(radius, Point::new(x_center, y_center))?;
    Ok(rasterize_circle(&spec))
}

/// Rasterize a validated circle.
#[must_use]
pub fn rasterize_circle(spec: &CircleSpec) -> Vec<Point> {
    let center = spec.center();
    if spec.radius() == 0 {
        return vec![center];
    }

    let arc = octant_arc(spec.radius());
    let Some(layout) = OctantLayout::from_arc(&arc) else {
        return vec![center];
    };

    let q = layout.quadrant_len();
    let at = |x: i32, y: i32| center.offset(x, y);
    let mut points = vec![center; layout.point_count()];

    // Axis anchors at 0°, 90°, 180° and 270°.
    let Point { x: x0, y: y0 } = arc[0];
    points[0] = at(x0, y0);
    points[q] = at(y0, x0);
    points[2 * q] = at(-x0, y0);
    points[3 * q] = at(-y0, -x0);

    // Diagonal points shared by two octants.
    if layout.overflow() {
        let k = layout.steps() - 1;
        let Point { x, y } = arc[k];
        points[k] = at(x, y);
        points[2 * q - k] = at(-x, y);
        points[2 * q + k] = at(-x, -y);
        points[4 * q - k] = at(x, -y);
    }

    for (m, &Point { x, y }) in arc.iter().enumerate().take(layout.mirrored()).skip(1) {
        points[m] = at(x, y);
        points[q - m] = at(y, x);
        points[q + m] = at(-y, x);
        points[2 * q - m] = at(-x, y);
        points[2 * q + m] = at(-x, -y);
        points[3 * q - m] = at(-y, -x);
        points[3 * q + m] = at(y, -x);
        points[4 * q - m] = at(x, -y);
    }

    points
}

/// First-octant arc of a circle centered at the origin.
///
/// Starts at `(radius, 0)`; each step raises y by one and lowers x by at most
/// one, ending at or just below the 45° diagonal. Radius 0 yields the origin.
///
/// # Errors
///
/// [`Error::NegativeRadius`] for `radius < 0`.
pub fn first_octant(radius: i32) -> Result<Vec<Point>> {
    if radius < 0 {
        return Err(Error::NegativeRadius { radius });
    }
    Ok(octant_arc(radius))
}

/// Number of points a circle of `radius` rasterizes to, without assembling it.
///
/// # Errors
///
/// [`Error::NegativeRadius`] for `radius < 0`.
pub fn circle_point_count(radius: i32) -> Result<usize> {
    let arc = first_octant(radius)?;
    Ok(OctantLayout::from_arc(&arc).map_or(1, |layout| layout.point_count()))
}

/// Point-count bookkeeping for mirroring one first-octant arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctantLayout {
    steps: usize,
    overflow: bool,
}

impl OctantLayout {
    /// Derive the layout of an arc produced by [`first_octant`].
    ///
    /// Returns `None` for the radius-0 arc, which has no octants to mirror.
    #[must_use]
    pub fn from_arc(arc: &[Point]) -> Option<Self> {
        match arc {
            [] | [Point::ORIGIN] => None,
            [.., last] => Some(Self {
                steps: arc.len(),
                overflow: last.x == last.y,
            }),
        }
    }

    /// First-octant point count `N`.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// True when the arc ends exactly on the 45° diagonal.
    #[must_use]
    pub const fn overflow(&self) -> bool {
        self.overflow
    }

    /// Points mirrored through all eight octants, `M = N − overflow`.
    #[must_use]
    pub fn mirrored(&self) -> usize {
        self.steps - usize::from(self.overflow)
    }

    /// Points in one quadrant, `Q = 2N − 1 − overflow`.
    #[must_use]
    pub fn quadrant_len(&self) -> usize {
        2 * self.steps - 1 - usize::from(self.overflow)
    }

    /// Total points in the assembled circle, `4·Q`.
    #[must_use]
    pub fn point_count(&self) -> usize {
        4 * self.quadrant_len()
    }
}

fn octant_arc(radius: i32) -> Vec<Point> {
    if radius == 0 {
        return vec![Point::ORIGIN];
    }

    let steps = octant_steps(radius.unsigned_abs());

    // 4·r² overflows i64 near i32::MAX.
    let r = i128::from(radius);
    let tau = 4 * r * r - 5;

    let mut arc = Vec::with_capacity(steps);
    let mut current = Point::new(radius, 0);
    arc.push(current);

    for _ in 1..steps {
        let x = i128::from(current.x);
        let y = i128::from(current.y);
        let decrement = 4 * (x * x - x + y * y + 2 * y) >= tau;

        current = Point::new(current.x - i32::from(decrement), current.y + 1);
        arc.push(current);
    }

    arc
}

/// `floor(r / √2) + 1`, computed as `isqrt(floor(r² / 2)) + 1`.
fn octant_steps(radius: u32) -> usize {
    let half_square = u64::from(radius) * u64::from(radius) / 2;

    let mut root = (half_square as f64).sqrt() as u64;
    while root * root > half_square {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= half_square {
        root += 1;
    }

    root as usize + 1
}

impl Rasterize for CircleSpec {
    fn rasterize(&self) -> Vec<Point> {
        rasterize_circle(self)
    }

    fn pixel_count(&self) -> usize {
        let arc = octant_arc(self.radius());
        OctantLayout::from_arc(&arc).map_or(1, |layout| layout.point_count())
    }
}

// ============================================================================
// Tests
// ============================================================================
