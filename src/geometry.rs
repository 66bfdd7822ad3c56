//! Plain 2-D geometry: points, polylines, and cubic Bézier evaluation.
//!
//! Coordinates carry no unit system; they pass through from the source
//! markup unchanged. Everything here is `Copy` and allocation-free except
//! the [`Polyline`] container itself.

use serde::{Deserialize, Serialize};

/// An immutable pair of floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Used by the cleanup stage so thresholds compare against `tolerance²`
    /// without ever taking a square root.
    #[inline]
    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from(val: (f64, f64)) -> Point {
        Point { x: val.0, y: val.1 }
    }
}

/// An ordered sequence of points representing one traced path.
///
/// A polyline with fewer than 2 points is not meaningful and must be
/// filtered out before serialization.
pub type Polyline = Vec<Point>;

/// Evaluates a cubic Bézier curve at parameter `t` in `[0, 1]`.
///
/// Standard Bernstein form:
/// `B(t) = (1-t)³·p0 + 3(1-t)²·t·p1 + 3(1-t)·t²·p2 + t³·p3`
#[inline]
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    Point::new(
        mt * mt2 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t * t2 * p3.x,
        mt * mt2 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t * t2 * p3.y,
    )
}
