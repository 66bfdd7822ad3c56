//! Polyline cleanup: greedy removal of near-duplicate consecutive points.
//!
//! A fast O(n) reduction that bounds output size and avoids degenerate
//! zero-length segments in the serialised document. Each point is compared
//! against the last *kept* point only. This is deliberately not a true
//! simplification algorithm (no point is ever reconsidered), which makes
//! the output vertex count deterministic for a given input and tolerance.

use crate::geometry::{Point, Polyline};

/// Reduce a point sequence by dropping points too close to the last kept one.
///
/// The first point is kept unconditionally; each subsequent point is kept
/// only if its squared distance from the last kept point strictly exceeds
/// `tolerance²`. With `tolerance = 0` only exact consecutive duplicates are
/// removed. Sequences of 0 or 1 points pass through unchanged.
pub fn cleanup(points: Vec<Point>, tolerance: f64) -> Polyline {
    let tol_sq = tolerance * tolerance;
    let mut kept: Polyline = Vec::with_capacity(points.len());
    // None until the first point, which is therefore always kept.
    let mut last: Option<Point> = None;

    for p in points {
        let keep = match last {
            Some(prev) => p.distance_sq(&prev) > tol_sq,
            None => true,
        };
        if keep {
            kept.push(p);
            last = Some(p);
        }
    }

    kept
}
