//! Command interpretation: walk a command sequence into a raw point list.
//!
//! The walk keeps a "current point" cursor threaded through a fold
//! (`None` until the first `MoveTo`) rather than mutating shared state, so
//! the stage stays a pure function of its input. Cubic curves are sampled
//! at fixed parameter steps in increasing order.
//!
//! ## Endpoint exactness
//!
//! The final curve sample is pushed as the literal endpoint rather than
//! evaluated at an accumulated parameter value. Accumulating `t += step`
//! in floating point can stop short of 1.0 and truncate the curve just
//! before its true endpoint, which downstream consumers see as a gap
//! between adjacent segments.

use crate::geometry::{cubic_point, Point};
use crate::pipeline::tokenize::Command;

/// Flatten a command sequence into the raw, pre-cleanup point sequence.
///
/// `steps` is the number of parameter increments per cubic segment, so one
/// curve contributes `steps + 1` points. A curve that arrives before any
/// `MoveTo` has no start point to resolve against and is dropped silently;
/// it cannot contribute geometry.
pub fn flatten(commands: &[Command], steps: u32) -> Vec<Point> {
    let mut points = Vec::new();
    let mut current: Option<Point> = None;

    for command in commands {
        match *command {
            Command::MoveTo { x, y } | Command::LineTo { x, y } => {
                let p = Point::new(x, y);
                points.push(p);
                current = Some(p);
            }
            Command::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let Some(p0) = current else {
                    continue;
                };
                let p1 = Point::new(x1, y1);
                let p2 = Point::new(x2, y2);
                let p3 = Point::new(x, y);

                for i in 0..=steps {
                    if i == steps {
                        // Clamp: the last sample is the literal endpoint.
                        points.push(p3);
                    } else {
                        let t = f64::from(i) / f64::from(steps);
                        points.push(cubic_point(p0, p1, p2, p3, t));
                    }
                }
                current = Some(p3);
            }
        }
    }

    points
}
