//! Tokenizer adapter: raw path data → absolute-coordinate drawing commands.
//!
//! The path mini-language itself is parsed by the external `svgtypes`
//! tokenizer; this module only normalises its segments. Two things happen
//! here:
//!
//! 1. **Absolutisation.** `svgtypes` reports each segment with an `abs`
//!    flag and raw coordinates. The adapter threads the current pen
//!    position through *every* segment type (including the ones that
//!    produce no output command) so relative coordinates later in the
//!    stream resolve correctly. `ClosePath` resets the pen to the start of
//!    the current subpath.
//!
//! 2. **Command surface reduction.** Only `MoveTo`, `LineTo`, and `CurveTo`
//!    become [`Command`]s. Horizontal/vertical lines, smooth and quadratic
//!    curves, and arcs advance the pen but emit nothing, so they contribute
//!    no geometry downstream.
//!
//! The first tokenizer error aborts the stream for that path; the caller
//! decides whether that fails the conversion or just skips the path.

use svgtypes::{PathParser, PathSegment};

/// One drawing command with coordinates already normalised to absolute form.
///
/// This is the complete command surface the flattening stage understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Lift the pen and start a new figure at `(x, y)`.
    MoveTo { x: f64, y: f64 },
    /// Draw a straight segment to `(x, y)`.
    LineTo { x: f64, y: f64 },
    /// Draw a cubic Bézier with control points `(x1, y1)`, `(x2, y2)` and
    /// endpoint `(x, y)`.
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
}

/// Tokenize one path-data string into absolute commands.
///
/// # Errors
/// Returns the tokenizer's error for malformed path data. Segments already
/// produced before the error are discarded: a path either tokenizes fully
/// or not at all.
pub fn tokenize(path_data: &str) -> Result<Vec<Command>, svgtypes::Error> {
    let mut commands = Vec::new();

    // Pen state: current position and the start of the current subpath.
    let mut cx = 0.0_f64;
    let mut cy = 0.0_f64;
    let mut sx = 0.0_f64;
    let mut sy = 0.0_f64;

    for segment in PathParser::from(path_data) {
        match segment? {
            PathSegment::MoveTo { abs, x, y } => {
                let (nx, ny) = if abs { (x, y) } else { (cx + x, cy + y) };
                cx = nx;
                cy = ny;
                sx = nx;
                sy = ny;
                commands.push(Command::MoveTo { x: nx, y: ny });
            }
            PathSegment::LineTo { abs, x, y } => {
                let (nx, ny) = if abs { (x, y) } else { (cx + x, cy + y) };
                cx = nx;
                cy = ny;
                commands.push(Command::LineTo { x: nx, y: ny });
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let (ax1, ay1, ax2, ay2, nx, ny) = if abs {
                    (x1, y1, x2, y2, x, y)
                } else {
                    (cx + x1, cy + y1, cx + x2, cy + y2, cx + x, cy + y)
                };
                cx = nx;
                cy = ny;
                commands.push(Command::CurveTo {
                    x1: ax1,
                    y1: ay1,
                    x2: ax2,
                    y2: ay2,
                    x: nx,
                    y: ny,
                });
            }

            // The remaining segment types yield no geometry, but the pen
            // must still move so later relative coordinates stay correct.
            PathSegment::HorizontalLineTo { abs, x } => {
                cx = if abs { x } else { cx + x };
            }
            PathSegment::VerticalLineTo { abs, y } => {
                cy = if abs { y } else { cy + y };
            }
            PathSegment::SmoothCurveTo { abs, x, y, .. }
            | PathSegment::Quadratic { abs, x, y, .. }
            | PathSegment::SmoothQuadratic { abs, x, y }
            | PathSegment::EllipticalArc { abs, x, y, .. } => {
                if abs {
                    cx = x;
                    cy = y;
                } else {
                    cx += x;
                    cy += y;
                }
            }
            PathSegment::ClosePath { .. } => {
                cx = sx;
                cy = sy;
            }
        }
    }

    Ok(commands)
}
