//! # svg2dxf
//!
//! Repair, trace, and convert SVG path drawings into minimal DXF polyline
//! documents.
//!
//! ## Why this crate?
//!
//! Some raster-to-vector authoring tools export SVG with the whitespace
//! between tags and attributes eaten (`<pathd="M0 0L5 5"/>`), which every
//! strict XML parser rejects. This crate repairs that defect class
//! heuristically, extracts each `<path>` element's geometry, flattens cubic
//! curves into straight segments, and writes the result as the small
//! HEADER/ENTITIES DXF subset that CNC and CAD tools accept for closed
//! polylines.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SVG text
//!  │
//!  ├─ 1. Repair    fix glued tags/attributes (regex passes)
//!  ├─ 2. Extract   collect every d="…" value in document order
//!  ├─ 3. Tokenize  svgtypes path parser → absolute move/line/curve commands
//!  ├─ 4. Flatten   sample cubics at fixed parameter steps, exact endpoints
//!  ├─ 5. Cleanup   greedy removal of near-duplicate consecutive points
//!  └─ 6. Serialise one closed POLYLINE entity per retained figure
//! ```
//!
//! Every stage is a pure function of its input; a conversion holds no
//! shared state and is safe to run on parallel worker threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use svg2dxf::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let markup = r#"<svg><path d="M0 0 L10 0 L10 10 L0 10 Z"/></svg>"#;
//!     let output = convert(markup, &ConversionConfig::default())?;
//!     println!("{}", output.dxf);
//!     eprintln!("entities: {}, vertices: {}",
//!         output.stats.polylines_emitted,
//!         output.stats.total_vertices);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `svg2dxf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! svg2dxf = { version = "0.3", default-features = false }
//! ```
//!
//! ## Output format caveat
//!
//! The HEADER declares the static extents `(0,0)-(1000,1000)` rather than
//! the drawing's computed bounding box; entity coordinates are exact, but
//! readers that frame the declared extents will zoom to that box. See
//! [`pipeline::dxf`].

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PathErrorPolicy};
pub use convert::{convert, convert_file, convert_to_file};
pub use error::{PathError, Svg2DxfError};
pub use geometry::{Point, Polyline};
pub use output::{ConversionOutput, ConversionStats, PathRecord};
