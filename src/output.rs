//! Result types returned by the conversion entry points.
//!
//! [`ConversionOutput`] bundles the DXF text with one [`PathRecord`] per
//! source path and aggregate [`ConversionStats`]. Callers that only want the
//! document read `.dxf`; callers that care about partial failures inspect
//! the records (`stats.paths_failed` is the quick check).

use crate::error::PathError;
use serde::{Deserialize, Serialize};

/// The full result of one conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The assembled DXF document text.
    pub dxf: String,

    /// One record per extracted `<path>` element, in document order.
    pub paths: Vec<PathRecord>,

    /// Aggregate counters and timing.
    pub stats: ConversionStats,
}

/// Outcome of a single `<path>` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRecord {
    /// Zero-based position of the path in the repaired markup.
    pub index: usize,

    /// Vertex count after flattening and cleanup.
    ///
    /// Zero when the path failed to tokenize; 1 for a degenerate path that
    /// was excluded from the output.
    pub vertices: usize,

    /// Whether a POLYLINE entity was emitted for this path.
    ///
    /// False for degenerate paths (fewer than 2 vertices after cleanup) and
    /// for paths with a tokenizer error.
    pub emitted: bool,

    /// The tokenizer error, if any, under the skip-and-continue policy.
    pub error: Option<PathError>,
}

/// Aggregate statistics for one conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Paths found by extraction in the repaired markup.
    pub paths_found: usize,

    /// POLYLINE entities written to the ENTITIES section.
    pub polylines_emitted: usize,

    /// Paths excluded because they produced fewer than 2 vertices.
    pub paths_skipped: usize,

    /// Paths whose data the tokenizer rejected (skip policy only).
    pub paths_failed: usize,

    /// Total VERTEX records across all emitted polylines.
    pub total_vertices: usize,

    /// Wall-clock time for the whole pipeline, in milliseconds.
    pub total_duration_ms: u64,
}
