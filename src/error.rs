//! Error types for the svg2dxf library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Svg2DxfError`] — **Fatal**: the conversion cannot proceed at all
//!   (missing input file, invalid configuration, or a path syntax error
//!   under the [`Abort`](crate::config::PathErrorPolicy::Abort) policy).
//!   Returned as `Err(Svg2DxfError)` from the top-level `convert*` functions.
//!
//! * [`PathError`] — **Non-fatal**: a single `<path>` element failed to
//!   tokenize but every other path is fine. Stored inside
//!   [`crate::output::PathRecord`] so callers can inspect partial success
//!   rather than losing the whole document to one bad path.
//!
//! Markup the repair stage cannot fully fix is *not* an error at any layer:
//! extraction simply finds fewer (or no) paths, and a document with zero
//! entities is still a well-formed document.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the svg2dxf library.
///
/// Per-path failures use [`PathError`] and are stored in
/// [`crate::output::PathRecord`] rather than propagated here (unless the
/// abort policy is selected).
#[derive(Debug, Error)]
pub enum Svg2DxfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("SVG file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input filename does not carry a `.svg` suffix.
    #[error("File does not look like an SVG: '{path}'\nExpected a .svg filename suffix.")]
    NotAnSvg { path: PathBuf },

    // ── Path errors ───────────────────────────────────────────────────────
    /// A path-data string was rejected by the tokenizer and the conversion
    /// policy is [`Abort`](crate::config::PathErrorPolicy::Abort).
    ///
    /// No partial document is returned in this mode. Under the default
    /// skip-and-continue policy this never surfaces; the failure is recorded
    /// in the path's [`crate::output::PathRecord`] instead.
    #[error("Path #{index} has invalid path data: {detail}\nRe-run with the skip policy to convert the remaining paths.")]
    PathSyntax { index: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output DXF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single `<path>` element.
///
/// Stored in [`crate::output::PathRecord`] when a path fails. The overall
/// conversion continues under the default skip-and-continue policy.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PathError {
    /// The tokenizer rejected the path-data string.
    #[error("Path #{index}: invalid path data: {detail}")]
    Syntax { index: usize, detail: String },
}
