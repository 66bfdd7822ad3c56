//! Eager (whole-document) conversion entry points.
//!
//! The pipeline runs start-to-finish in the calling thread: repair the
//! markup, extract every path's data string, trace each path into a point
//! sequence, drop degenerate figures, and serialise the survivors. All
//! state is transient; the same input and config always produce the same
//! output, so conversions are safe to run on parallel worker threads.

use crate::config::{ConversionConfig, PathErrorPolicy};
use crate::error::{PathError, Svg2DxfError};
use crate::geometry::Polyline;
use crate::output::{ConversionOutput, ConversionStats, PathRecord};
use crate::pipeline::{cleanup, dxf, extract, flatten, repair, tokenize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert an SVG markup string to a DXF document.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `markup` — Raw SVG text (possibly damaged by a broken authoring tool)
/// * `config` — Conversion configuration
///
/// # Returns
/// `Ok(ConversionOutput)` on success, even when some paths failed to
/// tokenize (check `output.stats.paths_failed`) or the markup contained no
/// paths at all; an entity-empty document is still a document.
///
/// # Errors
/// Returns `Err(Svg2DxfError)` only for fatal errors; with the default
/// skip-and-continue policy that means never for string input. Under
/// [`PathErrorPolicy::Abort`] the first malformed path fails the whole
/// conversion and no partial document is returned.
pub fn convert(
    markup: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Svg2DxfError> {
    let total_start = Instant::now();
    let markup = markup.as_ref();
    info!("Starting conversion: {} bytes of markup", markup.len());

    // ── Step 1: Repair markup ────────────────────────────────────────────
    let repaired = repair::repair_markup(markup);
    if repaired != markup {
        debug!("Repair changed the markup");
    }

    // ── Step 2: Extract path data ────────────────────────────────────────
    let path_data = extract::extract_path_data(&repaired);
    if path_data.is_empty() {
        warn!("No path elements found; emitting an entity-empty document");
    } else {
        debug!("Found {} path elements", path_data.len());
    }

    // ── Step 3: Trace each path ──────────────────────────────────────────
    let mut records: Vec<PathRecord> = Vec::with_capacity(path_data.len());
    let mut polylines: Vec<Polyline> = Vec::new();

    for (index, data) in path_data.iter().enumerate() {
        let commands = match tokenize::tokenize(data) {
            Ok(commands) => commands,
            Err(e) => {
                match config.on_path_error {
                    PathErrorPolicy::Abort => {
                        return Err(Svg2DxfError::PathSyntax {
                            index,
                            detail: e.to_string(),
                        });
                    }
                    PathErrorPolicy::SkipAndContinue => {
                        warn!("Skipping path #{index}: {e}");
                        records.push(PathRecord {
                            index,
                            vertices: 0,
                            emitted: false,
                            error: Some(PathError::Syntax {
                                index,
                                detail: e.to_string(),
                            }),
                        });
                        continue;
                    }
                }
            }
        };

        let raw = flatten::flatten(&commands, config.curve_steps);
        let polyline = cleanup::cleanup(raw, config.tolerance);
        let vertices = polyline.len();

        // ── Step 4: Exclude degenerate figures ───────────────────────────
        let emitted = vertices >= 2;
        if emitted {
            polylines.push(polyline);
        } else {
            debug!("Path #{index} is degenerate ({vertices} vertices); excluded");
        }
        records.push(PathRecord {
            index,
            vertices,
            emitted,
            error: None,
        });
    }

    // ── Step 5: Serialise ────────────────────────────────────────────────
    let dxf = dxf::serialize(&polylines, &config.layer, config.color);

    let stats = ConversionStats {
        paths_found: path_data.len(),
        polylines_emitted: polylines.len(),
        paths_skipped: records
            .iter()
            .filter(|r| r.error.is_none() && !r.emitted)
            .count(),
        paths_failed: records.iter().filter(|r| r.error.is_some()).count(),
        total_vertices: polylines.iter().map(Vec::len).sum(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {}/{} paths emitted, {} vertices, {}ms",
        stats.polylines_emitted, stats.paths_found, stats.total_vertices, stats.total_duration_ms
    );

    Ok(ConversionOutput {
        dxf,
        paths: records,
        stats,
    })
}

/// Read an SVG file and convert it.
///
/// Maps I/O failures to typed errors so callers get "file not found" and
/// "permission denied" as distinct, actionable variants.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Svg2DxfError> {
    let path = path.as_ref();
    let markup = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Svg2DxfError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Svg2DxfError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Svg2DxfError::Internal(format!("reading '{}': {e}", path.display())),
    })?;
    convert(markup, config)
}

/// Convert markup and write the DXF directly to a file.
///
/// Uses an atomic write (temp file + rename) to prevent partial files.
pub fn convert_to_file(
    markup: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Svg2DxfError> {
    let output = convert(markup, config)?;
    let path = output_path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Svg2DxfError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("dxf.tmp");
    std::fs::write(&tmp_path, &output.dxf).map_err(|e| Svg2DxfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| Svg2DxfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(output.stats)
}
