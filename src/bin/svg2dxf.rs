//! CLI binary for svg2dxf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use svg2dxf::{convert_file, convert_to_file, ConversionConfig, PathErrorPolicy};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  svg2dxf drawing.svg

  # Convert to file
  svg2dxf drawing.svg -o drawing.dxf

  # Coarser curves, looser duplicate threshold
  svg2dxf --steps 25 --tolerance 0.01 drawing.svg -o out.dxf

  # Custom layer name and colour index
  svg2dxf --layer cut --color 3 drawing.svg

  # Fail hard on any malformed path instead of skipping it
  svg2dxf --on-error abort drawing.svg

  # Structured JSON result (document + per-path records + stats)
  svg2dxf --json drawing.svg > result.json

OUTPUT FORMAT:
  A minimal DXF subset (AC1009 header, ENTITIES section, EOF): one closed
  POLYLINE entity per traced path, each with its VERTEX records on a single
  layer. The declared header extents are the static box (0,0)-(1000,1000);
  entity coordinates are exact.

ENVIRONMENT VARIABLES:
  SVG2DXF_OUTPUT     Default for -o/--output
  SVG2DXF_STEPS      Default for --steps
  SVG2DXF_TOLERANCE  Default for --tolerance
  SVG2DXF_LAYER      Default for --layer
"#;

/// Convert SVG path drawings to minimal DXF polyline documents.
#[derive(Parser, Debug)]
#[command(
    name = "svg2dxf",
    version,
    about = "Convert SVG path drawings to minimal DXF polyline documents",
    long_about = "Convert SVG files into the minimal DXF subset (closed polylines on a single \
layer). Broken exports with glued tags and attributes are repaired heuristically before \
parsing; cubic curves are flattened into straight segments.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input SVG file path (validated by its .svg suffix).
    input: PathBuf,

    /// Write DXF to this file instead of stdout.
    #[arg(short, long, env = "SVG2DXF_OUTPUT")]
    output: Option<PathBuf>,

    /// Samples per cubic curve segment.
    #[arg(long, env = "SVG2DXF_STEPS", default_value_t = 100,
          value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,

    /// Minimum distance between consecutive output vertices.
    #[arg(long, env = "SVG2DXF_TOLERANCE", default_value_t = 0.001)]
    tolerance: f64,

    /// Layer name for all emitted entities.
    #[arg(long, env = "SVG2DXF_LAYER", default_value = "symbols")]
    layer: String,

    /// AutoCAD colour index for all emitted entities.
    #[arg(long, default_value_t = 7)]
    color: i16,

    /// Malformed-path policy: skip (convert the rest) or abort.
    #[arg(long = "on-error", value_enum, default_value = "skip")]
    on_error: OnErrorArg,

    /// Output the full conversion result (records + stats) as JSON.
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors and the document itself.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OnErrorArg {
    Skip,
    Abort,
}

impl From<OnErrorArg> for PathErrorPolicy {
    fn from(v: OnErrorArg) -> Self {
        match v {
            OnErrorArg::Skip => PathErrorPolicy::SkipAndContinue,
            OnErrorArg::Abort => PathErrorPolicy::Abort,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Input validation ─────────────────────────────────────────────────
    // The shell contract: input files are validated by filename suffix only.
    let is_svg = cli
        .input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    if !is_svg {
        bail!(svg2dxf::Svg2DxfError::NotAnSvg {
            path: cli.input.clone()
        });
    }

    let config = ConversionConfig::builder()
        .curve_steps(cli.steps)
        .tolerance(cli.tolerance)
        .layer(cli.layer)
        .color(cli.color)
        .on_path_error(cli.on_error.into())
        .build()
        .context("Invalid configuration")?;

    // ── Convert ──────────────────────────────────────────────────────────
    match cli.output {
        Some(ref out_path) => {
            let markup = std::fs::read_to_string(&cli.input)
                .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;
            let stats = convert_to_file(&markup, out_path, &config)
                .with_context(|| format!("Conversion of '{}' failed", cli.input.display()))?;
            if !cli.quiet {
                print_summary(&stats, Some(out_path));
            }
        }
        _ => {
            let output = convert_file(&cli.input, &config)
                .with_context(|| format!("Conversion of '{}' failed", cli.input.display()))?;
            if cli.json {
                serde_json::to_writer_pretty(io::stdout().lock(), &output)
                    .context("Failed to serialise result as JSON")?;
                println!();
            } else {
                io::stdout()
                    .lock()
                    .write_all(output.dxf.as_bytes())
                    .context("Failed to write DXF to stdout")?;
                if !cli.quiet {
                    print_summary(&output.stats, None);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(stats: &svg2dxf::ConversionStats, out_path: Option<&PathBuf>) {
    let target = out_path
        .map(|p| format!(" → {}", p.display()))
        .unwrap_or_default();
    let mark = if stats.paths_failed == 0 {
        green("✔")
    } else {
        red("✘")
    };
    eprintln!(
        "{} {} of {} paths converted{}  {}",
        mark,
        bold(&stats.polylines_emitted.to_string()),
        stats.paths_found,
        target,
        dim(&format!(
            "{} vertices, {} skipped, {} failed, {}ms",
            stats.total_vertices, stats.paths_skipped, stats.paths_failed, stats.total_duration_ms
        )),
    );
}
