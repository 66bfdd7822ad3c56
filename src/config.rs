//! Configuration types for SVG-to-DXF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across threads, serialise them for logging, and
//! diff two runs to understand why their outputs differ.

use crate::error::Svg2DxfError;
use serde::{Deserialize, Serialize};

/// Configuration for an SVG-to-DXF conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`]. The defaults reproduce the historical
/// output byte for byte: 100 curve steps, 0.001 tolerance, layer `symbols`,
/// colour index 7.
///
/// # Example
/// ```rust
/// use svg2dxf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .curve_steps(50)
///     .tolerance(0.01)
///     .layer("cut")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Number of sample steps per cubic curve segment. Default: 100.
    ///
    /// 100 steps means the curve parameter advances by 0.01 per sample, so a
    /// single curve contributes 101 points before cleanup. The endpoint is
    /// always emitted exactly regardless of step count. Fewer steps give
    /// coarser output with fewer vertices; the cleanup tolerance usually
    /// matters more for final vertex count than the step count does.
    pub curve_steps: u32,

    /// Cleanup threshold: a point is kept only if its distance from the last
    /// kept point exceeds this value. Default: 0.001.
    ///
    /// Comparison is done on squared distances against `tolerance²`, so 0.0
    /// removes exact consecutive duplicates only. Raising the tolerance
    /// thins dense curve sampling at the cost of geometric fidelity.
    pub tolerance: f64,

    /// Layer name stamped on every POLYLINE, VERTEX, and SEQEND record.
    /// Default: `"symbols"`.
    ///
    /// The output format carries exactly one layer per document.
    pub layer: String,

    /// AutoCAD colour index (group code 62) for every polyline entity.
    /// Default: 7 (white/black depending on background).
    pub color: i16,

    /// What to do when the tokenizer rejects one path's data.
    /// Default: [`PathErrorPolicy::SkipAndContinue`].
    pub on_path_error: PathErrorPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            curve_steps: 100,
            tolerance: 0.001,
            layer: "symbols".to_string(),
            color: 7,
            on_path_error: PathErrorPolicy::default(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn curve_steps(mut self, n: u32) -> Self {
        self.config.curve_steps = n.max(1);
        self
    }

    pub fn tolerance(mut self, t: f64) -> Self {
        self.config.tolerance = t;
        self
    }

    pub fn layer(mut self, name: impl Into<String>) -> Self {
        self.config.layer = name.into();
        self
    }

    pub fn color(mut self, index: i16) -> Self {
        self.config.color = index;
        self
    }

    pub fn on_path_error(mut self, policy: PathErrorPolicy) -> Self {
        self.config.on_path_error = policy;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Svg2DxfError> {
        let c = &self.config;
        if c.curve_steps == 0 {
            return Err(Svg2DxfError::InvalidConfig(
                "curve_steps must be ≥ 1".into(),
            ));
        }
        if !c.tolerance.is_finite() || c.tolerance < 0.0 {
            return Err(Svg2DxfError::InvalidConfig(format!(
                "tolerance must be a finite value ≥ 0, got {}",
                c.tolerance
            )));
        }
        if c.layer.is_empty() || c.layer.chars().any(char::is_whitespace) {
            return Err(Svg2DxfError::InvalidConfig(format!(
                "layer name must be non-empty and contain no whitespace, got {:?}",
                c.layer
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Policy for paths whose data the tokenizer rejects.
///
/// One policy applies to the entire conversion; the two modes are never
/// mixed within a single run. Skip-and-continue is the default because the
/// repair stage already commits the pipeline to best-effort recovery over
/// strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathErrorPolicy {
    /// Record a [`crate::error::PathError`] for the offending path, log a
    /// warning, and convert the remaining paths. (default)
    #[default]
    SkipAndContinue,
    /// Fail the whole conversion with
    /// [`crate::error::Svg2DxfError::PathSyntax`]; no partial document is
    /// returned.
    Abort,
}
