//! Heat-map pixel buffer rendering
//!
//! Maps a pixel raster over the continuous score field and resolves one
//! smoothly interpolated color per pixel. Pure data production: the caller
//! owns encoding and display.

use crate::field::ScoreField;
use grm_color::Rgb;
use grm_matrix::{color_for_score, RiskLevel, RiskMatrixConfig};

/// A rendered heat-map pixel buffer
///
/// `pixels` is row-major with `width * height` entries; row 0 corresponds
/// to likelihood 1 and column 0 to impact 1.
#[derive(Debug, Clone)]
pub struct Heatmap {
    /// Buffer width in pixels
    pub width: usize,
    /// Buffer height in pixels
    pub height: usize,
    /// Row-major pixel colors
    pub pixels: Vec<Rgb>,
}

impl Heatmap {
    /// Pixel color at (x, y); `None` outside the buffer
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

/// Renders heat-map buffers for one configuration
///
/// Precomputes the score field once; each [`HeatmapRenderer::render`] call
/// is then a pure function of the requested dimensions. Pixel coordinates
/// map linearly onto the scales so that the corner pixels sample the corner
/// cells exactly.
#[derive(Debug, Clone)]
pub struct HeatmapRenderer {
    field: ScoreField,
    levels: Vec<RiskLevel>,
}

impl HeatmapRenderer {
    /// Build a renderer for a configuration
    #[must_use]
    pub fn new(config: &RiskMatrixConfig) -> Self {
        Self {
            field: ScoreField::new(config),
            levels: config.levels.clone(),
        }
    }

    /// Render a `width` × `height` pixel buffer
    ///
    /// # Errors
    /// Returns [`RenderError::ZeroDimension`] when either dimension is 0.
    pub fn render(&self, width: usize, height: usize) -> Result<Heatmap, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::ZeroDimension { width, height });
        }

        let rows = f64::from(self.field.rows());
        let columns = f64::from(self.field.columns());
        let x_span = (width - 1).max(1) as f64;
        let y_span = (height - 1).max(1) as f64;

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            let likelihood = 1.0 + (rows - 1.0) * (y as f64) / y_span;
            for x in 0..width {
                let impact = 1.0 + (columns - 1.0) * (x as f64) / x_span;
                let score = self.field.sample(likelihood, impact);
                pixels.push(color_for_score(score, &self.levels));
            }
        }

        tracing::debug!(width, height, "rendered heat map");
        Ok(Heatmap {
            width,
            height,
            pixels,
        })
    }
}

/// Heat-map rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Requested buffer has no pixels
    #[error("zero-sized output: {width}x{height}")]
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}
