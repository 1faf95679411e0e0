//! GRM Render Data
//!
//! Derived, precomputed data structures that visualization surfaces consume.
//! Everything here is plain data production — no canvas, no image encoding,
//! no UI.
//!
//! # Core Concepts
//!
//! - [`CellGrid`]: per-cell memoization of score, level and flat color, so
//!   tooltip and table surfaces do O(1) lookups instead of recomputing
//! - [`ScoreField`]: bilinear score sampling at fractional grid coordinates
//! - [`HeatmapRenderer`]: maps a pixel buffer over the score field, one
//!   smoothly interpolated color per pixel
//!
//! # Example
//!
//! ```rust
//! use grm_matrix::RiskMatrixConfig;
//! use grm_render::{CellGrid, HeatmapRenderer};
//!
//! let config = RiskMatrixConfig::new(5, 5).with_default_levels(4);
//!
//! let grid = CellGrid::build(&config);
//! let cell = grid.cell(3, 4).unwrap();
//! assert_eq!(cell.score, 12.0);
//!
//! let heatmap = HeatmapRenderer::new(&config).render(60, 60).unwrap();
//! assert_eq!(heatmap.pixels.len(), 60 * 60);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod field;
mod grid;
mod heatmap;

// Re-exports
pub use field::ScoreField;
pub use grid::{Cell, CellGrid};
pub use heatmap::{Heatmap, HeatmapRenderer, RenderError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
