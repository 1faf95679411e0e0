//! Memoized cell grid
//!
//! Precomputes every (likelihood, impact) cell of a matrix once, so that
//! rendering surfaces — which may touch the same cell hundreds of times per
//! frame — do table lookups instead of recomputing score and band.

use grm_color::Rgb;
use grm_matrix::{RiskLevel, RiskMatrixConfig};

/// A resolved matrix cell
///
/// Derived data, never persisted. `level` is `None` when the score falls
/// outside every configured band (a malformed configuration); surfaces
/// render such cells as "Unknown" with a neutral color.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Likelihood coordinate, `1..=rows`
    pub likelihood: u8,
    /// Impact coordinate, `1..=columns`
    pub impact: u8,
    /// Raw score under the configuration's calculation method
    pub score: f64,
    /// Resolved band, if the score is classified
    pub level: Option<RiskLevel>,
}

impl Cell {
    /// Flat display color: the resolved band's color, neutral otherwise
    ///
    /// Discrete cells use the band's flat color, not the smooth gradient —
    /// that one is reserved for the continuous heat-map surface.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.level.as_ref().map_or(Rgb::NEUTRAL, |level| level.color)
    }

    /// Resolved band name, if classified
    #[inline]
    #[must_use]
    pub fn level_name(&self) -> Option<&str> {
        self.level.as_ref().map(|level| level.name.as_str())
    }
}

/// Precomputed grid of all matrix cells
///
/// Built once per configuration; `rows * columns` cells in row-major order
/// (likelihood outer, impact inner). Lookup is O(1).
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: u8,
    columns: u8,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Precompute all cells for a configuration
    #[must_use]
    pub fn build(config: &RiskMatrixConfig) -> Self {
        let mut cells = Vec::with_capacity(usize::from(config.rows) * usize::from(config.columns));
        for likelihood in 1..=config.rows {
            for impact in 1..=config.columns {
                let score = config.score(likelihood, impact);
                cells.push(Cell {
                    likelihood,
                    impact,
                    score,
                    level: config.level_for_score(score).cloned(),
                });
            }
        }

        tracing::debug!(
            rows = config.rows,
            columns = config.columns,
            "built cell grid"
        );
        Self {
            rows: config.rows,
            columns: config.columns,
            cells,
        }
    }

    /// Likelihood scale size
    #[inline]
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Impact scale size
    #[inline]
    #[must_use]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// O(1) cell lookup; `None` when coordinates are outside the scales
    #[inline]
    #[must_use]
    pub fn cell(&self, likelihood: u8, impact: u8) -> Option<&Cell> {
        if likelihood < 1 || likelihood > self.rows || impact < 1 || impact > self.columns {
            return None;
        }
        let index =
            usize::from(likelihood - 1) * usize::from(self.columns) + usize::from(impact - 1);
        self.cells.get(index)
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
