//! Continuous score field
//!
//! Bilinear interpolation of cell scores at fractional grid coordinates,
//! for surfaces that draw between cell centers instead of snapping to them.

use grm_matrix::RiskMatrixConfig;

/// Bilinearly interpolated score field over a matrix
///
/// Cell scores are precomputed once; [`ScoreField::sample`] then blends the
/// four cells surrounding a fractional (likelihood, impact) coordinate.
/// Coordinates are 1-based like the discrete scales and clamped to the grid
/// edges, so sampling slightly outside the matrix stays defined.
#[derive(Debug, Clone)]
pub struct ScoreField {
    rows: u8,
    columns: u8,
    scores: Vec<f64>,
}

impl ScoreField {
    /// Precompute the score lattice for a configuration
    #[must_use]
    pub fn new(config: &RiskMatrixConfig) -> Self {
        let mut scores = Vec::with_capacity(usize::from(config.rows) * usize::from(config.columns));
        for likelihood in 1..=config.rows {
            for impact in 1..=config.columns {
                scores.push(config.score(likelihood, impact));
            }
        }
        Self {
            rows: config.rows,
            columns: config.columns,
            scores,
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

    /// Exact score at an integer lattice point (0-based indices, clamped)
    fn at(&self, row: usize, column: usize) -> f64 {
        let row = row.min(usize::from(self.rows) - 1);
        let column = column.min(usize::from(self.columns) - 1);
        self.scores[row * usize::from(self.columns) + column]
    }

    /// Sample the field at a fractional (likelihood, impact) coordinate
    ///
    /// Coordinates live in `[1.0, rows]` × `[1.0, columns]` and are clamped
    /// into that range first. At integer coordinates the sample equals the
    /// exact cell score; between cells the four surrounding scores blend
    /// bilinearly.
    #[must_use]
    pub fn sample(&self, likelihood: f64, impact: f64) -> f64 {
        let l = likelihood.clamp(1.0, f64::from(self.rows)) - 1.0;
        let i = impact.clamp(1.0, f64::from(self.columns)) - 1.0;

        let l0 = l.floor();
        let i0 = i.floor();
        let lt = l - l0;
        let it = i - i0;

        let r0 = l0 as usize;
        let c0 = i0 as usize;
        let r1 = r0 + 1;
        let c1 = c0 + 1;

        let top = self.at(r0, c0) * (1.0 - it) + self.at(r0, c1) * it;
        let bottom = self.at(r1, c0) * (1.0 - it) + self.at(r1, c1) * it;
        top * (1.0 - lt) + bottom * lt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ScoreField {
        ScoreField::new(&RiskMatrixConfig::new(5, 5).with_default_levels(4))
    }

    #[test]
    fn integer_coordinates_yield_exact_cell_scores() {
        let field = field();
        for likelihood in 1..=5u8 {
            for impact in 1..=5u8 {
                let expected = f64::from(likelihood) * f64::from(impact);
                let sampled = field.sample(f64::from(likelihood), f64::from(impact));
                assert!(
                    (sampled - expected).abs() < 1e-9,
                    "({likelihood},{impact}): {sampled} != {expected}"
                );
            }
        }
    }

    #[test]
    fn midpoint_blends_adjacent_cells() {
        let field = field();
        // Between (2,3)=6 and (3,3)=9 along the likelihood axis
        let sampled = field.sample(2.5, 3.0);
        assert!((sampled - 7.5).abs() < 1e-9);
    }

    #[test]
    fn interior_point_blends_four_cells() {
        let field = field();
        // Surrounded by (2,2)=4, (2,3)=6, (3,2)=6, (3,3)=9
        let sampled = field.sample(2.5, 2.5);
        assert!((sampled - 6.25).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_coordinates_clamp_to_edges() {
        let field = field();
        assert!((field.sample(0.0, 0.0) - 1.0).abs() < 1e-9);
        assert!((field.sample(99.0, 99.0) - 25.0).abs() < 1e-9);
        assert!((field.sample(99.0, 1.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn samples_stay_within_score_range() {
        let field = field();
        let mut coord = 1.0;
        while coord <= 5.0 {
            let sampled = field.sample(coord, 5.0 - (coord - 1.0));
            assert!((1.0..=25.0).contains(&sampled));
            coord += 0.125;
        }
    }
}
