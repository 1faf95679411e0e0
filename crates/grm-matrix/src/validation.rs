//! Save-time configuration validation
//!
//! The band contiguity invariant is enforced here, once, when the
//! configuration editor persists — never on reads. Lookups against a
//! configuration that skipped this gate degrade to "unknown" results.

use crate::config::RiskMatrixConfig;

/// Smallest accepted scale size
pub(crate) const SCALE_MIN: u8 = 2;
/// Largest accepted scale size
pub(crate) const SCALE_MAX: u8 = 10;

impl RiskMatrixConfig {
    /// Validate this configuration for persistence
    ///
    /// Checks, in order:
    /// - both scales are within `2..=10`
    /// - at least one level band exists
    /// - `order` values ascend strictly from 1
    /// - every band has `min <= max`
    /// - the first band starts at 1
    /// - bands tile the score range with no gap or overlap
    /// - the last band ends exactly at `max_score`
    ///
    /// The first violation found is returned, carrying the offending band
    /// names and bounds for the editor to surface.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (axis, value) in [("rows", self.rows), ("columns", self.columns)] {
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                return Err(ValidationError::ScaleOutOfRange {
                    axis,
                    value,
                    min: SCALE_MIN,
                    max: SCALE_MAX,
                });
            }
        }

        if self.levels.is_empty() {
            return Err(ValidationError::NoLevels);
        }

        for (i, level) in self.levels.iter().enumerate() {
            let expected = (i + 1) as u8;
            if level.order != expected {
                return Err(ValidationError::OrderOutOfSequence {
                    name: level.name.clone(),
                    order: level.order,
                    expected,
                });
            }
            if level.min > level.max {
                return Err(ValidationError::InvertedBand {
                    name: level.name.clone(),
                    min: level.min,
                    max: level.max,
                });
            }
        }

        let first = &self.levels[0];
        if first.min != 1 {
            return Err(ValidationError::FirstBandMin { found: first.min });
        }

        for pair in self.levels.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let expected_min = prev.max + 1;
            if next.min < expected_min {
                return Err(ValidationError::BandOverlap {
                    prev: prev.name.clone(),
                    next: next.name.clone(),
                    prev_max: prev.max,
                    next_min: next.min,
                });
            }
            if next.min > expected_min {
                return Err(ValidationError::BandGap {
                    prev: prev.name.clone(),
                    next: next.name.clone(),
                    expected_min,
                    found_min: next.min,
                });
            }
        }

        let max_score = self.max_score();
        if let Some(last) = self.levels.last() {
            if last.max != max_score {
                return Err(ValidationError::LastBandMax {
                    found: last.max,
                    expected: max_score,
                });
            }
        }

        tracing::debug!(
            rows = self.rows,
            columns = self.columns,
            levels = self.levels.len(),
            "configuration validated"
        );
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Scale size outside the accepted range
    #[error("{axis} scale {value} outside {min}..={max}")]
    ScaleOutOfRange {
        /// Which scale, `rows` or `columns`
        axis: &'static str,
        /// Rejected scale size
        value: u8,
        /// Smallest accepted size
        min: u8,
        /// Largest accepted size
        max: u8,
    },

    /// No level bands configured
    #[error("configuration has no level bands")]
    NoLevels,

    /// `order` values do not ascend strictly from 1
    #[error("band '{name}' has order {order}, expected {expected}")]
    OrderOutOfSequence {
        /// Offending band
        name: String,
        /// Stored order
        order: u8,
        /// Expected order at this position
        expected: u8,
    },

    /// A band's lower bound exceeds its upper bound
    #[error("band '{name}' has min {min} greater than max {max}")]
    InvertedBand {
        /// Offending band
        name: String,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// The first band does not start at score 1
    #[error("first band starts at {found}, expected 1")]
    FirstBandMin {
        /// Lower bound of the first band
        found: u32,
    },

    /// Adjacent bands overlap
    #[error("bands '{prev}' and '{next}' overlap: {next_min} <= {prev_max}")]
    BandOverlap {
        /// Earlier band
        prev: String,
        /// Later band
        next: String,
        /// Earlier band's upper bound
        prev_max: u32,
        /// Later band's lower bound
        next_min: u32,
    },

    /// Adjacent bands leave scores uncovered
    #[error("gap between '{prev}' and '{next}': expected min {expected_min}, found {found_min}")]
    BandGap {
        /// Earlier band
        prev: String,
        /// Later band
        next: String,
        /// Lower bound that would close the gap
        expected_min: u32,
        /// Lower bound actually found
        found_min: u32,
    },

    /// The last band does not end at the matrix's maximum score
    #[error("last band ends at {found}, expected {expected}")]
    LastBandMax {
        /// Upper bound of the last band
        found: u32,
        /// The matrix's maximum score
        expected: u32,
    },
}
