//! Risk matrix configuration
//!
//! Defines [`RiskMatrixConfig`], the read-only model the scoring functions
//! operate on: likelihood/impact scale sizes, the calculation method, and
//! the ordered level bands.
//!
//! Configurations are created and edited externally (an administrator
//! settings form); exactly one is active per organization at a time. Nothing
//! in this crate mutates a configuration after construction — the engine
//! only reads.

use crate::level::{generate_default_levels, RiskLevel};
use crate::score::{self, CalculationMethod};
use grm_color::Rgb;
use serde::{Deserialize, Serialize};

/// A risk matrix configuration
///
/// `rows` is the likelihood scale size and `columns` the impact scale size,
/// both bounded 2–10 at validation time. `levels` is ordered by ascending
/// `order` and must tile `[1, max_score]` contiguously — an invariant
/// enforced by [`RiskMatrixConfig::validate`] when the editor saves, never
/// re-checked on reads. Lookups against a malformed configuration degrade
/// to "unknown" results instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMatrixConfig {
    /// Likelihood scale size
    pub rows: u8,
    /// Impact scale size
    pub columns: u8,
    /// Score calculation method
    #[serde(default)]
    pub method: CalculationMethod,
    /// Level bands, ascending severity
    pub levels: Vec<RiskLevel>,
}

impl RiskMatrixConfig {
    /// Create a configuration with the given scales and no levels yet
    #[inline]
    #[must_use]
    pub fn new(rows: u8, columns: u8) -> Self {
        Self {
            rows,
            columns,
            method: CalculationMethod::default(),
            levels: Vec::new(),
        }
    }

    /// With calculation method
    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// With explicit level bands
    #[inline]
    #[must_use]
    pub fn with_levels(mut self, levels: Vec<RiskLevel>) -> Self {
        self.levels = levels;
        self
    }

    /// With generated default bands for this matrix's score range
    ///
    /// Replaces any existing bands; doubles as the "reset to defaults"
    /// action of the configuration editor.
    #[inline]
    #[must_use]
    pub fn with_default_levels(mut self, num_levels: u8) -> Self {
        self.levels = generate_default_levels(num_levels, self.max_score());
        self
    }

    /// Highest reachable score, `rows * columns`
    #[inline]
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.columns)
    }

    /// Score for a (likelihood, impact) pair under this configuration's
    /// calculation method
    ///
    /// Precondition: `1 <= likelihood <= rows` and `1 <= impact <= columns`.
    /// Call sites clamp via grid bounds before calling.
    #[inline]
    #[must_use]
    pub fn score(&self, likelihood: u8, impact: u8) -> f64 {
        debug_assert!(likelihood <= self.rows, "likelihood beyond scale");
        debug_assert!(impact <= self.columns, "impact beyond scale");
        self.method.score(likelihood, impact)
    }

    /// Find the band containing `score`, if any
    #[inline]
    #[must_use]
    pub fn level_for_score(&self, score: f64) -> Option<&RiskLevel> {
        score::level_for_score(score, &self.levels)
    }

    /// Smoothly interpolated color for `score`
    #[inline]
    #[must_use]
    pub fn color_for_score(&self, score: f64) -> Rgb {
        score::color_for_score(score, &self.levels)
    }
}

impl Default for RiskMatrixConfig {
    /// The conventional 5×5 product matrix with five default bands
    fn default() -> Self {
        Self::new(5, 5).with_default_levels(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = RiskMatrixConfig::new(4, 6)
            .with_method(CalculationMethod::Max)
            .with_default_levels(3);

        assert_eq!(config.rows, 4);
        assert_eq!(config.columns, 6);
        assert_eq!(config.method, CalculationMethod::Max);
        assert_eq!(config.levels.len(), 3);
        assert_eq!(config.max_score(), 24);
    }

    #[test]
    fn default_is_five_by_five() {
        let config = RiskMatrixConfig::default();
        assert_eq!((config.rows, config.columns), (5, 5));
        assert_eq!(config.method, CalculationMethod::Product);
        assert_eq!(config.levels.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn score_follows_configured_method() {
        let config = RiskMatrixConfig::new(5, 5).with_default_levels(4);
        assert_eq!(config.score(3, 4), 12.0);

        let avg = config.clone().with_method(CalculationMethod::Average);
        assert_eq!(avg.score(3, 4), 3.5);
    }

    #[test]
    fn reset_to_defaults_replaces_bands() {
        let config = RiskMatrixConfig::new(5, 5)
            .with_levels(vec![RiskLevel::new("Only", Rgb::NEUTRAL, 1, 25, 1)])
            .with_default_levels(4);
        assert_eq!(config.levels.len(), 4);
        assert_eq!(config.levels[0].name, "Low");
    }

    #[test]
    fn lookup_on_config_without_levels_degrades() {
        let config = RiskMatrixConfig::new(5, 5);
        assert!(config.level_for_score(10.0).is_none());
        assert_eq!(config.color_for_score(10.0), Rgb::NEUTRAL);
    }

    #[test]
    fn serde_roundtrip_preserves_config() {
        let config = RiskMatrixConfig::new(5, 5).with_default_levels(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: RiskMatrixConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn serde_defaults_missing_method_to_product() {
        let json = r#"{"rows":3,"columns":3,"levels":[]}"#;
        let config: RiskMatrixConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.method, CalculationMethod::Product);
    }
}
