//! Risk level bands
//!
//! Defines [`RiskLevel`], the named and colored inclusive score band, and
//! the deterministic default band generator used to seed new configurations
//! and to back the "reset to defaults" action.

use grm_color::{ramp_colors, spread_indices, Rgb};
use serde::{Deserialize, Serialize};

/// A qualitative risk level covering an inclusive score band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevel {
    /// Display label
    pub name: String,
    /// Flat color for discrete cell rendering
    pub color: Rgb,
    /// Inclusive lower score bound
    pub min: u32,
    /// Inclusive upper score bound
    pub max: u32,
    /// 1-based rank, ascending severity
    pub order: u8,
}

impl RiskLevel {
    /// Create a new level band
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, color: Rgb, min: u32, max: u32, order: u8) -> Self {
        Self {
            name: name.into(),
            color,
            min,
            max,
            order,
        }
    }

    /// Check whether a score falls inside this band
    ///
    /// Inclusive on both bounds, so fractional scores (the `Average`
    /// calculation method produces them) resolve by comparison, not by
    /// exact match.
    #[inline]
    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        score >= f64::from(self.min) && score <= f64::from(self.max)
    }

    /// Band width in score units (zero for a single-score band)
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }
}

/// Curated names for the common 3/4/5-level presets
fn preset_names(count: usize) -> Option<&'static [&'static str]> {
    match count {
        3 => Some(&["Low", "Medium", "High"]),
        4 => Some(&["Low", "Medium", "High", "Extreme"]),
        5 => Some(&["Very Low", "Low", "Medium", "High", "Extreme"]),
        _ => None,
    }
}

/// Ordinal name scale for non-preset level counts, ascending severity
const ORDINAL_NAMES: [&str; 10] = [
    "Minimal",
    "Very Low",
    "Low",
    "Moderate",
    "Medium",
    "Elevated",
    "High",
    "Very High",
    "Severe",
    "Catastrophic",
];

/// Names for `count` bands: curated presets for 3/4/5, evenly spread
/// ordinal names otherwise
fn level_names(count: usize) -> Vec<&'static str> {
    if let Some(names) = preset_names(count) {
        return names.to_vec();
    }
    spread_indices(count, ORDINAL_NAMES.len())
        .into_iter()
        .map(|i| ORDINAL_NAMES[i])
        .collect()
}

/// Generate evenly sized default bands over `[1, max_score]`
///
/// Band bounds come from `score_per_level = max_score / num_levels`:
/// band `i` spans `round(i * score_per_level) + 1` through
/// `round((i + 1) * score_per_level)`, with two forced corrections — the
/// first band's lower bound is pinned to 1 and the last band's upper bound
/// to `max_score`, so rounding can never leave the bottom or top of the
/// score range unclassified.
///
/// Deterministic and idempotent: the same inputs always produce the same
/// bands. Colors are evenly spread stops of the severity ramp.
#[must_use]
pub fn generate_default_levels(num_levels: u8, max_score: u32) -> Vec<RiskLevel> {
    let count = usize::from(num_levels);
    if count == 0 {
        return Vec::new();
    }

    let names = level_names(count);
    let colors = ramp_colors(count);
    let score_per_level = f64::from(max_score) / count as f64;

    let mut levels = Vec::with_capacity(count);
    for i in 0..count {
        let min = if i == 0 {
            1
        } else {
            (i as f64 * score_per_level).round() as u32 + 1
        };
        let max = if i + 1 == count {
            max_score
        } else {
            ((i + 1) as f64 * score_per_level).round() as u32
        };
        levels.push(RiskLevel::new(names[i], colors[i], min, max, (i + 1) as u8));
    }

    tracing::debug!(num_levels, max_score, "generated default level bands");
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_by_five_four_level_boundaries() {
        // score_per_level = 6.25; upper bounds 6, 13, 19, then forced 25
        let levels = generate_default_levels(4, 25);
        let bounds: Vec<(u32, u32)> = levels.iter().map(|l| (l.min, l.max)).collect();
        assert_eq!(bounds, vec![(1, 6), (7, 13), (14, 19), (20, 25)]);

        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "Medium", "High", "Extreme"]);
    }

    #[test]
    fn three_level_preset_names() {
        let levels = generate_default_levels(3, 9);
        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "Medium", "High"]);
    }

    #[test]
    fn five_level_preset_names() {
        let levels = generate_default_levels(5, 25);
        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Very Low", "Low", "Medium", "High", "Extreme"]);
    }

    #[test]
    fn non_preset_counts_use_ordinal_names() {
        let levels = generate_default_levels(2, 4);
        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Minimal", "Catastrophic"]);

        let ten = generate_default_levels(10, 100);
        let names: Vec<&str> = ten.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ORDINAL_NAMES.to_vec());
    }

    #[test]
    fn bands_are_contiguous_over_full_range() {
        for num_levels in 2..=6u8 {
            let levels = generate_default_levels(num_levels, 36);
            assert_eq!(levels[0].min, 1);
            assert_eq!(levels.last().unwrap().max, 36);
            for pair in levels.windows(2) {
                assert_eq!(pair[1].min, pair[0].max + 1);
            }
        }
    }

    #[test]
    fn orders_ascend_from_one() {
        let levels = generate_default_levels(5, 25);
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(usize::from(level.order), i + 1);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(
            generate_default_levels(4, 25),
            generate_default_levels(4, 25)
        );
    }

    #[test]
    fn zero_levels_is_empty() {
        assert!(generate_default_levels(0, 25).is_empty());
    }

    #[test]
    fn contains_is_inclusive_and_handles_fractions() {
        let level = RiskLevel::new("Medium", Rgb::NEUTRAL, 7, 13, 2);
        assert!(level.contains(7.0));
        assert!(level.contains(13.0));
        assert!(level.contains(7.5));
        assert!(!level.contains(6.99));
        assert!(!level.contains(13.01));
    }
}
