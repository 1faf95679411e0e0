//! Score calculation and band resolution
//!
//! The calculation methods that turn a (likelihood, impact) pair into a
//! numeric score, and the lookups that resolve a score into a band or a
//! smoothly interpolated color.

use crate::level::RiskLevel;
use grm_color::Rgb;
use serde::{Deserialize, Serialize};

/// How a (likelihood, impact) pair becomes a raw score
///
/// `Product` is the default and the most common in practice; `Max` and
/// `Average` exist for configurations that select them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// `likelihood * impact`
    #[default]
    Product,
    /// `max(likelihood, impact)`
    Max,
    /// `(likelihood + impact) / 2`; produces fractional scores
    Average,
}

impl CalculationMethod {
    /// Compute the raw score for a (likelihood, impact) pair
    ///
    /// Precondition: both inputs are within the configured scales
    /// (`1..=rows`, `1..=columns`). Call sites clamp via grid bounds;
    /// out-of-range input is a caller bug, not a handled error.
    ///
    /// Deterministic, no side effects. `Average` is the only method that
    /// produces non-integer scores.
    #[inline]
    #[must_use]
    pub fn score(self, likelihood: u8, impact: u8) -> f64 {
        debug_assert!(likelihood >= 1, "likelihood below scale");
        debug_assert!(impact >= 1, "impact below scale");

        match self {
            Self::Product => f64::from(likelihood) * f64::from(impact),
            Self::Max => f64::from(likelihood.max(impact)),
            Self::Average => (f64::from(likelihood) + f64::from(impact)) / 2.0,
        }
    }

    /// Stable configuration name of this method
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Max => "max",
            Self::Average => "average",
        }
    }

    /// Resolve a method from its configuration name
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "product" => Some(Self::Product),
            "max" => Some(Self::Max),
            "average" => Some(Self::Average),
            _ => None,
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the band containing `score`
///
/// Scans `levels` in stored order (ascending `order` for a valid
/// configuration) and returns the first band whose inclusive bounds contain
/// the score. Returns `None` when no band matches — the caller renders
/// "Unknown". If bands overlap (the contiguity invariant was violated),
/// first-in-order wins deterministically.
#[inline]
#[must_use]
pub fn level_for_score(score: f64, levels: &[RiskLevel]) -> Option<&RiskLevel> {
    levels.iter().find(|level| level.contains(score))
}

/// Resolve a smoothly interpolated color for `score`
///
/// Within the matching band the color ramps from that band's color towards
/// the *next* band's color by `(score - min) / (max - min)`, so adjacent
/// bands blend instead of forming hard edges. The last band and zero-width
/// bands return their flat color.
///
/// Unlike [`level_for_score`], this never reports absence: an unmatched
/// score falls back to the first band's color, and an empty band list to
/// [`Rgb::NEUTRAL`]. The visual surface always shows some color; the data
/// lookup stays honest.
#[must_use]
pub fn color_for_score(score: f64, levels: &[RiskLevel]) -> Rgb {
    for (i, level) in levels.iter().enumerate() {
        if !level.contains(score) {
            continue;
        }
        let Some(next) = levels.get(i + 1) else {
            return level.color;
        };
        if level.width() == 0 {
            return level.color;
        }
        let progress = (score - f64::from(level.min)) / f64::from(level.width());
        return level.color.lerp(next.color, progress);
    }
    levels.first().map_or(Rgb::NEUTRAL, |level| level.color)
}
