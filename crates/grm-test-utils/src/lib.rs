//! Testing utilities for the GRM workspace
//!
//! Shared fixtures and configuration builders.

#![allow(missing_docs)]

use grm_color::Rgb;
use grm_matrix::{RiskLevel, RiskMatrixConfig};

/// The canonical 5x5 product matrix with the four-band default preset.
pub fn five_by_five_config() -> RiskMatrixConfig {
    RiskMatrixConfig::new(5, 5).with_default_levels(4)
}

/// A small 3x3 matrix with the three-band preset.
pub fn three_by_three_config() -> RiskMatrixConfig {
    RiskMatrixConfig::new(3, 3).with_default_levels(3)
}

/// A configuration whose bands leave scores 7..=8 uncovered.
///
/// Fails validation; used to exercise the graceful "unknown" lookup path.
pub fn gapped_config() -> RiskMatrixConfig {
    RiskMatrixConfig::new(5, 5).with_levels(vec![
        RiskLevel::new("Low", Rgb::new(0x22, 0xc5, 0x5e), 1, 6, 1),
        RiskLevel::new("High", Rgb::new(0xdc, 0x26, 0x26), 9, 25, 2),
    ])
}

/// A configuration with two overlapping bands.
///
/// Fails validation; first-in-order wins on lookup.
pub fn overlapping_config() -> RiskMatrixConfig {
    RiskMatrixConfig::new(5, 5).with_levels(vec![
        RiskLevel::new("Low", Rgb::new(0x22, 0xc5, 0x5e), 1, 15, 1),
        RiskLevel::new("High", Rgb::new(0xdc, 0x26, 0x26), 10, 25, 2),
    ])
}
