//! GRM Matrix Core
//!
//! Pure, stateless risk-matrix scoring for GRC applications.
//!
//! # Core Concepts
//!
//! - [`RiskMatrixConfig`]: likelihood/impact scales, calculation method and
//!   ordered level bands
//! - [`CalculationMethod`]: how a (likelihood, impact) pair becomes a score
//! - [`RiskLevel`]: a named, colored, inclusive score band
//! - [`level_for_score`]: first-match band lookup, honest about absence
//! - [`color_for_score`]: smooth score-to-color resolution for visualization
//! - [`generate_default_levels`]: deterministic preset band generator
//! - [`RiskMatrixConfig::validate`]: the save-time band invariant gate
//!
//! # Example
//!
//! ```rust
//! use grm_matrix::{CalculationMethod, RiskMatrixConfig};
//!
//! let config = RiskMatrixConfig::new(5, 5)
//!     .with_method(CalculationMethod::Product)
//!     .with_default_levels(4);
//!
//! config.validate().unwrap();
//!
//! let score = config.score(3, 4);
//! assert_eq!(score, 12.0);
//! assert_eq!(config.level_for_score(score).unwrap().name, "Medium");
//! ```
//!
//! Lookups never panic on malformed band sets: [`level_for_score`] returns
//! `None` and callers render "Unknown". Keeping malformed configurations out
//! of storage is the editor's job, via [`RiskMatrixConfig::validate`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod level;
mod score;
mod validation;

// Re-exports
pub use config::RiskMatrixConfig;
pub use level::{generate_default_levels, RiskLevel};
pub use score::{color_for_score, level_for_score, CalculationMethod};
pub use validation::ValidationError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
