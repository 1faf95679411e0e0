//! GRM Color Primitives
//!
//! Color handling for risk-matrix visualization.
//!
//! # Core Concepts
//!
//! - [`Rgb`]: strongly-typed 3-byte RGB color with `#rrggbb` codec
//! - [`Rgb::lerp`]: per-channel linear interpolation for smooth severity ramps
//! - [`SEVERITY_RAMP`]: the fixed 10-stop green-to-dark-red severity scale
//! - [`ramp_colors`]: evenly spread ramp stops for a given band count
//!
//! # Example
//!
//! ```rust
//! use grm_color::{ramp_colors, Rgb};
//!
//! let green: Rgb = "#22c55e".parse().unwrap();
//! let red: Rgb = "#dc2626".parse().unwrap();
//! let mid = green.lerp(red, 0.5);
//! assert_eq!(ramp_colors(4).len(), 4);
//! assert_ne!(mid, green);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod ramp;
mod rgb;

// Re-exports
pub use ramp::{ramp_colors, spread_indices, SEVERITY_RAMP};
pub use rgb::{ColorParseError, Rgb};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
