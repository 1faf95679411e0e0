//! RGB color primitive
//!
//! Provides [`Rgb`], a strongly-typed 3-byte color used for level colors
//! and heat-map pixels throughout the workspace.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 3-byte RGB color
///
/// Parsed from and displayed as a `#rrggbb` hex string.
/// Immutable and cheap to clone (Copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Neutral mid-gray used when no level color can be resolved
    pub const NEUTRAL: Rgb = Rgb([0x9c, 0xa3, 0xaf]);

    /// Create a new color from raw channel values
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red channel
    #[inline]
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Green channel
    #[inline]
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    #[inline]
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Get reference to the underlying channel bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Create color from a byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 3 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ColorParseError> {
        if bytes.len() != 3 {
            return Err(ColorParseError::InvalidLength {
                expected: 3,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 3];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Linear interpolation towards `other` by `t`
    ///
    /// Each channel is computed as `round(a + (b - a) * t)` and clamped to
    /// `[0, 255]`. `t = 0` yields `self`, `t = 1` yields `other`;
    /// interpolating a color towards itself is the identity for any `t`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ColorParseError::MissingHashPrefix {
                value: s.to_string(),
            });
        };
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength {
                expected: 6,
                actual: digits.len(),
            });
        }
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// Serde implementations: `#rrggbb` string for human-readable formats,
// raw channel bytes otherwise
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            Self::from_slice(&bytes).map_err(D::Error::custom)
        }
    }
}

/// Color parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    /// Input did not start with `#`
    #[error("missing '#' prefix in color: {value}")]
    MissingHashPrefix {
        /// The rejected input
        value: String,
    },

    /// Wrong number of channel bytes or hex digits
    #[error("invalid color length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Non-hex characters in the channel digits
    #[error("invalid hex digits: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
