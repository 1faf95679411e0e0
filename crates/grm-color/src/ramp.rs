//! Severity color ramp
//!
//! The fixed 10-stop green-to-dark-red scale that default level bands draw
//! their colors from, plus the even-spreading rule that selects stops for a
//! given band count.

use crate::rgb::Rgb;

/// The 10-stop severity ramp, ascending severity
///
/// Green through yellow and orange into red and dark red. Band generators
/// pick evenly spread stops from this scale so that any band count from 2
/// to 10 spans the full green-to-dark-red range.
pub const SEVERITY_RAMP: [Rgb; 10] = [
    Rgb::new(0x22, 0xc5, 0x5e), // green
    Rgb::new(0x84, 0xcc, 0x16), // lime
    Rgb::new(0xea, 0xb3, 0x08), // yellow
    Rgb::new(0xf5, 0x9e, 0x0b), // amber
    Rgb::new(0xf9, 0x73, 0x16), // orange
    Rgb::new(0xef, 0x44, 0x44), // light red
    Rgb::new(0xdc, 0x26, 0x26), // red
    Rgb::new(0xb9, 0x1c, 0x1c), // deep red
    Rgb::new(0x99, 0x1b, 0x1b), // darker red
    Rgb::new(0x7f, 0x1d, 0x1d), // dark red
];

/// Evenly spread `count` indices over `[0, len - 1]`
///
/// The first index is always 0 and the last is always `len - 1` when
/// `count >= 2`, so the extremes of the scale are always represented.
/// A single index selects the start of the scale; `count = 0` selects
/// nothing.
#[must_use]
pub fn spread_indices(count: usize, len: usize) -> Vec<usize> {
    if count == 0 || len == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }
    let top = (len - 1) as f64;
    let span = (count - 1) as f64;
    (0..count)
        .map(|i| ((i as f64) * top / span).round() as usize)
        .collect()
}

/// Select `count` evenly spread colors from [`SEVERITY_RAMP`]
///
/// With `count > 10` the ramp's 10 stops are reused by nearest index, so
/// adjacent bands may share a color; callers wanting distinct colors keep
/// the band count within the ramp size.
#[must_use]
pub fn ramp_colors(count: usize) -> Vec<Rgb> {
    spread_indices(count, SEVERITY_RAMP.len())
        .into_iter()
        .map(|i| SEVERITY_RAMP[i])
        .collect()
}
