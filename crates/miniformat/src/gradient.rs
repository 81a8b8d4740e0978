//! Piecewise-linear multi-stop color gradients.
//!
//! A gradient of `n` stops spread over `total` characters is split into
//! `n - 1` equal segments. Each character picks its segment from its
//! position and mixes the two surrounding stops channel by channel.
//!
//! ```text
//! stops:    red ───────── gold ───────── blue
//! position: 0   1   2   3   4   5   6   7
//!           └─ segment 0 ─┘ └─ segment 1 ─┘
//! ```
//!
//! Channels are truncated, never rounded, so the last character of a run
//! approaches the final stop without necessarily reaching it.

use crate::color::{Rgb, WHITE};
use crate::error::ColorParseError;

/// An ordered list of resolved hex stops.
///
/// Carries no cursor: the position being painted always comes from the
/// caller, so a gradient can be shared freely between scopes.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<String>,
}

impl Gradient {
    pub fn new(stops: Vec<String>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Color for `position` in a run of `total` characters.
    pub fn color_at(&self, position: usize, total: usize) -> String {
        interpolate(&self.stops, position, total)
    }
}

/// Interpolate the hex color at `position` along `total` characters.
///
/// - no stops: `#FFFFFF`
/// - one stop, or `total <= 1`: the first stop as written
/// - otherwise a lowercase `#rrggbb`
///
/// A stop that passed the resolver's length check but holds non-hex digits
/// makes the decode fail; the starting stop of the segment is returned
/// verbatim so the malformed value reaches the host unchanged.
///
/// # Examples
///
/// ```
/// use miniformat::gradient::interpolate;
///
/// let stops = vec!["#000000".to_string(), "#ffffff".to_string()];
/// assert_eq!(interpolate(&stops, 0, 4), "#000000");
/// assert_eq!(interpolate(&stops, 2, 4), "#7f7f7f");
/// ```
pub fn interpolate(stops: &[String], position: usize, total: usize) -> String {
    match try_interpolate(stops, position, total) {
        Ok(hex) => hex,
        Err(err) => {
            let (segment, _) = locate(stops.len(), position, total);
            log::warn!("gradient stop could not be decoded ({err}), keeping stop verbatim");
            stops[segment].clone()
        }
    }
}

/// Like [`interpolate`], but reports a stop that fails to decode.
pub fn try_interpolate(
    stops: &[String],
    position: usize,
    total: usize,
) -> Result<String, ColorParseError> {
    let Some(first) = stops.first() else {
        return Ok(WHITE.to_string());
    };
    if stops.len() == 1 || total <= 1 {
        return Ok(first.clone());
    }

    let (segment, fraction) = locate(stops.len(), position, total);
    let from = Rgb::from_hex(&stops[segment])?;
    let to = Rgb::from_hex(&stops[segment + 1])?;

    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * fraction) as u8;
    Ok(Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b)).to_hex())
}

/// Segment index and the fraction travelled inside it.
///
/// Requires at least two stops.
fn locate(stop_count: usize, position: usize, total: usize) -> (usize, f32) {
    let segment_size = total as f32 / (stop_count - 1) as f32;
    let position = position as f32;
    let segment = ((position / segment_size) as usize).min(stop_count - 2);
    let fraction = (position % segment_size) / segment_size;
    (segment, fraction)
}
