//! Color model value types
//!
//! Plain data, no invariants beyond the documented channel ranges. The
//! conversions live in [`crate::color::convert`].

use serde::{Deserialize, Serialize};

/// sRGB color with byte channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red (0-255)
    pub r: u8,
    /// Green (0-255)
    pub g: u8,
    /// Blue (0-255)
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0-1.0
    pub(crate) fn unit(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Largest per-channel distance to another color
    #[cfg(test)]
    pub(crate) fn max_channel_delta(&self, other: &Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

/// Hue / saturation / value
///
/// `h` in degrees `[0, 360)`, `s` and `v` in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Hue / saturation / lightness
///
/// `h` in degrees `[0, 360)`, `s` and `l` in percent `[0, 100]`. Unlike
/// [`Hsv`] the generator keeps these unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Approximate hue / chroma / tone
///
/// Not Google's CAM16-based HCT: the values are derived from the HSV
/// decomposition and an unlinearized luminance. `h` in `[0, 360)`, `c` in
/// `[0, 150]`, `t` in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hct {
    pub h: f64,
    pub c: f64,
    pub t: f64,
}

impl Hct {
    pub const fn new(h: f64, c: f64, t: f64) -> Self {
        Self { h, c, t }
    }
}
