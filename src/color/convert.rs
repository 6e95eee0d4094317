//! Conversions between color representations
//!
//! Every function here is pure and total: out-of-range numbers are clamped
//! or wrapped, never rejected. Only the hex-reading functions can fail, and
//! they report it with `None`.

use crate::color::hex::{hex_to_rgb, rgb_to_hex, to_byte, HexColor};
use crate::color::model::{Hct, Hsl, Hsv, Rgb};

/// Hue in degrees shared by the HSV and HSL decompositions. Achromatic
/// input (`delta == 0`) has hue 0.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

/// Unrounded HSV decomposition
pub(crate) fn hsv_components(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_degrees(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    Hsv::new(h, s, max * 100.0)
}

/// Decompose into HSV, rounding every component to the nearest integer
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let exact = hsv_components(rgb);
    let mut h = exact.h.round();
    if h >= 360.0 {
        h = 0.0;
    }
    Hsv::new(h, exact.s.round(), exact.v.round())
}

/// Rebuild RGB from HSV by 60° hue sector
///
/// Hue is wrapped into `[0, 360)`; saturation and value are clamped to
/// `[0, 100]`.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = wrap_hue(hsv.h);
    let s = clamp_percent(hsv.s) / 100.0;
    let v = clamp_percent(hsv.v) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        to_byte((r + m) * 255.0),
        to_byte((g + m) * 255.0),
        to_byte((b + m) * 255.0),
    )
}

pub fn hex_to_hsv(hex: &str) -> Option<Hsv> {
    hex_to_rgb(hex).map(rgb_to_hsv)
}

pub fn hsv_to_hex(hsv: Hsv) -> HexColor {
    let rgb = hsv_to_rgb(hsv);
    rgb.to_hex()
}

/// Decompose into HSL with lightness `(max + min) / 2`; not rounded
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl::new(hue_degrees(r, g, b, max, delta), s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Rebuild RGB from HSL; hue wrapped, saturation and lightness clamped
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h) / 360.0;
    let s = clamp_percent(hsl.s) / 100.0;
    let l = clamp_percent(hsl.l) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_byte(r * 255.0), to_byte(g * 255.0), to_byte(b * 255.0))
}

/// sRGB (D65) to XYZ matrix, applied to gamma-encoded channels
const XYZ_MATRIX: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

fn xyz(rgb: Rgb) -> [f64; 3] {
    let (r, g, b) = rgb.unit();
    XYZ_MATRIX.map(|row| row[0] * r + row[1] * g + row[2] * b)
}

/// Approximate HCT
///
/// Tone is the unlinearized luminance `Y` scaled to 0-100, chroma is the
/// rounded HSV saturation times 1.5, and hue is the HSV hue. This is a
/// stand-in for real HCT; palettes are generated from it as-is.
pub fn rgb_to_hct(rgb: Rgb) -> Hct {
    let hsv = rgb_to_hsv(rgb);
    let [_, y, _] = xyz(rgb);

    Hct::new(
        hsv.h,
        (hsv.s * 1.5).round(),
        (y * 100.0).round().clamp(0.0, 100.0),
    )
}

/// Inverse of [`rgb_to_hct`] through HSV with `s = c / 1.5`, `v = t + 0.3c`
pub fn hct_to_rgb(hct: Hct) -> Rgb {
    let s = (hct.c / 1.5).min(100.0);
    let v = (hct.t + hct.c * 0.3).min(100.0);
    hsv_to_rgb(Hsv::new(hct.h, s, v))
}

fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

impl Rgb {
    pub fn to_hex(&self) -> HexColor {
        rgb_to_hex(self.r as f64, self.g as f64, self.b as f64)
    }

    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }

    pub fn to_hct(&self) -> Hct {
        rgb_to_hct(*self)
    }
}
