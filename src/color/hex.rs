//! Hex color strings
//!
//! [`HexColor`] is the only color representation stored in schemes and
//! documents. It can only be built through validated paths, so every value
//! is exactly `#` followed by six hex digits.

use crate::color::model::Rgb;
use crate::core::error::ThemeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated `#RRGGBB` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Pure black
    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    /// Pure white
    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// Parse a `#RGB` or `#RRGGBB` string, expanding the short form.
    ///
    /// Six-digit input is kept as written, including its letter case.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        normalize_hex(value)
    }

    /// The full string, including the leading `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the leading `#`
    ///
    /// Code templates (`Color(0xFF......)`) splice this in directly.
    pub fn without_hash(&self) -> &str {
        &self.0[1..]
    }

    /// Decode into byte channels
    pub fn to_rgb(&self) -> Rgb {
        // The invariant guarantees six valid digits.
        hex_to_rgb(&self.0).unwrap_or_default()
    }

    /// Lowercase form, as emitted by the conversion functions
    pub fn to_lowercase(&self) -> Self {
        Self(self.0.to_ascii_lowercase())
    }

    fn from_rgb_unchecked(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn all_hex_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check for `#RGB` or `#RRGGBB` (case-insensitive, `#` required)
pub fn is_valid_hex(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => (digits.len() == 3 || digits.len() == 6) && all_hex_digits(digits),
        None => false,
    }
}

/// Expand `#RGB` to `#RRGGBB`; six-digit input passes through unchanged
pub fn normalize_hex(value: &str) -> Result<HexColor, ThemeError> {
    if !is_valid_hex(value) {
        return Err(ThemeError::InvalidHex(value.to_string()));
    }

    let digits = &value[1..];
    if digits.len() == 6 {
        return Ok(HexColor(value.to_string()));
    }

    let mut expanded = String::with_capacity(7);
    expanded.push('#');
    for c in digits.chars() {
        expanded.push(c);
        expanded.push(c);
    }
    Ok(HexColor(expanded))
}

/// Decode `#RRGGBB` (the `#` is optional) into byte channels
///
/// Returns `None` for anything else, including the three-digit shorthand.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !all_hex_digits(digits) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format channels as lowercase `#rrggbb`
///
/// Channels are clamped to `[0, 255]` and rounded first, so any numeric
/// input produces a valid color.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    HexColor::from_rgb_unchecked(to_byte(r), to_byte(g), to_byte(b))
}

/// Clamp and round a channel into a byte. NaN maps to 0.
pub(crate) fn to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("#1a2B3c"));
        assert!(!is_valid_hex("123456"));
        assert!(!is_valid_hex("#12345"));
        assert!(!is_valid_hex("#12G456"));
        assert!(!is_valid_hex("#"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn test_normalize_hex_expands_shorthand() {
        assert_eq!(normalize_hex("#abc").unwrap().as_str(), "#aabbcc");
        assert_eq!(normalize_hex("#F0a").unwrap().as_str(), "#FF00aa");
    }

    #[test]
    fn test_normalize_hex_passes_six_digits_through() {
        assert_eq!(normalize_hex("#1a2B3c").unwrap().as_str(), "#1a2B3c");
    }

    #[test]
    fn test_normalize_hex_rejects_invalid() {
        let err = normalize_hex("abc").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidHex(ref s) if s == "abc"));
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("6750A4"), Some(Rgb::new(103, 80, 164)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_invalid() {
        assert_eq!(hex_to_rgb("not-a-color"), None);
        assert_eq!(hex_to_rgb("#abc"), None);
        assert_eq!(hex_to_rgb("#ff00000"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        // multi-byte input must not panic on slicing
        assert_eq!(hex_to_rgb("#ééé"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255.0, 0.0, 0.0).as_str(), "#ff0000");
        assert_eq!(rgb_to_hex(1.0, 2.0, 3.0).as_str(), "#010203");
    }

    #[test]
    fn test_rgb_to_hex_clamps_and_rounds() {
        assert_eq!(rgb_to_hex(300.0, -20.0, 127.6).as_str(), "#ff0080");
        assert_eq!(rgb_to_hex(f64::NAN, f64::INFINITY, 0.4).as_str(), "#00ff00");
    }

    #[test]
    fn test_hex_round_trip_is_lowercase() {
        let mut rng = StdRng::seed_from_u64(0x6750A4);
        for i in 0..5000 {
            let value = rng.gen_range(0..=0xFF_FFFFu32);
            let hex = if i % 2 == 0 {
                format!("#{:06X}", value)
            } else {
                format!("#{:06x}", value)
            };
            let rgb = hex_to_rgb(&hex).unwrap();
            let back = rgb_to_hex(rgb.r as f64, rgb.g as f64, rgb.b as f64);
            assert_eq!(back.as_str(), hex.to_ascii_lowercase());
        }

        for hex in ["#000000", "#ffffff", "#ABCDEF"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb.to_hex().as_str(), hex.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_hex_color_accessors() {
        let color: HexColor = "#6750A4".parse().unwrap();
        assert_eq!(color.without_hash(), "6750A4");
        assert_eq!(color.to_rgb(), Rgb::new(103, 80, 164));
        assert_eq!(color.to_lowercase().as_str(), "#6750a4");
        assert_eq!(format!("{}", color), "#6750A4");
    }

    #[test]
    fn test_hex_color_serde_validates() {
        let ok: HexColor = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(ok.as_str(), "#aabbcc");
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"#aabbcc\"");
    }
}
