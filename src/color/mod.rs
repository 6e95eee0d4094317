//! Color conversion library
//!
//! Lossy but deterministic conversions between hex strings, RGB, HSV, HSL
//! and an approximate HCT. All functions are pure; invalid hex input yields
//! `None` instead of an error.
//!
//! # Example
//!
//! ```rust
//! use theme_studio::color::{hex_to_hsv, hex_to_rgb, rgb_to_hex, Hsv, Rgb};
//!
//! assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
//! assert_eq!(hex_to_hsv("#FF0000"), Some(Hsv::new(0.0, 100.0, 100.0)));
//! assert_eq!(rgb_to_hex(255.0, 0.0, 0.0).as_str(), "#ff0000");
//! assert_eq!(hex_to_rgb("not-a-color"), None);
//! ```

pub mod convert;
pub mod hex;
pub mod model;

pub use convert::{
    hct_to_rgb, hex_to_hsv, hsl_to_rgb, hsv_to_hex, hsv_to_rgb, rgb_to_hct, rgb_to_hsl,
    rgb_to_hsv,
};
pub use hex::{hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex, HexColor};
pub use model::{Hct, Hsl, Hsv, Rgb};
