//! Theme Studio Library
//!
//! The algorithmic core of a Material Design 3 theme editor: color
//! conversions, seed-based palette generation, and editable theme
//! documents.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`color`] - Hex, RGB, HSV, HSL and approximate HCT conversions
//! - [`palette`] - Color schemes, extended tokens, the seed-based generator
//!   and theme documents
//! - [`core`] - Configuration and error handling
//! - [`cli`] - Command-line interface (only used by the binary)
//!
//! The color and palette modules hold no state: callers own the theme
//! values and decide how to persist them.
//!
//! # Example Usage
//!
//! ```rust
//! use theme_studio::palette::{ThemeDocument, ThemeMode};
//!
//! fn main() -> theme_studio::core::error::Result<()> {
//!     // Generate light and dark schemes plus extended tokens
//!     let mut theme = ThemeDocument::from_seed("Brand", "#6750A4");
//!     assert_eq!(theme.light.primary.as_str(), "#6750a4");
//!
//!     // Edit individual tokens
//!     theme.set_token(ThemeMode::Dark, "primary", "#D0BCFF")?;
//!     theme.set_token(ThemeMode::Light, "tagBlueText", "#0958d9")?;
//!
//!     // Export
//!     let json = theme.to_json(true)?;
//!     assert_eq!(ThemeDocument::from_json(&json)?, theme);
//!     Ok(())
//! }
//! ```
//!
//! # Error Policy
//!
//! Conversions return `None` for malformed hex and never panic. Palette
//! generation never fails: an invalid seed silently degrades to the
//! default Material purple (`#6750a4`). Only editing and persistence
//! return [`core::error::ThemeError`].

pub mod cli;
pub mod color;
pub mod core;
pub mod palette;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
