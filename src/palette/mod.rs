//! Palette module
//!
//! Turns one seed color into a full Material Design 3 theme and holds the
//! editable form of that theme.
//!
//! # Submodules
//!
//! - `scheme` - The 30-role `ColorScheme` and `ThemeMode`
//! - `extended` - Semantic and tag tokens outside the scheme
//! - `generator` - Seed-based derivation of schemes and extended tokens
//! - `document` - Editable, serializable theme documents
//!
//! # Example
//!
//! ```rust
//! use theme_studio::palette::generate_palette;
//!
//! let palette = generate_palette("#6750A4");
//! assert_eq!(palette.light.primary.as_str(), "#6750a4");
//! assert_eq!(palette.extended.len(), 48);
//! ```

pub mod document;
pub mod extended;
pub mod generator;
pub mod scheme;

pub use document::ThemeDocument;
pub use extended::{ExtendedColor, TokenVariant};
pub use generator::{generate_palette, Palette, SeedColor};
pub use scheme::{ColorScheme, ThemeMode};
