//! Seed-based palette generation
//!
//! Derives a light scheme, a dark scheme and the extended tokens from a
//! single seed color by shifting hue, saturation and lightness in HSL.
//! Secondary and tertiary roles sit 30° and 60° around the hue wheel from
//! the seed. Error roles and most extended tokens are fixed values.
//!
//! Generation never fails: a seed that is not a valid hex color is replaced
//! by the default Material purple `#6750a4`.

use crate::color::{hex_to_rgb, hsl_to_rgb, normalize_hex, rgb_to_hsl, HexColor, Hsl, Rgb};
use crate::palette::extended::{
    fixed_semantic, semantic_description, semantic_token_name, tag_colors, ExtendedColor,
    TokenVariant, SEMANTIC_GROUPS,
};
use crate::palette::scheme::ColorScheme;
use log::{debug, warn};
use serde::Serialize;

/// Seed used when the requested one cannot be parsed
pub const DEFAULT_SEED_RGB: Rgb = Rgb::new(103, 80, 164);

/// Hue offset of the secondary roles, in degrees
pub const SECONDARY_HUE_SHIFT: f64 = 30.0;

/// Hue offset of the tertiary roles, in degrees
pub const TERTIARY_HUE_SHIFT: f64 = 60.0;

const LIGHT_ERROR: [&str; 4] = ["#ba1a1a", "#ffffff", "#ffdad6", "#410002"];
const DARK_ERROR: [&str; 4] = ["#ffb4ab", "#690005", "#93000a", "#ffdad6"];

/// Hue shift, saturation and lightness adjustments for one derived color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjust {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

const fn adjust(hue: f64, saturation: f64, lightness: f64) -> Adjust {
    Adjust {
        hue,
        saturation,
        lightness,
    }
}

/// Everything generated from one seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// The seed actually used, after fallback
    pub seed: HexColor,
    pub light: ColorScheme,
    pub dark: ColorScheme,
    pub extended: Vec<ExtendedColor>,
}

/// A seed decomposed into HSL, ready to derive variants from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedColor {
    rgb: Rgb,
    hsl: Hsl,
}

impl SeedColor {
    /// Parse a seed, falling back to [`DEFAULT_SEED_RGB`]
    ///
    /// `#RGB` shorthand is expanded first; anything else that
    /// [`hex_to_rgb`] rejects degrades to the default purple.
    pub fn parse(seed: &str) -> Self {
        let rgb = normalize_hex(seed)
            .ok()
            .and_then(|hex| hex_to_rgb(hex.as_str()))
            .or_else(|| hex_to_rgb(seed));

        match rgb {
            Some(rgb) => Self::from_rgb(rgb),
            None => {
                warn!(
                    "Invalid seed color '{}', falling back to {}",
                    seed,
                    DEFAULT_SEED_RGB.to_hex()
                );
                Self::from_rgb(DEFAULT_SEED_RGB)
            }
        }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: rgb_to_hsl(rgb),
        }
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The seed as lowercase hex
    pub fn hex(&self) -> HexColor {
        self.rgb.to_hex()
    }

    fn adjusted(&self, by: Adjust) -> Hsl {
        Hsl::new(
            (self.hsl.h + by.hue).rem_euclid(360.0),
            (self.hsl.s + by.saturation).clamp(0.0, 100.0),
            (self.hsl.l + by.lightness).clamp(0.0, 100.0),
        )
    }

    /// Shift the seed in HSL and convert back to hex
    pub fn variant(&self, by: Adjust) -> HexColor {
        hsl_to_rgb(self.adjusted(by)).to_hex()
    }

    /// Black or white for content drawn on `by`'s variant
    pub fn on_variant(&self, by: Adjust) -> HexColor {
        on_color(self.adjusted(by).l)
    }
}

/// Black above 50% lightness, white otherwise
///
/// A lightness threshold, not a measured contrast ratio.
pub fn on_color(lightness: f64) -> HexColor {
    if lightness > 50.0 {
        HexColor::black()
    } else {
        HexColor::white()
    }
}

fn fixed(hex: &str) -> HexColor {
    // Only called with the error-role constants above
    HexColor::parse(hex).unwrap_or_else(|_| HexColor::black())
}

/// Derive the light scheme
pub fn light_scheme(seed: &SeedColor) -> ColorScheme {
    let primary = seed.hex();
    let secondary = adjust(SECONDARY_HUE_SHIFT, -10.0, 0.0);
    let tertiary = adjust(TERTIARY_HUE_SHIFT, -10.0, 0.0);
    let surface = seed.variant(adjust(0.0, -30.0, 48.0));
    let on_surface = seed.variant(adjust(0.0, -30.0, -38.0));

    ColorScheme {
        on_primary: on_color(seed.hsl().l),
        primary_container: seed.variant(adjust(0.0, -20.0, 35.0)),
        on_primary_container: seed.variant(adjust(0.0, 0.0, -40.0)),
        secondary: seed.variant(secondary),
        on_secondary: seed.on_variant(secondary),
        secondary_container: seed.variant(adjust(SECONDARY_HUE_SHIFT, -30.0, 35.0)),
        on_secondary_container: seed.variant(adjust(SECONDARY_HUE_SHIFT, -10.0, -40.0)),
        tertiary: seed.variant(tertiary),
        on_tertiary: seed.on_variant(tertiary),
        tertiary_container: seed.variant(adjust(TERTIARY_HUE_SHIFT, -30.0, 35.0)),
        on_tertiary_container: seed.variant(adjust(TERTIARY_HUE_SHIFT, -10.0, -40.0)),
        error: fixed(LIGHT_ERROR[0]),
        on_error: fixed(LIGHT_ERROR[1]),
        error_container: fixed(LIGHT_ERROR[2]),
        on_error_container: fixed(LIGHT_ERROR[3]),
        background: surface.clone(),
        on_background: on_surface.clone(),
        surface,
        on_surface,
        surface_variant: seed.variant(adjust(0.0, -25.0, 40.0)),
        on_surface_variant: seed.variant(adjust(0.0, -25.0, -18.0)),
        outline: seed.variant(adjust(0.0, -30.0, 2.0)),
        outline_variant: seed.variant(adjust(0.0, -30.0, 30.0)),
        shadow: HexColor::black(),
        scrim: HexColor::black(),
        inverse_surface: seed.variant(adjust(0.0, -30.0, -28.0)),
        on_inverse_surface: seed.variant(adjust(0.0, -30.0, 45.0)),
        inverse_primary: seed.variant(adjust(0.0, 0.0, 30.0)),
        surface_tint: primary.clone(),
        primary,
    }
}

/// Derive the dark scheme
pub fn dark_scheme(seed: &SeedColor) -> ColorScheme {
    let primary = seed.variant(adjust(0.0, 0.0, 30.0));
    let surface = seed.variant(adjust(0.0, -30.0, -40.0));
    let on_surface = seed.variant(adjust(0.0, -30.0, 42.0));

    ColorScheme {
        on_primary: seed.variant(adjust(0.0, 0.0, -30.0)),
        primary_container: seed.variant(adjust(0.0, -10.0, -15.0)),
        on_primary_container: seed.variant(adjust(0.0, -20.0, 40.0)),
        secondary: seed.variant(adjust(SECONDARY_HUE_SHIFT, -10.0, 30.0)),
        on_secondary: seed.variant(adjust(SECONDARY_HUE_SHIFT, -10.0, -30.0)),
        secondary_container: seed.variant(adjust(SECONDARY_HUE_SHIFT, -20.0, -15.0)),
        on_secondary_container: seed.variant(adjust(SECONDARY_HUE_SHIFT, -30.0, 40.0)),
        tertiary: seed.variant(adjust(TERTIARY_HUE_SHIFT, -10.0, 30.0)),
        on_tertiary: seed.variant(adjust(TERTIARY_HUE_SHIFT, -10.0, -30.0)),
        tertiary_container: seed.variant(adjust(TERTIARY_HUE_SHIFT, -20.0, -15.0)),
        on_tertiary_container: seed.variant(adjust(TERTIARY_HUE_SHIFT, -30.0, 40.0)),
        error: fixed(DARK_ERROR[0]),
        on_error: fixed(DARK_ERROR[1]),
        error_container: fixed(DARK_ERROR[2]),
        on_error_container: fixed(DARK_ERROR[3]),
        background: surface.clone(),
        on_background: on_surface.clone(),
        surface,
        on_surface,
        surface_variant: seed.variant(adjust(0.0, -25.0, -28.0)),
        on_surface_variant: seed.variant(adjust(0.0, -25.0, 32.0)),
        outline: seed.variant(adjust(0.0, -30.0, 10.0)),
        outline_variant: seed.variant(adjust(0.0, -30.0, -28.0)),
        shadow: HexColor::black(),
        scrim: HexColor::black(),
        inverse_surface: seed.variant(adjust(0.0, -30.0, 42.0)),
        on_inverse_surface: seed.variant(adjust(0.0, -30.0, -28.0)),
        inverse_primary: seed.hex(),
        surface_tint: primary.clone(),
        primary,
    }
}

/// Adjustments for the seed-derived semantic groups, as (text, background, border)
fn derived_semantic(group: &str) -> Option<[Adjust; 3]> {
    match group {
        "default" => Some([
            adjust(0.0, -70.0, -20.0),
            adjust(0.0, -80.0, 45.0),
            adjust(0.0, -70.0, 30.0),
        ]),
        "information" => Some([
            adjust(0.0, 0.0, -10.0),
            adjust(0.0, -20.0, 40.0),
            adjust(0.0, -10.0, 25.0),
        ]),
        _ => None,
    }
}

/// Derive the extended tokens: semantic groups first, then tag groups
///
/// Only `default*` and `information*` depend on the seed.
pub fn extended_colors(seed: &SeedColor) -> Vec<ExtendedColor> {
    let mut colors = Vec::new();

    for group in SEMANTIC_GROUPS {
        let values: [HexColor; 3] = match derived_semantic(group) {
            Some(adjustments) => adjustments.map(|by| seed.variant(by)),
            None => fixed_semantic(group).unwrap_or_else(|| {
                [HexColor::black(), HexColor::white(), HexColor::black()]
            }),
        };

        for (variant, color) in TokenVariant::ALL.into_iter().zip(values) {
            colors.push(ExtendedColor::new(
                semantic_token_name(group, variant),
                color,
                semantic_description(group, variant),
            ));
        }
    }

    colors.extend(tag_colors());
    colors
}

/// Generate the full palette for a seed
///
/// Pure and deterministic: the same seed always yields identical values,
/// and every call replaces any previous palette wholesale.
pub fn generate_palette(seed: &str) -> Palette {
    let seed = SeedColor::parse(seed);
    debug!(
        "Generating palette from {} (h={:.1}, s={:.1}, l={:.1})",
        seed.hex(),
        seed.hsl().h,
        seed.hsl().s,
        seed.hsl().l
    );

    Palette {
        seed: seed.hex(),
        light: light_scheme(&seed),
        dark: dark_scheme(&seed),
        extended: extended_colors(&seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;
    use crate::palette::extended::EXTENDED_TOKEN_COUNT;
    use std::collections::HashSet;

    fn token<'a>(palette: &'a Palette, name: &str) -> &'a str {
        palette
            .extended
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.color.as_str())
            .unwrap_or_else(|| panic!("missing token {}", name))
    }

    #[test]
    fn test_light_scheme_from_default_purple() {
        let palette = generate_palette("#6750A4");
        assert_eq!(palette.seed.as_str(), "#6750a4");
        assert_eq!(palette.light.primary.as_str(), "#6750a4");
        assert_eq!(palette.light.on_primary.as_str(), "#ffffff");
        assert_eq!(palette.light.primary_container.as_str(), "#d0cdda");
        assert_eq!(palette.light.on_primary_container.as_str(), "#110d1b");
        assert_eq!(palette.light.secondary.as_str(), "#8a5c98");
        assert_eq!(palette.light.tertiary.as_str(), "#985c87");
        assert_eq!(palette.light.surface.as_str(), "#f4f4f5");
        assert_eq!(palette.light.outline.as_str(), "#7d7985");
        assert_eq!(palette.light.inverse_primary.as_str(), "#beb3da");
        assert_eq!(palette.light.surface_tint, palette.light.primary);
    }

    #[test]
    fn test_dark_scheme_from_default_purple() {
        let palette = generate_palette("#6750A4");
        assert_eq!(palette.dark.primary.as_str(), "#beb3da");
        assert_eq!(palette.dark.on_primary.as_str(), "#261e3d");
        assert_eq!(palette.dark.surface.as_str(), "#141315");
        assert_eq!(palette.dark.inverse_primary.as_str(), "#6750a4");
        assert_eq!(palette.dark.surface_tint, palette.dark.primary);
    }

    #[test]
    fn test_red_seed_hue_harmony() {
        let palette = generate_palette("#FF0000");
        assert_eq!(palette.light.primary_container.as_str(), "#f7baba");
        assert_eq!(palette.light.on_primary_container.as_str(), "#330000");
        // +30° and +60° from red
        assert_eq!(palette.light.secondary.as_str(), "#f2800d");
        assert_eq!(palette.light.tertiary.as_str(), "#f2f20d");
        assert_eq!(palette.dark.primary.as_str(), "#ff9999");
        assert_eq!(palette.dark.on_primary.as_str(), "#660000");
    }

    #[test]
    fn test_on_primary_threshold() {
        assert_eq!(generate_palette("#808080").light.on_primary.as_str(), "#000000");
        assert_eq!(generate_palette("#000000").light.on_primary.as_str(), "#ffffff");
        assert_eq!(generate_palette("#ffffff").light.on_primary.as_str(), "#000000");
        // l == 50 exactly is not "> 50"
        assert_eq!(on_color(50.0), HexColor::white());
    }

    #[test]
    fn test_error_roles_are_fixed() {
        for seed in ["#6750A4", "#00FF00", "#123456"] {
            let palette = generate_palette(seed);
            assert_eq!(palette.light.error.as_str(), "#ba1a1a");
            assert_eq!(palette.light.on_error_container.as_str(), "#410002");
            assert_eq!(palette.dark.error.as_str(), "#ffb4ab");
            assert_eq!(palette.dark.error_container.as_str(), "#93000a");
        }
    }

    #[test]
    fn test_invalid_seed_falls_back_to_default_purple() {
        let expected = generate_palette("#6750A4");
        for bad in ["not-a-color", "", "#12345", "#GGGGGG", "rgb(1,2,3)"] {
            assert_eq!(generate_palette(bad), expected, "seed {:?}", bad);
        }
    }

    #[test]
    fn test_seed_without_hash_and_shorthand() {
        assert_eq!(generate_palette("6750A4"), generate_palette("#6750a4"));
        assert_eq!(generate_palette("#f00"), generate_palette("#ff0000"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_palette("#3A7BD5");
        let second = generate_palette("#3A7BD5");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_every_generated_color_is_valid_hex() {
        for seed in ["#6750A4", "#000000", "#ffffff", "#00ff00", "#0a0b0c", "#fedcba"] {
            let palette = generate_palette(seed);
            for scheme in [&palette.light, &palette.dark] {
                for (role, color) in scheme.roles() {
                    assert!(is_valid_hex(color.as_str()), "{} {} = {}", seed, role, color);
                    assert_eq!(color.as_str().len(), 7);
                }
            }
            for token in &palette.extended {
                assert!(is_valid_hex(token.color.as_str()));
                assert!(is_valid_hex(token.fallback.as_str()));
            }
        }
    }

    #[test]
    fn test_extended_token_set() {
        let palette = generate_palette("#6750A4");
        assert_eq!(palette.extended.len(), EXTENDED_TOKEN_COUNT);
        assert_eq!(palette.extended.len(), 48);

        let names: HashSet<_> = palette.extended.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 48);

        assert_eq!(palette.extended[0].name, "defaultText");
        assert_eq!(palette.extended[3].name, "informationText");
        assert_eq!(palette.extended[14].name, "errorBorder");
        assert_eq!(palette.extended[15].name, "tagBlueText");
        assert!(palette.extended.iter().all(|c| !c.harmonized));
    }

    #[test]
    fn test_only_default_and_information_follow_seed() {
        let purple = generate_palette("#6750A4");
        let red = generate_palette("#FF0000");

        let changed: Vec<&str> = purple
            .extended
            .iter()
            .zip(&red.extended)
            .filter(|(a, b)| a.color != b.color)
            .map(|(a, _)| a.name.as_str())
            .collect();

        assert_eq!(
            changed,
            vec![
                "defaultText",
                "defaultBackground",
                "defaultBorder",
                "informationText",
                "informationBackground",
                "informationBorder",
            ]
        );
    }

    #[test]
    fn test_derived_extended_values() {
        let palette = generate_palette("#FF0000");
        assert_eq!(token(&palette, "defaultText"), "#633636");
        assert_eq!(token(&palette, "informationText"), "#cc0000");
        assert_eq!(token(&palette, "informationBackground"), "#fad1d1");
        assert_eq!(token(&palette, "warningText"), "#d48806");
        assert_eq!(token(&palette, "successBackground"), "#f6ffed");
        assert_eq!(token(&palette, "errorBorder"), "#ffa39e");
        assert_eq!(token(&palette, "tagMagentaText"), "#c41d7f");
    }

    #[test]
    fn test_variant_wraps_hue_and_clamps() {
        let seed = SeedColor::parse("#00FF00");
        // 120 + 300 wraps to 60
        assert_eq!(seed.variant(adjust(300.0, 0.0, 0.0)).as_str(), "#ffff00");
        assert_eq!(seed.variant(adjust(0.0, 0.0, 80.0)).as_str(), "#ffffff");
        assert_eq!(seed.variant(adjust(0.0, -200.0, 0.0)).as_str(), "#808080");
    }
}
