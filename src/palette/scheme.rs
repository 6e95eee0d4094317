//! Material Design 3 color scheme
//!
//! Thirty named roles, serialized with the camelCase names Flutter's
//! `ColorScheme` uses.

use crate::color::HexColor;
use crate::core::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};

/// Which of the two schemes a theme carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{}' (expected light or dark)", other)),
        }
    }
}

/// Declares the scheme struct together with its role-name table so the
/// field list is written once.
macro_rules! color_scheme {
    ($($field:ident => $role:literal),+ $(,)?) => {
        /// A complete set of Material color roles for one brightness
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ColorScheme {
            $(pub $field: HexColor,)+
        }

        impl ColorScheme {
            /// Role names in declaration order
            pub const ROLES: &'static [&'static str] = &[$($role),+];

            /// Look up a role by its camelCase name
            pub fn get(&self, role: &str) -> Option<&HexColor> {
                match role {
                    $($role => Some(&self.$field),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, role: &str) -> Option<&mut HexColor> {
                match role {
                    $($role => Some(&mut self.$field),)+
                    _ => None,
                }
            }

            /// Iterate `(role, color)` pairs in declaration order
            pub fn roles(&self) -> impl Iterator<Item = (&'static str, &HexColor)> {
                [$(($role, &self.$field)),+].into_iter()
            }
        }
    };
}

color_scheme! {
    primary => "primary",
    on_primary => "onPrimary",
    primary_container => "primaryContainer",
    on_primary_container => "onPrimaryContainer",
    secondary => "secondary",
    on_secondary => "onSecondary",
    secondary_container => "secondaryContainer",
    on_secondary_container => "onSecondaryContainer",
    tertiary => "tertiary",
    on_tertiary => "onTertiary",
    tertiary_container => "tertiaryContainer",
    on_tertiary_container => "onTertiaryContainer",
    error => "error",
    on_error => "onError",
    error_container => "errorContainer",
    on_error_container => "onErrorContainer",
    background => "background",
    on_background => "onBackground",
    surface => "surface",
    on_surface => "onSurface",
    surface_variant => "surfaceVariant",
    on_surface_variant => "onSurfaceVariant",
    outline => "outline",
    outline_variant => "outlineVariant",
    shadow => "shadow",
    scrim => "scrim",
    inverse_surface => "inverseSurface",
    on_inverse_surface => "onInverseSurface",
    inverse_primary => "inversePrimary",
    surface_tint => "surfaceTint",
}

impl ColorScheme {
    /// Replace one role, validating the new value
    pub fn set(&mut self, role: &str, value: &str) -> Result<()> {
        let color = HexColor::parse(value)?;
        let slot = self
            .slot_mut(role)
            .ok_or_else(|| ThemeError::UnknownRole(role.to_string()))?;
        *slot = color;
        Ok(())
    }

    /// Whether `role` names one of the scheme's fields
    pub fn has_role(role: &str) -> bool {
        Self::ROLES.contains(&role)
    }
}
