//! Extended colors
//!
//! Theme tokens outside the Material role set: semantic status colors and
//! the tag-chip palette. Most of them are fixed values; only the `default*`
//! and `information*` tokens follow the seed (see
//! [`crate::palette::generator`]).

use crate::color::HexColor;
use serde::{Deserialize, Serialize};

/// A named theme token outside the core scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedColor {
    /// Token name, e.g. `warningText` or `tagBlueBorder`
    pub name: String,
    /// Current value
    pub color: HexColor,
    /// Human-readable purpose
    pub description: String,
    /// Value to use when the token is unavailable
    pub fallback: HexColor,
    /// Whether the color was harmonized toward the primary color
    #[serde(default)]
    pub harmonized: bool,
}

impl ExtendedColor {
    /// A token whose fallback is its own initial value
    pub fn new(name: impl Into<String>, color: HexColor, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: color.clone(),
            color,
            description: description.into(),
            harmonized: false,
        }
    }
}

/// The three variants every semantic and tag group comes in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVariant {
    Text,
    Background,
    Border,
}

impl TokenVariant {
    pub const ALL: [TokenVariant; 3] = [
        TokenVariant::Text,
        TokenVariant::Background,
        TokenVariant::Border,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            TokenVariant::Text => "Text",
            TokenVariant::Background => "Background",
            TokenVariant::Border => "Border",
        }
    }

    fn purpose(&self) -> &'static str {
        match self {
            TokenVariant::Text => "text",
            TokenVariant::Background => "background",
            TokenVariant::Border => "border",
        }
    }
}

/// Semantic status levels, in output order
pub const SEMANTIC_GROUPS: [&str; 5] = ["default", "information", "success", "warning", "error"];

/// Fixed semantic values as (group, text, background, border)
pub(crate) const FIXED_SEMANTIC: [(&str, &str, &str, &str); 3] = [
    ("success", "#389e0d", "#f6ffed", "#b7eb8f"),
    ("warning", "#d48806", "#fffbe6", "#ffe58f"),
    ("error", "#cf1322", "#fff1f0", "#ffa39e"),
];

/// Tag groups as (name, text, background, border)
pub const TAG_GROUPS: [(&str, &str, &str, &str); 11] = [
    ("blue", "#0958d9", "#e6f4ff", "#91caff"),
    ("cyan", "#08979c", "#e6fffb", "#87e8de"),
    ("geekblue", "#1d39c4", "#f0f5ff", "#adc6ff"),
    ("gold", "#d48806", "#fffbe6", "#ffe58f"),
    ("green", "#389e0d", "#f6ffed", "#b7eb8f"),
    ("lime", "#7cb305", "#fcffe6", "#eaff8f"),
    ("magenta", "#c41d7f", "#fff0f6", "#ffadd2"),
    ("orange", "#d46b08", "#fff7e6", "#ffd591"),
    ("purple", "#531dab", "#f9f0ff", "#d3adf7"),
    ("red", "#cf1322", "#fff1f0", "#ffa39e"),
    ("volcano", "#d4380d", "#fff2e8", "#ffbb96"),
];

/// Total number of extended tokens (5 semantic + 11 tag groups, 3 each)
pub const EXTENDED_TOKEN_COUNT: usize = (SEMANTIC_GROUPS.len() + TAG_GROUPS.len()) * 3;

/// Name of a semantic token, e.g. `warningBorder`
pub fn semantic_token_name(group: &str, variant: TokenVariant) -> String {
    format!("{}{}", group, variant.suffix())
}

/// Name of a tag token, e.g. `tagGeekblueText`
pub fn tag_token_name(group: &str, variant: TokenVariant) -> String {
    format!("tag{}{}", capitalize(group), variant.suffix())
}

pub(crate) fn semantic_description(group: &str, variant: TokenVariant) -> String {
    format!("{} color for {} states", capitalize(variant.purpose()), group)
}

pub(crate) fn tag_description(group: &str, variant: TokenVariant) -> String {
    format!("{} color for {} tags", capitalize(variant.purpose()), group)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed tag tokens in group order, three per group
pub(crate) fn tag_colors() -> Vec<ExtendedColor> {
    TAG_GROUPS
        .iter()
        .flat_map(|(group, text, background, border)| {
            TokenVariant::ALL
                .iter()
                .zip([text, background, border])
                .map(move |(variant, hex)| {
                    ExtendedColor::new(
                        tag_token_name(group, *variant),
                        literal(hex),
                        tag_description(group, *variant),
                    )
                })
        })
        .collect()
}

/// Fixed semantic tokens for one group, or `None` for the seed-derived groups
pub(crate) fn fixed_semantic(group: &str) -> Option<[HexColor; 3]> {
    FIXED_SEMANTIC
        .iter()
        .find(|(name, ..)| *name == group)
        .map(|(_, text, background, border)| [literal(text), literal(background), literal(border)])
}

fn literal(hex: &str) -> HexColor {
    // Constants in this module are all well-formed
    HexColor::parse(hex).unwrap_or_else(|_| HexColor::black())
}
