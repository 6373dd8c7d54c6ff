//! Palette derivation
//!
//! Builds light and dark palettes from color tokens. A token set with fewer
//! than [`MIN_PALETTE_ENTRIES`] usable colors is discarded in favour of the
//! built-in pair; partial palettes are never merged with the defaults.

use indexmap::IndexMap;
use serde::Serialize;

use super::{adjust_for_dark_theme, is_hex_color, DEFAULT_BLUE_HEX};
use crate::brief::{DesignToken, TokenCategory, TokenValue};

/// Minimum named colors before token-derived palettes are kept
pub const MIN_PALETTE_ENTRIES: usize = 10;

/// Ordered name → hex mapping for one appearance
pub type ColorMap = IndexMap<String, String>;

/// A named pairing of two palette colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub name: String,
    pub colors: [String; 2],
    pub emotion: String,
    pub description: String,
}

/// Light and dark palettes plus brand combinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub light: ColorMap,
    pub dark: ColorMap,
    pub combinations: Vec<Combination>,
    /// True when the built-in defaults replaced the token colors
    pub used_defaults: bool,
}

const LIGHT_DEFAULTS: [(&str, &str); 17] = [
    ("primary-50", "#f0f9ff"),
    ("primary-100", "#e0f2fe"),
    ("primary-500", "#007AFF"),
    ("primary-600", "#0056b3"),
    ("primary-900", "#003d82"),
    ("secondary-500", "#5856d6"),
    ("accent-500", "#ff9500"),
    ("gray-50", "#f2f2f7"),
    ("gray-100", "#e5e5ea"),
    ("gray-500", "#8e8e93"),
    ("gray-900", "#1c1c1e"),
    ("success", "#32d74b"),
    ("warning", "#ff9500"),
    ("error", "#ff453a"),
    ("info", "#007aff"),
    ("surface", "#ffffff"),
    ("background", "#f2f2f7"),
];

const DARK_DEFAULTS: [(&str, &str); 17] = [
    ("primary-50", "#003d82"),
    ("primary-100", "#0056b3"),
    ("primary-500", "#0a84ff"),
    ("primary-600", "#007aff"),
    ("primary-900", "#e0f2fe"),
    ("secondary-500", "#5e5ce6"),
    ("accent-500", "#ff9f0a"),
    ("gray-50", "#1c1c1e"),
    ("gray-100", "#2c2c2e"),
    ("gray-500", "#8e8e93"),
    ("gray-900", "#f2f2f7"),
    ("success", "#30d158"),
    ("warning", "#ff9f0a"),
    ("error", "#ff6961"),
    ("info", "#0a84ff"),
    ("surface", "#1c1c1e"),
    ("background", "#000000"),
];

fn to_map(entries: &[(&str, &str)]) -> ColorMap {
    entries
        .iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect()
}

/// Built-in light palette
pub fn default_light() -> ColorMap {
    to_map(&LIGHT_DEFAULTS)
}

/// Built-in dark palette
pub fn default_dark() -> ColorMap {
    to_map(&DARK_DEFAULTS)
}

/// Derive light/dark palettes and combinations from design tokens
pub fn derive_palette(tokens: &[DesignToken]) -> Palette {
    let mut light = ColorMap::new();
    let mut dark = ColorMap::new();

    for token in tokens.iter().filter(|t| t.is(TokenCategory::Color)) {
        let Some(TokenValue::Text(value)) = &token.value else {
            continue;
        };
        if !value.starts_with('#') {
            continue;
        }
        let hex = if is_hex_color(value) {
            value.clone()
        } else {
            tracing::debug!(token = %token.name, value = %value, "Malformed color token, using default blue");
            DEFAULT_BLUE_HEX.to_string()
        };
        dark.insert(token.name.clone(), adjust_for_dark_theme(&hex));
        light.insert(token.name.clone(), hex);
    }

    let used_defaults = light.len() < MIN_PALETTE_ENTRIES;
    if used_defaults {
        tracing::debug!(
            supplied = light.len(),
            "Too few color tokens, using the built-in palette"
        );
        light = default_light();
        dark = default_dark();
    }

    let combinations = combinations(&light);
    Palette {
        light,
        dark,
        combinations,
        used_defaults,
    }
}

fn slot(palette: &ColorMap, name: &str, fallback: &str) -> String {
    palette
        .get(name)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

fn combinations(light: &ColorMap) -> Vec<Combination> {
    let primary = slot(light, "primary-500", "#007AFF");
    vec![
        Combination {
            name: "Primary & Surface".to_string(),
            colors: [primary.clone(), slot(light, "surface", "#ffffff")],
            emotion: "Confidence".to_string(),
            description: "Primary brand color with clean surface creates trustworthy, professional interactions".to_string(),
        },
        Combination {
            name: "Primary & Accent".to_string(),
            colors: [primary.clone(), slot(light, "accent-500", "#ff9500")],
            emotion: "Energy".to_string(),
            description: "Primary paired with accent color conveys dynamic, engaging experiences".to_string(),
        },
        Combination {
            name: "Secondary & Background".to_string(),
            colors: [
                slot(light, "secondary-500", "#5856d6"),
                slot(light, "background", "#f2f2f7"),
            ],
            emotion: "Harmony".to_string(),
            description: "Secondary brand color with background promotes balanced, focused experiences".to_string(),
        },
        Combination {
            name: "Success & Primary".to_string(),
            colors: [slot(light, "success", "#32d74b"), primary],
            emotion: "Achievement".to_string(),
            description: "Success indicators with primary brand color inspire confidence in positive outcomes".to_string(),
        },
    ]
}
