//! Typography scale derivation

use indexmap::IndexMap;

use crate::brief::{DesignToken, TokenCategory, TokenValue};

/// Ordered name → pixel size
pub type TypographyScale = IndexMap<String, f64>;

const DEFAULT_SCALE: [(&str, f64); 11] = [
    ("largeTitle", 34.0),
    ("title1", 28.0),
    ("title2", 22.0),
    ("title3", 20.0),
    ("headline", 17.0),
    ("body", 17.0),
    ("callout", 16.0),
    ("subhead", 15.0),
    ("footnote", 13.0),
    ("caption1", 12.0),
    ("caption2", 11.0),
];

/// Built-in 11-step scale
pub fn default_scale() -> TypographyScale {
    DEFAULT_SCALE
        .iter()
        .map(|(name, size)| (name.to_string(), *size))
        .collect()
}

/// Only the usable typography tokens: numeric and finite
pub fn token_scale(tokens: &[DesignToken]) -> TypographyScale {
    tokens
        .iter()
        .filter(|t| t.is(TokenCategory::Typography))
        .filter_map(|t| match t.value {
            Some(TokenValue::Number(size)) if size.is_finite() => {
                Some((t.name.clone(), size))
            }
            _ => None,
        })
        .collect()
}

/// Numeric typography tokens, or the default scale when there are none
pub fn derive_typography_scale(tokens: &[DesignToken]) -> TypographyScale {
    let scale = token_scale(tokens);
    if scale.is_empty() {
        default_scale()
    } else {
        scale
    }
}

/// Entries sorted largest first; equal sizes keep their order
pub fn sorted_descending(scale: &TypographyScale) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = scale.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}
