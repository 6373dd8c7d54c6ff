//! Color primitives
//!
//! Hex/RGB conversion, the fixed system colors used for chrome, and the
//! light-to-dark adjustment used when deriving a dark palette.

pub mod palette;
pub mod typography;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use palette::{default_dark, default_light, derive_palette, ColorMap, Combination, Palette};
pub use typography::{
    default_scale, derive_typography_scale, sorted_descending, token_scale, TypographyScale,
};

/// Hex used whenever a color value cannot be read
pub const DEFAULT_BLUE_HEX: &str = "#007AFF";

/// Blend factor toward black for bright colors
pub const DARKEN_FACTOR: f64 = 0.4;

/// Blend factor toward white for dark colors
pub const LIGHTEN_FACTOR: f64 = 0.3;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex"));

/// A color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, falling back to the system blue
    pub fn from_hex_or_default(hex: &str) -> Self {
        match hex_to_rgb(hex) {
            Some((r, g, b)) => Self::from_bytes(r, g, b),
            None => SYSTEM_BLUE,
        }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        rgb_to_hex(channel(self.r), channel(self.g), channel(self.b))
    }
}

// Primary palette
pub const SYSTEM_BLUE: Rgb = Rgb::new(0.0, 0.478, 1.0);
pub const SYSTEM_GREEN: Rgb = Rgb::new(0.196, 0.843, 0.294);

// Muted tones for badges and accents
pub const RESERVED_BLUE: Rgb = Rgb::new(0.4, 0.6, 0.8);
pub const RESERVED_GREEN: Rgb = Rgb::new(0.5, 0.7, 0.5);
pub const RESERVED_ORANGE: Rgb = Rgb::new(0.8, 0.6, 0.4);
pub const RESERVED_RED: Rgb = Rgb::new(0.8, 0.5, 0.5);
pub const RESERVED_PURPLE: Rgb = Rgb::new(0.6, 0.5, 0.7);
pub const RESERVED_TEAL: Rgb = Rgb::new(0.5, 0.6, 0.6);

// Neutrals
pub const SYSTEM_GRAY: Rgb = Rgb::new(0.557, 0.557, 0.576);
pub const SYSTEM_GRAY4: Rgb = Rgb::new(0.820, 0.820, 0.839);
pub const SYSTEM_GRAY5: Rgb = Rgb::new(0.898, 0.898, 0.918);

// Backgrounds
pub const SYSTEM_BACKGROUND: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const SECONDARY_BACKGROUND: Rgb = Rgb::new(0.949, 0.949, 0.969);

// Labels
pub const LABEL: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const SECONDARY_LABEL: Rgb = Rgb::new(0.235, 0.235, 0.263);
pub const TERTIARY_LABEL: Rgb = Rgb::new(0.302, 0.302, 0.302);
pub const QUATERNARY_LABEL: Rgb = Rgb::new(0.462, 0.462, 0.502);

/// True for exactly `#` followed by six hex digits
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Parse `#rrggbb` into byte channels
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_hex_color(hex) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((byte(1)?, byte(3)?, byte(5)?))
}

/// Format byte channels as lowercase `#rrggbb`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Unweighted channel mean on 0.0..=1.0
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0 / 255.0
}

/// Blend each channel toward 0 by `factor`
pub fn darken(hex: &str, factor: f64) -> String {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or(DEFAULT_BLUE_BYTES);
    let scale = |c: u8| (c as f64 * (1.0 - factor)).round().clamp(0.0, 255.0) as u8;
    rgb_to_hex(scale(r), scale(g), scale(b))
}

/// Blend each channel toward 255 by `factor`
pub fn lighten(hex: &str, factor: f64) -> String {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or(DEFAULT_BLUE_BYTES);
    let scale = |c: u8| {
        let c = c as f64;
        (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
    };
    rgb_to_hex(scale(r), scale(g), scale(b))
}

/// Dark-theme counterpart of a light color
pub fn adjust_for_dark_theme(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb(hex).unwrap_or(DEFAULT_BLUE_BYTES);
    if brightness(r, g, b) > 0.5 {
        darken(hex, DARKEN_FACTOR)
    } else {
        lighten(hex, LIGHTEN_FACTOR)
    }
}

const DEFAULT_BLUE_BYTES: (u8, u8, u8) = (0x00, 0x7a, 0xff);

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(hex: &str) -> f64 {
        let (r, g, b) = hex_to_rgb(hex).unwrap();
        brightness(r, g, b)
    }

    #[test]
    fn test_hex_round_trip() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (18, 52, 86), (0, 122, 255), (1, 2, 3)] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), Some((r, g, b)));
        }
    }

    #[test]
    fn test_rejects_malformed_hex() {
        for bad in ["", "007AFF", "#07F", "#007AFFF", "#00GGFF", "blue", "#007AF "] {
            assert_eq!(hex_to_rgb(bad), None, "{bad:?} should be rejected");
        }
        assert_eq!(hex_to_rgb("#007aFF"), Some((0, 122, 255)));
    }

    #[test]
    fn test_malformed_hex_falls_back_to_blue() {
        assert_eq!(Rgb::from_hex_or_default("#zzzzzz"), SYSTEM_BLUE);
    }

    #[test]
    fn test_bright_colors_get_darker() {
        for hex in ["#ffffff", "#f2f2f7", "#ff9500", "#e0f2fe", "#81807f"] {
            assert!(mean(hex) > 0.5);
            assert!(mean(&adjust_for_dark_theme(hex)) < mean(hex), "{hex}");
        }
        assert_eq!(adjust_for_dark_theme("#ffffff"), "#999999");
    }

    #[test]
    fn test_dark_colors_get_lighter() {
        for hex in ["#000000", "#1c1c1e", "#007aff", "#003d82", "#7f7f7f"] {
            assert!(mean(hex) <= 0.5);
            assert!(mean(&adjust_for_dark_theme(hex)) > mean(hex), "{hex}");
        }
        assert_eq!(adjust_for_dark_theme("#000000"), "#4d4d4d");
    }

    #[test]
    fn test_rgb_to_hex_from_unit_channels() {
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_hex(), "#ffffff");
        assert_eq!(Rgb::from_bytes(0, 122, 255).to_hex(), "#007aff");
    }
}
