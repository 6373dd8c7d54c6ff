//! Spacing, text styles and enum-keyed color tables

use crate::brief::{Emotion, FeatureCategory, Level, Tag};
use crate::canvas::FontWeight;
use crate::color::{
    Rgb, LABEL, QUATERNARY_LABEL, RESERVED_BLUE, RESERVED_GREEN, RESERVED_ORANGE, RESERVED_PURPLE,
    RESERVED_RED, RESERVED_TEAL, SECONDARY_LABEL, SYSTEM_BACKGROUND, SYSTEM_GRAY, TERTIARY_LABEL,
};

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 32.0;

/// Width of every full-width section
pub const SECTION_WIDTH: f32 = 2450.0;

/// Offset of the first content row below a section title
pub const SECTION_HEADER: f32 = 80.0;

pub const SECTION_RADIUS: f32 = 16.0;
pub const CARD_RADIUS: f32 = 12.0;
pub const BADGE_RADIUS: f32 = 10.0;

// Two-column sections
pub const LEFT_X: f32 = SPACING_LG;
pub const LEFT_WIDTH: f32 = 1200.0;
pub const RIGHT_X: f32 = 1260.0;
pub const RIGHT_WIDTH: f32 = 1170.0;

/// Size, weight and color of a text node, plus optional box constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
    pub width: Option<f32>,
    pub max_height: Option<f32>,
}

impl TextStyle {
    pub const fn new(size: f32, weight: FontWeight, color: Rgb) -> Self {
        Self {
            size,
            weight,
            color,
            width: None,
            max_height: None,
        }
    }

    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub const fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

pub const DOCUMENT_TITLE: TextStyle = TextStyle::new(34.0, FontWeight::Bold, LABEL);
pub const SECTION_TITLE: TextStyle = TextStyle::new(28.0, FontWeight::Bold, LABEL);
pub const GROUP_TITLE: TextStyle = TextStyle::new(20.0, FontWeight::Semibold, SECONDARY_LABEL);
pub const CARD_TITLE: TextStyle = TextStyle::new(17.0, FontWeight::Semibold, LABEL);
pub const BODY: TextStyle = TextStyle::new(13.0, FontWeight::Regular, SECONDARY_LABEL);
pub const CAPTION: TextStyle = TextStyle::new(11.0, FontWeight::Medium, TERTIARY_LABEL);
pub const FINE_PRINT: TextStyle = TextStyle::new(10.0, FontWeight::Regular, QUATERNARY_LABEL);
pub const BADGE: TextStyle = TextStyle::new(9.0, FontWeight::Semibold, SYSTEM_BACKGROUND);
pub const PLACEHOLDER: TextStyle = TextStyle::new(17.0, FontWeight::Regular, TERTIARY_LABEL);

fn level_color(level: Option<Level>) -> Rgb {
    match level {
        Some(Level::High) => RESERVED_RED,
        Some(Level::Medium) => RESERVED_ORANGE,
        Some(Level::Low) => RESERVED_GREEN,
        None => SYSTEM_GRAY,
    }
}

/// Market insight impact
pub fn impact_color(impact: &Tag<Level>) -> Rgb {
    level_color(impact.kind)
}

/// Feature priority
pub fn priority_color(priority: &Tag<Level>) -> Rgb {
    level_color(priority.kind)
}

/// Technical requirement complexity
pub fn complexity_color(complexity: &Tag<Level>) -> Rgb {
    level_color(complexity.kind)
}

/// Feature category
pub fn category_color(category: &Tag<FeatureCategory>) -> Rgb {
    match category.kind {
        Some(FeatureCategory::Core) => RESERVED_BLUE,
        Some(FeatureCategory::Additional) => RESERVED_PURPLE,
        None => SYSTEM_GRAY,
    }
}

/// Journey stage emotion; absent reads as neutral
pub fn emotion_color(emotion: Option<Emotion>) -> Rgb {
    match emotion {
        Some(Emotion::Frustrated) => RESERVED_RED,
        Some(Emotion::Confused) | Some(Emotion::Optimistic) => RESERVED_ORANGE,
        Some(Emotion::Excited) => RESERVED_GREEN,
        Some(Emotion::Satisfied) => RESERVED_BLUE,
        Some(Emotion::Curious) => RESERVED_PURPLE,
        Some(Emotion::Confident) => RESERVED_TEAL,
        Some(Emotion::Neutral) | None => SYSTEM_GRAY,
    }
}
