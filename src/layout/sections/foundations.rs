//! Color system and typography, side by side

use crate::brief::ProductBrief;
use crate::canvas::{FontWeight, FrameSpec, NodeId, ShadowLevel, ShapeSpec};
use crate::color::{
    self, ColorMap, Palette, Rgb, TypographyScale, LABEL, QUATERNARY_LABEL, SECONDARY_LABEL,
    TERTIARY_LABEL,
};
use crate::error::Result;
use crate::layout::painter::Painter;
use crate::layout::style::{TextStyle, BODY, CAPTION, CARD_TITLE, SPACING_LG, SPACING_MD};
use crate::layout::text::more;

use super::{card_background, card_chrome, group_title, header};

pub const MIN_HEIGHT: f32 = 580.0;

const COLOR_WIDTH: f32 = 1600.0;
const TYPOGRAPHY_X: f32 = 1638.0;
const TYPOGRAPHY_WIDTH: f32 = 860.0;

const SWATCH_SIZE: f32 = 28.0;
const SWATCH_PITCH: f32 = 36.0;
const SWATCH_ROW: f32 = 75.0;
const SWATCHES_PER_GROUP: usize = 5;
const THEME_WIDTH: f32 = 750.0;
const DARK_X: f32 = 820.0;

const COMBINATION_PITCH: f32 = 390.0;
const COMBINATION_WIDTH: f32 = 370.0;
const COMBINATION_HEIGHT: f32 = 120.0;

const TYPOGRAPHY_ROWS: usize = 8;
const TYPOGRAPHY_CUTOFF: f32 = 520.0;

const NOTE: TextStyle = TextStyle::new(11.0, FontWeight::Regular, TERTIARY_LABEL);
const GROUP_LABEL: TextStyle = TextStyle::new(15.0, FontWeight::Semibold, SECONDARY_LABEL);
const SWATCH_LABEL: TextStyle = TextStyle::new(9.0, FontWeight::Medium, QUATERNARY_LABEL);

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    let palette = color::derive_palette(&brief.design_tokens);
    let custom_scale = color::token_scale(&brief.design_tokens);
    let (scale, default_scale) = if custom_scale.is_empty() {
        (color::default_scale(), true)
    } else {
        (custom_scale, false)
    };

    let color_height = color_system(p, frame, &palette)?;
    let type_height = typography(p, frame, &scale, default_scale)?;
    Ok(color_height.max(type_height).max(MIN_HEIGHT))
}

fn color_system(p: &mut Painter, parent: NodeId, palette: &Palette) -> Result<f32> {
    let frame = p.frame(
        Some(parent),
        card_chrome(FrameSpec::new(
            "Color System & Themes",
            0.0,
            0.0,
            COLOR_WIDTH,
            MIN_HEIGHT,
        )),
    )?;
    header(p, frame, "Color System")?;
    if palette.used_defaults {
        p.text(
            frame,
            "No color tokens specified · showing the default palette",
            SPACING_LG,
            58.0,
            NOTE,
        )?;
    }

    let mut y = 80.0;
    group_title(p, frame, "Light Appearance", SPACING_LG, y)?;
    group_title(p, frame, "Dark Appearance", DARK_X, y)?;
    y += 35.0;
    let light = theme_swatches(p, frame, &palette.light, SPACING_LG, y)?;
    let dark = theme_swatches(p, frame, &palette.dark, DARK_X, y)?;
    y += light.max(dark) + 10.0;

    group_title(p, frame, "Brand Color Palettes", SPACING_LG, y)?;
    y += 40.0;

    for (i, combo) in palette.combinations.iter().take(4).enumerate() {
        let x = SPACING_LG + i as f32 * COMBINATION_PITCH;
        card_background(p, frame, x, y, COMBINATION_WIDTH, COMBINATION_HEIGHT)?;
        p.text(frame, &combo.name, x + SPACING_MD, y + SPACING_MD, CARD_TITLE)?;

        for (j, hex) in combo.colors.iter().enumerate() {
            let swatch_x = x + SPACING_MD + j as f32 * 48.0;
            p.shape(
                frame,
                ShapeSpec::rect(swatch_x, y + 40.0, 36.0, 36.0)
                    .fill(Rgb::from_hex_or_default(hex))
                    .radius(8.0)
                    .shadow(ShadowLevel::Subtle),
            )?;
            p.text(frame, &hex.to_uppercase(), swatch_x, y + 82.0, CAPTION)?;
        }

        p.text(
            frame,
            &combo.description,
            x + 120.0,
            y + 45.0,
            BODY.width(240.0).max_height(70.0),
        )?;
    }

    let height = (y + 140.0 + SPACING_LG).max(MIN_HEIGHT);
    p.resize(frame, COLOR_WIDTH, height)?;
    Ok(height)
}

fn matching<'a>(palette: &'a ColorMap, keys: &[&str]) -> Vec<(&'a str, &'a str)> {
    palette
        .iter()
        .filter(|(name, _)| {
            let name = name.to_lowercase();
            keys.iter().any(|k| name.contains(*k))
        })
        .map(|(name, hex)| (name.as_str(), hex.as_str()))
        .collect()
}

/// Named palette slots grouped by role; a slot may land in several groups
fn swatch_groups(palette: &ColorMap) -> Vec<(&'static str, Vec<(&str, &str)>)> {
    [
        ("Primary", matching(palette, &["primary"])),
        ("Secondary", matching(palette, &["secondary"])),
        ("Grays", matching(palette, &["gray", "neutral"])),
        ("System", matching(palette, &["success", "warning", "error", "info"])),
        ("Surfaces", matching(palette, &["surface", "background", "accent"])),
    ]
    .into_iter()
    .filter(|(_, colors)| !colors.is_empty())
    .collect()
}

/// Draw grouped swatches; returns the height used
fn theme_swatches(
    p: &mut Painter,
    frame: NodeId,
    palette: &ColorMap,
    start_x: f32,
    start_y: f32,
) -> Result<f32> {
    let groups = swatch_groups(palette);
    if groups.is_empty() {
        return Ok(0.0);
    }

    let mut x = start_x;
    let mut y = start_y;
    for (name, colors) in groups {
        if x > start_x + THEME_WIDTH - 150.0 {
            x = start_x;
            y += SWATCH_ROW;
        }
        p.text(frame, name, x, y, GROUP_LABEL)?;

        let shown = colors.len().min(SWATCHES_PER_GROUP);
        let mut swatch_x = x;
        for &(slot, hex) in &colors[..shown] {
            p.shape(
                frame,
                ShapeSpec::rect(swatch_x, y + 20.0, SWATCH_SIZE, SWATCH_SIZE)
                    .fill(Rgb::from_hex_or_default(hex))
                    .radius(6.0)
                    .shadow(ShadowLevel::Subtle),
            )?;
            let label = slot.rsplit('-').next().unwrap_or(slot);
            p.text(frame, label, swatch_x, y + 52.0, SWATCH_LABEL)?;
            swatch_x += SWATCH_PITCH;
        }
        let mut group_width = shown as f32 * SWATCH_PITCH + 40.0;
        if let Some(indicator) = more(colors.len() - shown) {
            p.text(frame, &indicator, swatch_x, y + 28.0, SWATCH_LABEL)?;
            group_width += 40.0;
        }
        x += group_width;
    }
    Ok(y - start_y + SWATCH_ROW)
}

fn typography(
    p: &mut Painter,
    parent: NodeId,
    scale: &TypographyScale,
    default_scale: bool,
) -> Result<f32> {
    let frame = p.frame(
        Some(parent),
        card_chrome(FrameSpec::new(
            "Typography System",
            TYPOGRAPHY_X,
            0.0,
            TYPOGRAPHY_WIDTH,
            MIN_HEIGHT,
        )),
    )?;
    header(p, frame, "Typography")?;
    if default_scale {
        p.text(
            frame,
            "No typography tokens specified · showing the default scale",
            SPACING_LG,
            58.0,
            NOTE,
        )?;
    }

    let sorted = color::sorted_descending(scale);
    let mut y = 80.0;
    let mut drawn = 0;
    for (name, size) in sorted.iter().take(TYPOGRAPHY_ROWS) {
        if y > TYPOGRAPHY_CUTOFF {
            break;
        }
        p.text(
            frame,
            &format!("{} · {}px", name, size),
            SPACING_LG,
            y,
            TextStyle::new(13.0, FontWeight::Medium, TERTIARY_LABEL),
        )?;

        let (weight, sample) = sample_for(*size);
        let sample_height = p.text_height(
            frame,
            sample,
            SPACING_LG,
            y + 18.0,
            TextStyle::new(size.min(36.0) as f32, weight, LABEL)
                .width(TYPOGRAPHY_WIDTH - 2.0 * SPACING_LG),
        )?;
        y += (sample_height + 32.0).max(60.0);
        drawn += 1;
    }

    if let Some(indicator) = more(sorted.len() - drawn) {
        p.text(frame, &indicator, SPACING_LG, y, CAPTION)?;
        y += 20.0;
    }

    let height = (y + SPACING_LG).max(MIN_HEIGHT);
    p.resize(frame, TYPOGRAPHY_WIDTH, height)?;
    Ok(height)
}

/// Weight and sample text for a type size
fn sample_for(size: f64) -> (FontWeight, &'static str) {
    let weight = if size > 24.0 {
        FontWeight::Bold
    } else if size > 18.0 {
        FontWeight::Semibold
    } else {
        FontWeight::Regular
    };
    let sample = if size > 36.0 {
        "Typography"
    } else if size > 20.0 {
        "Sample Text"
    } else {
        "The quick brown fox jumps over the lazy dog"
    };
    (weight, sample)
}
