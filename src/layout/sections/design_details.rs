//! Brand identity, visual direction, components and accessibility

use crate::brief::{ComponentSpec, ProductBrief};
use crate::canvas::{FontWeight, NodeId};
use crate::color::{LABEL, RESERVED_BLUE, RESERVED_ORANGE, RESERVED_PURPLE, RESERVED_TEAL};
use crate::error::Result;
use crate::layout::painter::Painter;
use crate::layout::style::{
    TextStyle, BODY, CAPTION, LEFT_WIDTH, LEFT_X, RIGHT_WIDTH, RIGHT_X, SECTION_HEADER, SPACING_SM,
};
use crate::layout::text::{bullets_or, count_heading, joined, more, or_placeholder, visible};

use super::{group_title, header, titled_block, BLOCK_BODY_OFFSET};

pub const MIN_HEIGHT: f32 = 380.0;

const COMPONENTS_SHOWN: usize = 1;
const ROW_GAP: f32 = 100.0;

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "Design System Details")?;
    let mut y = SECTION_HEADER;

    // Brand identity, left
    group_title(p, frame, "Brand Identity", LEFT_X, y)?;
    let mut left = y + BLOCK_BODY_OFFSET;
    let personality = if brief.brand_personality.is_empty() {
        "Not defined".to_string()
    } else {
        joined(&brief.brand_personality, " · ", None)
    };
    left += p.text_height(
        frame,
        &format!("Personality: {}", personality),
        LEFT_X,
        left,
        TextStyle::new(13.0, FontWeight::Medium, RESERVED_PURPLE).width(LEFT_WIDTH),
    )? + SPACING_SM;
    let mood = if brief.mood_keywords.is_empty() {
        "Not defined".to_string()
    } else {
        joined(&brief.mood_keywords, ", ", None)
    };
    left += p.text_height(
        frame,
        &format!("Mood: {}", mood),
        LEFT_X,
        left,
        BODY.color(RESERVED_TEAL).width(LEFT_WIDTH),
    )?;

    // Visual direction, right
    group_title(p, frame, "Visual Direction & Inspiration", RIGHT_X, y)?;
    let mut right = y + BLOCK_BODY_OFFSET;
    right += p.text_height(
        frame,
        or_placeholder(&brief.visual_direction, "No visual direction specified"),
        RIGHT_X,
        right,
        BODY.width(RIGHT_WIDTH),
    )? + SPACING_SM;
    let inspiration = if brief.inspiration_references.is_empty() {
        "None provided".to_string()
    } else {
        joined(&brief.inspiration_references, ", ", None)
    };
    right += p.text_height(
        frame,
        &format!("Inspiration: {}", inspiration),
        RIGHT_X,
        right,
        BODY.color(RESERVED_BLUE).width(RIGHT_WIDTH),
    )?;

    y = (y + ROW_GAP).max(left.max(right) + 20.0);

    let components = component_block(p, frame, &brief.component_specifications, y)?;
    let accessibility = &brief.accessibility_requirements;
    let access = titled_block(
        p,
        frame,
        (RIGHT_X, y),
        &count_heading(
            "Accessibility Requirements",
            accessibility.len(),
            "requirements",
        ),
        &bullets_or(accessibility, "No accessibility requirements specified"),
        BODY.color(RESERVED_ORANGE).width(RIGHT_WIDTH),
    )?;
    y += ROW_GAP.max(BLOCK_BODY_OFFSET + components.max(access) + 20.0);

    Ok(y.max(MIN_HEIGHT))
}

/// First component in full, the rest counted; returns the body height
fn component_block(
    p: &mut Painter,
    frame: NodeId,
    components: &[ComponentSpec],
    y: f32,
) -> Result<f32> {
    group_title(p, frame, "Component Specifications", LEFT_X, y)?;
    let top = y + BLOCK_BODY_OFFSET;

    let (shown, hidden) = visible(components, COMPONENTS_SHOWN);
    let Some(component) = shown.first() else {
        return p.text_height(
            frame,
            "No component specifications provided",
            LEFT_X,
            top,
            CAPTION.width(LEFT_WIDTH),
        );
    };

    let mut cursor = top;
    cursor += p.text_height(
        frame,
        &format!("{}: {}", component.component_name, component.description),
        LEFT_X,
        cursor,
        BODY.color(LABEL).width(LEFT_WIDTH),
    )? + SPACING_SM / 2.0;
    if !component.states.is_empty() {
        cursor += p.text_height(
            frame,
            &format!("States: {}", joined(&component.states, ", ", None)),
            LEFT_X,
            cursor,
            CAPTION.width(LEFT_WIDTH),
        )?;
    }
    if let Some(indicator) = more(hidden) {
        cursor += p.text_height(frame, &indicator, LEFT_X, cursor, CAPTION)?;
    }
    Ok(cursor - top)
}
