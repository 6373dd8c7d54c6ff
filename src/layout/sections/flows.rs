//! User flows grid followed by the journey stage strip

use crate::brief::{JourneyStage, ProductBrief, UserFlow};
use crate::canvas::{FontWeight, NodeId, ShapeSpec};
use crate::color::{RESERVED_BLUE, RESERVED_GREEN, RESERVED_RED, SECONDARY_LABEL};
use crate::error::Result;
use crate::layout::grid::{layout_section, CardPlacement, GridSpec};
use crate::layout::painter::Painter;
use crate::layout::style::{
    emotion_color, TextStyle, BODY, CAPTION, CARD_TITLE, FINE_PRINT, LEFT_X, PLACEHOLDER,
    SECTION_HEADER, SPACING_LG, SPACING_MD, SPACING_SM,
};
use crate::layout::text::{bullets, count_heading, joined, more, visible};

use super::{card_background, group_title, header};

pub const MIN_HEIGHT: f32 = 900.0;

const STEP_PREVIEW: usize = 3;
const ACTIONS_SHOWN: usize = 2;
const PAIN_POINTS_SHOWN: usize = 2;
const OPPORTUNITIES_SHOWN: usize = 1;
const TOUCHPOINTS_SHOWN: usize = 2;

const STAGES_PER_ROW: usize = 8;
const STAGE_HEIGHT: f32 = 220.0;
const JOURNEY_WIDTH: f32 = 2410.0;

const FLOW_TEXT_WIDTH: f32 = 365.0;
const STAGE_TEXT: TextStyle = TextStyle::new(11.0, FontWeight::Regular, SECONDARY_LABEL);

fn flow_grid(origin_y: f32) -> GridSpec {
    GridSpec {
        columns: 6,
        card_width: 390.0,
        card_height: 165.0,
        gap_x: 15.0,
        gap_y: 15.0,
        origin_x: LEFT_X,
        origin_y,
        header_height: 0.0,
        min_height: 0.0,
    }
}

/// Up to eight stage cards per row, each at most 280 wide
fn journey_grid(stages: usize, origin_y: f32) -> GridSpec {
    let per_row = stages.clamp(1, STAGES_PER_ROW);
    GridSpec {
        columns: STAGES_PER_ROW,
        card_width: (JOURNEY_WIDTH / per_row as f32).min(280.0),
        card_height: STAGE_HEIGHT,
        gap_x: SPACING_SM,
        gap_y: 20.0,
        origin_x: LEFT_X,
        origin_y,
        header_height: 0.0,
        min_height: 0.0,
    }
}

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "User Flows & Journey")?;
    let mut y = SECTION_HEADER;

    let flows = &brief.user_flows;
    if flows.is_empty() {
        p.text(frame, "No user flows specified", LEFT_X, y, PLACEHOLDER)?;
        y += 40.0;
    } else {
        group_title(p, frame, &count_heading("User Flows", flows.len(), "flows"), LEFT_X, y)?;
        y += 40.0;
        let grid = flow_grid(y);
        let layout = layout_section(flows.len(), &grid);
        for (flow, card) in flows.iter().zip(&layout.cards) {
            flow_card(p, frame, flow, card)?;
        }
        y += layout.rows as f32 * grid.pitch_y() + 40.0;
    }

    let journey = &brief.user_journey;
    if journey.is_empty() {
        p.text(frame, "No journey stages specified", LEFT_X, y, PLACEHOLDER)?;
        y += 40.0;
    } else {
        let heading = count_heading("User Journey", journey.len(), "stages");
        group_title(p, frame, &heading, LEFT_X, y)?;
        y += 40.0;
        let grid = journey_grid(journey.len(), y);
        let layout = layout_section(journey.len(), &grid);
        for (stage, card) in journey.iter().zip(&layout.cards) {
            stage_card(p, frame, stage, card)?;
        }
        y += layout.rows as f32 * grid.pitch_y();
    }

    Ok((y + SPACING_LG).max(MIN_HEIGHT))
}

fn flow_card(p: &mut Painter, frame: NodeId, flow: &UserFlow, card: &CardPlacement) -> Result<()> {
    let x = card.x + SPACING_MD;
    card_background(p, frame, card.x, card.y, card.width, card.height)?;
    p.text(frame, &flow.flow_name, x, card.y + SPACING_MD, CARD_TITLE)?;
    p.text(
        frame,
        &flow.description,
        x,
        card.y + 40.0,
        BODY.width(FLOW_TEXT_WIDTH).max_height(36.0),
    )?;
    p.text(
        frame,
        &format!("{} steps · User: {}", flow.steps.len(), flow.user_type),
        x,
        card.y + 80.0,
        CAPTION,
    )?;
    p.text(
        frame,
        &format!("Value: {}", flow.business_value),
        x,
        card.y + 100.0,
        TextStyle::new(11.0, FontWeight::Regular, RESERVED_GREEN)
            .width(FLOW_TEXT_WIDTH)
            .max_height(28.0),
    )?;

    if !flow.steps.is_empty() {
        let (shown, hidden) = visible(&flow.steps, STEP_PREVIEW);
        let titles: Vec<&str> = shown
            .iter()
            .map(|s| {
                if s.screen_title.trim().is_empty() {
                    "Step"
                } else {
                    s.screen_title.as_str()
                }
            })
            .collect();
        let mut preview = format!("Steps: {}", titles.join(" → "));
        if let Some(indicator) = more(hidden) {
            preview.push(' ');
            preview.push_str(&indicator);
        }
        p.text(
            frame,
            &preview,
            x,
            card.y + 130.0,
            FINE_PRINT.width(FLOW_TEXT_WIDTH).max_height(24.0),
        )?;
    }
    Ok(())
}

fn stage_card(
    p: &mut Painter,
    frame: NodeId,
    stage: &JourneyStage,
    card: &CardPlacement,
) -> Result<()> {
    let x = card.x + SPACING_MD;
    let text_width = card.width - 2.0 * SPACING_MD;
    card_background(p, frame, card.x, card.y, card.width, card.height)?;
    p.text(
        frame,
        &stage.stage,
        x,
        card.y + SPACING_MD,
        TextStyle::new(15.0, FontWeight::Semibold, crate::color::LABEL)
            .width(card.width - 90.0)
            .max_height(20.0),
    )?;

    let tint = emotion_color(stage.emotions.kind);
    p.shape(
        frame,
        ShapeSpec::ellipse(card.x + card.width - 28.0, card.y + SPACING_MD, 12.0, 12.0).fill(tint),
    )?;
    p.text(
        frame,
        stage.emotions.label_or("neutral"),
        card.x + card.width - 70.0,
        card.y + 18.0,
        TextStyle::new(9.0, FontWeight::Medium, tint),
    )?;

    let mut y = card.y + 45.0;
    if !stage.user_actions.is_empty() {
        let text = format!("Actions:\n{}", bullets(&stage.user_actions, Some(ACTIONS_SHOWN)));
        y += p.text_height(frame, &text, x, y, STAGE_TEXT.width(text_width))? + 12.0;
    }
    if !stage.pain_points.is_empty() {
        let text = format!(
            "Pain Points:\n{}",
            bullets(&stage.pain_points, Some(PAIN_POINTS_SHOWN))
        );
        let style = STAGE_TEXT.color(RESERVED_RED).width(text_width);
        y += p.text_height(frame, &text, x, y, style)? + 12.0;
    }
    if !stage.opportunities.is_empty() && y < card.y + 180.0 {
        let text = format!(
            "Opportunities:\n{}",
            bullets(&stage.opportunities, Some(OPPORTUNITIES_SHOWN))
        );
        let style = STAGE_TEXT.color(RESERVED_GREEN).width(text_width);
        y += p.text_height(frame, &text, x, y, style)? + 10.0;
    }
    if !stage.touchpoints.is_empty() && y < card.y + 200.0 {
        let text = format!(
            "Touchpoints: {}",
            joined(&stage.touchpoints, ", ", Some(TOUCHPOINTS_SHOWN))
        );
        p.text(
            frame,
            &text,
            x,
            y,
            FINE_PRINT.color(RESERVED_BLUE).width(text_width),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_grid() {
        // Eight 280-wide cards already fit in 2410
        assert_eq!(journey_grid(3, 0.0).card_width, 280.0);
        assert_eq!(journey_grid(20, 0.0).card_width, 280.0);
        assert_eq!(journey_grid(20, 0.0).pitch_y(), 240.0);

        let layout = layout_section(10, &journey_grid(10, 100.0));
        assert_eq!(layout.rows, 2);
        assert_eq!((layout.cards[8].x, layout.cards[8].y), (LEFT_X, 340.0));
    }

    #[test]
    fn test_flow_pitch() {
        let grid = flow_grid(120.0);
        assert_eq!(grid.pitch_x(), 405.0);
        assert_eq!(grid.pitch_y(), 180.0);
    }
}
