//! Market insights and competitive analysis as two card stacks

use crate::brief::{Competitor, MarketInsight, ProductBrief};
use crate::canvas::{FontWeight, NodeId};
use crate::color::{LABEL, RESERVED_BLUE, RESERVED_GREEN};
use crate::error::Result;
use crate::layout::grid::{layout_section, CardPlacement, GridSpec};
use crate::layout::painter::Painter;
use crate::layout::style::{
    impact_color, TextStyle, BODY, CAPTION, CARD_TITLE, LEFT_X, PLACEHOLDER, RIGHT_X,
    SECTION_HEADER, SPACING_LG, SPACING_MD,
};
use crate::layout::text::{count_heading, joined};

use super::{card_background, group_title, header};

pub const MIN_HEIGHT: f32 = 480.0;

const STRENGTHS_SHOWN: usize = 2;
const CARD_TEXT_WIDTH: f32 = 1140.0;

fn stack(origin_x: f32, card_width: f32) -> GridSpec {
    GridSpec {
        columns: 1,
        card_width,
        card_height: 120.0,
        gap_x: 0.0,
        gap_y: 10.0,
        origin_x,
        origin_y: SECTION_HEADER + 35.0,
        header_height: 200.0 + SPACING_LG,
        min_height: MIN_HEIGHT,
    }
}

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "Market Intelligence")?;

    let insights = &brief.market_insights;
    let competitors = &brief.competitive_analysis;
    let left = stack(LEFT_X, 1190.0);
    let right = stack(RIGHT_X, 1170.0);

    if insights.is_empty() {
        p.text(frame, "No market insights specified", LEFT_X, SECTION_HEADER, PLACEHOLDER)?;
    } else {
        let heading = count_heading("Market Insights", insights.len(), "insights");
        group_title(p, frame, &heading, LEFT_X, SECTION_HEADER)?;
        for (insight, card) in insights.iter().zip(layout_section(insights.len(), &left).cards) {
            insight_card(p, frame, insight, &card)?;
        }
    }

    if competitors.is_empty() {
        p.text(frame, "No competitors specified", RIGHT_X, SECTION_HEADER, PLACEHOLDER)?;
    } else {
        let heading = count_heading("Competitive Analysis", competitors.len(), "competitors");
        group_title(p, frame, &heading, RIGHT_X, SECTION_HEADER)?;
        for (competitor, card) in competitors
            .iter()
            .zip(layout_section(competitors.len(), &right).cards)
        {
            competitor_card(p, frame, competitor, &card)?;
        }
    }

    // Both stacks share one grid height so the taller column decides
    Ok(left.container_height(insights.len().max(competitors.len())))
}

fn insight_card(
    p: &mut Painter,
    frame: NodeId,
    insight: &MarketInsight,
    card: &CardPlacement,
) -> Result<()> {
    let x = card.x + SPACING_MD;
    card_background(p, frame, card.x, card.y, card.width, card.height)?;
    p.text(
        frame,
        &insight.category,
        x,
        card.y + SPACING_MD,
        TextStyle::new(15.0, FontWeight::Semibold, RESERVED_BLUE),
    )?;
    p.text(
        frame,
        &insight.insight,
        x,
        card.y + 35.0,
        BODY.color(LABEL).width(CARD_TEXT_WIDTH).max_height(50.0),
    )?;
    p.text(
        frame,
        &format!("Impact: {}", insight.impact.label_or("Unrated")),
        x,
        card.y + 90.0,
        CAPTION.color(impact_color(&insight.impact)),
    )?;
    Ok(())
}

fn competitor_card(
    p: &mut Painter,
    frame: NodeId,
    competitor: &Competitor,
    card: &CardPlacement,
) -> Result<()> {
    let x = card.x + SPACING_MD;
    card_background(p, frame, card.x, card.y, card.width, card.height)?;
    p.text(frame, &competitor.name, x, card.y + SPACING_MD, CARD_TITLE)?;
    p.text(
        frame,
        &competitor.positioning,
        x,
        card.y + 35.0,
        BODY.width(CARD_TEXT_WIDTH).max_height(30.0),
    )?;
    if !competitor.strengths.is_empty() {
        p.text(
            frame,
            &format!(
                "Strengths: {}",
                joined(&competitor.strengths, ", ", Some(STRENGTHS_SHOWN))
            ),
            x,
            card.y + 65.0,
            TextStyle::new(11.0, FontWeight::Regular, RESERVED_GREEN).width(CARD_TEXT_WIDTH),
        )?;
    }
    p.text(
        frame,
        &format!("Pricing: {}", competitor.pricing_model),
        x,
        card.y + 90.0,
        CAPTION.color(RESERVED_BLUE).width(CARD_TEXT_WIDTH),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_taller_stack() {
        let spec = stack(LEFT_X, 1190.0);
        assert_eq!(spec.container_height(0), MIN_HEIGHT);
        assert_eq!(spec.container_height(5), 224.0 + 5.0 * 130.0);
        assert_eq!(spec.pitch_y(), 130.0);
    }
}
