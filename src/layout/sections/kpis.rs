//! Value proposition, business model and the success-metric grid

use crate::brief::ProductBrief;
use crate::canvas::{FontWeight, FrameSpec, NodeId};
use crate::color::{RESERVED_BLUE, SECONDARY_LABEL};
use crate::error::Result;
use crate::layout::grid::{layout_section, GridSpec};
use crate::layout::painter::Painter;
use crate::layout::style::{TextStyle, PLACEHOLDER, SECTION_TITLE, SPACING_LG};
use crate::layout::text::{count_heading, or_placeholder};

use super::{card_background, card_chrome, group_title, SectionKind, GROUP_HEADER};

const PANEL_WIDTH: f32 = 2430.0;
const PANEL_MIN_HEIGHT: f32 = 280.0;

/// Title offset plus the empty panel
pub const MIN_HEIGHT: f32 = GROUP_HEADER + PANEL_MIN_HEIGHT;

pub const GRID: GridSpec = GridSpec {
    columns: 6,
    card_width: 390.0,
    card_height: 60.0,
    gap_x: 15.0,
    gap_y: 10.0,
    origin_x: SPACING_LG,
    origin_y: 175.0,
    header_height: 180.0,
    min_height: PANEL_MIN_HEIGHT,
};

const COLUMN_WIDTH: f32 = 1180.0;
const BUSINESS_X: f32 = 1230.0;
const STATEMENT: TextStyle = TextStyle::new(15.0, FontWeight::Regular, SECONDARY_LABEL)
    .width(COLUMN_WIDTH)
    .max_height(90.0);
const METRIC: TextStyle = TextStyle::new(13.0, FontWeight::Medium, RESERVED_BLUE)
    .width(360.0)
    .max_height(36.0);

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    p.text(frame, SectionKind::Kpis.name(), 0.0, 0.0, SECTION_TITLE)?;

    let metrics = &brief.success_metrics;
    let layout = layout_section(metrics.len(), &GRID);
    let panel = p.frame(
        Some(frame),
        card_chrome(FrameSpec::new(
            SectionKind::Kpis.name(),
            0.0,
            GROUP_HEADER,
            PANEL_WIDTH,
            layout.container_height,
        )),
    )?;

    group_title(p, panel, "Value Proposition", SPACING_LG, SPACING_LG)?;
    p.text(
        panel,
        or_placeholder(&brief.value_proposition, "No value proposition specified"),
        SPACING_LG,
        45.0,
        STATEMENT,
    )?;
    group_title(p, panel, "Business Model", BUSINESS_X, SPACING_LG)?;
    p.text(
        panel,
        or_placeholder(&brief.business_model, "No business model specified"),
        BUSINESS_X,
        45.0,
        STATEMENT,
    )?;

    let heading = count_heading("Key Performance Indicators", metrics.len(), "metrics");
    group_title(p, panel, &heading, SPACING_LG, 150.0)?;

    if metrics.is_empty() {
        p.text(
            panel,
            SectionKind::Kpis.placeholder(),
            SPACING_LG,
            GRID.origin_y + 5.0,
            PLACEHOLDER,
        )?;
    }
    for (metric, card) in metrics.iter().zip(&layout.cards) {
        card_background(p, panel, card.x, card.y, card.width, card.height)?;
        p.text(
            panel,
            &format!("📊 {}", metric),
            card.x + 15.0,
            card.y + 20.0,
            METRIC,
        )?;
    }

    Ok(GROUP_HEADER + layout.container_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height() {
        assert_eq!(layout_section(0, &GRID).container_height, 280.0);
        assert_eq!(layout_section(6, &GRID).container_height, 280.0);
        assert_eq!(layout_section(13, &GRID).container_height, 180.0 + 3.0 * 70.0);
        let layout = layout_section(7, &GRID);
        assert_eq!((layout.cards[6].x, layout.cards[6].y), (SPACING_LG, 245.0));
        assert_eq!(layout.cards[1].x, SPACING_LG + 405.0);
    }
}
