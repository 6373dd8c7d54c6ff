//! Jobs, positioning, vision, go-to-market and risks

use crate::brief::ProductBrief;
use crate::canvas::NodeId;
use crate::color::{RESERVED_BLUE, RESERVED_GREEN, RESERVED_PURPLE, RESERVED_RED};
use crate::error::Result;
use crate::layout::painter::Painter;
use crate::layout::style::{
    BODY, LEFT_WIDTH, LEFT_X, RIGHT_WIDTH, RIGHT_X, SECTION_HEADER, SPACING_XL,
};
use crate::layout::text::{bullets_or, count_heading, or_placeholder};

use super::{header, titled_block, BLOCK_BODY_OFFSET};

pub const MIN_HEIGHT: f32 = 420.0;

const FULL_WIDTH: f32 = 2410.0;

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "Strategic Planning")?;
    let jobs = &brief.jobs_to_be_done;
    let vision = &brief.long_term_vision;
    let gtm = &brief.go_to_market_recommendations;
    let risks = &brief.risk_mitigation;

    let mut y = SECTION_HEADER;
    let jobs_height = titled_block(
        p,
        frame,
        (LEFT_X, y),
        &count_heading("Jobs to be Done", jobs.len(), "jobs"),
        &bullets_or(jobs, "No jobs specified"),
        BODY.color(RESERVED_GREEN).width(LEFT_WIDTH),
    )?;
    let positioning_height = titled_block(
        p,
        frame,
        (RIGHT_X, y),
        "Positioning Strategy",
        or_placeholder(
            &brief.positioning_strategy,
            "No positioning strategy specified",
        ),
        BODY.width(RIGHT_WIDTH),
    )?;
    y += jobs_height.max(positioning_height) + 40.0;

    let vision_height = titled_block(
        p,
        frame,
        (LEFT_X, y),
        &count_heading("Long-term Vision", vision.len(), "vision points"),
        &bullets_or(vision, "No vision specified"),
        BODY.color(RESERVED_PURPLE).width(LEFT_WIDTH),
    )?;
    let gtm_height = titled_block(
        p,
        frame,
        (RIGHT_X, y),
        &count_heading("Go-to-Market Strategy", gtm.len(), "recommendations"),
        &bullets_or(gtm, "No recommendations provided"),
        BODY.color(RESERVED_BLUE).width(RIGHT_WIDTH),
    )?;
    y += vision_height.max(gtm_height) + 35.0;

    // Risks run the full width on one flowing line
    let risk_text = if risks.is_empty() {
        "No risks identified".to_string()
    } else {
        format!("• {}", risks.join(" • "))
    };
    let risk_height = titled_block(
        p,
        frame,
        (LEFT_X, y),
        &count_heading("Risk Mitigation", risks.len(), "risks identified"),
        &risk_text,
        BODY.color(RESERVED_RED).width(FULL_WIDTH),
    )?;
    y += BLOCK_BODY_OFFSET + risk_height + SPACING_XL;

    let listed = jobs.len().max(vision.len()).max(gtm.len());
    let estimate = 300.0 + listed as f32 * 20.0 + risks.len() as f32 * 15.0;
    Ok(y.max(estimate).max(MIN_HEIGHT))
}
