//! Technical architecture, requirements, security and scalability

use crate::brief::{ProductBrief, TechnicalRequirement};
use crate::canvas::NodeId;
use crate::color::{RESERVED_BLUE, RESERVED_GREEN, RESERVED_RED};
use crate::error::Result;
use crate::layout::painter::Painter;
use crate::layout::style::{
    complexity_color, BODY, LEFT_WIDTH, LEFT_X, RIGHT_WIDTH, RIGHT_X, SECTION_HEADER, SPACING_XL,
    SPACING_XS,
};
use crate::layout::text::{bullets_or, count_heading, or_placeholder};

use super::{group_title, header, titled_block, BLOCK_BODY_OFFSET};

pub const MIN_HEIGHT: f32 = 420.0;

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "Technical Strategy")?;
    let requirements = &brief.technical_requirements;
    let security = &brief.security_requirements;
    let scalability = &brief.scalability_considerations;

    let mut y = SECTION_HEADER;
    let architecture = titled_block(
        p,
        frame,
        (LEFT_X, y),
        "Technical Architecture",
        or_placeholder(&brief.technical_architecture, "No technical architecture specified"),
        BODY.width(LEFT_WIDTH),
    )?;
    let requirement_rows = requirement_list(p, frame, requirements, y)?;
    y += architecture.max(requirement_rows) + 45.0;

    let security_height = titled_block(
        p,
        frame,
        (LEFT_X, y),
        &count_heading("Security Requirements", security.len(), "requirements"),
        &bullets_or(security, "No security requirements specified"),
        BODY.color(RESERVED_RED).width(LEFT_WIDTH),
    )?;
    let scalability_height = titled_block(
        p,
        frame,
        (RIGHT_X, y),
        &count_heading(
            "Scalability Considerations",
            scalability.len(),
            "considerations",
        ),
        &bullets_or(scalability, "No scalability considerations specified"),
        BODY.color(RESERVED_BLUE).width(RIGHT_WIDTH),
    )?;
    y += BLOCK_BODY_OFFSET + security_height.max(scalability_height) + SPACING_XL;

    let listed = requirements.len().max(security.len()).max(scalability.len());
    let estimate = 280.0 + listed as f32 * 25.0;
    Ok(y.max(estimate).max(MIN_HEIGHT))
}

/// One row per requirement, tinted by complexity; returns the height used
fn requirement_list(
    p: &mut Painter,
    frame: NodeId,
    requirements: &[TechnicalRequirement],
    y: f32,
) -> Result<f32> {
    let heading = count_heading("Technical Requirements", requirements.len(), "requirements");
    group_title(p, frame, &heading, RIGHT_X, y)?;

    let mut row_y = y + BLOCK_BODY_OFFSET;
    if requirements.is_empty() {
        row_y += p.text_height(
            frame,
            "No requirements specified",
            RIGHT_X,
            row_y,
            BODY.color(RESERVED_GREEN).width(RIGHT_WIDTH),
        )?;
    }
    for requirement in requirements {
        let style = BODY
            .color(complexity_color(&requirement.complexity))
            .width(RIGHT_WIDTH);
        row_y += p.text_height(frame, &requirement_row(requirement), RIGHT_X, row_y, style)?;
        row_y += SPACING_XS;
    }
    Ok(row_y - y - BLOCK_BODY_OFFSET)
}

/// `Category: Complexity (timeline)`, omitting what is missing
fn requirement_row(requirement: &TechnicalRequirement) -> String {
    let category = or_placeholder(&requirement.category, "General");
    let mut row = format!(
        "{}: {}",
        category,
        requirement.complexity.label_or("Unrated")
    );
    if !requirement.timeline_estimate.trim().is_empty() {
        row.push_str(&format!(" ({})", requirement.timeline_estimate));
    }
    if !requirement.requirement.trim().is_empty() {
        row.push_str(&format!(" · {}", requirement.requirement));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::Tag;

    #[test]
    fn test_requirement_row() {
        let requirement = TechnicalRequirement {
            category: "Backend".to_string(),
            requirement: "Event sourcing".to_string(),
            complexity: Tag::parse("High"),
            timeline_estimate: "6 weeks".to_string(),
            considerations: Vec::new(),
        };
        assert_eq!(
            requirement_row(&requirement),
            "Backend: High (6 weeks) · Event sourcing"
        );

        let sparse = TechnicalRequirement {
            category: String::new(),
            requirement: String::new(),
            complexity: Tag::default(),
            timeline_estimate: String::new(),
            considerations: Vec::new(),
        };
        assert_eq!(requirement_row(&sparse), "General: Unrated");
    }
}
