//! MVP and phase-two features as one card grid

use crate::brief::{ProductBrief, ResolvedFeature};
use crate::canvas::{NodeId, ShadowLevel, ShapeSpec};
use crate::color::{SYSTEM_BACKGROUND, SYSTEM_GRAY4};
use crate::error::Result;
use crate::layout::grid::{layout_section, CardPlacement, GridSpec};
use crate::layout::painter::Painter;
use crate::layout::style::{
    category_color, priority_color, BADGE, BADGE_RADIUS, BODY, CAPTION, CARD_RADIUS, CARD_TITLE,
    FINE_PRINT, LEFT_X, PLACEHOLDER, SECTION_HEADER, SPACING_MD,
};

use super::{header, SectionKind};

pub const MIN_HEIGHT: f32 = 650.0;

pub const GRID: GridSpec = GridSpec {
    columns: 6,
    card_width: 390.0,
    card_height: 190.0,
    gap_x: SPACING_MD,
    gap_y: SPACING_MD,
    origin_x: LEFT_X,
    origin_y: SECTION_HEADER,
    header_height: 182.0,
    min_height: MIN_HEIGHT,
};

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    header(p, frame, "Key Features")?;

    let features = brief.all_features();
    if features.is_empty() {
        p.text(frame, SectionKind::Features.placeholder(), LEFT_X, SECTION_HEADER, PLACEHOLDER)?;
        return Ok(MIN_HEIGHT);
    }

    let layout = layout_section(features.len(), &GRID);
    for (feature, card) in features.iter().zip(&layout.cards) {
        feature_card(p, frame, feature, card)?;
    }
    Ok(layout.container_height)
}

fn feature_card(
    p: &mut Painter,
    frame: NodeId,
    feature: &ResolvedFeature,
    card: &CardPlacement,
) -> Result<()> {
    let x = card.x + SPACING_MD;
    let text_width = card.width - 2.0 * SPACING_MD;

    p.shape(
        frame,
        ShapeSpec::rect(card.x, card.y, card.width, card.height)
            .fill(SYSTEM_BACKGROUND)
            .radius(CARD_RADIUS)
            .stroke(SYSTEM_GRAY4, 1.0)
            .shadow(ShadowLevel::Subtle),
    )?;

    // Priority badge, top right
    p.shape(
        frame,
        ShapeSpec::rect(card.x + card.width - 70.0, card.y + SPACING_MD, 60.0, 20.0)
            .fill(priority_color(&feature.priority))
            .radius(BADGE_RADIUS),
    )?;
    p.text(
        frame,
        &feature.priority.label_or("medium").to_uppercase(),
        card.x + card.width - 58.0,
        card.y + 20.0,
        BADGE,
    )?;

    // Category badge, top left
    p.shape(
        frame,
        ShapeSpec::rect(x, card.y + SPACING_MD, 70.0, 20.0)
            .fill(category_color(&feature.category))
            .radius(BADGE_RADIUS),
    )?;
    p.text(
        frame,
        &feature.category.label_or("core").to_uppercase(),
        card.x + 22.0,
        card.y + 20.0,
        BADGE,
    )?;

    p.text(
        frame,
        &feature.name,
        x,
        card.y + 45.0,
        CARD_TITLE.width(text_width).max_height(22.0),
    )?;
    p.text(
        frame,
        &feature.description,
        x,
        card.y + 70.0,
        BODY.width(text_width).max_height(50.0),
    )?;
    p.text(frame, "User Story:", x, card.y + 135.0, CAPTION)?;
    p.text(
        frame,
        &feature.user_story,
        x,
        card.y + 150.0,
        FINE_PRINT.width(text_width).max_height(30.0),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::FeatureEntry;
    use crate::canvas::RecordingCanvas;
    use crate::layout::painter::FontPreference;

    fn render(brief: &ProductBrief) -> (RecordingCanvas, f32) {
        let mut canvas = RecordingCanvas::new();
        let height = {
            let mut p = Painter::new(&mut canvas, FontPreference::default());
            let frame = p
                .frame(None, SectionKind::Features.frame_spec(0.0, 0.0))
                .unwrap();
            build(&mut p, frame, brief).unwrap()
        };
        (canvas, height)
    }

    #[test]
    fn test_no_features_renders_single_placeholder() {
        let (canvas, height) = render(&ProductBrief::default());
        assert_eq!(height, MIN_HEIGHT);
        assert_eq!(canvas.find_text("No features specified").len(), 1);
        // Title and placeholder only
        assert_eq!(canvas.nodes().filter(|n| n.text().is_some()).count(), 2);
    }

    #[test]
    fn test_thirteen_features_grow_three_rows() {
        let brief = ProductBrief {
            mvp_features: (0..8)
                .map(|i| FeatureEntry::Named(format!("MVP {}", i)))
                .collect(),
            phase_2_features: (0..5)
                .map(|i| FeatureEntry::Named(format!("Later {}", i)))
                .collect(),
            ..ProductBrief::default()
        };
        let (canvas, height) = render(&brief);
        assert_eq!(height, 3.0 * 206.0 + 182.0);

        let thirteenth = &canvas.find_text("Later 4")[0];
        assert_eq!(thirteenth.x, LEFT_X + SPACING_MD);
        assert_eq!(thirteenth.y, SECTION_HEADER + 2.0 * 206.0 + 45.0);

        // Bare-string features get the placeholder slots
        assert_eq!(canvas.find_text("No description provided").len(), 13);
        assert_eq!(canvas.find_text("MEDIUM").len(), 13);
        assert_eq!(canvas.find_text("CORE").len(), 13);
    }
}
