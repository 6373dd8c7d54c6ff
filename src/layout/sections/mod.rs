//! Section builders
//!
//! Each builder fills a container frame created by the document fold and
//! returns the height the frame should take. Builders only read the brief;
//! they never look at each other's output.

mod design_details;
mod features;
mod flows;
mod foundations;
mod kpis;
mod market;
mod personas;
mod strategy;
mod technical;
mod title;

use serde::Serialize;

use super::painter::Painter;
use super::style::{
    TextStyle, CARD_RADIUS, GROUP_TITLE, PLACEHOLDER, SECTION_HEADER, SECTION_RADIUS,
    SECTION_TITLE, SECTION_WIDTH, SPACING_LG,
};
use crate::brief::ProductBrief;
use crate::canvas::{FrameSpec, NodeId, ShadowLevel, ShapeSpec};
use crate::color::{SECONDARY_BACKGROUND, SYSTEM_BACKGROUND};
use crate::error::Result;

/// The document's sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Title,
    Foundations,
    Market,
    Flows,
    Features,
    Technical,
    DesignDetails,
    Strategy,
    Personas,
    Kpis,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Title,
        SectionKind::Foundations,
        SectionKind::Market,
        SectionKind::Flows,
        SectionKind::Features,
        SectionKind::Technical,
        SectionKind::DesignDetails,
        SectionKind::Strategy,
        SectionKind::Personas,
        SectionKind::Kpis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Title => "Product Design System",
            SectionKind::Foundations => "Color System & Typography",
            SectionKind::Market => "Market Intelligence",
            SectionKind::Flows => "User Flows & Journey",
            SectionKind::Features => "Key Features",
            SectionKind::Technical => "Technical Strategy",
            SectionKind::DesignDetails => "Design System Details",
            SectionKind::Strategy => "Strategic Planning",
            SectionKind::Personas => "User Personas",
            SectionKind::Kpis => "Strategic Overview & KPIs",
        }
    }

    /// Text shown when the section has nothing to show or failed to build
    pub fn placeholder(&self) -> &'static str {
        match self {
            SectionKind::Title => "No product brief provided",
            SectionKind::Foundations => "No design tokens specified",
            SectionKind::Market => "No market intelligence specified",
            SectionKind::Flows => "No user flows specified",
            SectionKind::Features => "No features specified",
            SectionKind::Technical => "No technical strategy specified",
            SectionKind::DesignDetails => "No design system details specified",
            SectionKind::Strategy => "No strategic planning specified",
            SectionKind::Personas => "No personas specified",
            SectionKind::Kpis => "No success metrics specified",
        }
    }

    pub fn min_height(&self) -> f32 {
        match self {
            SectionKind::Title => title::HEIGHT,
            SectionKind::Foundations => foundations::MIN_HEIGHT,
            SectionKind::Market => market::MIN_HEIGHT,
            SectionKind::Flows => flows::MIN_HEIGHT,
            SectionKind::Features => features::MIN_HEIGHT,
            SectionKind::Technical => technical::MIN_HEIGHT,
            SectionKind::DesignDetails => design_details::MIN_HEIGHT,
            SectionKind::Strategy => strategy::MIN_HEIGHT,
            SectionKind::Personas => personas::MIN_HEIGHT,
            SectionKind::Kpis => kpis::MIN_HEIGHT,
        }
    }

    /// Sections drawn as a white card; the rest are bare groups
    fn is_card(&self) -> bool {
        matches!(
            self,
            SectionKind::Market
                | SectionKind::Flows
                | SectionKind::Features
                | SectionKind::Technical
                | SectionKind::DesignDetails
                | SectionKind::Strategy
        )
    }

    /// Container frame for this section at `(x, y)` in the root
    pub fn frame_spec(&self, x: f32, y: f32) -> FrameSpec {
        let spec = FrameSpec::new(self.name(), x, y, SECTION_WIDTH, self.min_height());
        if self.is_card() {
            card_chrome(spec)
        } else {
            spec
        }
    }
}

/// Fill the section frame; returns its final height
pub fn build(
    kind: SectionKind,
    p: &mut Painter,
    frame: NodeId,
    brief: &ProductBrief,
) -> Result<f32> {
    match kind {
        SectionKind::Title => title::build(p, frame, brief),
        SectionKind::Foundations => foundations::build(p, frame, brief),
        SectionKind::Market => market::build(p, frame, brief),
        SectionKind::Flows => flows::build(p, frame, brief),
        SectionKind::Features => features::build(p, frame, brief),
        SectionKind::Technical => technical::build(p, frame, brief),
        SectionKind::DesignDetails => design_details::build(p, frame, brief),
        SectionKind::Strategy => strategy::build(p, frame, brief),
        SectionKind::Personas => personas::build(p, frame, brief),
        SectionKind::Kpis => kpis::build(p, frame, brief),
    }
}

/// Title and placeholder only, at the section's minimum height
pub fn fallback(kind: SectionKind, p: &mut Painter, frame: NodeId) -> Result<f32> {
    if kind == SectionKind::Title {
        return title::fallback(p, frame);
    }
    let (x, title_y, body_y) = if kind.is_card() {
        (SPACING_LG, SPACING_LG, SECTION_HEADER)
    } else {
        (0.0, 0.0, GROUP_HEADER)
    };
    p.text(frame, kind.name(), x, title_y, SECTION_TITLE)?;
    p.text(frame, kind.placeholder(), x, body_y, PLACEHOLDER)?;
    Ok(kind.min_height())
}

/// Offset below the title of a bare group section
pub(crate) const GROUP_HEADER: f32 = 50.0;

pub(crate) fn card_chrome(spec: FrameSpec) -> FrameSpec {
    spec.fill(SYSTEM_BACKGROUND)
        .radius(SECTION_RADIUS)
        .shadow(ShadowLevel::Medium)
}

/// Section title at the card's inner margin
pub(crate) fn header(p: &mut Painter, frame: NodeId, title: &str) -> Result<NodeId> {
    p.text(frame, title, SPACING_LG, SPACING_LG, SECTION_TITLE)
}

/// Subsection heading
pub(crate) fn group_title(
    p: &mut Painter,
    frame: NodeId,
    text: &str,
    x: f32,
    y: f32,
) -> Result<NodeId> {
    p.text(frame, text, x, y, GROUP_TITLE)
}

/// Heading with a body text 25 below it; returns the body's height
pub(crate) fn titled_block(
    p: &mut Painter,
    frame: NodeId,
    (x, y): (f32, f32),
    heading: &str,
    body: &str,
    style: TextStyle,
) -> Result<f32> {
    group_title(p, frame, heading, x, y)?;
    p.text_height(frame, body, x, y + BLOCK_BODY_OFFSET, style)
}

/// Body offset below a block heading
pub(crate) const BLOCK_BODY_OFFSET: f32 = 25.0;

/// Rounded background of a card inside a section
pub(crate) fn card_background(
    p: &mut Painter,
    frame: NodeId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Result<NodeId> {
    p.shape(
        frame,
        ShapeSpec::rect(x, y, width, height)
            .fill(SECONDARY_BACKGROUND)
            .radius(CARD_RADIUS)
            .shadow(ShadowLevel::Subtle),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::layout::painter::FontPreference;

    /// Build one section from an empty brief inside a fresh root
    fn build_empty(kind: SectionKind) -> (RecordingCanvas, NodeId, f32) {
        let mut canvas = RecordingCanvas::new();
        let (frame, height) = {
            let mut p = Painter::new(&mut canvas, FontPreference::default());
            let root = p
                .frame(None, FrameSpec::new("Root", 0.0, 0.0, 2500.0, 1000.0))
                .unwrap();
            let frame = p.frame(Some(root), kind.frame_spec(32.0, 32.0)).unwrap();
            let height = build(kind, &mut p, frame, &ProductBrief::default()).unwrap();
            (frame, height)
        };
        (canvas, frame, height)
    }

    #[test]
    fn test_empty_sections_keep_min_height_and_show_placeholder() {
        for kind in SectionKind::ORDER {
            if kind == SectionKind::Title {
                continue;
            }
            let (canvas, _, height) = build_empty(kind);
            assert!(
                height >= kind.min_height(),
                "{:?} collapsed to {}",
                kind,
                height
            );
            let has_placeholder = canvas.nodes().filter_map(|n| n.text()).any(|t| {
                t.starts_with("No ") && (t.contains("specified") || t.contains("provided") || t.contains("identified"))
            });
            assert!(has_placeholder, "{:?} has no placeholder", kind);
        }
    }

    #[test]
    fn test_fallback_uses_min_height() {
        let mut canvas = RecordingCanvas::new();
        let height = {
            let mut p = Painter::new(&mut canvas, FontPreference::default());
            let frame = p
                .frame(None, SectionKind::Market.frame_spec(32.0, 0.0))
                .unwrap();
            fallback(SectionKind::Market, &mut p, frame).unwrap()
        };
        assert_eq!(height, SectionKind::Market.min_height());
        assert_eq!(canvas.find_text("No market intelligence specified").len(), 1);
    }

    #[test]
    fn test_card_sections_have_chrome() {
        assert!(SectionKind::Features.frame_spec(0.0, 0.0).fill.is_some());
        assert!(SectionKind::Personas.frame_spec(0.0, 0.0).fill.is_none());
    }
}
