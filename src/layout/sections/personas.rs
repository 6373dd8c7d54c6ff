//! Persona cards
//!
//! Unlike the card sections, personas are a bare group: a title followed by
//! one framed card per persona. Every persona is shown.

use crate::brief::{Persona, ProductBrief};
use crate::canvas::{FontWeight, FrameSpec, NodeId, ShadowLevel, ShapeSpec};
use crate::color::{LABEL, SECONDARY_LABEL, SYSTEM_GRAY, SYSTEM_GRAY5, TERTIARY_LABEL};
use crate::error::Result;
use crate::layout::grid::{layout_section, CardPlacement, GridSpec};
use crate::layout::painter::Painter;
use crate::layout::style::{TextStyle, PLACEHOLDER, SECTION_TITLE, SPACING_LG};
use crate::layout::text::bullets;

use super::{card_chrome, SectionKind, GROUP_HEADER};

/// Title plus one placeholder line
pub const MIN_HEIGHT: f32 = GROUP_HEADER + 60.0;

const NEEDS_SHOWN: usize = 2;
const TEXT_WIDTH: f32 = 280.0;

pub const GRID: GridSpec = GridSpec {
    columns: 6,
    card_width: 320.0,
    card_height: 380.0,
    gap_x: 90.0,
    gap_y: 80.0,
    origin_x: 0.0,
    origin_y: GROUP_HEADER,
    header_height: GROUP_HEADER,
    min_height: MIN_HEIGHT,
};

const SMALL: TextStyle = TextStyle::new(12.0, FontWeight::Regular, SECONDARY_LABEL);
const LABEL_STYLE: TextStyle = TextStyle::new(15.0, FontWeight::Semibold, LABEL);

pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    p.text(frame, SectionKind::Personas.name(), 0.0, 0.0, SECTION_TITLE)?;

    let personas = &brief.target_users;
    if personas.is_empty() {
        p.text(frame, SectionKind::Personas.placeholder(), 0.0, GROUP_HEADER, PLACEHOLDER)?;
        return Ok(MIN_HEIGHT);
    }

    let layout = layout_section(personas.len(), &GRID);
    for (persona, card) in personas.iter().zip(&layout.cards) {
        persona_card(p, frame, persona, card)?;
    }
    Ok(layout.container_height)
}

fn persona_card(
    p: &mut Painter,
    parent: NodeId,
    persona: &Persona,
    card: &CardPlacement,
) -> Result<NodeId> {
    let name = if persona.name.trim().is_empty() {
        "User Persona"
    } else {
        persona.name.as_str()
    };
    let frame = p.frame(
        Some(parent),
        card_chrome(FrameSpec::new(
            format!("Persona: {}", name),
            card.x,
            card.y,
            card.width,
            card.height,
        )),
    )?;

    let mut y = SPACING_LG;
    p.shape(
        frame,
        ShapeSpec::ellipse(130.0, y, 60.0, 60.0)
            .fill(SYSTEM_GRAY5)
            .shadow(ShadowLevel::Subtle),
    )?;
    p.text(
        frame,
        "👤",
        145.0,
        y + 11.0,
        TextStyle::new(30.0, FontWeight::Regular, SYSTEM_GRAY),
    )?;
    y += 80.0;

    p.text(
        frame,
        name,
        SPACING_LG,
        y,
        TextStyle::new(20.0, FontWeight::Semibold, LABEL).width(TEXT_WIDTH),
    )?;
    y += 30.0;

    let details = [persona.occupation.trim(), persona.age.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    p.text(
        frame,
        &details,
        SPACING_LG,
        y,
        TextStyle::new(13.0, FontWeight::Regular, SECONDARY_LABEL).width(TEXT_WIDTH),
    )?;
    y += 25.0;

    if !persona.quote.trim().is_empty() {
        y += p.text_height(
            frame,
            &format!("\"{}\"", persona.quote.trim()),
            SPACING_LG,
            y,
            TextStyle::new(13.0, FontWeight::Italic, TERTIARY_LABEL).width(TEXT_WIDTH),
        )?;
    }
    y += 20.0;

    p.text(frame, "Goals", SPACING_LG, y, LABEL_STYLE)?;
    y += 20.0;
    y += p.text_height(frame, &persona.goals, SPACING_LG, y, SMALL.width(TEXT_WIDTH))? + 16.0;

    if !persona.needs.is_empty() {
        p.text(frame, "Key Needs", SPACING_LG, y, LABEL_STYLE)?;
        y += 20.0;
        p.text(
            frame,
            &bullets(&persona.needs, Some(NEEDS_SHOWN)),
            SPACING_LG,
            y,
            SMALL.width(TEXT_WIDTH),
        )?;
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::layout::painter::FontPreference;

    fn persona(name: &str, needs: &[&str]) -> Persona {
        Persona {
            name: name.to_string(),
            needs: needs.iter().map(|s| s.to_string()).collect(),
            ..Persona::default()
        }
    }

    #[test]
    fn test_seven_personas_two_rows() {
        let brief = ProductBrief {
            target_users: (0..7).map(|i| persona(&format!("P{}", i), &[])).collect(),
            ..ProductBrief::default()
        };
        let mut canvas = RecordingCanvas::new();
        let height = {
            let mut p = Painter::new(&mut canvas, FontPreference::default());
            let frame = p
                .frame(None, SectionKind::Personas.frame_spec(32.0, 0.0))
                .unwrap();
            build(&mut p, frame, &brief).unwrap()
        };
        assert_eq!(height, 2.0 * 460.0 + 50.0);

        let seventh = canvas.find_frame("Persona: P6").unwrap();
        assert_eq!((seventh.x, seventh.y), (0.0, 510.0));
        let sixth = canvas.find_frame("Persona: P5").unwrap();
        assert_eq!(sixth.x, 5.0 * 410.0);
    }

    #[test]
    fn test_needs_truncated_to_two() {
        let brief = ProductBrief {
            target_users: vec![persona("", &["a", "b", "c"])],
            ..ProductBrief::default()
        };
        let mut canvas = RecordingCanvas::new();
        {
            let mut p = Painter::new(&mut canvas, FontPreference::default());
            let frame = p
                .frame(None, SectionKind::Personas.frame_spec(32.0, 0.0))
                .unwrap();
            build(&mut p, frame, &brief).unwrap();
        }
        assert!(canvas.find_frame("Persona: User Persona").is_some());
        assert_eq!(canvas.find_text("• a\n• b\n+1 more").len(), 1);
    }
}
