//! Document title and refined-brief subtitle

use crate::brief::ProductBrief;
use crate::canvas::{FontWeight, NodeId};
use crate::color::SECONDARY_LABEL;
use crate::error::Result;
use crate::layout::painter::Painter;
use crate::layout::style::{TextStyle, DOCUMENT_TITLE};

use super::SectionKind;

/// Title block height; with the section gap the next section starts 100 below
pub const HEIGHT: f32 = 68.0;

const SUBTITLE_Y: f32 = 45.0;
const SUBTITLE: TextStyle =
    TextStyle::new(17.0, FontWeight::Regular, SECONDARY_LABEL).width(2430.0);

/// Grows past [`HEIGHT`] only when the subtitle wraps
pub fn build(p: &mut Painter, frame: NodeId, brief: &ProductBrief) -> Result<f32> {
    p.text(frame, SectionKind::Title.name(), 0.0, 0.0, DOCUMENT_TITLE)?;
    let subtitle = p.text_height(frame, &brief.refined_brief, 0.0, SUBTITLE_Y, SUBTITLE)?;
    Ok(HEIGHT.max(SUBTITLE_Y + subtitle))
}

pub fn fallback(p: &mut Painter, frame: NodeId) -> Result<f32> {
    p.text(frame, SectionKind::Title.name(), 0.0, 0.0, DOCUMENT_TITLE)?;
    Ok(HEIGHT)
}
