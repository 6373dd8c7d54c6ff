//! Document assembly
//!
//! Folds the sections in display order down a running vertical cursor. A
//! section that fails is swapped for its fallback; a fallback that fails
//! aborts the whole document.

use serde::Serialize;

use super::painter::{FontPreference, Painter};
use super::sections::{self, SectionKind};
use super::style::SECTION_WIDTH;
use crate::brief::ProductBrief;
use crate::canvas::{CanvasDriver, FrameSpec, NodeId};
use crate::color::SECONDARY_BACKGROUND;
use crate::error::{BriefError, Result};

pub const ROOT_NAME: &str = "Product Design System";
pub const ROOT_WIDTH: f32 = 2500.0;
/// Left margin and top margin of every section
pub const SECTION_X: f32 = 32.0;
pub const SECTION_GAP: f32 = 32.0;

pub const COMPLETION_MESSAGE: &str = "✨ Complete Design System created! All user flows, insights, competitors, and features are now displayed.";

/// Where a section ended up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub kind: SectionKind,
    pub node: NodeId,
    pub y: f32,
    pub height: f32,
    /// True when the builder failed and the placeholder was drawn instead
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentLayout {
    pub root: NodeId,
    pub width: f32,
    pub height: f32,
    pub sections: Vec<SectionSummary>,
}

impl DocumentLayout {
    pub fn fallbacks(&self) -> impl Iterator<Item = &SectionSummary> {
        self.sections.iter().filter(|s| s.fallback)
    }
}

/// Lay out the whole brief on `canvas`
///
/// On failure the partial root is removed and the user is notified before
/// the error is returned.
pub fn generate_document(
    brief: &ProductBrief,
    canvas: &mut dyn CanvasDriver,
    fonts: &FontPreference,
) -> Result<DocumentLayout> {
    let mut painter = Painter::new(&mut *canvas, fonts.clone());
    let assembled = assemble(brief, &mut painter);
    drop(painter);

    match assembled {
        Ok(layout) => {
            if let Err(err) = canvas.focus(layout.root) {
                tracing::warn!(error = %err, "Could not focus the document");
            }
            canvas.notify(COMPLETION_MESSAGE);
            tracing::info!(
                sections = layout.sections.len(),
                fallbacks = layout.fallbacks().count(),
                height = layout.height,
                "Document generated"
            );
            Ok(layout)
        }
        Err((root, err)) => {
            if let Some(root) = root {
                if let Err(remove_err) = canvas.remove(root) {
                    tracing::warn!(error = %remove_err, "Could not remove the partial document");
                }
            }
            let failure = match err {
                BriefError::LayoutGeneration(_) => err,
                other => BriefError::LayoutGeneration(other.to_string()),
            };
            tracing::error!(error = %failure, "Document generation failed");
            canvas.notify(&failure.user_message());
            Err(failure)
        }
    }
}

/// Build the root and every section; on error returns the root, if any, for cleanup
fn assemble(
    brief: &ProductBrief,
    p: &mut Painter,
) -> std::result::Result<DocumentLayout, (Option<NodeId>, BriefError)> {
    let root = p
        .frame(
            None,
            FrameSpec::new(ROOT_NAME, 0.0, 0.0, ROOT_WIDTH, 1000.0).fill(SECONDARY_BACKGROUND),
        )
        .map_err(|err| (None, err))?;

    let mut summaries = Vec::with_capacity(SectionKind::ORDER.len());
    let height = SectionKind::ORDER
        .iter()
        .try_fold(SECTION_X, |y, &kind| {
            let summary = place_section(p, root, kind, y, brief)?;
            let next = y + summary.height + SECTION_GAP;
            summaries.push(summary);
            Ok::<f32, BriefError>(next)
        })
        .map_err(|err| (Some(root), err))?;

    p.resize(root, ROOT_WIDTH, height)
        .map_err(|err| (Some(root), err))?;

    Ok(DocumentLayout {
        root,
        width: ROOT_WIDTH,
        height,
        sections: summaries,
    })
}

fn place_section(
    p: &mut Painter,
    root: NodeId,
    kind: SectionKind,
    y: f32,
    brief: &ProductBrief,
) -> Result<SectionSummary> {
    let frame = p.frame(Some(root), kind.frame_spec(SECTION_X, y))?;
    let (node, height, fallback) = match sections::build(kind, p, frame, brief) {
        Ok(height) => (frame, height, false),
        Err(err) => {
            tracing::warn!(section = kind.name(), error = %err, "Section failed, drawing fallback");
            if let Err(remove_err) = p.remove(frame) {
                tracing::debug!(section = kind.name(), error = %remove_err, "Could not remove failed section");
            }
            let frame = p
                .frame(Some(root), kind.frame_spec(SECTION_X, y))
                .map_err(|e| fallback_failure(kind, e))?;
            let height =
                sections::fallback(kind, p, frame).map_err(|e| fallback_failure(kind, e))?;
            (frame, height, true)
        }
    };

    p.resize(node, SECTION_WIDTH, height)?;
    tracing::debug!(section = kind.name(), y, height, fallback, "Placed section");
    Ok(SectionSummary {
        kind,
        node,
        y,
        height,
        fallback,
    })
}

fn fallback_failure(kind: SectionKind, err: BriefError) -> BriefError {
    BriefError::LayoutGeneration(format!("{} fallback failed: {}", kind.name(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{FontName, RecordingCanvas, ShapeSpec, TextSpec};

    /// Recording canvas that fails text creation whose content matches
    struct FailingCanvas {
        inner: RecordingCanvas,
        fail_on: Vec<&'static str>,
    }

    impl FailingCanvas {
        fn new(fail_on: Vec<&'static str>) -> Self {
            Self {
                inner: RecordingCanvas::new(),
                fail_on,
            }
        }
    }

    impl CanvasDriver for FailingCanvas {
        fn load_font(&mut self, font: &FontName) -> Result<()> {
            self.inner.load_font(font)
        }
        fn create_container(&mut self, parent: Option<NodeId>, spec: FrameSpec) -> Result<NodeId> {
            self.inner.create_container(parent, spec)
        }
        fn create_shape(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId> {
            self.inner.create_shape(parent, spec)
        }
        fn create_text(&mut self, parent: NodeId, spec: TextSpec) -> Result<NodeId> {
            if self.fail_on.iter().any(|s| spec.content == *s) {
                return Err(BriefError::Canvas(format!("refused {:?}", spec.content)));
            }
            self.inner.create_text(parent, spec)
        }
        fn node_size(&self, node: NodeId) -> Result<(f32, f32)> {
            self.inner.node_size(node)
        }
        fn resize(&mut self, node: NodeId, width: f32, height: f32) -> Result<()> {
            self.inner.resize(node, width, height)
        }
        fn remove(&mut self, node: NodeId) -> Result<()> {
            self.inner.remove(node)
        }
        fn focus(&mut self, node: NodeId) -> Result<()> {
            self.inner.focus(node)
        }
        fn notify(&mut self, message: &str) {
            self.inner.notify(message)
        }
    }

    #[test]
    fn test_sections_stack_with_gap() {
        let mut canvas = RecordingCanvas::new();
        let layout =
            generate_document(&ProductBrief::default(), &mut canvas, &FontPreference::default())
                .unwrap();

        assert_eq!(layout.sections.len(), 10);
        assert_eq!(layout.sections[0].y, SECTION_X);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[1].y, pair[0].y + pair[0].height + SECTION_GAP);
        }
        let last = layout.sections.last().unwrap();
        assert_eq!(layout.height, last.y + last.height + SECTION_GAP);
        assert_eq!(canvas.node(layout.root).unwrap().height, layout.height);
        assert_eq!(canvas.focused(), Some(layout.root));
        assert_eq!(canvas.notifications(), [COMPLETION_MESSAGE.to_string()]);
    }

    #[test]
    fn test_failing_section_gets_fallback() {
        // The market builder draws this placeholder; the fallback does not
        let mut canvas = FailingCanvas::new(vec!["No market insights specified"]);
        let layout =
            generate_document(&ProductBrief::default(), &mut canvas, &FontPreference::default())
                .unwrap();

        let fallbacks: Vec<_> = layout.fallbacks().map(|s| s.kind).collect();
        assert_eq!(fallbacks, vec![SectionKind::Market]);
        let market = &layout.sections[2];
        assert_eq!(market.height, SectionKind::Market.min_height());
        assert_eq!(
            canvas.inner.find_text("No market intelligence specified").len(),
            1
        );
        // Only one market frame remains
        let frames = canvas
            .inner
            .children(layout.root)
            .iter()
            .filter(|n| n.name() == Some("Market Intelligence"))
            .count();
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_failing_fallback_aborts() {
        let mut canvas = FailingCanvas::new(vec![
            "No market insights specified",
            "No market intelligence specified",
        ]);
        let err =
            generate_document(&ProductBrief::default(), &mut canvas, &FontPreference::default())
                .unwrap_err();

        assert!(matches!(err, BriefError::LayoutGeneration(_)));
        assert!(canvas.inner.find_frame(ROOT_NAME).is_none());
        assert_eq!(canvas.inner.focused(), None);
        let notes = canvas.inner.notifications();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("Error creating design system:"));
    }
}
