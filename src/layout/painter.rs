//! Font-resolving drawing helper
//!
//! Wraps a [`CanvasDriver`] for the section builders. Text goes through
//! [`Painter::text`], which resolves the preferred font family with a fallback
//! and remembers the outcome of every load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::style::TextStyle;
use super::text::TEXT_PLACEHOLDER;
use crate::canvas::{CanvasDriver, FontName, FontWeight, FrameSpec, NodeId, ShapeSpec, TextSpec};
use crate::error::{BriefError, Result};

pub const DEFAULT_PREFERRED_FONT: &str = "SF Pro Display";
pub const DEFAULT_FALLBACK_FONT: &str = "Inter";

/// Font families tried in order for every text node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPreference {
    pub preferred: String,
    pub fallback: String,
}

impl Default for FontPreference {
    fn default() -> Self {
        Self {
            preferred: DEFAULT_PREFERRED_FONT.to_string(),
            fallback: DEFAULT_FALLBACK_FONT.to_string(),
        }
    }
}

pub struct Painter<'a> {
    canvas: &'a mut dyn CanvasDriver,
    fonts: FontPreference,
    loads: HashMap<FontName, bool>,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn CanvasDriver, fonts: FontPreference) -> Self {
        Self {
            canvas,
            fonts,
            loads: HashMap::new(),
        }
    }

    /// First loadable family for `weight`
    pub fn font(&mut self, weight: FontWeight) -> Result<FontName> {
        let families = [self.fonts.preferred.clone(), self.fonts.fallback.clone()];
        for family in families {
            let font = FontName::new(family, weight);
            let loaded = match self.loads.get(&font) {
                Some(loaded) => *loaded,
                None => {
                    let loaded = match self.canvas.load_font(&font) {
                        Ok(()) => true,
                        Err(err) => {
                            tracing::debug!(family = %font.family, style = weight.as_str(), error = %err, "Font unavailable");
                            false
                        }
                    };
                    self.loads.insert(font.clone(), loaded);
                    loaded
                }
            };
            if loaded {
                return Ok(font);
            }
        }
        Err(BriefError::Canvas(format!(
            "no usable font for style {} (tried {} and {})",
            weight.as_str(),
            self.fonts.preferred,
            self.fonts.fallback
        )))
    }

    /// Create a text node; blank content renders as the placeholder
    pub fn text(
        &mut self,
        parent: NodeId,
        content: &str,
        x: f32,
        y: f32,
        style: TextStyle,
    ) -> Result<NodeId> {
        let font = self.font(style.weight)?;
        let content = if content.trim().is_empty() {
            TEXT_PLACEHOLDER
        } else {
            content
        };
        self.canvas.create_text(
            parent,
            TextSpec {
                content: content.to_string(),
                x,
                y,
                font,
                font_size: style.size,
                color: style.color,
                width: style.width,
                max_height: style.max_height,
            },
        )
    }

    /// Create a text node and return its measured height
    pub fn text_height(
        &mut self,
        parent: NodeId,
        content: &str,
        x: f32,
        y: f32,
        style: TextStyle,
    ) -> Result<f32> {
        let node = self.text(parent, content, x, y, style)?;
        self.height(node)
    }

    pub fn frame(&mut self, parent: Option<NodeId>, spec: FrameSpec) -> Result<NodeId> {
        self.canvas.create_container(parent, spec)
    }

    pub fn shape(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId> {
        self.canvas.create_shape(parent, spec)
    }

    pub fn height(&self, node: NodeId) -> Result<f32> {
        Ok(self.canvas.node_size(node)?.1)
    }

    pub fn resize(&mut self, node: NodeId, width: f32, height: f32) -> Result<()> {
        self.canvas.resize(node, width, height)
    }

    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        self.canvas.remove(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Command, RecordingCanvas};
    use crate::layout::style::BODY;

    fn root(painter: &mut Painter) -> NodeId {
        painter
            .frame(None, FrameSpec::new("Root", 0.0, 0.0, 100.0, 100.0))
            .unwrap()
    }

    #[test]
    fn test_preferred_font_used_when_available() {
        let mut canvas = RecordingCanvas::new();
        let mut painter = Painter::new(&mut canvas, FontPreference::default());
        assert_eq!(
            painter.font(FontWeight::Bold).unwrap().family,
            DEFAULT_PREFERRED_FONT
        );
    }

    #[test]
    fn test_falls_back_and_caches_outcome() {
        let mut canvas = RecordingCanvas::with_available_fonts(["Inter"]);
        {
            let mut painter = Painter::new(&mut canvas, FontPreference::default());
            let parent = root(&mut painter);
            painter.text(parent, "one", 0.0, 0.0, BODY).unwrap();
            painter.text(parent, "two", 0.0, 20.0, BODY).unwrap();
        }
        let loads = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::LoadFont { .. }))
            .count();
        // One failed preferred load and one fallback load, then cached
        assert_eq!(loads, 2);
        assert!(canvas.nodes().filter_map(|n| match &n.kind {
            crate::canvas::NodeKind::Text { font, .. } => Some(font.family.as_str()),
            _ => None,
        }).all(|family| family == "Inter"));
    }

    #[test]
    fn test_no_fonts_is_an_error() {
        let mut canvas = RecordingCanvas::with_available_fonts(Vec::<String>::new());
        let mut painter = Painter::new(&mut canvas, FontPreference::default());
        assert!(painter.font(FontWeight::Regular).is_err());
    }

    #[test]
    fn test_blank_text_gets_placeholder() {
        let mut canvas = RecordingCanvas::new();
        {
            let mut painter = Painter::new(&mut canvas, FontPreference::default());
            let parent = root(&mut painter);
            painter.text(parent, "  ", 0.0, 0.0, BODY).unwrap();
        }
        assert_eq!(canvas.find_text(TEXT_PLACEHOLDER).len(), 1);
    }
}
