//! Recording canvas
//!
//! An in-memory [`CanvasDriver`] that keeps the node tree and an ordered log
//! of every call. Text boxes are measured with an average-glyph-width
//! approximation, which is enough to stack text blocks without overlap.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    CanvasDriver, FontName, FrameSpec, NodeId, ShadowLevel, ShapeKind, ShapeSpec, Stroke, TextSpec,
};
use crate::color::Rgb;
use crate::error::{BriefError, Result};

/// Average glyph advance as a fraction of the font size
pub const AVG_GLYPH_WIDTH: f32 = 0.52;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT: f32 = 1.2;

/// What a node is, with its kind-specific properties
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Frame {
        name: String,
        fill: Option<Rgb>,
        corner_radius: f32,
        shadow: Option<ShadowLevel>,
    },
    Shape {
        shape: ShapeKind,
        fill: Option<Rgb>,
        corner_radius: f32,
        stroke: Option<Stroke>,
        shadow: Option<ShadowLevel>,
    },
    Text {
        content: String,
        font: FontName,
        font_size: f32,
        color: Rgb,
        wrap_width: Option<f32>,
    },
}

impl NodeKind {
    fn label(&self) -> &'static str {
        match self {
            NodeKind::Frame { .. } => "frame",
            NodeKind::Shape {
                shape: ShapeKind::Rectangle,
                ..
            } => "rectangle",
            NodeKind::Shape {
                shape: ShapeKind::Ellipse,
                ..
            } => "ellipse",
            NodeKind::Text { .. } => "text",
        }
    }
}

/// A live node in the recorded tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Frame { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self.kind, NodeKind::Frame { .. })
    }
}

/// One entry of the call log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    LoadFont {
        family: String,
        style: String,
        loaded: bool,
    },
    Create {
        node: NodeId,
        parent: Option<NodeId>,
        kind: &'static str,
    },
    Resize {
        node: NodeId,
        width: f32,
        height: f32,
    },
    Remove {
        node: NodeId,
    },
    Focus {
        node: NodeId,
    },
    Notify {
        message: String,
    },
}

/// In-memory driver
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    nodes: Vec<Option<Node>>,
    commands: Vec<Command>,
    available_families: Option<HashSet<String>>,
    loaded_fonts: HashSet<FontName>,
    focused: Option<NodeId>,
    notifications: Vec<String>,
}

impl RecordingCanvas {
    /// A canvas on which every font family is available
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas that only has the listed font families
    pub fn with_available_fonts<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_families: Some(families.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Live children of a node in creation order
    pub fn children(&self, id: NodeId) -> Vec<&Node> {
        self.node(id)
            .map(|n| n.children.iter().filter_map(|c| self.node(*c)).collect())
            .unwrap_or_default()
    }

    /// Every live node in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter_map(Option::as_ref)
    }

    /// Live text nodes whose content equals `content`
    pub fn find_text(&self, content: &str) -> Vec<&Node> {
        self.nodes().filter(|n| n.text() == Some(content)).collect()
    }

    /// First live frame with the given name
    pub fn find_frame(&self, name: &str) -> Option<&Node> {
        self.nodes().find(|n| n.name() == Some(name))
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Position of a node relative to the page
    pub fn absolute_position(&self, id: NodeId) -> Option<(f32, f32)> {
        let node = self.node(id)?;
        match node.parent {
            Some(parent) => {
                let (px, py) = self.absolute_position(parent)?;
                Some((px + node.x, py + node.y))
            }
            None => Some((node.x, node.y)),
        }
    }

    /// Serializable snapshot of the tree under `root`
    pub fn to_document(&self, root: NodeId) -> Result<RecordedDocument> {
        let tree = self.tree(root)?;
        Ok(RecordedDocument {
            generator: format!("briefcanvas {}", crate::VERSION),
            generated_at: Utc::now(),
            width: tree.node.width,
            height: tree.node.height,
            tree,
            commands: self.commands.clone(),
        })
    }

    fn tree(&self, id: NodeId) -> Result<TreeNode> {
        let node = self.live(id)?.clone();
        let children = node
            .children
            .iter()
            .map(|c| self.tree(*c))
            .collect::<Result<Vec<_>>>()?;
        Ok(TreeNode { node, children })
    }

    fn live(&self, id: NodeId) -> Result<&Node> {
        self.node(id)
            .ok_or_else(|| BriefError::Canvas(format!("unknown node {}", id)))
    }

    fn live_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| BriefError::Canvas(format!("unknown node {}", id)))
    }

    fn insert(
        &mut self,
        parent: Option<NodeId>,
        (x, y, width, height): (f32, f32, f32, f32),
        kind: NodeKind,
    ) -> Result<NodeId> {
        if let Some(parent) = parent {
            if !self.live(parent)?.is_frame() {
                return Err(BriefError::Canvas(format!(
                    "node {} cannot have children",
                    parent
                )));
            }
        }

        let id = NodeId(self.nodes.len());
        self.commands.push(Command::Create {
            node: id,
            parent,
            kind: kind.label(),
        });
        self.nodes.push(Some(Node {
            id,
            parent,
            x,
            y,
            width,
            height,
            kind,
            children: Vec::new(),
        }));
        if let Some(parent) = parent {
            self.live_mut(parent)?.children.push(id);
        }
        Ok(id)
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) {
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }
}

impl CanvasDriver for RecordingCanvas {
    fn load_font(&mut self, font: &FontName) -> Result<()> {
        let loaded = self
            .available_families
            .as_ref()
            .map(|families| families.contains(&font.family))
            .unwrap_or(true);
        self.commands.push(Command::LoadFont {
            family: font.family.clone(),
            style: font.style.as_str().to_string(),
            loaded,
        });
        if loaded {
            self.loaded_fonts.insert(font.clone());
            Ok(())
        } else {
            Err(BriefError::Canvas(format!(
                "font {} {} is not available",
                font.family,
                font.style.as_str()
            )))
        }
    }

    fn create_container(&mut self, parent: Option<NodeId>, spec: FrameSpec) -> Result<NodeId> {
        self.insert(
            parent,
            (spec.x, spec.y, spec.width, spec.height),
            NodeKind::Frame {
                name: spec.name,
                fill: spec.fill,
                corner_radius: spec.corner_radius,
                shadow: spec.shadow,
            },
        )
    }

    fn create_shape(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId> {
        self.insert(
            Some(parent),
            (spec.x, spec.y, spec.width, spec.height),
            NodeKind::Shape {
                shape: spec.kind,
                fill: spec.fill,
                corner_radius: spec.corner_radius,
                stroke: spec.stroke,
                shadow: spec.shadow,
            },
        )
    }

    fn create_text(&mut self, parent: NodeId, spec: TextSpec) -> Result<NodeId> {
        if !self.loaded_fonts.contains(&spec.font) {
            return Err(BriefError::Canvas(format!(
                "font {} {} has not been loaded",
                spec.font.family,
                spec.font.style.as_str()
            )));
        }
        let (width, mut height) = measure_text(&spec.content, spec.font_size, spec.width);
        if let Some(max) = spec.max_height {
            height = height.min(max);
        }
        self.insert(
            Some(parent),
            (spec.x, spec.y, width, height),
            NodeKind::Text {
                content: spec.content,
                font: spec.font,
                font_size: spec.font_size,
                color: spec.color,
                wrap_width: spec.width,
            },
        )
    }

    fn node_size(&self, node: NodeId) -> Result<(f32, f32)> {
        let node = self.live(node)?;
        Ok((node.width, node.height))
    }

    fn resize(&mut self, node: NodeId, width: f32, height: f32) -> Result<()> {
        let target = self.live_mut(node)?;
        target.width = width;
        target.height = height;
        self.commands.push(Command::Resize {
            node,
            width,
            height,
        });
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<()> {
        let parent = self.live(node)?.parent;
        if let Some(parent) = parent {
            self.live_mut(parent)?.children.retain(|c| *c != node);
        }
        self.drop_subtree(node);
        if self.focused == Some(node) {
            self.focused = None;
        }
        self.commands.push(Command::Remove { node });
        Ok(())
    }

    fn focus(&mut self, node: NodeId) -> Result<()> {
        self.live(node)?;
        self.focused = Some(node);
        self.commands.push(Command::Focus { node });
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
        self.commands.push(Command::Notify {
            message: message.to_string(),
        });
    }
}

/// A node with its children inlined, for serialization
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub node: Node,
    #[serde(rename = "child_nodes", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// The JSON document written for a generated layout
#[derive(Debug, Clone, Serialize)]
pub struct RecordedDocument {
    pub generator: String,
    pub generated_at: DateTime<Utc>,
    pub width: f32,
    pub height: f32,
    pub tree: TreeNode,
    pub commands: Vec<Command>,
}

/// Greedy word wrap at an approximate character budget.
///
/// Explicit newlines always break. Without a width each paragraph is one line.
pub fn wrap_lines(content: &str, font_size: f32, width: Option<f32>) -> Vec<String> {
    let budget = width.map(|w| ((w / (font_size * AVG_GLYPH_WIDTH)).floor() as usize).max(1));
    let mut lines = Vec::new();

    for paragraph in content.split('\n') {
        let Some(budget) = budget else {
            lines.push(paragraph.to_string());
            continue;
        };

        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            // Break words longer than a whole line
            while word.len() > budget {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..budget).collect());
            }
            let word: String = word.into_iter().collect();
            if word.is_empty() {
                continue;
            }
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > budget && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }

    lines
}

/// Approximate `(width, height)` of a text box
pub fn measure_text(content: &str, font_size: f32, width: Option<f32>) -> (f32, f32) {
    let lines = wrap_lines(content, font_size, width);
    let height = lines.len().max(1) as f32 * font_size * LINE_HEIGHT;
    let width = width.unwrap_or_else(|| {
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        longest as f32 * font_size * AVG_GLYPH_WIDTH
    });
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontWeight;

    fn inter() -> FontName {
        FontName::new("Inter", FontWeight::Regular)
    }

    fn text(content: &str, width: Option<f32>) -> TextSpec {
        TextSpec {
            content: content.to_string(),
            x: 0.0,
            y: 0.0,
            font: inter(),
            font_size: 10.0,
            color: Rgb::new(0.0, 0.0, 0.0),
            width,
            max_height: None,
        }
    }

    #[test]
    fn test_wrap_lines() {
        // 10px font -> 5.2px glyphs -> 10 chars in 52px
        let lines = wrap_lines("alpha beta gamma delta", 10.0, Some(52.0));
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);

        let lines = wrap_lines("one\ntwo", 10.0, None);
        assert_eq!(lines, vec!["one", "two"]);

        let lines = wrap_lines("abcdefghijklmnop", 10.0, Some(52.0));
        assert_eq!(lines, vec!["abcdefghij", "klmnop"]);
    }

    #[test]
    fn test_measure_grows_with_lines() {
        let (_, one) = measure_text("short", 10.0, Some(200.0));
        let (_, three) = measure_text("a\nb\nc", 10.0, Some(200.0));
        assert_eq!(one, 12.0);
        assert_eq!(three, 36.0);
    }

    #[test]
    fn test_create_and_remove_tree() {
        let mut canvas = RecordingCanvas::new();
        canvas.load_font(&inter()).unwrap();
        let root = canvas
            .create_container(None, FrameSpec::new("Root", 0.0, 0.0, 100.0, 100.0))
            .unwrap();
        let child = canvas
            .create_container(Some(root), FrameSpec::new("Child", 10.0, 20.0, 50.0, 50.0))
            .unwrap();
        let label = canvas.create_text(child, text("hello", None)).unwrap();

        assert_eq!(canvas.absolute_position(label), Some((10.0, 20.0)));
        assert_eq!(canvas.children(root).len(), 1);

        canvas.remove(child).unwrap();
        assert!(canvas.node(child).is_none());
        assert!(canvas.node(label).is_none());
        assert!(canvas.children(root).is_empty());
    }

    #[test]
    fn test_text_requires_loaded_font() {
        let mut canvas = RecordingCanvas::new();
        let root = canvas
            .create_container(None, FrameSpec::new("Root", 0.0, 0.0, 100.0, 100.0))
            .unwrap();
        assert!(canvas.create_text(root, text("hi", None)).is_err());
    }

    #[test]
    fn test_unavailable_font_fails_to_load() {
        let mut canvas = RecordingCanvas::with_available_fonts(["Inter"]);
        assert!(canvas.load_font(&inter()).is_ok());
        assert!(canvas
            .load_font(&FontName::new("SF Pro Display", FontWeight::Bold))
            .is_err());
        assert!(matches!(
            canvas.commands().last(),
            Some(Command::LoadFont { loaded: false, .. })
        ));
    }

    #[test]
    fn test_shapes_cannot_have_children() {
        let mut canvas = RecordingCanvas::new();
        let root = canvas
            .create_container(None, FrameSpec::new("Root", 0.0, 0.0, 100.0, 100.0))
            .unwrap();
        let rect = canvas
            .create_shape(root, ShapeSpec::rect(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert!(canvas
            .create_shape(rect, ShapeSpec::rect(0.0, 0.0, 1.0, 1.0))
            .is_err());
    }
}
