//! Canvas driver
//!
//! The layout engine never talks to a host directly. It issues node-creation
//! calls through [`CanvasDriver`], so the same engine can target a design-tool
//! host, the in-memory [`RecordingCanvas`], or anything else that can place
//! frames, shapes and text.
//!
//! ## Coordinates
//!
//! Every `x`/`y` is relative to the parent node. Root containers are created
//! with `parent = None` and placed at the origin of the page.

pub mod recording;
pub mod svg;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::Result;

pub use recording::{
    measure_text, wrap_lines, Command, Node, NodeKind, RecordedDocument, RecordingCanvas,
};
pub use svg::render_svg;

/// Handle to a node created by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Font style within a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    Italic,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
            FontWeight::Italic => "Italic",
        }
    }

    /// CSS numeric weight
    pub fn numeric(&self) -> u16 {
        match self {
            FontWeight::Regular | FontWeight::Italic => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// A font family plus style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: FontWeight,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: FontWeight) -> Self {
        Self {
            family: family.into(),
            style,
        }
    }
}

/// Drop shadow presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    Subtle,
    Medium,
    Prominent,
}

/// Concrete drop-shadow parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub alpha: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub spread: f32,
}

impl ShadowLevel {
    pub fn shadow(&self) -> Shadow {
        match self {
            ShadowLevel::Subtle => Shadow {
                alpha: 0.04,
                offset_y: 1.0,
                radius: 3.0,
                spread: 0.0,
            },
            ShadowLevel::Medium => Shadow {
                alpha: 0.08,
                offset_y: 4.0,
                radius: 12.0,
                spread: 0.0,
            },
            ShadowLevel::Prominent => Shadow {
                alpha: 0.12,
                offset_y: 8.0,
                radius: 24.0,
                spread: 0.0,
            },
        }
    }
}

/// Solid stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgb,
    pub weight: f32,
}

/// A container node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Rgb>,
    pub corner_radius: f32,
    pub shadow: Option<ShadowLevel>,
}

impl FrameSpec {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
            fill: None,
            corner_radius: 0.0,
            shadow: None,
        }
    }

    pub fn fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn shadow(mut self, level: ShadowLevel) -> Self {
        self.shadow = Some(level);
        self
    }
}

/// Primitive shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// A leaf shape node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Rgb>,
    pub corner_radius: f32,
    pub stroke: Option<Stroke>,
    pub shadow: Option<ShadowLevel>,
}

impl ShapeSpec {
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            x,
            y,
            width,
            height,
            fill: None,
            corner_radius: 0.0,
            stroke: None,
            shadow: None,
        }
    }

    pub fn ellipse(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: ShapeKind::Ellipse,
            ..Self::rect(x, y, width, height)
        }
    }

    pub fn fill(mut self, color: Rgb) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn stroke(mut self, color: Rgb, weight: f32) -> Self {
        self.stroke = Some(Stroke { color, weight });
        self
    }

    pub fn shadow(mut self, level: ShadowLevel) -> Self {
        self.shadow = Some(level);
        self
    }
}

/// A text node. `width` fixes the wrap width; `max_height` clips the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub font: FontName,
    pub font_size: f32,
    pub color: Rgb,
    pub width: Option<f32>,
    pub max_height: Option<f32>,
}

/// Capabilities the layout engine needs from a host canvas
pub trait CanvasDriver {
    /// Make a font available; fails when the host does not have it
    fn load_font(&mut self, font: &FontName) -> Result<()>;

    /// Create a frame, appended to `parent` or placed on the page
    fn create_container(&mut self, parent: Option<NodeId>, spec: FrameSpec) -> Result<NodeId>;

    /// Create a rectangle or ellipse inside `parent`
    fn create_shape(&mut self, parent: NodeId, spec: ShapeSpec) -> Result<NodeId>;

    /// Create a text node inside `parent`; its font must already be loaded
    fn create_text(&mut self, parent: NodeId, spec: TextSpec) -> Result<NodeId>;

    /// Current `(width, height)` of a node, measured for text
    fn node_size(&self, node: NodeId) -> Result<(f32, f32)>;

    fn resize(&mut self, node: NodeId, width: f32, height: f32) -> Result<()>;

    /// Remove a node and everything under it
    fn remove(&mut self, node: NodeId) -> Result<()>;

    /// Select the node and bring it into view
    fn focus(&mut self, node: NodeId) -> Result<()>;

    /// Show a transient notification to the user
    fn notify(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_builders() {
        let shape = ShapeSpec::ellipse(1.0, 2.0, 12.0, 12.0).fill(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(shape.kind, ShapeKind::Ellipse);
        assert_eq!(shape.width, 12.0);
        assert!(shape.fill.is_some());
        assert!(shape.stroke.is_none());
    }

    #[test]
    fn test_shadow_levels_grow() {
        let subtle = ShadowLevel::Subtle.shadow();
        let prominent = ShadowLevel::Prominent.shadow();
        assert!(prominent.radius > subtle.radius);
        assert!(prominent.alpha > subtle.alpha);
    }
}
