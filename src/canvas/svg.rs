//! SVG export of a recorded tree

use std::collections::BTreeSet;
use std::fmt::Write as _;

use super::recording::{wrap_lines, Node, NodeKind, RecordingCanvas, LINE_HEIGHT};
use super::{NodeId, ShadowLevel, ShapeKind};
use crate::error::{BriefError, Result};

/// Render the subtree under `root` as a standalone SVG document
pub fn render_svg(canvas: &RecordingCanvas, root: NodeId) -> Result<String> {
    let root_node = canvas
        .node(root)
        .ok_or_else(|| BriefError::Canvas(format!("unknown node {}", root)))?;

    let mut shadows = BTreeSet::new();
    collect_shadows(canvas, root, &mut shadows);

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(root_node.width),
        h = fmt_num(root_node.height)
    )
    .map_err(fmt_error)?;

    if !shadows.is_empty() {
        out.push_str("  <defs>\n");
        for level in &shadows {
            let s = level.shadow();
            writeln!(
                out,
                r##"    <filter id="{id}" x="-20%" y="-20%" width="140%" height="140%"><feDropShadow dx="0" dy="{dy}" stdDeviation="{sd}" flood-color="#000000" flood-opacity="{a}"/></filter>"##,
                id = shadow_id(*level),
                dy = fmt_num(s.offset_y),
                sd = fmt_num(s.radius / 2.0),
                a = s.alpha
            )
            .map_err(fmt_error)?;
        }
        out.push_str("  </defs>\n");
    }

    // The root is drawn at the origin regardless of its page position
    write_node(canvas, root_node, -root_node.x, -root_node.y, 1, &mut out)?;
    out.push_str("</svg>\n");
    Ok(out)
}

fn collect_shadows(canvas: &RecordingCanvas, id: NodeId, found: &mut BTreeSet<ShadowLevel>) {
    let Some(node) = canvas.node(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Frame {
            shadow: Some(level),
            ..
        }
        | NodeKind::Shape {
            shadow: Some(level),
            ..
        } => {
            found.insert(*level);
        }
        _ => {}
    }
    for child in &node.children {
        collect_shadows(canvas, *child, found);
    }
}

fn write_node(
    canvas: &RecordingCanvas,
    node: &Node,
    offset_x: f32,
    offset_y: f32,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    let x = offset_x + node.x;
    let y = offset_y + node.y;
    let indent = "  ".repeat(depth);

    match &node.kind {
        NodeKind::Frame {
            name,
            fill,
            corner_radius,
            shadow,
        } => {
            writeln!(out, r#"{indent}<g data-name="{}">"#, escape(name)).map_err(fmt_error)?;
            if let Some(fill) = fill {
                writeln!(
                    out,
                    r#"{indent}  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
                    fmt_num(x),
                    fmt_num(y),
                    fmt_num(node.width),
                    fmt_num(node.height),
                    fmt_num(*corner_radius),
                    fill.to_hex(),
                    filter_attr(*shadow)
                )
                .map_err(fmt_error)?;
            }
            for child in canvas.children(node.id) {
                write_node(canvas, child, x, y, depth + 1, out)?;
            }
            writeln!(out, "{indent}</g>").map_err(fmt_error)?;
        }
        NodeKind::Shape {
            shape,
            fill,
            corner_radius,
            stroke,
            shadow,
        } => {
            let fill = fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string());
            let stroke = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{}""#, s.color.to_hex(), fmt_num(s.weight)))
                .unwrap_or_default();
            match shape {
                ShapeKind::Rectangle => writeln!(
                    out,
                    r#"{indent}<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}{}/>"#,
                    fmt_num(x),
                    fmt_num(y),
                    fmt_num(node.width),
                    fmt_num(node.height),
                    fmt_num(*corner_radius),
                    fill,
                    stroke,
                    filter_attr(*shadow)
                ),
                ShapeKind::Ellipse => writeln!(
                    out,
                    r#"{indent}<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"{}{}/>"#,
                    fmt_num(x + node.width / 2.0),
                    fmt_num(y + node.height / 2.0),
                    fmt_num(node.width / 2.0),
                    fmt_num(node.height / 2.0),
                    fill,
                    stroke,
                    filter_attr(*shadow)
                ),
            }
            .map_err(fmt_error)?;
        }
        NodeKind::Text {
            content,
            font,
            font_size,
            color,
            wrap_width,
        } => {
            let line_height = font_size * LINE_HEIGHT;
            let max_lines = ((node.height / line_height).round() as usize).max(1);
            let style = if font.style == super::FontWeight::Italic {
                r#" font-style="italic""#
            } else {
                ""
            };
            writeln!(
                out,
                r#"{indent}<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}"{} fill="{}">"#,
                fmt_num(x),
                fmt_num(y),
                escape(&font.family),
                fmt_num(*font_size),
                font.style.numeric(),
                style,
                color.to_hex()
            )
            .map_err(fmt_error)?;
            for (i, line) in wrap_lines(content, *font_size, *wrap_width)
                .iter()
                .take(max_lines)
                .enumerate()
            {
                // Baseline sits roughly one font size below the top of each line
                let baseline = y + i as f32 * line_height + font_size;
                writeln!(
                    out,
                    r#"{indent}  <tspan x="{}" y="{}">{}</tspan>"#,
                    fmt_num(x),
                    fmt_num(baseline),
                    escape(line)
                )
                .map_err(fmt_error)?;
            }
            writeln!(out, "{indent}</text>").map_err(fmt_error)?;
        }
    }
    Ok(())
}

fn shadow_id(level: ShadowLevel) -> &'static str {
    match level {
        ShadowLevel::Subtle => "shadow-subtle",
        ShadowLevel::Medium => "shadow-medium",
        ShadowLevel::Prominent => "shadow-prominent",
    }
}

fn filter_attr(shadow: Option<ShadowLevel>) -> String {
    shadow
        .map(|s| format!(r#" filter="url(#{})""#, shadow_id(s)))
        .unwrap_or_default()
}

fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn fmt_error(err: std::fmt::Error) -> BriefError {
    BriefError::Other(format!("failed to write SVG: {}", err))
}

/// Escape XML special characters
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasDriver, FontName, FontWeight, FrameSpec, ShapeSpec, TextSpec};
    use crate::color::{LABEL, SYSTEM_BACKGROUND, SYSTEM_BLUE};

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn test_render_nested_tree() {
        let mut canvas = RecordingCanvas::new();
        let font = FontName::new("Inter", FontWeight::Bold);
        canvas.load_font(&font).unwrap();
        let root = canvas
            .create_container(
                None,
                FrameSpec::new("Doc", 0.0, 0.0, 200.0, 100.0)
                    .fill(SYSTEM_BACKGROUND)
                    .shadow(ShadowLevel::Subtle),
            )
            .unwrap();
        canvas
            .create_shape(root, ShapeSpec::ellipse(10.0, 10.0, 20.0, 20.0).fill(SYSTEM_BLUE))
            .unwrap();
        canvas
            .create_text(
                root,
                TextSpec {
                    content: "Tom & Jerry".to_string(),
                    x: 40.0,
                    y: 10.0,
                    font,
                    font_size: 20.0,
                    color: LABEL,
                    width: None,
                    max_height: None,
                },
            )
            .unwrap();

        let svg = render_svg(&canvas, root).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="200" height="100""#));
        assert!(svg.contains("shadow-subtle"));
        assert!(svg.contains(r##"<filter id="shadow-subtle""##));
        assert!(svg.contains(r##"flood-color="#000000""##));
        assert!(svg.contains(r##"<ellipse cx="20" cy="20" rx="10" ry="10" fill="#007aff"/>"##));
        assert!(svg.contains("Tom &amp; Jerry"));
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_unknown_root_is_an_error() {
        let canvas = RecordingCanvas::new();
        assert!(render_svg(&canvas, NodeId(3)).is_err());
    }
}
