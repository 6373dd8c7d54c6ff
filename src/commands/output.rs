//! Writing and summarising generated documents

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::brief::ProductBrief;
use crate::canvas::{render_svg, RecordingCanvas};
use crate::config::Config;
use crate::layout::{generate_document, DocumentLayout, FontPreference};

/// Output switches shared by `generate` and `layout`
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Output directory (config `output.dir` if None)
    pub dir: Option<PathBuf>,
    /// File stem for every written file
    pub name: String,
    /// Also write SVG
    pub svg: bool,
    /// Preferred font family override
    pub font: Option<String>,
    /// Fallback font family override
    pub fallback_font: Option<String>,
    /// Families the canvas can load; empty means any
    pub available_fonts: Vec<String>,
}

impl OutputOptions {
    pub fn fonts(&self, config: &Config) -> FontPreference {
        let mut fonts = config.fonts.clone();
        if let Some(font) = &self.font {
            fonts.preferred = font.clone();
        }
        if let Some(font) = &self.fallback_font {
            fonts.fallback = font.clone();
        }
        fonts
    }

    pub fn dir(&self, config: &Config) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| config.output.dir.clone())
    }
}

/// Lay out `brief` on a recording canvas and write the results
pub fn render_and_write(
    brief: &ProductBrief,
    config: &Config,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    let mut canvas = if options.available_fonts.is_empty() {
        RecordingCanvas::new()
    } else {
        RecordingCanvas::with_available_fonts(options.available_fonts.iter().cloned())
    };
    let fonts = options.fonts(config);

    let layout = match generate_document(brief, &mut canvas, &fonts) {
        Ok(layout) => layout,
        Err(err) => {
            for note in canvas.notifications() {
                eprintln!("{} {}", style("✗").red(), note);
            }
            return Err(err).context("Layout generation failed");
        }
    };
    print_summary(&layout);

    let dir = options.dir(config);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    let json_path = dir.join(format!("{}.json", options.name));
    let document = canvas.to_document(layout.root)?;
    write_file(&json_path, &serde_json::to_string_pretty(&document)?)?;
    written.push(json_path);

    if options.svg || config.output.svg {
        let svg_path = dir.join(format!("{}.svg", options.name));
        write_file(&svg_path, &render_svg(&canvas, layout.root)?)?;
        written.push(svg_path);
    }

    for note in canvas.notifications() {
        println!("{}", note);
    }
    Ok(written)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote {}", style("✓").green(), path.display());
    Ok(())
}

pub fn print_summary(layout: &DocumentLayout) {
    println!(
        "{} {} sections, {}×{}",
        style("→").cyan(),
        layout.sections.len(),
        layout.width,
        layout.height
    );
    for section in &layout.sections {
        let marker = if section.fallback {
            style("!").yellow()
        } else {
            style("·").dim()
        };
        println!(
            "  {} {:<28} y {:>6}  h {:>6}",
            marker,
            section.kind.name(),
            section.y,
            section.height
        );
    }
    let fallbacks = layout.fallbacks().count();
    if fallbacks > 0 {
        println!(
            "{} {} section(s) fell back to placeholders",
            style("!").yellow(),
            fallbacks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_json_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let options = OutputOptions {
            dir: Some(dir.path().to_path_buf()),
            name: "doc".to_string(),
            svg: true,
            ..OutputOptions::default()
        };
        let written = render_and_write(&ProductBrief::default(), &Config::default(), &options).unwrap();
        assert_eq!(written.len(), 2);
        let json = std::fs::read_to_string(dir.path().join("doc.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 2500.0);
        assert!(std::fs::read_to_string(dir.path().join("doc.svg"))
            .unwrap()
            .starts_with("<svg"));
    }

    #[test]
    fn test_font_overrides() {
        let options = OutputOptions {
            font: Some("Helvetica".to_string()),
            ..OutputOptions::default()
        };
        let fonts = options.fonts(&Config::default());
        assert_eq!(fonts.preferred, "Helvetica");
        assert_eq!(fonts.fallback, "Inter");
    }
}
