//! `briefcanvas palette`: print the palettes and type scale a brief yields

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::brief::load_brief;
use crate::color::{
    derive_palette, derive_typography_scale, sorted_descending, Palette, TypographyScale,
};

#[derive(Debug, Clone)]
pub struct PaletteOptions {
    pub brief: PathBuf,
    /// Print JSON instead of the styled listing
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteReport {
    palette: Palette,
    typography: TypographyScale,
}

pub fn execute_palette(options: PaletteOptions) -> Result<()> {
    let brief = load_brief(&options.brief)
        .with_context(|| format!("Failed to load brief from {}", options.brief.display()))?;
    let report = PaletteReport {
        palette: derive_palette(&brief.design_tokens),
        typography: derive_typography_scale(&brief.design_tokens),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let palette = &report.palette;
    if palette.used_defaults {
        println!(
            "{} Not enough color tokens; showing the default palette",
            style("!").yellow()
        );
    }
    println!("{}", style("Light").bold());
    for (name, hex) in &palette.light {
        let dark = palette.dark.get(name).map(String::as_str).unwrap_or("-");
        println!(
            "  {:<16} {}  {}",
            name,
            style(hex).cyan(),
            style(format!("dark {}", dark)).dim()
        );
    }

    println!("\n{}", style("Combinations").bold());
    for combo in &palette.combinations {
        println!(
            "  {:<20} {} + {}  {}",
            combo.name,
            combo.colors[0],
            combo.colors[1],
            style(&combo.emotion).dim()
        );
    }

    println!("\n{}", style("Typography").bold());
    for (name, size) in sorted_descending(&report.typography) {
        println!("  {:<16} {}px", name, size);
    }
    Ok(())
}
