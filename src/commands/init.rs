//! `briefcanvas init`: write a default `.briefcanvas.json`

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::config::{Config, CONFIG_FILE};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
    /// Where to write; `.briefcanvas.json` if None
    pub path: Option<PathBuf>,
}

pub fn execute_init(options: InitOptions) -> Result<()> {
    let path = options.path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if path.exists() && !options.force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    let mut config = Config::default();
    if !options.yes {
        prompt(&mut config)?;
    }

    config.save(&path)?;
    println!("{} Created {}", style("✓").green(), path.display());
    println!(
        "  {} Store your API key with `briefcanvas key set`",
        style("→").dim()
    );
    Ok(())
}

fn prompt(config: &mut Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    config.api.model = Input::with_theme(&theme)
        .with_prompt("Model")
        .default(config.api.model.clone())
        .interact_text()?;
    config.fonts.preferred = Input::with_theme(&theme)
        .with_prompt("Preferred font")
        .default(config.fonts.preferred.clone())
        .interact_text()?;
    config.output.svg = Confirm::with_theme(&theme)
        .with_prompt("Write SVG next to every document?")
        .default(config.output.svg)
        .interact()?;
    Ok(())
}
