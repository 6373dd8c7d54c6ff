//! `briefcanvas layout`: lay out a brief file without calling the model

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use super::output::{render_and_write, OutputOptions};
use crate::brief::load_brief;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Brief file (JSON or YAML)
    pub brief: PathBuf,
    pub output: OutputOptions,
}

pub fn execute_layout(options: LayoutOptions, config: &Config) -> Result<()> {
    let brief = load_brief(&options.brief)
        .with_context(|| format!("Failed to load brief from {}", options.brief.display()))?;
    tracing::info!(path = %options.brief.display(), "Loaded brief");

    let mut output = options.output;
    if output.name.is_empty() {
        output.name = options
            .brief
            .file_stem()
            .map(|s| format!("{}.canvas", s.to_string_lossy()))
            .unwrap_or_else(|| "design-system".to_string());
    }

    let written = render_and_write(&brief, config, &output)?;
    println!(
        "{} Laid out {} into {} file(s)",
        style("✓").green(),
        options.brief.display(),
        written.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_yaml_brief() {
        let dir = tempfile::tempdir().unwrap();
        let brief_path = dir.path().join("idea.yaml");
        std::fs::write(
            &brief_path,
            "refined_brief: A calm budgeting app\nsuccess_metrics:\n  - Weekly active users\n",
        )
        .unwrap();

        let options = LayoutOptions {
            brief: brief_path,
            output: OutputOptions {
                dir: Some(dir.path().to_path_buf()),
                ..OutputOptions::default()
            },
        };
        execute_layout(options, &Config::default()).unwrap();
        assert!(dir.path().join("idea.canvas.json").exists());
        assert!(!dir.path().join("idea.canvas.svg").exists());
    }
}
