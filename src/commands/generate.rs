//! `briefcanvas generate`: idea → brief → document

use std::io::{IsTerminal, Read};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::output::{render_and_write, write_file, OutputOptions};
use crate::brief::ProductBrief;
use crate::config::Config;
use crate::error::BriefError;
use crate::llm::BriefClient;
use crate::store::{resolve_api_key, FileStore};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Product idea (reads from stdin if None)
    pub idea: Option<String>,
    pub output: OutputOptions,
    /// Stop after writing the brief
    pub brief_only: bool,
    /// Timeout override in seconds
    pub timeout: Option<u64>,
}

pub async fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let idea = match options.idea {
        Some(idea) => idea,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if idea.trim().is_empty() {
        bail!("Describe your product idea as an argument or on stdin");
    }

    let store = FileStore::default_location()?;
    let api_key = resolve_api_key(&store).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let mut api = config.api.clone();
    if let Some(timeout) = options.timeout {
        api.timeout_secs = timeout;
    }
    let client = BriefClient::new(api, api_key)?;

    let brief = match request_brief(&client, &idea).await {
        Ok(brief) => brief,
        Err(err) => {
            eprintln!("{} {}", style("✗").red(), err.user_message());
            if err.is_retryable() {
                eprintln!("  {} Run the same command again to retry", style("→").dim());
            }
            return Err(err).context("Brief generation failed");
        }
    };
    println!(
        "{} Brief ready: {} personas, {} features, {} design tokens",
        style("✓").green(),
        brief.target_users.len(),
        brief.all_features().len(),
        brief.design_tokens.len()
    );

    let mut output = options.output;
    if output.name.is_empty() {
        output.name = "design-system".to_string();
    }
    if config.output.save_brief || options.brief_only {
        let dir = output.dir(config);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(format!("{}.brief.json", output.name));
        write_file(&path, &serde_json::to_string_pretty(&brief)?)?;
    }
    if options.brief_only {
        return Ok(());
    }

    render_and_write(&brief, config, &output)?;
    Ok(())
}

/// The model request, raced against Ctrl-C, with a spinner on a terminal
async fn request_brief(client: &BriefClient, idea: &str) -> crate::Result<ProductBrief> {
    let spinner = if std::io::stderr().is_terminal() {
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed}") {
            spinner.set_style(template);
        }
        spinner.set_message("Generating product brief…");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let result = tokio::select! {
        result = client.expand_brief(idea) => result,
        _ = tokio::signal::ctrl_c() => Err(BriefError::Cancelled),
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}
