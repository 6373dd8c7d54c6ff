//! Configuration
//!
//! Project settings live in `.briefcanvas.json`. Every section defaults, so a
//! partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::FontPreference;

pub const CONFIG_FILE: &str = ".briefcanvas.json";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    8000
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Chat-completion endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Font families for text nodes
    #[serde(default)]
    pub fonts: FontPreference,

    /// Where documents are written
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Also write an SVG next to every JSON document
    #[serde(default)]
    pub svg: bool,

    /// Keep the expanded brief next to the document
    #[serde(default = "default_true")]
    pub save_brief: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            svg: false,
            save_brief: true,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path`, or the defaults when it is missing or unreadable
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable config");
                }
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api": {"model": "gpt-4o-mini"}, "output": {"svg": true}}"#)
                .unwrap();
        assert_eq!(config.api.model, "gpt-4o-mini");
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.max_tokens, 8000);
        assert_eq!(config.api.timeout_secs, 120);
        assert!(config.output.svg);
        assert!(config.output.save_brief);
        assert_eq!(config.fonts, FontPreference::default());
    }

    #[test]
    fn test_partial_fonts_keep_other_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{"api": {"model": "gpt-4o-mini"}, "fonts": {"preferred": "Helvetica"}}"#,
        )
        .unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.api.model, "gpt-4o-mini");
        assert_eq!(config.fonts.preferred, "Helvetica");
        assert_eq!(config.fonts.fallback, FontPreference::default().fallback);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.fonts.preferred = "Helvetica".to_string();
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::load_or_default(dir.path().join("absent.json")),
            Config::default()
        );
    }
}
