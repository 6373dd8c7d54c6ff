//! Brief extraction from model output
//!
//! The model is asked for a bare JSON object but often wraps it in prose or
//! code fences. Extraction takes everything from the first `{` to the last `}`
//! and decodes it; this is best-effort, not schema validation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::types::ProductBrief;
use crate::error::{BriefError, Result};

static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex"));

/// Locate the outermost `{...}` block in free text
pub fn extract_json_block(text: &str) -> Result<&str> {
    JSON_BLOCK
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| BriefError::MalformedResponse("no JSON object found".to_string()))
}

/// Extract and decode a brief from model output
pub fn parse_brief(text: &str) -> Result<ProductBrief> {
    let block = extract_json_block(text)?;
    let value: Value = serde_json::from_str(block)
        .map_err(|e| BriefError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    brief_from_value(value)
}

/// Decode a brief from an already-parsed JSON value
pub fn brief_from_value(value: Value) -> Result<ProductBrief> {
    if !value.is_object() {
        return Err(BriefError::MalformedResponse(
            "expected a JSON object at the top level".to_string(),
        ));
    }
    ProductBrief::deserialize(value)
        .map_err(|e| BriefError::MalformedResponse(format!("unreadable brief: {}", e)))
}

/// Load a brief from a `.json`, `.yaml` or `.yml` file
pub fn load_brief<P: AsRef<Path>>(path: P) -> Result<ProductBrief> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        let value: Value = serde_yaml::from_str(&content)?;
        brief_from_value(value)
    } else {
        parse_brief(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_prose_and_fences() {
        let text = "Here is your brief:\n```json\n{\"refined_brief\": \"A {great} app\"}\n```\nEnjoy!";
        let block = extract_json_block(text).unwrap();
        assert_eq!(block, "{\"refined_brief\": \"A {great} app\"}");

        let brief = parse_brief(text).unwrap();
        assert_eq!(brief.refined_brief, "A {great} app");
    }

    #[test]
    fn test_no_block_is_malformed() {
        let err = parse_brief("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, BriefError::MalformedResponse(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_brief("{\"refined_brief\": }").unwrap_err();
        assert!(matches!(err, BriefError::MalformedResponse(_)));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = brief_from_value(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, BriefError::MalformedResponse(_)));
    }

    #[test]
    fn test_load_yaml_brief() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.yaml");
        std::fs::write(
            &path,
            "refined_brief: Meal planning for busy parents\nsuccess_metrics:\n  - Weekly active users\n",
        )
        .unwrap();
        let brief = load_brief(&path).unwrap();
        assert_eq!(brief.refined_brief, "Meal planning for busy parents");
        assert_eq!(brief.success_metrics, vec!["Weekly active users"]);
    }
}
