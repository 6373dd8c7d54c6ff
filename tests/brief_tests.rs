//! Brief ingestion, palette derivation and credential handling

use briefcanvas::brief::{Level, TokenCategory};
use briefcanvas::color::palette::MIN_PALETTE_ENTRIES;
use briefcanvas::color::{default_light, sorted_descending};
use briefcanvas::error::BriefError;
use briefcanvas::llm::{classify_status, message_content};
use briefcanvas::store::{mask_key, API_KEY};
use briefcanvas::{
    derive_palette, derive_typography_scale, load_brief, parse_brief, FileStore, KeyValueStore,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/habit_tracker.json");

// =============================================================================
// Ingestion
// =============================================================================

mod ingestion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixture_loads_with_tags() {
        let brief = load_brief(FIXTURE).unwrap();
        assert_eq!(brief.target_users.len(), 2);
        assert_eq!(brief.target_users[1].tech_comfort.kind, Some(Level::Medium));
        assert_eq!(brief.target_users[1].age, "");
        assert_eq!(brief.all_features().len(), 5);
        assert_eq!(
            brief
                .design_tokens
                .iter()
                .filter(|t| t.is(TokenCategory::Color))
                .count(),
            13
        );
    }

    #[test]
    fn test_completion_reply_round_trip() {
        let fixture = std::fs::read_to_string(FIXTURE).unwrap();
        let completion = serde_json::json!({
            "choices": [{"message": {"content": format!("Sure! {}\nHope this helps.", fixture)}}]
        });
        let content = message_content(&completion).unwrap();
        let brief = parse_brief(content).unwrap();
        assert_eq!(brief.value_proposition, "Build lasting habits in under a minute a day.");
    }

    #[test]
    fn test_reply_without_json_is_malformed() {
        assert!(matches!(
            parse_brief("I could not produce a brief for that."),
            Err(BriefError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_every_field_may_be_missing() {
        let brief = parse_brief("{}").unwrap();
        assert!(brief.target_users.is_empty());
        assert!(brief.all_features().is_empty());
        assert_eq!(brief.refined_brief, "");
    }
}

// =============================================================================
// Palette and typography
// =============================================================================

mod palette_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixture_palette_keeps_tokens() {
        let brief = load_brief(FIXTURE).unwrap();
        let palette = derive_palette(&brief.design_tokens);
        assert!(!palette.used_defaults);
        assert!(palette.light.len() >= MIN_PALETTE_ENTRIES);
        assert_eq!(palette.light["primary-500"], "#f97316");
        assert_eq!(palette.combinations.len(), 4);
        assert_eq!(palette.combinations[1].colors[1], "#a855f7");
        // Missing slots fall back per combination
        assert_eq!(palette.combinations[2].colors[1], "#f2f2f7");
    }

    #[test]
    fn test_sparse_tokens_use_defaults() {
        let brief = parse_brief(
            r##"{"design_tokens": [{"category": "color", "name": "primary-500", "value": "#ff0000"}]}"##,
        )
        .unwrap();
        let palette = derive_palette(&brief.design_tokens);
        assert!(palette.used_defaults);
        assert_eq!(palette.light, default_light());
    }

    #[test]
    fn test_typography_from_numeric_tokens() {
        let brief = load_brief(FIXTURE).unwrap();
        let scale = derive_typography_scale(&brief.design_tokens);
        let sizes: Vec<f64> = sorted_descending(&scale).into_iter().map(|(_, s)| s).collect();
        // The quoted "48" is not a number and is left out
        assert_eq!(sizes, vec![24.0, 16.0, 14.0]);
    }
}

// =============================================================================
// Errors and credentials
// =============================================================================

mod credential_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            classify_status(401, "").user_message(),
            "Invalid API key. Please check your OpenAI API key with `briefcanvas key set`."
        );
        let quota = classify_status(429, r#"{"error": {"type": "insufficient_quota"}}"#);
        assert_eq!(
            quota.user_message(),
            "OpenAI quota exceeded. Please check your billing and usage limits."
        );
        assert!(!quota.is_retryable());
        assert!(classify_status(429, "{}").is_retryable());
        assert_eq!(
            classify_status(502, "").user_message(),
            "API Error: 502 - Bad Gateway"
        );
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStore::new(&path).set(API_KEY, "sk-live-0123456789").unwrap();

        let store = FileStore::new(&path);
        let key = store.get(API_KEY).unwrap().unwrap();
        assert_eq!(mask_key(&key), "sk-…6789");
    }
}
