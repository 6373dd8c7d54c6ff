//! Brief types
//!
//! The structured product brief consumed by layout. Every field is optional:
//! absent or wrong-shaped values read as empty, never as an error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lenient::{self, Tag};

/// Placeholder for a feature without a description
pub const NO_DESCRIPTION: &str = "No description provided";

/// Placeholder for a feature without a user story
pub const NO_USER_STORY: &str = "No user story provided";

/// Placeholder for a feature without a name
pub const UNNAMED_FEATURE: &str = "Unnamed Feature";

/// The complete structured brief
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductBrief {
    // Strategic foundation
    #[serde(deserialize_with = "lenient::string")]
    pub refined_brief: String,
    #[serde(deserialize_with = "lenient::string")]
    pub value_proposition: String,
    #[serde(deserialize_with = "lenient::string")]
    pub business_model: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub success_metrics: Vec<String>,

    // User intelligence
    #[serde(deserialize_with = "lenient::records")]
    pub target_users: Vec<Persona>,
    #[serde(deserialize_with = "lenient::records")]
    pub user_journey: Vec<JourneyStage>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub jobs_to_be_done: Vec<String>,

    // Market intelligence
    #[serde(deserialize_with = "lenient::records")]
    pub competitive_analysis: Vec<Competitor>,
    #[serde(deserialize_with = "lenient::records")]
    pub market_insights: Vec<MarketInsight>,
    #[serde(deserialize_with = "lenient::string")]
    pub positioning_strategy: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub go_to_market_recommendations: Vec<String>,

    // Technical strategy
    #[serde(deserialize_with = "lenient::records")]
    pub technical_requirements: Vec<TechnicalRequirement>,
    #[serde(deserialize_with = "lenient::string")]
    pub technical_architecture: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub scalability_considerations: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub security_requirements: Vec<String>,

    // Design intelligence
    #[serde(deserialize_with = "lenient::records")]
    pub user_flows: Vec<UserFlow>,
    #[serde(deserialize_with = "lenient::records")]
    pub design_tokens: Vec<DesignToken>,
    #[serde(deserialize_with = "lenient::records")]
    pub component_specifications: Vec<ComponentSpec>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub accessibility_requirements: Vec<String>,

    // Visual system
    #[serde(deserialize_with = "lenient::string_list")]
    pub brand_personality: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub visual_direction: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub mood_keywords: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub inspiration_references: Vec<String>,

    // Roadmap
    #[serde(deserialize_with = "lenient::records")]
    pub mvp_features: Vec<FeatureEntry>,
    #[serde(deserialize_with = "lenient::records")]
    pub phase_2_features: Vec<FeatureEntry>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub long_term_vision: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub risk_mitigation: Vec<String>,
}

impl ProductBrief {
    /// MVP features followed by phase-2 features, resolved for display
    pub fn all_features(&self) -> Vec<ResolvedFeature> {
        self.mvp_features
            .iter()
            .chain(self.phase_2_features.iter())
            .map(FeatureEntry::resolve)
            .collect()
    }
}

/// Three-step scale shared by impact, priority, complexity and tech comfort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(()),
        }
    }
}

/// Emotion vocabulary for journey stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Frustrated,
    Confused,
    Excited,
    Satisfied,
    Curious,
    Confident,
    Optimistic,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Frustrated => "frustrated",
            Emotion::Confused => "confused",
            Emotion::Excited => "excited",
            Emotion::Satisfied => "satisfied",
            Emotion::Curious => "curious",
            Emotion::Confident => "confident",
            Emotion::Optimistic => "optimistic",
            Emotion::Neutral => "neutral",
        }
    }
}

impl FromStr for Emotion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frustrated" => Ok(Emotion::Frustrated),
            "confused" => Ok(Emotion::Confused),
            "excited" => Ok(Emotion::Excited),
            "satisfied" => Ok(Emotion::Satisfied),
            "curious" => Ok(Emotion::Curious),
            "confident" => Ok(Emotion::Confident),
            "optimistic" => Ok(Emotion::Optimistic),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(()),
        }
    }
}

/// Feature category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    Core,
    Additional,
}

impl FromStr for FeatureCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(FeatureCategory::Core),
            "additional" => Ok(FeatureCategory::Additional),
            _ => Err(()),
        }
    }
}

/// Design token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Elevation,
    Border,
}

impl FromStr for TokenCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" => Ok(TokenCategory::Color),
            "typography" => Ok(TokenCategory::Typography),
            "spacing" => Ok(TokenCategory::Spacing),
            "elevation" => Ok(TokenCategory::Elevation),
            "border" => Ok(TokenCategory::Border),
            _ => Err(()),
        }
    }
}

/// A user persona
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub age: String,
    #[serde(deserialize_with = "lenient::string")]
    pub occupation: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub needs: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub frustrations: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub goals: String,
    pub tech_comfort: Tag<Level>,
    #[serde(deserialize_with = "lenient::string")]
    pub quote: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub behavioral_traits: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub preferred_channels: Vec<String>,
}

/// One stage of the user journey
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyStage {
    #[serde(deserialize_with = "lenient::string")]
    pub stage: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub user_actions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub pain_points: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub opportunities: Vec<String>,
    pub emotions: Tag<Emotion>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub touchpoints: Vec<String>,
}

/// A competitor entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub positioning: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_features: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub pricing_model: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_audience: String,
}

/// A market insight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInsight {
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub insight: String,
    pub impact: Tag<Level>,
    #[serde(deserialize_with = "lenient::string")]
    pub source_reasoning: String,
    #[serde(deserialize_with = "lenient::string")]
    pub actionable_recommendation: String,
}

/// A technical requirement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalRequirement {
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub requirement: String,
    pub complexity: Tag<Level>,
    #[serde(deserialize_with = "lenient::string")]
    pub timeline_estimate: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub considerations: Vec<String>,
}

/// A user flow and its steps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFlow {
    #[serde(deserialize_with = "lenient::string")]
    pub flow_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub user_type: String,
    #[serde(deserialize_with = "lenient::records")]
    pub steps: Vec<FlowStep>,
    #[serde(deserialize_with = "lenient::string")]
    pub business_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStep {
    #[serde(deserialize_with = "lenient::number")]
    pub step_number: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub screen_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub primary_action: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub secondary_actions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_elements: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub success_criteria: String,
}

/// A design token value: a hex color string or a numeric size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignToken {
    pub category: Tag<TokenCategory>,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "token_value")]
    pub value: Option<TokenValue>,
    #[serde(deserialize_with = "lenient::string")]
    pub usage: String,
}

impl DesignToken {
    pub fn is(&self, category: TokenCategory) -> bool {
        self.category.kind == Some(category)
    }
}

fn token_value<'de, D>(deserializer: D) -> Result<Option<TokenValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(TokenValue::Text(s)),
        serde_json::Value::Number(n) => n.as_f64().map(TokenValue::Number),
        _ => None,
    })
}

/// A component specification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSpec {
    #[serde(deserialize_with = "lenient::string")]
    pub component_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub states: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub props: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub usage_examples: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub accessibility_notes: Vec<String>,
}

/// A feature as full record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    pub category: Tag<FeatureCategory>,
    pub priority: Tag<Level>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub user_story: String,
}

/// A feature list entry: either a bare name or a full record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureEntry {
    Named(String),
    Full(FeatureRecord),
}

/// A feature with every display slot filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFeature {
    pub name: String,
    pub category: Tag<FeatureCategory>,
    pub priority: Tag<Level>,
    pub description: String,
    pub user_story: String,
}

impl FeatureEntry {
    pub fn resolve(&self) -> ResolvedFeature {
        match self {
            FeatureEntry::Named(name) => ResolvedFeature {
                name: non_empty_or(name, UNNAMED_FEATURE),
                category: Tag::parse("core"),
                priority: Tag::parse("medium"),
                description: NO_DESCRIPTION.to_string(),
                user_story: NO_USER_STORY.to_string(),
            },
            FeatureEntry::Full(record) => ResolvedFeature {
                name: non_empty_or(&record.name, UNNAMED_FEATURE),
                category: Tag::parse(record.category.label_or("core")),
                priority: Tag::parse(record.priority.label_or("medium")),
                description: non_empty_or(&record.description, NO_DESCRIPTION),
                user_story: non_empty_or(&record.user_story, NO_USER_STORY),
            },
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_level_parse_case_insensitive() {
        assert_eq!("High".parse::<Level>(), Ok(Level::High));
        assert_eq!("medium".parse::<Level>(), Ok(Level::Medium));
        assert!("critical".parse::<Level>().is_err());
    }

    #[test]
    fn test_bare_string_feature_resolves_to_defaults() {
        let entry = FeatureEntry::Named("Offline mode".to_string());
        let feature = entry.resolve();
        assert_eq!(feature.name, "Offline mode");
        assert_eq!(feature.category.kind, Some(FeatureCategory::Core));
        assert_eq!(feature.priority.kind, Some(Level::Medium));
        assert_eq!(feature.description, NO_DESCRIPTION);
        assert_eq!(feature.user_story, NO_USER_STORY);
    }

    #[test]
    fn test_partial_record_feature_fills_slots() {
        let entry: FeatureEntry =
            serde_json::from_str(r#"{"priority": "HIGH", "description": ""}"#).unwrap();
        let feature = entry.resolve();
        assert_eq!(feature.name, UNNAMED_FEATURE);
        assert_eq!(feature.priority.raw, "HIGH");
        assert_eq!(feature.priority.kind, Some(Level::High));
        assert_eq!(feature.category.raw, "core");
        assert_eq!(feature.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_token_values() {
        let tokens: Vec<DesignToken> = serde_json::from_str(
            r##"[
                {"category": "color", "name": "primary-500", "value": "#007AFF"},
                {"category": "typography", "name": "body", "value": 17},
                {"category": "spacing", "name": "space-1", "value": {"px": 4}}
            ]"##,
        )
        .unwrap();
        assert!(tokens[0].is(TokenCategory::Color));
        assert_eq!(tokens[0].value, Some(TokenValue::Text("#007AFF".to_string())));
        assert_eq!(tokens[1].value, Some(TokenValue::Number(17.0)));
        assert_eq!(tokens[2].value, None);
    }

    #[test]
    fn test_brief_with_wrong_shapes() {
        let brief: ProductBrief = serde_json::from_str(
            r#"{
                "target_users": "not a list",
                "success_metrics": null,
                "user_journey": [{"stage": "Awareness", "emotions": "CURIOUS"}, 7],
                "mvp_features": ["Search", {"name": "Sync"}, 3]
            }"#,
        )
        .unwrap();
        assert!(brief.target_users.is_empty());
        assert!(brief.success_metrics.is_empty());
        assert_eq!(brief.user_journey.len(), 1);
        assert_eq!(brief.user_journey[0].emotions.kind, Some(Emotion::Curious));
        let names: Vec<String> = brief.all_features().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Search", "Sync"]);
    }
}
