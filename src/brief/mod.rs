//! Product brief schema
//!
//! Typed view of the structured brief returned by the model, with lenient
//! ingestion so that missing or malformed fields degrade to empty values.

pub mod extract;
pub mod lenient;
pub mod types;

pub use extract::{brief_from_value, extract_json_block, load_brief, parse_brief};
pub use lenient::Tag;
pub use types::{
    Competitor, ComponentSpec, DesignToken, Emotion, FeatureCategory, FeatureEntry,
    FeatureRecord, FlowStep, JourneyStage, Level, MarketInsight, Persona, ProductBrief,
    ResolvedFeature, TechnicalRequirement, TokenCategory, TokenValue, UserFlow,
};
