//! Prompt rendering

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

pub const SYSTEM_PROMPT: &str = "You are a world-class product strategist and UX expert. Create comprehensive product briefs that combine deep user research, competitive intelligence, technical strategy, and design direction.";

const BRIEF_TEMPLATE: &str = include_str!("brief_prompt.hbs");

/// Values substituted into the user prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptInput<'a> {
    pub idea: &'a str,
    pub personas: usize,
    pub journey_stages: usize,
    pub competitors: usize,
}

impl<'a> PromptInput<'a> {
    pub fn new(idea: &'a str) -> Self {
        Self {
            idea,
            personas: 3,
            journey_stages: 5,
            competitors: 3,
        }
    }
}

/// Render the user prompt for `input`
///
/// The idea is inserted verbatim; the template is plain text, not HTML.
pub fn render_user_prompt(input: &PromptInput) -> Result<String> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    Ok(hbs.render_template(BRIEF_TEMPLATE, input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_inserted_unescaped() {
        let prompt = render_user_prompt(&PromptInput::new("A \"smart\" <plant> app & more")).unwrap();
        assert!(prompt.starts_with(
            "Create a comprehensive product brief and design system from: \"A \"smart\" <plant> app & more\""
        ));
        assert!(prompt.contains("\"design_tokens\": ["));
    }

    #[test]
    fn test_minimum_counts_rendered() {
        let input = PromptInput {
            personas: 4,
            ..PromptInput::new("idea")
        };
        let prompt = render_user_prompt(&input).unwrap();
        assert!(prompt.contains("Create 4+ detailed personas, 5+ user journey stages, 3+ competitors"));
    }
}
