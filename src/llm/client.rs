//! Chat-completion client

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::prompt::{render_user_prompt, PromptInput, SYSTEM_PROMPT};
use crate::brief::{parse_brief, ProductBrief};
use crate::config::ApiConfig;
use crate::error::{BriefError, Result};

pub struct BriefClient {
    http: Client,
    settings: ApiConfig,
    api_key: String,
}

impl BriefClient {
    pub fn new(settings: ApiConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            settings,
            api_key: api_key.into(),
        })
    }

    /// Request body for `idea`
    pub fn request_body(&self, idea: &str) -> Result<Value> {
        let user_prompt = render_user_prompt(&PromptInput::new(idea))?;
        Ok(json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": self.settings.temperature,
            "max_tokens": self.settings.max_tokens,
        }))
    }

    /// Expand a free-text product idea into a structured brief
    pub async fn expand_brief(&self, idea: &str) -> Result<ProductBrief> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(BriefError::Other("product description is empty".to_string()));
        }
        let body = self.request_body(idea)?;
        tracing::info!(model = %self.settings.model, endpoint = %self.settings.endpoint, "Requesting product brief");

        let response = self
            .http
            .post(&self.settings.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %text, "Request rejected");
            return Err(classify_status(status.as_u16(), &text));
        }

        let value: Value = response.json().await.map_err(|e| self.transport_error(e))?;
        let content = message_content(&value)?;
        tracing::debug!(chars = content.len(), "Received completion");
        parse_brief(content)
    }

    fn transport_error(&self, err: reqwest::Error) -> BriefError {
        if err.is_timeout() {
            BriefError::Timeout(self.settings.timeout_secs)
        } else if err.is_decode() {
            BriefError::MalformedResponse(err.to_string())
        } else {
            BriefError::Http(err)
        }
    }
}

/// Map a non-2xx status and its body to an error kind
pub fn classify_status(status: u16, body: &str) -> BriefError {
    match status {
        401 => BriefError::InvalidCredential,
        403 => BriefError::AccessDenied,
        429 => {
            let kind = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.pointer("/error/type").and_then(Value::as_str).map(str::to_owned));
            if kind.as_deref() == Some("insufficient_quota") {
                BriefError::QuotaExceeded
            } else {
                BriefError::RateLimited
            }
        }
        _ => BriefError::Api {
            status,
            reason: StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .to_string(),
        },
    }
}

/// `choices[0].message.content` of a completion
pub fn message_content(value: &Value) -> Result<&str> {
    value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| BriefError::MalformedResponse("completion has no message content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert!(matches!(classify_status(401, ""), BriefError::InvalidCredential));
        assert!(matches!(classify_status(403, ""), BriefError::AccessDenied));
        assert!(matches!(
            classify_status(429, r#"{"error":{"type":"insufficient_quota"}}"#),
            BriefError::QuotaExceeded
        ));
        assert!(matches!(
            classify_status(429, r#"{"error":{"type":"requests"}}"#),
            BriefError::RateLimited
        ));
        assert!(matches!(classify_status(429, "not json"), BriefError::RateLimited));
        match classify_status(500, "") {
            BriefError::Api { status, reason } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_message_content() {
        let value = json!({"choices": [{"message": {"content": "hello"}}]});
        assert_eq!(message_content(&value).unwrap(), "hello");
        assert!(matches!(
            message_content(&json!({"choices": []})),
            Err(BriefError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_request_body_uses_settings() {
        let settings = ApiConfig {
            model: "gpt-4o-mini".to_string(),
            ..ApiConfig::default()
        };
        let client = BriefClient::new(settings, "sk-test").unwrap();
        let body = client.request_body("A habit tracker").unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 8000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("\"A habit tracker\""));
    }

    #[tokio::test]
    async fn test_empty_idea_rejected_before_request() {
        let client = BriefClient::new(ApiConfig::default(), "sk-test").unwrap();
        assert!(client.expand_brief("   ").await.is_err());
    }
}
