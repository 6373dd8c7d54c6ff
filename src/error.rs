//! Error types
//!
//! Library-level errors. Network and parse failures are classified once at the
//! call boundary and each kind carries a single user-facing message.

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, BriefError>;

/// All errors produced by brief generation and layout
#[derive(Debug, Error)]
pub enum BriefError {
    /// 401 from the model endpoint
    #[error("invalid API key")]
    InvalidCredential,

    /// 403 from the model endpoint
    #[error("access denied")]
    AccessDenied,

    /// 429 with an `insufficient_quota` body
    #[error("quota exceeded")]
    QuotaExceeded,

    /// 429 for any other reason
    #[error("rate limited")]
    RateLimited,

    /// Any other non-2xx status
    #[error("API error: {status} - {reason}")]
    Api { status: u16, reason: String },

    /// No JSON block found in the reply, or the block failed to decode
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No credential stored and none in the environment
    #[error("no API key configured")]
    MissingCredential,

    /// The request exceeded the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The user cancelled the request
    #[error("request cancelled")]
    Cancelled,

    /// A canvas driver call failed
    #[error("canvas error: {0}")]
    Canvas(String),

    /// Layout could not produce a document at all
    #[error("layout generation failed: {0}")]
    LayoutGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("{0}")]
    Other(String),
}

impl BriefError {
    /// The single line shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            BriefError::InvalidCredential => {
                "Invalid API key. Please check your OpenAI API key with `briefcanvas key set`."
                    .to_string()
            }
            BriefError::AccessDenied => {
                "Access denied. Please ensure billing is enabled on your OpenAI account."
                    .to_string()
            }
            BriefError::QuotaExceeded => {
                "OpenAI quota exceeded. Please check your billing and usage limits.".to_string()
            }
            BriefError::RateLimited => {
                "Rate limit exceeded. Please wait a moment and try again.".to_string()
            }
            BriefError::Api { status, reason } => format!("API Error: {} - {}", status, reason),
            BriefError::MalformedResponse(detail) => {
                format!("Could not read a product brief from the response ({})", detail)
            }
            BriefError::MissingCredential => {
                "No API key configured. Run `briefcanvas key set` or set OPENAI_API_KEY."
                    .to_string()
            }
            BriefError::Timeout(secs) => {
                format!("The request timed out after {} seconds. Please try again.", secs)
            }
            BriefError::Cancelled => "Request cancelled.".to_string(),
            BriefError::LayoutGeneration(reason) => {
                format!("Error creating design system: {}", reason)
            }
            other => other.to_string(),
        }
    }

    /// Whether resubmitting the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, BriefError::RateLimited)
            || matches!(self, BriefError::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(BriefError::InvalidCredential
            .user_message()
            .starts_with("Invalid API key"));
        assert!(BriefError::QuotaExceeded.user_message().contains("quota"));
        assert_eq!(
            BriefError::Api {
                status: 500,
                reason: "Internal Server Error".to_string()
            }
            .user_message(),
            "API Error: 500 - Internal Server Error"
        );
        assert_eq!(
            BriefError::LayoutGeneration("boom".to_string()).user_message(),
            "Error creating design system: boom"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(BriefError::RateLimited.is_retryable());
        assert!(!BriefError::InvalidCredential.is_retryable());
        assert!(BriefError::Api {
            status: 502,
            reason: String::new()
        }
        .is_retryable());
        assert!(!BriefError::Api {
            status: 404,
            reason: String::new()
        }
        .is_retryable());
        assert!(!BriefError::Cancelled.is_retryable());
        assert!(!BriefError::Timeout(120).is_retryable());
        assert!(!BriefError::MalformedResponse("no braces".to_string()).is_retryable());
    }
}
