//! Language-model client
//!
//! One chat-completion request per brief. The reply is handed to
//! [`parse_brief`](crate::brief::parse_brief); no retries.

pub mod client;
pub mod prompt;

pub use client::{classify_status, message_content, BriefClient};
pub use prompt::{render_user_prompt, PromptInput, SYSTEM_PROMPT};
