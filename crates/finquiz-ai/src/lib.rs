//! Conversational model client for Finquiz.
//!
//! Provides:
//! - the `AiClient` trait, the seam every model backend implements
//! - a Gemini client over the Generative Language REST API
//! - `Conversation`, an append-only transcript replayed on every call
//! - token usage tracking

pub mod conversation;
pub mod gemini;
pub mod token_tracker;

use async_trait::async_trait;

pub use conversation::Conversation;
pub use gemini::{GeminiClient, GeminiConfig};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send the full message history and return the model's next turn.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;

    /// Short provider label used for logging and token accounting.
    fn provider(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The model declined to generate because of a safety or policy filter.
    #[error("Content filtered: {0}")]
    ContentFiltered(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl AiError {
    pub fn is_content_filtered(&self) -> bool {
        matches!(self, AiError::ContentFiltered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn content_filtered_is_distinct_from_generic_failures() {
        assert!(AiError::ContentFiltered("SAFETY".into()).is_content_filtered());
        assert!(!AiError::ApiError("HTTP 500".into()).is_content_filtered());
        assert!(!AiError::RateLimited.is_content_filtered());
        assert!(!AiError::Timeout.is_content_filtered());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AiError::ContentFiltered("SAFETY".into()).to_string(),
            "Content filtered: SAFETY"
        );
        assert_eq!(
            AiError::NetworkError("connection reset".into()).to_string(),
            "Network error: connection reset"
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
