//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Finish reasons that mean the candidate was withheld by a policy filter.
const BLOCKED_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "IMAGE_SAFETY",
];

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let contents: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response, mapping policy blocks to `ContentFiltered`.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"].as_array().filter(|c| !c.is_empty());

        let Some(first) = candidates.and_then(|c| c.first()) else {
            // A blocked prompt comes back with feedback and no candidates.
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::ContentFiltered(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::ParseError("no candidates in response".to_string()));
        };

        if let Some(reason) = first["finishReason"].as_str() {
            if BLOCKED_FINISH_REASONS.contains(&reason) {
                return Err(AiError::ContentFiltered(format!(
                    "candidate stopped: {reason}"
                )));
            }
        }

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
