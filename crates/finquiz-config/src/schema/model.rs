//! Conversational model configuration.

use serde::{Deserialize, Serialize};

/// Settings for the hosted generative model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier, e.g. `gemini-1.5-flash`.
    pub name: String,
    /// Base URL of the models endpoint (without the model name).
    pub api_base: String,
    /// Output token cap per call (valid range: 1-8192).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".into(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            max_tokens: 1024,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}
