use serde::{Deserialize, Serialize};

/// Quiz behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Topic used when a request does not name one.
    pub default_topic: String,
    /// Preamble prepended to every prompt sent to the model.
    pub safety_instruction: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_topic: "financial literacy".into(),
            safety_instruction: "Please ensure that the content you generate is safe, \
                appropriate, and free from explicit or harmful language."
                .into(),
        }
    }
}
