//! Normalised outcome of one model call.

use finquiz_ai::AiError;

/// What a model call produced, reduced to the three cases fallback
/// selection cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// The model declined for safety or policy reasons.
    ContentFiltered(String),
    /// Any other failure: network, quota, malformed payload.
    Failed(String),
}

impl From<Result<String, AiError>> for Reply {
    fn from(result: Result<String, AiError>) -> Self {
        match result {
            Ok(text) => Reply::Text(text),
            Err(AiError::ContentFiltered(reason)) => Reply::ContentFiltered(reason),
            Err(other) => Reply::Failed(other.to_string()),
        }
    }
}
