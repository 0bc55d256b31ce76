use finquiz_retrieval::Resource;
use serde::Serialize;

use crate::fallback::NO_QUESTION;

/// Outcome of grading one user answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub is_correct: bool,
    /// Raw grading text from the model, or an explanatory fallback.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl Evaluation {
    /// Result when there is nothing to grade against.
    pub fn no_question() -> Self {
        Self {
            is_correct: false,
            message: NO_QUESTION.to_string(),
            correct_answer: None,
            resource: None,
        }
    }
}
