//! Answer grading, resource attachment, and free-form questions.

use finquiz_retrieval::Resource;
use tracing::{debug, info, warn};

use crate::evaluation::Evaluation;
use crate::fallback::{ANSWER_NOT_AVAILABLE, GENERAL_APOLOGY};
use crate::grading;
use crate::prompts;
use crate::reply::Reply;

use super::manager::QuizSession;

impl QuizSession {
    /// Grade `user_answer` against the current question.
    ///
    /// Never fails: without a question it short-circuits without calling
    /// anything, and a failed grading call yields an incorrect verdict
    /// carrying the failure text.
    pub async fn evaluate_answer(&mut self, user_answer: &str) -> Evaluation {
        let Some(question) = self.current_question.clone() else {
            return Evaluation::no_question();
        };

        // A blank reference is as good as none; ask again.
        let has_reference = self
            .current_answer
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        if !has_reference {
            self.generate_answer().await;
        }
        let reference = self.current_answer.clone().unwrap_or_default();

        let prompt = prompts::evaluation(&question, user_answer, &reference);
        let text = match Reply::from(self.ask(&prompt).await) {
            Reply::Text(text) => text.trim().to_string(),
            Reply::ContentFiltered(reason) | Reply::Failed(reason) => {
                warn!(session = %self.id, %reason, "grading failed");
                let correct_answer = if reference.trim().is_empty() {
                    ANSWER_NOT_AVAILABLE.to_string()
                } else {
                    reference
                };
                return Evaluation {
                    is_correct: false,
                    message: format!("Error evaluating answer: {reason}"),
                    correct_answer: Some(correct_answer),
                    resource: None,
                };
            }
        };

        let is_correct = grading::is_correct(&text);
        self.evaluated = true;
        info!(session = %self.id, is_correct, "answer graded");

        let resource = if is_correct {
            None
        } else {
            self.relevant_resource(&reference).await
        };

        Evaluation {
            is_correct,
            message: text,
            correct_answer: Some(reference),
            resource,
        }
    }

    /// Look up supplementary reading for `text`.
    ///
    /// `None` when lookup is not configured, finds nothing, or fails.
    pub async fn relevant_resource(&self, text: &str) -> Option<Resource> {
        let finder = self.backends.resources.as_ref()?;
        match finder.find(text).await {
            Ok(Some(resource)) => {
                debug!(session = %self.id, title = %resource.title, "resource attached");
                Some(resource)
            }
            Ok(None) => {
                debug!(session = %self.id, namespace = finder.namespace(), "no resource match");
                None
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "resource lookup failed");
                None
            }
        }
    }

    /// Answer a free-form question. Does not touch the current question.
    pub async fn handle_general_question(&mut self, question: &str) -> String {
        match Reply::from(self.ask(&prompts::general(question)).await) {
            Reply::Text(text) => text,
            Reply::ContentFiltered(reason) | Reply::Failed(reason) => {
                warn!(session = %self.id, %reason, "general question failed");
                GENERAL_APOLOGY.to_string()
            }
        }
    }
}
