//! Question and reference-answer generation.

use tracing::{info, warn};

use crate::fallback::{self, FailureKind, NO_QUESTION};
use crate::prompts;
use crate::reply::Reply;

use super::manager::QuizSession;

impl QuizSession {
    /// Ask the model for a question and its answer in one reply.
    ///
    /// Always leaves a question stored: a malformed reply or a failed call
    /// stores a canned pair instead. Returns the stored question.
    pub async fn generate_question_with_answer(&mut self, topic: Option<&str>) -> String {
        let topic = self.topic_or_default(topic);
        let reply = Reply::from(self.ask(&prompts::question_with_answer(&topic)).await);

        let (question, answer) = match reply {
            Reply::Text(text) => match prompts::parse_question_answer(&text) {
                Some(pair) => pair,
                None => {
                    warn!(session = %self.id, "question reply missing markers, using canned pair");
                    canned(FailureKind::Malformed)
                }
            },
            Reply::ContentFiltered(reason) => {
                warn!(session = %self.id, %reason, "question generation filtered, using canned pair");
                canned(FailureKind::ContentFiltered)
            }
            Reply::Failed(reason) => {
                warn!(session = %self.id, %reason, "question generation failed, using canned pair");
                canned(FailureKind::Failed)
            }
        };

        info!(session = %self.id, %topic, "question set");
        self.set_card(question.clone(), Some(answer));
        question
    }

    /// Ask the model for a question only. The reference answer is cleared
    /// and filled lazily when the user's answer is graded.
    pub async fn generate_question(&mut self, topic: Option<&str>) -> String {
        let topic = self.topic_or_default(topic);
        let question = match Reply::from(self.ask(&prompts::question(&topic)).await) {
            Reply::Text(text) => prompts::strip_label(&text, "Question:").to_string(),
            Reply::ContentFiltered(reason) => {
                warn!(session = %self.id, %reason, "question generation filtered");
                fallback::question(FailureKind::ContentFiltered).to_string()
            }
            Reply::Failed(reason) => {
                warn!(session = %self.id, %reason, "question generation failed");
                fallback::question(FailureKind::Failed).to_string()
            }
        };

        let question = if question.is_empty() {
            fallback::question(FailureKind::Malformed).to_string()
        } else {
            question
        };

        self.set_card(question.clone(), None);
        question
    }

    /// Fill in the reference answer for the current question.
    ///
    /// Without a question nothing is sent and the "no question" text is
    /// returned. Otherwise an answer is always stored, falling back to
    /// fixed text when the model cannot provide one.
    pub async fn generate_answer(&mut self) -> String {
        let Some(question) = self.current_question.clone() else {
            return NO_QUESTION.to_string();
        };

        let answer = match Reply::from(self.ask(&prompts::answer(&question)).await) {
            Reply::Text(text) => prompts::strip_label(&text, "Answer:").to_string(),
            Reply::ContentFiltered(reason) => {
                warn!(session = %self.id, %reason, "answer generation filtered");
                fallback::answer(FailureKind::ContentFiltered).to_string()
            }
            Reply::Failed(reason) => {
                warn!(session = %self.id, %reason, "answer generation failed");
                fallback::answer(FailureKind::Failed).to_string()
            }
        };

        self.current_answer = Some(answer.clone());
        answer
    }
}

fn canned(kind: FailureKind) -> (String, String) {
    let pair = fallback::question_pair(kind);
    (pair.question.to_string(), pair.answer.to_string())
}
