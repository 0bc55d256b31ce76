//! QuizSession struct, its collaborators, and state accessors.

use std::sync::Arc;

use finquiz_ai::{AiClient, AiError, Conversation};
use finquiz_retrieval::ResourceFinder;
use uuid::Uuid;

/// Where the current question cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NoQuestion,
    /// A question is stored but its reference answer is not yet known.
    QuestionSet,
    /// Question and reference answer are ready for the user's attempt.
    AnswerPending,
    /// At least one answer to the current question has been graded.
    Evaluated,
}

/// Text settings shared by every session.
#[derive(Debug, Clone)]
pub struct QuizSettings {
    pub default_topic: String,
    /// Prepended, with a single space, to every prompt.
    pub safety_instruction: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_topic: "financial literacy".into(),
            safety_instruction: "Please ensure that the content you generate is safe, \
                appropriate, and free from explicit or harmful language."
                .into(),
        }
    }
}

/// Long-lived collaborators from which sessions are built.
///
/// `resources` is `None` when lookup is not configured; that is checked
/// once per evaluation and never treated as an error.
#[derive(Clone)]
pub struct QuizBackends {
    pub client: Arc<dyn AiClient>,
    pub resources: Option<Arc<ResourceFinder>>,
    pub settings: QuizSettings,
}

impl QuizBackends {
    pub fn new(client: Arc<dyn AiClient>, settings: QuizSettings) -> Self {
        Self {
            client,
            resources: None,
            settings,
        }
    }

    pub fn with_resources(mut self, finder: Arc<ResourceFinder>) -> Self {
        self.resources = Some(finder);
        self
    }

    pub fn resources_enabled(&self) -> bool {
        self.resources.is_some()
    }

    /// A session with no question and an empty transcript.
    pub fn fresh_session(&self) -> QuizSession {
        QuizSession::new(self.clone())
    }
}

/// The single mutable record of an in-progress quiz.
pub struct QuizSession {
    pub(super) id: Uuid,
    pub(super) backends: QuizBackends,
    pub(super) conversation: Conversation,
    pub(super) current_question: Option<String>,
    /// Reference answer for `current_question`; replaced together with it.
    pub(super) current_answer: Option<String>,
    pub(super) evaluated: bool,
}

impl QuizSession {
    pub fn new(backends: QuizBackends) -> Self {
        Self {
            id: Uuid::new_v4(),
            backends,
            conversation: Conversation::new(),
            current_question: None,
            current_answer: None,
            evaluated: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current_question.as_deref()
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.current_answer.as_deref()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.current_question, &self.current_answer) {
            (None, _) => QuizPhase::NoQuestion,
            (Some(_), None) => QuizPhase::QuestionSet,
            (Some(_), Some(_)) if self.evaluated => QuizPhase::Evaluated,
            (Some(_), Some(_)) => QuizPhase::AnswerPending,
        }
    }

    /// Store a new question together with its answer (or lack of one).
    pub(super) fn set_card(&mut self, question: String, answer: Option<String>) {
        self.current_question = Some(question).filter(|q| !q.trim().is_empty());
        self.current_answer = answer;
        self.evaluated = false;
    }

    pub(super) fn topic_or_default(&self, topic: Option<&str>) -> String {
        topic
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.backends.settings.default_topic)
            .to_string()
    }

    /// Send an instruction through the transcript with the safety preamble.
    pub(super) async fn ask(&mut self, instruction: &str) -> Result<String, AiError> {
        let prompt = format!("{} {}", self.backends.settings.safety_instruction, instruction);
        let client = Arc::clone(&self.backends.client);
        self.conversation.send(client.as_ref(), prompt).await
    }
}
