//! Conversation struct and transcript accessors.

use crate::token_tracker::TokenTracker;
use crate::Message;

/// A conversation with an append-only transcript.
#[derive(Debug, Default)]
pub struct Conversation {
    /// Prompts and model replies, oldest first.
    pub(super) messages: Vec<Message>,
    pub(super) tracker: TokenTracker,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
