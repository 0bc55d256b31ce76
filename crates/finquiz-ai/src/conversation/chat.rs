//! Async send for Conversation.

use tracing::debug;

use crate::{AiClient, AiError, Message};

use super::manager::Conversation;

impl Conversation {
    /// Send a prompt with the full transcript as context.
    ///
    /// The prompt and the reply are appended only when the call succeeds;
    /// a failed call leaves the transcript exactly as it was.
    pub async fn send(
        &mut self,
        client: &dyn AiClient,
        prompt: impl Into<String>,
    ) -> Result<String, AiError> {
        let prompt = Message::user(prompt);
        let mut messages = self.messages.clone();
        messages.push(prompt.clone());

        let response = client.send_message(&messages).await?;

        self.tracker.record(client.provider(), &response.usage);
        debug!(
            provider = client.provider(),
            turns = self.messages.len() + 2,
            total_tokens = self.tracker.total_tokens(),
            "conversation turn recorded"
        );

        self.messages.push(prompt);
        self.messages.push(Message::assistant(response.content.clone()));
        Ok(response.content)
    }
}
