//! Async send methods for Session.

use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message, ToolResult};

use super::manager::Session;
use super::types::BusyGuard;

impl Session {
    /// Send `message` as the next turn and return the model's reply.
    ///
    /// The message and the reply are appended to the history only when the
    /// call succeeds, so a failed send leaves the session unchanged.
    pub async fn send(
        &mut self,
        client: &dyn AiClient,
        message: Message,
    ) -> Result<AiResponse, AiError> {
        let _guard = BusyGuard::acquire(&self.busy, &self.id)?;

        let messages = self.build_messages(&message);
        debug!(session = %self.id, history = self.messages.len(), "sending message");

        let response = client.send_message(&messages, &self.tools).await?;
        self.tracker.record(&response.usage);

        self.messages.push(message);
        self.messages.push(response.to_message());
        Ok(response)
    }

    /// Send a user text message.
    pub async fn send_text(
        &mut self,
        client: &dyn AiClient,
        text: impl Into<String>,
    ) -> Result<AiResponse, AiError> {
        self.send(client, Message::user(text)).await
    }

    /// Answer a tool call.
    pub async fn send_tool_result(
        &mut self,
        client: &dyn AiClient,
        result: ToolResult,
    ) -> Result<AiResponse, AiError> {
        self.send(client, Message::tool_result(result)).await
    }
}
