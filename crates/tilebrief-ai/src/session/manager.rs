//! Session struct and conversation management.

use std::sync::atomic::AtomicBool;

use tilebrief_common::SessionId;

use crate::prompts::system_instruction;
use crate::token_tracker::TokenTracker;
use crate::tools::tools_for_mode;
use crate::{Message, ToolDefinition};

/// A conversation with the model.
pub struct Session {
    pub(super) id: SessionId,
    /// Conversation message history.
    pub(super) messages: Vec<Message>,
    /// System prompt (prepended to every API call).
    pub(super) system_prompt: Option<String>,
    /// Available tool definitions.
    pub(super) tools: Vec<ToolDefinition>,
    /// Whether the project context tool is declared.
    pub(super) use_context_tool: bool,
    /// Usage over the whole life of this session.
    pub(super) tracker: TokenTracker,
    /// Whether the session is currently processing a request.
    pub(super) busy: AtomicBool,
}

impl Session {
    /// A bare session: no system prompt, no tools.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            system_prompt: None,
            tools: Vec::new(),
            use_context_tool: false,
            tracker: TokenTracker::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// A session carrying the system instruction and tool declarations
    /// for the given mode.
    pub fn for_mode(use_context_tool: bool) -> Self {
        let mut session = Self::new()
            .with_system_prompt(system_instruction(use_context_tool))
            .with_tools(tools_for_mode(use_context_tool));
        session.use_context_tool = use_context_tool;
        session
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub(crate) fn build_messages(&self, next: &Message) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 2);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message::system(system.clone()));
        }
        msgs.extend(self.messages.iter().cloned());
        msgs.push(next.clone());
        msgs
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn use_context_tool(&self) -> bool {
        self.use_context_tool
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Drop every message after the first `len`.
    ///
    /// Used to abandon a half-finished exchange, such as a tool call whose
    /// reply never reached the model. Usage already recorded is kept.
    pub fn truncate_history(&mut self, len: usize) {
        if len < self.messages.len() {
            tracing::debug!(
                session = %self.id,
                dropped = self.messages.len() - len,
                "history rolled back"
            );
            self.messages.truncate(len);
        }
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
