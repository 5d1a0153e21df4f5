//! Terminal chat front-end state.

mod command;
mod repl;

pub use repl::{run_repl, run_single};

use tilebrief_ai::{GroundingSource, SessionHolder, TokenUsage};
use tilebrief_orchestrator::{Orchestrator, TurnMode, TurnResult};

/// Opening line of every conversation.
pub const GREETING: &str =
    "Hi! I'm your assistant. What would you like to create, plan, or organize today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub content: String,
    pub sources: Vec<GroundingSource>,
}

impl ChatEntry {
    fn user(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    fn assistant(content: impl Into<String>, sources: Vec<GroundingSource>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            content: content.into(),
            sources,
        }
    }
}

/// Everything the front-end keeps between turns.
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub project_context: Option<String>,
    pub last_usage: Option<TokenUsage>,
    pub mode: TurnMode,
    pub project_id: Option<String>,
    holder: SessionHolder,
}

impl ChatState {
    pub fn new(mode: TurnMode) -> Self {
        Self {
            entries: vec![ChatEntry::assistant(GREETING, Vec::new())],
            project_context: None,
            last_usage: None,
            mode,
            project_id: None,
            holder: SessionHolder::new(),
        }
    }

    /// Start over: new conversation, no context, no tokens, no project.
    pub fn reset(&mut self) {
        self.holder.reset();
        self.entries = vec![ChatEntry::assistant(GREETING, Vec::new())];
        self.project_context = None;
        self.last_usage = None;
        self.project_id = None;
    }

    pub fn toggle_context_tool(&mut self) {
        self.mode.use_context_tool = !self.mode.use_context_tool;
        self.reset();
    }

    pub fn toggle_history(&mut self) {
        self.mode.include_history = !self.mode.include_history;
        self.reset();
    }

    /// Run one turn for `input`. Blank input is ignored and returns `None`.
    pub async fn submit(&mut self, orchestrator: &Orchestrator, input: &str) -> Option<&ChatEntry> {
        if input.trim().is_empty() {
            return None;
        }
        self.entries.push(ChatEntry::user(input));

        let result = orchestrator
            .send_turn(&mut self.holder, input, self.mode, self.project_id.as_deref())
            .await;
        self.apply(result);
        self.entries.last()
    }

    /// Tokens and model calls over the life of the current conversation.
    pub fn session_usage(&self) -> Option<(u64, u64)> {
        self.holder
            .current()
            .map(|s| (s.tracker().total_tokens(), s.tracker().call_count()))
    }

    /// Fold a finished turn into the state.
    pub fn apply(&mut self, result: TurnResult) {
        if result.project_context.is_some() {
            self.project_context = result.project_context.clone();
        }
        self.last_usage = Some(TokenUsage {
            input_tokens: result.input_tokens,
            output_tokens: result.output_tokens,
        });
        if let Some(id) = result.project_id.as_deref() {
            if self.project_id.as_deref() != Some(id) {
                tracing::debug!(project = id, "project id updated");
                self.project_id = Some(id.to_string());
            }
        }

        let content = result.display_content();
        self.entries.push(ChatEntry::assistant(content, result.sources));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tilebrief_ai::{AiClient, AiError, AiResponse, Message, ToolDefinition};
    use tilebrief_orchestrator::APOLOGY_MESSAGE;

    use super::*;

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AiClient for CountingClient {
        async fn send_message(
            &self,
            _messages: &[Message],
            _tools: &[ToolDefinition],
        ) -> Result<AiResponse, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AiResponse {
                content: "# Plan".into(),
                ..Default::default()
            })
        }
    }

    fn turn(project_id: Option<&str>) -> TurnResult {
        TurnResult {
            text: "# Plan".into(),
            project_context: Some("Trip".into()),
            input_tokens: 10,
            output_tokens: 5,
            project_id: project_id.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_greeting() {
        let state = ChatState::new(TurnMode::default());
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].content, GREETING);
        assert_eq!(state.entries[0].speaker, Speaker::Assistant);
    }

    #[test]
    fn apply_records_context_tokens_and_id() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(turn(Some("abc")));
        assert_eq!(state.project_context.as_deref(), Some("Trip"));
        assert_eq!(state.last_usage.map(|u| u.total_tokens()), Some(15));
        assert_eq!(state.project_id.as_deref(), Some("abc"));
        assert_eq!(state.entries.last().unwrap().content, "# Plan");
    }

    #[test]
    fn missing_id_keeps_stored_one() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(turn(Some("abc")));
        state.apply(turn(None));
        assert_eq!(state.project_id.as_deref(), Some("abc"));
    }

    #[test]
    fn differing_id_replaces_stored_one() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(turn(Some("abc")));
        state.apply(turn(Some("def")));
        assert_eq!(state.project_id.as_deref(), Some("def"));
    }

    #[test]
    fn turn_without_context_keeps_previous_context() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(turn(None));
        state.apply(TurnResult::fallback(None));
        assert_eq!(state.project_context.as_deref(), Some("Trip"));
        assert_eq!(state.entries.last().unwrap().content, APOLOGY_MESSAGE);
        assert_eq!(state.last_usage.map(|u| u.total_tokens()), Some(0));
    }

    #[test]
    fn link_is_shown_when_published() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(TurnResult {
            project_url: Some("https://doc/abc".into()),
            ..turn(Some("abc"))
        });
        assert_eq!(
            state.entries.last().unwrap().content,
            "[Open project](https://doc/abc)"
        );
    }

    #[test]
    fn toggles_flip_mode_and_reset_everything() {
        let mut state = ChatState::new(TurnMode::default());
        state.apply(turn(Some("abc")));

        state.toggle_context_tool();
        assert!(!state.mode.use_context_tool);
        assert!(state.mode.include_history);
        assert!(state.project_id.is_none());
        assert!(state.project_context.is_none());
        assert!(state.last_usage.is_none());
        assert_eq!(state.entries.len(), 1);

        state.apply(turn(Some("abc")));
        state.toggle_history();
        assert!(!state.mode.include_history);
        assert!(state.project_id.is_none());
    }

    #[tokio::test]
    async fn blank_input_never_reaches_the_model() {
        let client = Arc::new(CountingClient::default());
        let orchestrator = Orchestrator::new(client.clone());
        let mut state = ChatState::new(TurnMode::default());

        assert!(state.submit(&orchestrator, "   \n").await.is_none());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert_eq!(state.entries.len(), 1);
    }

    #[tokio::test]
    async fn submit_appends_user_and_assistant_entries() {
        let client = Arc::new(CountingClient::default());
        let orchestrator = Orchestrator::new(client.clone());
        let mut state = ChatState::new(TurnMode::default());

        let reply = state.submit(&orchestrator, "Plan a trip").await.cloned();
        assert_eq!(reply.map(|e| e.content), Some("# Plan".to_string()));
        assert_eq!(state.entries.len(), 3);
        assert_eq!(state.entries[1], ChatEntry::user("Plan a trip"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn session_usage_follows_the_conversation() {
        let client = Arc::new(CountingClient::default());
        let orchestrator = Orchestrator::new(client.clone());
        let mut state = ChatState::new(TurnMode::default());
        assert_eq!(state.session_usage(), None);

        state.submit(&orchestrator, "one").await;
        state.submit(&orchestrator, "two").await;
        assert_eq!(state.session_usage(), Some((0, 2)));

        state.reset();
        assert_eq!(state.session_usage(), None);
    }
}
