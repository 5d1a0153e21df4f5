//! Tests for Session history handling and the SessionHolder lifecycle.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::tools::{context_tool_ack, CONTEXT_TOOL_NAME};
use crate::{
    AiClient, AiError, AiResponse, Message, Part, Role, TokenUsage, ToolCall, ToolDefinition,
};

/// Replays canned replies and records every request.
#[derive(Default)]
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    requests: Mutex<Vec<(Vec<Message>, Vec<ToolDefinition>)>>,
}

impl ScriptedClient {
    fn with(replies: Vec<Result<AiResponse, AiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::default(),
        }
    }

    fn requests(&self) -> Vec<(Vec<Message>, Vec<ToolDefinition>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), tools.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("script exhausted".into())))
    }
}

fn text_reply(text: &str, input: u64, output: u64) -> Result<AiResponse, AiError> {
    Ok(AiResponse {
        content: text.into(),
        usage: TokenUsage {
            input_tokens: input,
            output_tokens: output,
        },
        ..Default::default()
    })
}

#[tokio::test]
async fn for_mode_sends_system_prompt_and_tools() {
    let client = ScriptedClient::with(vec![text_reply("# A", 1, 1)]);
    let mut session = Session::for_mode(true);
    session.send_text(&client, "hello").await.unwrap();

    let requests = client.requests();
    let (messages, tools) = &requests[0];
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].text().contains("contextProjectTool"));
    assert_eq!(messages[1], Message::user("hello"));
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, CONTEXT_TOOL_NAME);
}

#[tokio::test]
async fn strict_mode_declares_no_tools() {
    let client = ScriptedClient::with(vec![text_reply("# A", 1, 1)]);
    let mut session = Session::for_mode(false);
    session.send_text(&client, "hello").await.unwrap();
    assert!(client.requests()[0].1.is_empty());
    assert!(!session.use_context_tool());
}

#[tokio::test]
async fn history_accumulates_across_sends() {
    let client = ScriptedClient::with(vec![text_reply("# One", 10, 2), text_reply("# Two", 20, 3)]);
    let mut session = Session::for_mode(false);
    session.send_text(&client, "first").await.unwrap();
    session.send_text(&client, "second").await.unwrap();

    assert_eq!(session.message_count(), 4);
    let second_request = &client.requests()[1].0;
    // system + first user + first reply + second user
    assert_eq!(second_request.len(), 4);
    assert_eq!(second_request[2].role, Role::Assistant);
    assert_eq!(second_request[2].text(), "# One");
    assert_eq!(session.tracker().total().input_tokens, 30);
    assert_eq!(session.tracker().call_count(), 2);
}

#[tokio::test]
async fn failed_send_leaves_history_untouched() {
    let client = ScriptedClient::with(vec![Err(AiError::Timeout)]);
    let mut session = Session::for_mode(true);
    let err = session.send_text(&client, "hello").await.unwrap_err();
    assert!(matches!(err, AiError::Timeout));
    assert_eq!(session.message_count(), 0);
    assert_eq!(session.tracker().call_count(), 0);
}

#[tokio::test]
async fn tool_round_trip_is_replayed_in_history() {
    let call = ToolCall {
        id: "c".into(),
        name: CONTEXT_TOOL_NAME.into(),
        arguments: serde_json::json!({ "context": "brief" }),
    };
    let client = ScriptedClient::with(vec![
        Ok(AiResponse {
            tool_calls: vec![call.clone()],
            ..Default::default()
        }),
        text_reply("# Done", 1, 1),
    ]);
    let mut session = Session::for_mode(true);
    session.send_text(&client, "plan").await.unwrap();
    session
        .send_tool_result(&client, context_tool_ack())
        .await
        .unwrap();

    let second_request = &client.requests()[1].0;
    assert_eq!(second_request[2].parts, vec![Part::FunctionCall(call)]);
    assert_eq!(second_request[3].role, Role::Tool);
    assert!(matches!(second_request[3].parts[0], Part::FunctionResponse(_)));
}

#[tokio::test]
async fn truncate_history_abandons_unanswered_tool_call() {
    let call = ToolCall {
        id: "c".into(),
        name: CONTEXT_TOOL_NAME.into(),
        arguments: serde_json::json!({ "context": "brief" }),
    };
    let client = ScriptedClient::with(vec![
        text_reply("# One", 1, 1),
        Ok(AiResponse {
            tool_calls: vec![call],
            usage: TokenUsage {
                input_tokens: 5,
                output_tokens: 1,
            },
            ..Default::default()
        }),
    ]);
    let mut session = Session::for_mode(true);
    session.send_text(&client, "first").await.unwrap();
    let checkpoint = session.message_count();
    session.send_text(&client, "second").await.unwrap();

    session.truncate_history(checkpoint);
    assert_eq!(session.message_count(), 2);
    assert_eq!(session.messages()[1].text(), "# One");
    // spent tokens stay counted
    assert_eq!(session.tracker().call_count(), 2);

    session.truncate_history(10);
    assert_eq!(session.message_count(), 2);
}

#[test]
fn holder_creates_lazily_and_reuses() {
    let mut holder = SessionHolder::new();
    assert!(!holder.is_active());

    let first = holder.get_or_create(true).id().clone();
    assert!(holder.is_active());
    let again = holder.get_or_create(true).id().clone();
    assert_eq!(first, again);
}

#[test]
fn holder_reset_is_idempotent() {
    let mut holder = SessionHolder::new();
    let first = holder.get_or_create(false).id().clone();
    holder.reset();
    holder.reset();
    assert!(holder.current().is_none());

    let second = holder.get_or_create(false).id().clone();
    assert_ne!(first, second);
}

#[test]
fn holder_never_shares_a_session_across_modes() {
    let mut holder = SessionHolder::new();
    let with_tool = holder.get_or_create(true).id().clone();
    let without_tool = holder.get_or_create(false);
    assert!(!without_tool.use_context_tool());
    assert!(without_tool.tools().is_empty());
    assert_ne!(&with_tool, without_tool.id());
}
