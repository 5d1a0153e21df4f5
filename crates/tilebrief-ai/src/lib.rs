//! Model layer for tilebrief.
//!
//! Provides the Gemini chat client together with:
//! - Function calling (the project context tool)
//! - Conversation sessions and the session holder
//! - Grounding source extraction
//! - Token usage tracking

pub mod gemini;
pub mod prompts;
pub mod session;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{Session, SessionHolder};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn tool_result(result: ToolResult) -> Self {
        Self {
            role: Role::Tool,
            parts: vec![Part::FunctionResponse(result)],
        }
    }

    /// Concatenation of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

/// One piece of a message.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Text(String),
    FunctionCall(ToolCall),
    FunctionResponse(ToolResult),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
    pub usage: TokenUsage,
    pub sources: Vec<GroundingSource>,
}

impl AiResponse {
    /// The model turn as it must be replayed in later requests.
    pub fn to_message(&self) -> Message {
        let mut parts = Vec::with_capacity(self.tool_calls.len() + 1);
        if !self.content.is_empty() {
            parts.push(Part::Text(self.content.clone()));
        }
        parts.extend(self.tool_calls.iter().cloned().map(Part::FunctionCall));
        Message {
            role: Role::Assistant,
            parts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// Structured reply to a [`ToolCall`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolResult {
    pub name: String,
    pub response: serde_json::Value,
}

/// A web citation attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Session is busy with another request")]
    Busy,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl From<AiError> for tilebrief_common::TileBriefError {
    fn from(e: AiError) -> Self {
        Self::Ai(e.to_string())
    }
}
