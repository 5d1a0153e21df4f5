//! Conversation mode defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Declare the project context tool to the model.
    pub use_context_tool: bool,
    /// Keep one conversation across turns instead of a fresh one per turn.
    pub include_history: bool,
    /// Cap on tool round-trips within one turn (valid range: 1-16).
    pub max_tool_rounds: u32,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            use_context_tool: true,
            include_history: true,
            max_tool_rounds: 5,
        }
    }
}
