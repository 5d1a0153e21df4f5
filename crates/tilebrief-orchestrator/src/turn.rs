//! Turn input modes and the assembled turn result.

use serde::Serialize;
use tilebrief_ai::GroundingSource;

/// Reply shown when a model call fails.
pub const APOLOGY_MESSAGE: &str = "Sorry, an error occurred. Please try again.";

/// Reply shown when there is neither a project link nor any text.
pub const NO_LINK_MESSAGE: &str = "Could not get a link to the project.";

/// The two conversation toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnMode {
    pub use_context_tool: bool,
    pub include_history: bool,
}

impl Default for TurnMode {
    fn default() -> Self {
        Self {
            use_context_tool: true,
            include_history: true,
        }
    }
}

/// Everything one turn produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TurnResult {
    /// Final answer text, trimmed.
    pub text: String,
    pub sources: Vec<GroundingSource>,
    /// Latest project brief reported through the context tool this turn.
    pub project_context: Option<String>,
    /// Sum over every model call of the turn.
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub project_url: Option<String>,
    pub project_id: Option<String>,
}

impl TurnResult {
    /// Result of a turn whose model call failed.
    pub fn fallback(prior_project_id: Option<&str>) -> Self {
        Self {
            text: APOLOGY_MESSAGE.to_string(),
            project_id: prior_project_id.map(str::to_string),
            ..Default::default()
        }
    }

    /// What the chat shows for this turn: a link to the published project
    /// when there is one, otherwise the answer text.
    pub fn display_content(&self) -> String {
        match self.project_url.as_deref() {
            Some(url) if !url.is_empty() => format!("[Open project]({url})"),
            _ if !self.text.trim().is_empty() => self.text.trim().to_string(),
            _ => NO_LINK_MESSAGE.to_string(),
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
