//! Turn orchestration for tilebrief.
//!
//! One turn: send the user's message, answer any project context tool
//! calls, take the final Markdown, publish it, and hand back a
//! [`TurnResult`] for display.

pub mod orchestrator;
pub mod turn;

pub use orchestrator::{Orchestrator, DEFAULT_MAX_TOOL_ROUNDS};
pub use turn::{TurnMode, TurnResult, APOLOGY_MESSAGE, NO_LINK_MESSAGE};
