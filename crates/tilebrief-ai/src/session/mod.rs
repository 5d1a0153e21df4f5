//! Conversation sessions.
//!
//! A `Session` is one conversation with the model: its system instruction,
//! declared tools, and message history. The `SessionHolder` owns the
//! history-mode session across turns and is reset explicitly.

mod chat;
mod holder;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use holder::SessionHolder;
pub use manager::Session;
