//! Owner of the history-mode session.

use tracing::{debug, warn};

use super::manager::Session;

/// Holds at most one session, created lazily and dropped on reset.
#[derive(Default)]
pub struct SessionHolder {
    current: Option<Session>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current session, if any.
    pub fn reset(&mut self) {
        if let Some(session) = self.current.take() {
            debug!(session = %session.id(), "session reset");
        }
    }

    /// The current session, created for `use_context_tool` if absent.
    ///
    /// A session is never reused across modes: a stored session created
    /// for the other mode is discarded first.
    pub fn get_or_create(&mut self, use_context_tool: bool) -> &mut Session {
        if self
            .current
            .as_ref()
            .is_some_and(|s| s.use_context_tool() != use_context_tool)
        {
            warn!(
                use_context_tool,
                "session mode changed without reset; starting a new session"
            );
            self.current = None;
        }

        self.current.get_or_insert_with(|| {
            let session = Session::for_mode(use_context_tool);
            debug!(session = %session.id(), use_context_tool, "session created");
            session
        })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
