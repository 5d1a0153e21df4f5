//! The per-turn pipeline: model call, context tool loop, publish.

use std::sync::Arc;

use tilebrief_ai::{tools, AiClient, AiError, AiResponse, Session, SessionHolder, TokenTracker};
use tilebrief_common::new_correlation_id;
use tilebrief_publish::Publisher;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::turn::{TurnMode, TurnResult};


/// Tool replies allowed in one turn unless configured otherwise.
pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 5;

/// Drives one user turn against a model client and an optional publisher.
///
/// The orchestrator holds no conversation state of its own. History lives
/// in the [`SessionHolder`] the caller passes in, and the project id is
/// threaded through by the caller from one turn to the next.
pub struct Orchestrator {
    client: Arc<dyn AiClient>,
    publisher: Option<Arc<dyn Publisher>>,
    max_tool_rounds: u32,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            client,
            publisher: None,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }

    pub fn with_publisher(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn with_max_tool_rounds(mut self, rounds: u32) -> Self {
        self.max_tool_rounds = rounds.max(1);
        self
    }

    pub fn publishes(&self) -> bool {
        self.publisher.is_some()
    }

    /// Run one turn. Never fails: a model error yields the apology result
    /// with `prior_project_id` carried through unchanged.
    pub async fn send_turn(
        &self,
        holder: &mut SessionHolder,
        user_text: &str,
        mode: TurnMode,
        prior_project_id: Option<&str>,
    ) -> TurnResult {
        let span = info_span!(
            "turn",
            id = %new_correlation_id(),
            context_tool = mode.use_context_tool,
            history = mode.include_history,
        );

        async {
            match self.run_turn(holder, user_text, mode, prior_project_id).await {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, "model call failed; returning fallback reply");
                    TurnResult::fallback(prior_project_id)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run_turn(
        &self,
        holder: &mut SessionHolder,
        user_text: &str,
        mode: TurnMode,
        prior_project_id: Option<&str>,
    ) -> Result<TurnResult, AiError> {
        let mut usage = TokenTracker::new();
        let mut project_context = None;

        let mut unshared;
        let session: &mut Session = if mode.include_history {
            holder.get_or_create(mode.use_context_tool)
        } else {
            unshared = Session::for_mode(mode.use_context_tool);
            &mut unshared
        };
        debug!(session = %session.id(), prior_messages = session.message_count(), "sending user message");

        // History length before this turn; a turn that cannot be finished
        // cleanly is rolled back to it.
        let checkpoint = session.message_count();
        let mut response = session.send_text(self.client.as_ref(), user_text).await?;
        usage.record(&response.usage);

        let mut rounds = 0;
        while let Some(call) = context_call(&response) {
            if rounds >= self.max_tool_rounds {
                warn!(rounds, "unexpected repeated tool use; taking last response as final");
                session.truncate_history(checkpoint);
                break;
            }
            rounds += 1;

            match tools::extract_context(&call) {
                Some(context) => {
                    debug!(round = rounds, size = context.len(), "project context updated");
                    project_context = Some(context);
                }
                None => debug!(round = rounds, "context tool call without usable argument"),
            }

            response = match session
                .send_tool_result(self.client.as_ref(), tools::context_tool_ack())
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    session.truncate_history(checkpoint);
                    return Err(e);
                }
            };
            usage.record(&response.usage);
        }

        let text = response.content.trim().to_string();
        let (project_url, project_id) = self.publish(&text, prior_project_id).await;
        let sources = response.sources;
        let total = *usage.total();

        info!(
            calls = usage.call_count(),
            tool_rounds = rounds,
            input_tokens = total.input_tokens,
            output_tokens = total.output_tokens,
            sources = sources.len(),
            context_updated = project_context.is_some(),
            published = project_url.is_some(),
            "turn complete"
        );

        Ok(TurnResult {
            text,
            sources,
            project_context,
            input_tokens: total.input_tokens,
            output_tokens: total.output_tokens,
            project_url,
            project_id,
        })
    }

    /// Best-effort publish. Returns `(url, id)`, both `None` when nothing
    /// was published.
    async fn publish(
        &self,
        markdown: &str,
        prior_project_id: Option<&str>,
    ) -> (Option<String>, Option<String>) {
        let Some(ref publisher) = self.publisher else {
            return (None, None);
        };
        if markdown.is_empty() {
            debug!("empty draft; skipping publish");
            return (None, None);
        }

        match publisher.publish(markdown, prior_project_id).await {
            Ok(published) => {
                let id = published
                    .document_id
                    .or_else(|| prior_project_id.map(str::to_string));
                debug!(url = %published.url, id = ?id, "draft published");
                (Some(published.url), id)
            }
            Err(e) => {
                error!(error = %e, "publishing failed; returning unpublished draft");
                (None, None)
            }
        }
    }
}

fn context_call(response: &AiResponse) -> Option<tilebrief_ai::ToolCall> {
    response
        .tool_calls
        .iter()
        .find(|call| tools::is_context_call(call))
        .cloned()
}
