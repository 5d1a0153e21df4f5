//! Document publishing for tilebrief.
//!
//! Generated Markdown is sent to a document service that turns it into a
//! shareable project. Later turns pass the returned document id back so
//! the same project is updated instead of a new one being created.

pub mod xtiles;

use async_trait::async_trait;

pub use xtiles::{XtilesConfig, XtilesPublisher};

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `markdown`, updating `prior_document_id` when given.
    async fn publish(
        &self,
        markdown: &str,
        prior_document_id: Option<&str>,
    ) -> Result<Published, PublishError>;
}

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub url: String,
    /// Identifier reported by the service; authoritative when present.
    pub document_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("timeout")]
    Timeout,
}

impl From<PublishError> for tilebrief_common::TileBriefError {
    fn from(e: PublishError) -> Self {
        Self::Publish(e.to_string())
    }
}
