//! xTiles Markdown import client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PublishError, Published, Publisher};

/// xTiles client configuration.
#[derive(Clone)]
pub struct XtilesConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for XtilesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XtilesConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl XtilesConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportRequest<'a> {
    markdown: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportResponse {
    url: String,
    #[serde(default, alias = "id")]
    project_id: Option<String>,
}

/// Publishes Markdown through the xTiles import endpoint.
pub struct XtilesPublisher {
    config: XtilesConfig,
    http: reqwest::Client,
}

impl XtilesPublisher {
    pub fn new(config: XtilesConfig) -> Result<Self, PublishError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| PublishError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl Publisher for XtilesPublisher {
    async fn publish(
        &self,
        markdown: &str,
        prior_document_id: Option<&str>,
    ) -> Result<Published, PublishError> {
        debug!(
            size = markdown.len(),
            prior = prior_document_id.unwrap_or("-"),
            "xTiles import request"
        );

        let mut request = self.http.post(&self.config.endpoint).json(&ImportRequest {
            markdown,
            project_id: prior_document_id,
        });
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                PublishError::Timeout
            } else {
                PublishError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ImportResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Parse(e.to_string()))?;

        if parsed.url.trim().is_empty() {
            return Err(PublishError::Parse("empty 'url' in response".into()));
        }

        let document_id = parsed.project_id.filter(|id| !id.is_empty());
        debug!(url = %parsed.url, document_id = ?document_id, "xTiles import done");
        Ok(Published {
            url: parsed.url,
            document_id,
        })
    }
}
