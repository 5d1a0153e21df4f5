//! Builds the model client, publisher, and orchestrator from config.

use std::sync::Arc;
use std::time::Duration;

use tilebrief_ai::{AiError, GeminiClient, GeminiConfig};
use tilebrief_common::TileBriefError;
use tilebrief_config::schema::{ModelConfig, PublisherConfig};
use tilebrief_config::TileBriefConfig;
use tilebrief_orchestrator::Orchestrator;
use tilebrief_publish::{XtilesConfig, XtilesPublisher};

pub fn build_orchestrator(config: &TileBriefConfig) -> Result<Orchestrator, TileBriefError> {
    let client = GeminiClient::new(gemini_config(&config.model)?)?;
    tracing::info!("Model client ready ({})", client.model());

    let mut orchestrator = Orchestrator::new(Arc::new(client))
        .with_max_tool_rounds(config.conversation.max_tool_rounds);

    if config.publisher.enabled {
        let publisher = XtilesPublisher::new(xtiles_config(&config.publisher))?;
        orchestrator = orchestrator.with_publisher(Arc::new(publisher));
        tracing::info!("Publishing to {}", config.publisher.endpoint);
    } else {
        tracing::info!("Publishing disabled");
    }

    Ok(orchestrator)
}

fn gemini_config(model: &ModelConfig) -> Result<GeminiConfig, AiError> {
    let api_key = model
        .api_key()
        .ok_or_else(|| AiError::NotConfigured(format!("{} is not set", model.api_key_env)))?;

    Ok(GeminiConfig::new(api_key)
        .with_model(&model.model)
        .with_api_base(&model.api_base)
        .with_max_tokens(model.max_output_tokens)
        .with_temperature(model.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(model.connect_timeout_secs)),
            Duration::from_secs(u64::from(model.request_timeout_secs)),
        )
        .with_google_search(model.google_search))
}

fn xtiles_config(publisher: &PublisherConfig) -> XtilesConfig {
    let config = XtilesConfig::new(&publisher.endpoint)
        .with_timeout(Duration::from_secs(u64::from(publisher.timeout_secs)));
    match publisher.api_key() {
        Some(key) => config.with_api_key(key),
        None => {
            tracing::warn!("{} is not set; publishing without credentials", publisher.api_key_env);
            config
        }
    }
}
