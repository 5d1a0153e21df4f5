//! Per-section validators.

use super::helpers::{validate_http_url, validate_range, validate_range_f64};
use crate::schema::TileBriefConfig;

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &TileBriefConfig) {
    let m = &config.model;
    if m.model.trim().is_empty() {
        errors.push("model.model must not be empty".into());
    }
    if m.api_key_env.trim().is_empty() {
        errors.push("model.api_key_env must not be empty".into());
    }
    validate_http_url(errors, "model.api_base", &m.api_base);
    validate_range_f64(errors, "model.temperature", m.temperature, 0.0, 2.0);
    validate_range(errors, "model.max_output_tokens", m.max_output_tokens, 1, 65536);
    validate_range(errors, "model.connect_timeout_secs", m.connect_timeout_secs, 1, 600);
    validate_range(errors, "model.request_timeout_secs", m.request_timeout_secs, 1, 600);
}

pub(crate) fn validate_conversation(errors: &mut Vec<String>, config: &TileBriefConfig) {
    validate_range(
        errors,
        "conversation.max_tool_rounds",
        config.conversation.max_tool_rounds,
        1,
        16,
    );
}

pub(crate) fn validate_publisher(errors: &mut Vec<String>, config: &TileBriefConfig) {
    let p = &config.publisher;
    if !p.enabled {
        return;
    }
    validate_http_url(errors, "publisher.endpoint", &p.endpoint);
    validate_range(errors, "publisher.timeout_secs", p.timeout_secs, 1, 600);
}
