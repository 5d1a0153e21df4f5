//! Model endpoint configuration.

use serde::{Deserialize, Serialize};

/// Gemini chat model settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model: String,
    /// Base URL up to and including `/models`.
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
    /// Attach the Google Search grounding tool to every request.
    pub google_search: bool,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key_env", &self.api_key_env)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("google_search", &self.google_search)
            .finish()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            api_key_env: "API_KEY".into(),
            temperature: 0.7,
            max_output_tokens: 8192,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            google_search: false,
        }
    }
}

impl ModelConfig {
    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        super::secret_from_env(&self.api_key_env)
    }
}
