//! Document publisher configuration.

use serde::{Deserialize, Serialize};

/// xTiles import endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    pub enabled: bool,
    pub endpoint: String,
    /// Name of the environment variable holding the bearer token.
    pub api_key_env: String,
    /// Valid range: 1-600.
    pub timeout_secs: u32,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.xtiles.app/api/v1/projects/import/markdown".into(),
            api_key_env: "XTILES_API_KEY".into(),
            timeout_secs: 60,
        }
    }
}

impl PublisherConfig {
    /// Resolve the bearer token, if any, from the environment.
    pub fn api_key(&self) -> Option<String> {
        super::secret_from_env(&self.api_key_env)
    }
}
