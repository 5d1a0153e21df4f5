//! Configuration schema types for tilebrief.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod conversation;
mod model;
mod publisher;
mod system;

pub use conversation::*;
pub use model::*;
pub use publisher::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TileBriefConfig {
    pub model: ModelConfig,
    pub conversation: ConversationConfig,
    pub publisher: PublisherConfig,
    pub logging: LoggingConfig,
}

/// Read a secret from the environment variable named `var`.
///
/// Empty values count as unset.
pub(crate) fn secret_from_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TileBriefConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.model, "gemini-2.5-flash");
        assert!(config.conversation.use_context_tool);
        assert!(config.conversation.include_history);
        assert_eq!(config.conversation.max_tool_rounds, 5);
        assert!(config.publisher.enabled);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: TileBriefConfig = toml::from_str(
            r#"
[conversation]
include_history = false
"#,
        )
        .unwrap();
        assert!(!config.conversation.include_history);
        assert!(config.conversation.use_context_tool);
        assert_eq!(config.model.api_key_env, "API_KEY");
    }

    #[test]
    fn secret_from_env_ignores_blank_values() {
        std::env::set_var("TILEBRIEF_TEST_BLANK_SECRET", "   ");
        assert_eq!(secret_from_env("TILEBRIEF_TEST_BLANK_SECRET"), None);
        std::env::set_var("TILEBRIEF_TEST_SECRET", " abc ");
        assert_eq!(
            secret_from_env("TILEBRIEF_TEST_SECRET").as_deref(),
            Some("abc")
        );
        assert_eq!(secret_from_env("TILEBRIEF_TEST_SECRET_UNSET_VAR"), None);
    }
}
