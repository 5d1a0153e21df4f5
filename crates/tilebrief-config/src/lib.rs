//! tilebrief configuration system.
//!
//! TOML-based configuration for the model endpoint, conversation modes,
//! the document publisher, and logging. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tilebrief_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TileBriefConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use tilebrief_common::ConfigError;

/// Load and validate config.
///
/// With `path`, that file must exist. Without it, the platform default is
/// used (and created on first run).
pub fn load_config(path: Option<&Path>) -> Result<TileBriefConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TileBriefConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
