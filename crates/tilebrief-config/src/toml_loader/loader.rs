//! Core TOML config loading: read from path or platform default.

use crate::schema::TileBriefConfig;
use crate::validation;
use std::path::Path;
use tilebrief_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that fails validation is
/// still returned, with a warning logged; callers that need a valid config
/// run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<TileBriefConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: TileBriefConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tilebrief/config.toml`
/// On Linux: `~/.config/tilebrief/config.toml`
///
/// If the file does not exist, writes the documented default and returns
/// defaults.
pub fn load_default() -> Result<TileBriefConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TileBriefConfig::default())
        }
        Err(e) => Err(e),
    }
}
