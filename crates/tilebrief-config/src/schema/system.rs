//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to the tilebrief crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "tilebrief=debug",
            LogLevel::Info => "tilebrief=info",
            LogLevel::Warning => "tilebrief=warn",
            LogLevel::Error => "tilebrief=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
