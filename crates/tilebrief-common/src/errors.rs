use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TileBriefError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("publish error: {0}")]
    Publish(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("model.temperature = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: model.temperature = 3 is out of range"
        );
    }

    #[test]
    fn tilebrief_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TileBriefError = config_err.into();
        assert!(matches!(err, TileBriefError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tilebrief_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TileBriefError = io_err.into();
        assert!(matches!(err, TileBriefError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn tilebrief_error_other_variants() {
        let err = TileBriefError::Network("timeout".into());
        assert_eq!(err.to_string(), "network error: timeout");

        let err = TileBriefError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");

        let err = TileBriefError::Publish("HTTP 502".into());
        assert_eq!(err.to_string(), "publish error: HTTP 502");

        let err = TileBriefError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
