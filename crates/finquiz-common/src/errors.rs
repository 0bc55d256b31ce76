use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing environment variable: {0}")]
    MissingEnv(String),
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

        let err = ConfigError::ValidationError("server.port = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: server.port = 0 is out of range"
        );

        let err = ConfigError::MissingEnv("GEMINI_API_KEY".into());
        assert_eq!(
            err.to_string(),
            "missing environment variable: GEMINI_API_KEY"
        );
    }
}
