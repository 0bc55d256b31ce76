//! Core TOML config loading: read from path or platform default.

use crate::schema::FinquizConfig;
use finquiz_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<FinquizConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FinquizConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/finquiz/config.toml`
/// On Linux: `~/.config/finquiz/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<FinquizConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(FinquizConfig::default())
        }
        Err(e) => Err(e),
    }
}
