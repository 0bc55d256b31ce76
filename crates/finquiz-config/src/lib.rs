//! Finquiz configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//! API keys never live in the TOML file; they are read from the
//! environment by [`Secrets::from_env`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use finquiz_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::{FinquizConfig, CONFIG_SCHEMA_VERSION};
pub use secrets::Secrets;

use std::path::Path;

use finquiz_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<FinquizConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<FinquizConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FinquizConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
