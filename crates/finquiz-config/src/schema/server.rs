use serde::{Deserialize, Serialize};

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    pub port: u16,
    /// Allow any origin, method and header (browser frontends on other ports).
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            cors_permissive: true,
        }
    }
}
