//! Configuration schema types for Finquiz.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that match the hosted
//! deployment.

mod model;
mod quiz;
mod retrieval;
mod server;
mod system;

pub use model::*;
pub use quiz::*;
pub use retrieval::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Finquiz.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinquizConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub quiz: QuizConfig,
    pub embedding: EmbeddingConfig,
    pub resources: ResourcesConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_server() {
        let config = FinquizConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_permissive);
    }

    #[test]
    fn default_config_has_expected_model() {
        let config = FinquizConfig::default();
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.model.max_tokens, 1024);
        assert!((config.model.temperature - 0.7).abs() < f64::EPSILON);
        assert!(config
            .model
            .api_base
            .starts_with("https://generativelanguage.googleapis.com"));
    }

    #[test]
    fn default_config_has_expected_retrieval() {
        let config = FinquizConfig::default();
        assert_eq!(
            config.embedding.model,
            "distilbert-base-nli-stsb-mean-tokens"
        );
        assert_eq!(config.embedding.dimensions, 768);
        assert_eq!(config.resources.index_name, "fidhacks");
        assert_eq!(config.resources.namespace, "auto_loan_resources");
        assert_eq!(config.resources.top_k, 1);
        assert!(config.resources.index_host.is_none());
    }

    #[test]
    fn default_safety_instruction_is_set() {
        let config = FinquizConfig::default();
        assert!(config.quiz.safety_instruction.contains("safe, appropriate"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: FinquizConfig = toml::from_str(
            r#"
[server]
port = 8080

[resources]
index_host = "https://fidhacks-abc.svc.pinecone.io"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.resources.index_host.as_deref(),
            Some("https://fidhacks-abc.svc.pinecone.io")
        );
        assert_eq!(config.resources.namespace, "auto_loan_resources");
        assert_eq!(config.model.name, "gemini-1.5-flash");
    }
}
