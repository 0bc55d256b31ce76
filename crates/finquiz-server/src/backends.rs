//! Build the model client and optional resource lookup from config.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use finquiz_ai::{GeminiClient, GeminiConfig};
use finquiz_config::{FinquizConfig, Secrets};
use finquiz_quiz::{QuizBackends, QuizSettings};
use finquiz_retrieval::{
    EmbedderConfig, HttpEmbedder, PineconeConfig, PineconeIndex, ResourceFinder,
};
use tracing::{info, warn};

pub fn build(config: &FinquizConfig, secrets: &Secrets) -> anyhow::Result<QuizBackends> {
    let gemini = GeminiConfig::new(&secrets.gemini_api_key)
        .with_model(&config.model.name)
        .with_api_base(&config.model.api_base)
        .with_max_tokens(config.model.max_tokens)
        .with_temperature(config.model.temperature)
        .with_timeout(Duration::from_secs(config.model.timeout_secs));
    let client = GeminiClient::new(gemini).context("failed to build Gemini client")?;
    info!(model = %client.model(), "model client ready");

    let settings = QuizSettings {
        default_topic: config.quiz.default_topic.clone(),
        safety_instruction: config.quiz.safety_instruction.clone(),
    };
    let backends = QuizBackends::new(Arc::new(client), settings);

    Ok(match resource_finder(config, secrets) {
        Some(finder) => backends.with_resources(Arc::new(finder)),
        None => backends,
    })
}

/// Check once for resource lookup. Missing credentials disable it for the
/// life of the process.
pub fn resource_finder(config: &FinquizConfig, secrets: &Secrets) -> Option<ResourceFinder> {
    let resources = &config.resources;

    let Some(api_key) = secrets.pinecone_api_key.clone() else {
        warn!("PINECONE_API_KEY not set, resource lookup disabled");
        return None;
    };
    let host = secrets
        .pinecone_index_host
        .clone()
        .or_else(|| resources.index_host.clone())
        .filter(|h| !h.trim().is_empty());
    let Some(host) = host else {
        warn!(
            index = %resources.index_name,
            "no index host configured, resource lookup disabled"
        );
        return None;
    };

    let embedder = HttpEmbedder::new(EmbedderConfig {
        url: config.embedding.url.clone(),
        model: config.embedding.model.clone(),
        dimensions: config.embedding.dimensions,
        timeout: Duration::from_secs(config.embedding.timeout_secs),
    });
    let index = PineconeIndex::new(PineconeConfig {
        api_key,
        host: host.clone(),
        timeout: Duration::from_secs(resources.timeout_secs),
    });
    let (embedder, index) = match (embedder, index) {
        (Ok(e), Ok(i)) => (e, i),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "resource lookup disabled");
            return None;
        }
    };

    info!(
        index = %resources.index_name,
        %host,
        namespace = %resources.namespace,
        "resource lookup enabled"
    );
    Some(
        ResourceFinder::new(Arc::new(embedder), Arc::new(index), &resources.namespace)
            .with_top_k(resources.top_k),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets(key: Option<&str>, host: Option<&str>) -> Secrets {
        Secrets {
            gemini_api_key: "gm-key".into(),
            pinecone_api_key: key.map(String::from),
            pinecone_index_host: host.map(String::from),
        }
    }

    #[test]
    fn missing_key_disables_lookup() {
        let config = FinquizConfig::default();
        assert!(resource_finder(&config, &secrets(None, Some("idx.pinecone.io"))).is_none());
    }

    #[test]
    fn missing_host_disables_lookup() {
        let config = FinquizConfig::default();
        assert!(resource_finder(&config, &secrets(Some("pc"), None)).is_none());
        assert!(resource_finder(&config, &secrets(Some("pc"), Some("  "))).is_none());
    }

    #[test]
    fn host_from_config_is_enough() {
        let mut config = FinquizConfig::default();
        config.resources.index_host = Some("fidhacks-abc.svc.pinecone.io".into());
        let finder = resource_finder(&config, &secrets(Some("pc"), None)).unwrap();
        assert_eq!(finder.namespace(), "auto_loan_resources");
    }

    #[test]
    fn build_wires_resources_when_configured() {
        let config = FinquizConfig::default();
        let enabled = build(&config, &secrets(Some("pc"), Some("idx.pinecone.io"))).unwrap();
        assert!(enabled.resources_enabled());
        let disabled = build(&config, &secrets(None, None)).unwrap();
        assert!(!disabled.resources_enabled());
        assert_eq!(disabled.settings.default_topic, "financial literacy");
    }
}
