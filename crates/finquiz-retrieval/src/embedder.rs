//! HTTP client for a sentence-embedding server.
//!
//! Speaks the `POST /v1/embed` shape: `{ "texts": [...], "model": "..." }`
//! in, `{ "embeddings": [{ "embedding": [...] }] }` out.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Embedder, RetrievalError};

#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub url: String,
    pub model: String,
    /// Every returned vector must have exactly this many components.
    pub dimensions: usize,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: [&'a str; 1],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<EmbeddingResult>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResult {
    embedding: Vec<f32>,
}

pub struct HttpEmbedder {
    config: EmbedderConfig,
    http: reqwest::Client,
}

impl HttpEmbedder {
    pub fn new(config: EmbedderConfig) -> Result<Self, RetrievalError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RetrievalError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/embed", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        debug!(model = %self.config.model, chars = text.len(), "embedding request");

        let response = self
            .http
            .post(self.endpoint())
            .json(&EmbedRequest {
                texts: [text],
                model: &self.config.model,
            })
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Embedding(format!("HTTP {status}: {body}")));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::Parse(e.to_string()))?;

        let vector = parsed
            .embeddings
            .into_iter()
            .next()
            .map(|e| e.embedding)
            .ok_or_else(|| RetrievalError::Embedding("no embeddings in response".into()))?;

        if vector.len() != self.config.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }
}
