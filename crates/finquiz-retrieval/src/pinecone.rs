//! Pinecone data-plane client (vector query only).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ResourceIndex, ResourceMatch, RetrievalError};

const API_VERSION: &str = "2024-07";

#[derive(Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    /// Index host, with or without scheme.
    pub host: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for PineconeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PineconeConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    vector: &'a [f32],
    top_k: u32,
    include_metadata: bool,
    include_values: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<ResourceMatch>,
}

pub struct PineconeIndex {
    config: PineconeConfig,
    http: reqwest::Client,
}

impl PineconeIndex {
    pub fn new(config: PineconeConfig) -> Result<Self, RetrievalError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RetrievalError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    fn query_url(&self) -> String {
        let host = self.config.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}/query")
        } else {
            format!("https://{host}/query")
        }
    }
}

#[async_trait]
impl ResourceIndex for PineconeIndex {
    async fn query(
        &self,
        vector: &[f32],
        namespace: &str,
        top_k: u32,
    ) -> Result<Vec<ResourceMatch>, RetrievalError> {
        debug!(namespace, top_k, dims = vector.len(), "index query");

        let response = self
            .http
            .post(self.query_url())
            .header("Api-Key", &self.config.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&QueryRequest {
                namespace,
                vector,
                top_k,
                include_metadata: true,
                include_values: false,
            })
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::Index(format!("HTTP {status}: {body}")));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::Parse(e.to_string()))?;
        Ok(parsed.matches)
    }
}
