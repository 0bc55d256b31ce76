//! Embedding model and resource index configuration.

use serde::{Deserialize, Serialize};

/// Sentence-embedding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Base URL of the embedding server (`POST {url}/v1/embed`).
    pub url: String,
    pub model: String,
    /// Expected vector length (valid range: 1-4096).
    pub dimensions: usize,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8081".into(),
            model: "distilbert-base-nli-stsb-mean-tokens".into(),
            dimensions: 768,
            timeout_secs: 30,
        }
    }
}

/// Vector index holding supplementary learning resources.
///
/// Lookup is enabled only when both an index host (here or via
/// `PINECONE_INDEX_HOST`) and `PINECONE_API_KEY` are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub index_name: String,
    /// Data-plane host of the index, e.g. `https://fidhacks-xxxx.svc.pinecone.io`.
    pub index_host: Option<String>,
    pub namespace: String,
    /// Neighbours requested per lookup (valid range: 1-10).
    pub top_k: u32,
    pub timeout_secs: u64,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            index_name: "fidhacks".into(),
            index_host: None,
            namespace: "auto_loan_resources".into(),
            top_k: 1,
            timeout_secs: 30,
        }
    }
}
