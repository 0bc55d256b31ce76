//! Resource retrieval for Finquiz.
//!
//! Text is turned into a vector by an [`Embedder`], the vector is looked up
//! in a [`ResourceIndex`], and the nearest match's metadata becomes a
//! [`Resource`] link. [`ResourceFinder`] bundles the two collaborators into
//! the single optional capability the quiz consumes.

pub mod embedder;
pub mod finder;
pub mod pinecone;

use async_trait::async_trait;
use serde_json::Map;

pub use embedder::{EmbedderConfig, HttpEmbedder};
pub use finder::{Resource, ResourceFinder};
pub use pinecone::{PineconeConfig, PineconeIndex};

/// Text-to-vector model.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, RetrievalError>;
}

/// Nearest-neighbour search over stored vectors.
#[async_trait]
pub trait ResourceIndex: Send + Sync {
    async fn query(
        &self,
        vector: &[f32],
        namespace: &str,
        top_k: u32,
    ) -> Result<Vec<ResourceMatch>, RetrievalError>;
}

/// One index hit, closest first.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ResourceMatch {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: Map<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding error: {0}")]
    Embedding(String),
    #[error("index error: {0}")]
    Index(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
