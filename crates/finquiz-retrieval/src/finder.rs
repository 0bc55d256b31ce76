//! Embedding + index lookup combined into one resource search.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Embedder, ResourceIndex, RetrievalError};

pub const DEFAULT_TITLE: &str = "Financial Resource";
pub const DEFAULT_LINK: &str = "#";

/// A titled link offered as supplementary reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl Resource {
    /// Build from index metadata, defaulting any missing or non-string field.
    pub fn from_metadata(metadata: &Map<String, Value>) -> Self {
        let field = |key: &str, default: &str| {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };
        Self {
            title: field("title", DEFAULT_TITLE),
            link: field("link", DEFAULT_LINK),
            description: field("description", ""),
        }
    }
}

/// Resource search over a fixed namespace.
pub struct ResourceFinder {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn ResourceIndex>,
    namespace: String,
    top_k: u32,
}

impl ResourceFinder {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn ResourceIndex>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            embedder,
            index,
            namespace: namespace.into(),
            top_k: 1,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Find the resource closest to `text`. `Ok(None)` when the index has no match.
    pub async fn find(&self, text: &str) -> Result<Option<Resource>, RetrievalError> {
        let vector = self.embedder.encode(text).await?;
        let matches = self.index.query(&vector, &self.namespace, self.top_k).await?;
        Ok(matches
            .first()
            .map(|top| Resource::from_metadata(&top.metadata)))
    }
}
