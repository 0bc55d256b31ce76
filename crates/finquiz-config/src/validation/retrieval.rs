//! Embedding and resource index validation.

use crate::schema::FinquizConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_embedding(errors: &mut Vec<String>, config: &FinquizConfig) {
    let embedding = &config.embedding;
    validate_not_blank(errors, "embedding.url", &embedding.url);
    validate_not_blank(errors, "embedding.model", &embedding.model);
    validate_range(errors, "embedding.dimensions", embedding.dimensions as u64, 1, 4096);
    validate_range(errors, "embedding.timeout_secs", embedding.timeout_secs, 1, 600);
}

pub(crate) fn validate_resources(errors: &mut Vec<String>, config: &FinquizConfig) {
    let resources = &config.resources;
    validate_not_blank(errors, "resources.namespace", &resources.namespace);
    validate_range(errors, "resources.top_k", u64::from(resources.top_k), 1, 10);
    validate_range(errors, "resources.timeout_secs", resources.timeout_secs, 1, 600);
    if let Some(host) = &resources.index_host {
        validate_not_blank(errors, "resources.index_host", host);
    }
}
