//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod model;
mod retrieval;
mod server;

#[cfg(test)]
mod tests;

use crate::schema::FinquizConfig;
use finquiz_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FinquizConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    model::validate_model(&mut errors, config);
    model::validate_quiz(&mut errors, config);
    retrieval::validate_embedding(&mut errors, config);
    retrieval::validate_resources(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
