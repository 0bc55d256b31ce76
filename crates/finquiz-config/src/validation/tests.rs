//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FinquizConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_port_zero() {
    let mut config = FinquizConfig::default();
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = FinquizConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = FinquizConfig::default();
    config.model.temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_max_tokens_zero() {
    let mut config = FinquizConfig::default();
    config.model.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_tokens"));
}

#[test]
fn catches_blank_default_topic() {
    let mut config = FinquizConfig::default();
    config.quiz.default_topic = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("quiz.default_topic must not be empty"));
}

#[test]
fn catches_embedding_dimensions_too_large() {
    let mut config = FinquizConfig::default();
    config.embedding.dimensions = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("embedding.dimensions"));
}

#[test]
fn catches_top_k_out_of_range() {
    let mut config = FinquizConfig::default();
    config.resources.top_k = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resources.top_k"));
}

#[test]
fn catches_blank_index_host() {
    let mut config = FinquizConfig::default();
    config.resources.index_host = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resources.index_host"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FinquizConfig::default();
    config.server.port = 0;
    config.model.name = String::new();
    config.resources.namespace = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
    assert!(err.contains("model.name"));
    assert!(err.contains("resources.namespace"));
}
