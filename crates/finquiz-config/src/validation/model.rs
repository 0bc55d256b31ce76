//! Model and quiz section validation.

use crate::schema::FinquizConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &FinquizConfig) {
    let model = &config.model;
    validate_not_blank(errors, "model.name", &model.name);
    validate_not_blank(errors, "model.api_base", &model.api_base);
    validate_range(errors, "model.max_tokens", u64::from(model.max_tokens), 1, 8192);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);
}

pub(crate) fn validate_quiz(errors: &mut Vec<String>, config: &FinquizConfig) {
    validate_not_blank(errors, "quiz.default_topic", &config.quiz.default_topic);
}
