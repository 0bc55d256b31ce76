use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::state::SharedState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub resources_enabled: bool,
    pub model: String,
}

pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        resources_enabled: state.session.resources_enabled(),
        model: state.model.clone(),
    })
}
