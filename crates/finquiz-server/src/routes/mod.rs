pub mod page;
pub mod quiz;


use axum::{
    body::Bytes,
    extract::OriginalUri,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{panic_response, ApiError};
use crate::state::SharedState;

pub fn app(state: SharedState, cors_permissive: bool) -> Router {
    let api = Router::new()
        .route("/generate_question", post(quiz::generate_question))
        .route("/submit_answer", post(quiz::submit_answer))
        .route("/ask_question", post(quiz::ask_question))
        .route("/reset_chat", post(quiz::reset_chat))
        .route("/health", get(page::health))
        .method_not_allowed_fallback(method_not_allowed);

    let app = Router::new()
        .route("/", get(page::index))
        .nest("/api", api)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    with_layers(app, cors_permissive)
}

/// CORS, panic recovery, and request tracing around a finished router.
pub(crate) fn with_layers(mut app: Router, cors_permissive: bool) -> Router {
    if cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decode an optional JSON body. Empty or `null` bodies decode to the default.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}
