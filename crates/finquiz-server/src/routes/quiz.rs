//! Quiz endpoints. Each one holds the session lock for its whole operation.

use axum::{body::Bytes, extract::State, Json};
use finquiz_quiz::{Evaluation, QuizSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse_body;
use crate::error::ApiError;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TopicRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnswerRequest {
    pub answer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneralQuestionRequest {
    pub question: Option<String>,
}

#[derive(Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: String,
}

#[derive(Serialize)]
pub struct EvaluationResponse {
    pub success: bool,
    pub evaluation: Evaluation,
}

#[derive(Serialize)]
pub struct GeneralAnswerResponse {
    pub success: bool,
    pub response: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn generate_question(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<QuestionResponse>, ApiError> {
    let req: TopicRequest = parse_body(&body)?;
    let mut session = state.session.lock().await;
    let question = session
        .generate_question_with_answer(req.topic.as_deref())
        .await;
    log_usage(&session);
    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

pub async fn submit_answer(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let req: AnswerRequest = parse_body(&body)?;
    let answer = required_text(req.answer, "Answer cannot be empty")?;
    let mut session = state.session.lock().await;
    let evaluation = session.evaluate_answer(&answer).await;
    log_usage(&session);
    Ok(Json(EvaluationResponse {
        success: true,
        evaluation,
    }))
}

pub async fn ask_question(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<GeneralAnswerResponse>, ApiError> {
    let req: GeneralQuestionRequest = parse_body(&body)?;
    let question = required_text(req.question, "Question cannot be empty")?;
    let mut session = state.session.lock().await;
    let response = session.handle_general_question(&question).await;
    log_usage(&session);
    Ok(Json(GeneralAnswerResponse {
        success: true,
        response,
    }))
}

pub async fn reset_chat(State(state): State<SharedState>) -> Json<ResetResponse> {
    state.session.reset().await;
    Json(ResetResponse {
        success: true,
        message: "Chat reset successfully",
    })
}

/// Missing, `null`, and whitespace-only fields are all rejected before locking.
fn required_text(field: Option<String>, message: &str) -> Result<String, ApiError> {
    field
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

fn log_usage(session: &QuizSession) {
    let tracker = session.conversation().tracker();
    debug!(
        session = %session.id(),
        calls = tracker.call_count(),
        tokens = tracker.total_tokens(),
        "token usage"
    );
}
