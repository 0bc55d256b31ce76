//! Shared state behind every handler.

use std::sync::Arc;

use finquiz_quiz::{QuizBackends, QuizSession};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub session: SessionHandle,
    /// Model name reported by the health endpoint.
    pub model: String,
}

impl AppState {
    pub fn new(backends: QuizBackends, model: impl Into<String>) -> SharedState {
        Arc::new(Self {
            session: SessionHandle::new(backends),
            model: model.into(),
        })
    }
}

/// The process-wide quiz session, replaceable as a whole.
///
/// Handlers hold the guard for an entire operation, so a reset can never
/// land between reading the current question and grading against it.
pub struct SessionHandle {
    backends: QuizBackends,
    current: Mutex<QuizSession>,
}

impl SessionHandle {
    pub fn new(backends: QuizBackends) -> Self {
        let session = backends.fresh_session();
        Self {
            backends,
            current: Mutex::new(session),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, QuizSession> {
        self.current.lock().await
    }

    /// Discard the current session and install a fresh one.
    pub async fn reset(&self) {
        let mut current = self.current.lock().await;
        let previous = current.id();
        *current = self.backends.fresh_session();
        info!(%previous, next = %current.id(), "session reset");
    }

    pub fn resources_enabled(&self) -> bool {
        self.backends.resources_enabled()
    }
}
