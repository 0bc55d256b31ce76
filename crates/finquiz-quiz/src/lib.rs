//! Quiz session engine for Finquiz.
//!
//! A [`QuizSession`] owns the current question and its reference answer,
//! drives question generation and answer grading through a conversational
//! model, and attaches a supporting resource after a wrong answer. Every
//! public operation returns a usable value: collaborator failures are
//! replaced with fixed fallback content from [`fallback`].

pub mod evaluation;
pub mod fallback;
pub mod grading;
pub mod prompts;
pub mod reply;
pub mod session;

pub use evaluation::Evaluation;
pub use reply::Reply;
pub use session::{QuizBackends, QuizPhase, QuizSession, QuizSettings};
