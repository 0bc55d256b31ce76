//! Quiz session state machine.
//!
//! Per question cycle the session moves `NoQuestion -> QuestionSet ->
//! AnswerPending -> Evaluated`. Reset is not a transition: the owner
//! replaces the whole session with [`QuizBackends::fresh_session`].

mod evaluate;
mod generate;
mod manager;


pub use manager::{QuizBackends, QuizPhase, QuizSession, QuizSettings};
