//! Fixed content substituted when the model cannot be used.
//!
//! Each operation maps a [`FailureKind`] to deterministic text so the quiz
//! stays usable no matter what the model does.

/// Why an operation fell back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The call succeeded but the reply did not have the expected shape.
    Malformed,
    ContentFiltered,
    Failed,
}

/// A question stored together with its reference answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedPair {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const CREDIT_CARD: CannedPair = CannedPair {
    question: "What factors should you consider when choosing a credit card?",
    answer: "When choosing a credit card, consider: annual fees, interest rates (APR), \
             rewards programs, credit limit, accepted locations, customer service, and any \
             special benefits or perks.",
};

pub const EMERGENCY_FUND: CannedPair = CannedPair {
    question: "What is an emergency fund and why is it important?",
    answer: "An emergency fund is money set aside to cover unexpected expenses like medical \
             bills, car repairs, or job loss. It's important because it provides financial \
             security and prevents you from going into debt during emergencies.",
};

pub const EMERGENCY_FUND_AMOUNT_QUESTION: &str =
    "What is the recommended amount for an emergency fund?";

pub const NO_QUESTION: &str = "No question available.";
pub const ANSWER_NOT_AVAILABLE: &str = "Answer not available";
pub const GENERAL_APOLOGY: &str = "I apologize, but I'm having trouble answering that question \
                                   right now. Please try again.";

const ANSWER_FILTERED: &str =
    "Please refer to financial literacy resources for the correct answer.";
const ANSWER_FAILED: &str = "Unable to generate answer at this time.";

/// Question and answer stored when combined generation fails.
pub fn question_pair(kind: FailureKind) -> CannedPair {
    match kind {
        FailureKind::Malformed => CREDIT_CARD,
        FailureKind::ContentFiltered | FailureKind::Failed => EMERGENCY_FUND,
    }
}

/// Question stored when question-only generation fails.
pub fn question(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::ContentFiltered => EMERGENCY_FUND_AMOUNT_QUESTION,
        FailureKind::Malformed | FailureKind::Failed => CREDIT_CARD.question,
    }
}

/// Reference answer stored when answer generation fails.
pub fn answer(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::ContentFiltered => ANSWER_FILTERED,
        FailureKind::Malformed | FailureKind::Failed => ANSWER_FAILED,
    }
}
