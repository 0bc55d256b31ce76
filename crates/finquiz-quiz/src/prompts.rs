//! Prompt text sent to the model and parsing of its structured replies.

pub const QUESTION_MARKER: &str = "QUESTION:";
pub const ANSWER_MARKER: &str = "ANSWER:";

pub fn question_with_answer(topic: &str) -> String {
    format!(
        "Create a financial literacy question about {topic} and provide its answer.\n\
         Format your response exactly like this:\n\n\
         {QUESTION_MARKER} [Your question here]\n\
         {ANSWER_MARKER} [The correct answer here]\n\n\
         Make the question practical and educational."
    )
}

pub fn question(topic: &str) -> String {
    format!(
        "Generate a specific multiple choice or short answer question about {topic}. \
         Make it educational and practical. Only provide the question, nothing else."
    )
}

pub fn answer(question: &str) -> String {
    format!(
        "Provide a clear, concise answer to this question: {question}. \
         Give a direct answer without extra formatting."
    )
}

pub fn evaluation(question: &str, user_answer: &str, correct_answer: &str) -> String {
    format!(
        "Question: {question}\n\
         User's Answer: {user_answer}\n\
         Correct Answer: {correct_answer}\n\n\
         Compare the user's answer to the correct answer. If they are similar in meaning or \
         the user's answer contains the key correct information, respond with \"CORRECT\". \
         Otherwise respond with \"INCORRECT\" followed by a brief explanation."
    )
}

pub fn general(question: &str) -> String {
    format!(
        "Answer this financial literacy question: {question}. \
         Provide a helpful, educational response."
    )
}

/// Split a `QUESTION: ... ANSWER: ...` reply into trimmed parts.
///
/// Returns `None` when either marker is absent or either part is empty.
/// Text after a second `ANSWER:` marker is dropped.
pub fn parse_question_answer(reply: &str) -> Option<(String, String)> {
    let reply = reply.trim();
    if !reply.contains(QUESTION_MARKER) || !reply.contains(ANSWER_MARKER) {
        return None;
    }

    let mut parts = reply.split(ANSWER_MARKER);
    let question = parts.next()?.replace(QUESTION_MARKER, "").trim().to_string();
    let answer = parts.next()?.trim().to_string();

    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question, answer))
}

/// Remove a leading label such as `Answer:` and surrounding whitespace.
pub fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    let text = text.trim();
    text.strip_prefix(label).map_or(text, str::trim)
}
