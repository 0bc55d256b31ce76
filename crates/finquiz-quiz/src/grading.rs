//! Verdict extraction from the model's grading reply.

const CORRECT: &str = "CORRECT";
const INCORRECT: &str = "INCORRECT";

/// A reply passes when it mentions `CORRECT` and never `INCORRECT`
/// (case-insensitive). Both checks are needed because `INCORRECT`
/// contains `CORRECT`.
pub fn is_correct(reply: &str) -> bool {
    let upper = reply.to_uppercase();
    upper.contains(CORRECT) && !upper.contains(INCORRECT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_table() {
        let cases = [
            ("CORRECT", true),
            ("INCORRECT, explanation", false),
            ("correct! well done", true),
            ("Your answer is incorrect", false),
            ("", false),
        ];
        for (reply, expected) in cases {
            assert_eq!(is_correct(reply), expected, "reply {reply:?}");
        }
    }

    #[test]
    fn reply_without_either_token_fails() {
        assert!(!is_correct("Close, but you missed the interest rate."));
    }

    #[test]
    fn reply_with_both_tokens_fails_regardless_of_order() {
        assert!(!is_correct("CORRECT... actually INCORRECT"));
        assert!(!is_correct("Not incorrect, it is correct"));
    }
}
