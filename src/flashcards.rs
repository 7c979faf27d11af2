//! Flashcard model and parser for `Q:` / `A:` model output

use serde::{Deserialize, Serialize};

const QUESTION_PREFIX: &str = "Q:";
const ANSWER_PREFIX: &str = "A:";

/// A question/answer pair. Both fields are non-empty when produced by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Parse loosely structured model output into flashcards.
///
/// A card is a `Q:` line immediately followed by an `A:` line, both non-empty
/// once the prefix and surrounding whitespace are removed. Everything else is
/// skipped; unparseable output yields an empty list.
pub fn parse(raw: &str) -> Vec<Flashcard> {
    let lines: Vec<&str> = raw.lines().collect();

    lines
        .windows(2)
        .filter_map(|pair| {
            let question = pair[0].strip_prefix(QUESTION_PREFIX)?.trim();
            let answer = pair[1].strip_prefix(ANSWER_PREFIX)?.trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            Some(Flashcard {
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect()
}
