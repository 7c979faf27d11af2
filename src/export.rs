//! Plain-text export of the session

use std::fmt::Write;

use crate::session::SessionState;

/// Render the summary block followed by the numbered flashcard block.
///
/// Output depends only on the session contents, so repeated exports of an
/// unchanged session are byte-identical.
pub fn render(state: &SessionState) -> String {
    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&state.last_summary);
    out.push_str("\n\n=== Flashcards ===\n");

    for (idx, card) in state.last_flashcards.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}. Q: {}\n   A: {}", idx + 1, card.question, card.answer);
    }
    out
}
