//! Pre-dispatch intent classification for free-form questions

use once_cell::sync::Lazy;
use regex::Regex;

/// What a `/ask` question is asking the service to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Generate `count` more flashcards from the current document
    MoreFlashcards { count: u32 },
    /// Answer the question from context
    Question,
}

/// Phrasings that request more flashcards. Each must capture the count in
/// group 1 as ASCII digits and is matched against the lowercased question.
static MORE_FLASHCARDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"tạo thêm\s+([0-9]+)\s+flashcard"]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

impl Intent {
    pub fn classify(question: &str) -> Intent {
        let lowered = question.to_lowercase();

        MORE_FLASHCARDS
            .iter()
            .filter_map(|pattern| pattern.captures(&lowered))
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
            .find(|&count| count > 0)
            .map(|count| Intent::MoreFlashcards { count })
            .unwrap_or(Intent::Question)
    }
}
