//! Process-lifetime study session

use parking_lot::RwLock;
use std::sync::Arc;

use crate::flashcards::Flashcard;

/// The most recent upload and everything generated from it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_text: String,
    pub last_summary: String,
    /// Grows across requests; never deduplicated or capped
    pub last_flashcards: Vec<Flashcard>,
}

/// Cloneable handle to the shared session.
///
/// Every method takes the lock for a single read or write and releases it
/// before returning, so a handle can be used freely from async handlers.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document, summary and flashcards in one write
    pub fn replace(&self, text: String, summary: String, flashcards: Vec<Flashcard>) {
        let mut state = self.inner.write();
        state.last_text = text;
        state.last_summary = summary;
        state.last_flashcards = flashcards;
    }

    /// Append newly generated cards, returning the new total
    pub fn append_flashcards(&self, cards: &[Flashcard]) -> usize {
        let mut state = self.inner.write();
        state.last_flashcards.extend_from_slice(cards);
        state.last_flashcards.len()
    }

    /// Text of the current document, `None` before the first upload
    pub fn document_text(&self) -> Option<String> {
        let state = self.inner.read();
        if state.last_text.is_empty() {
            None
        } else {
            Some(state.last_text.clone())
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.read().clone()
    }
}
