//! Summarization, flashcard generation and question answering

use std::sync::Arc;

use crate::flashcards::{self, Flashcard};
use crate::llm::{prompts, LlmClient, LlmResult};

/// Prompt shaping over an [`LlmClient`]
#[derive(Clone)]
pub struct StudyAssistant {
    llm: Arc<dyn LlmClient>,
}

impl StudyAssistant {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn summarize(&self, text: &str) -> LlmResult<String> {
        self.llm.generate(text, prompts::SUMMARY_INSTRUCTION).await
    }

    /// Ask for `count` cards. The model may return more or fewer; whatever
    /// parses is returned.
    pub async fn generate_flashcards(&self, text: &str, count: u32) -> LlmResult<Vec<Flashcard>> {
        let raw = self
            .llm
            .generate(text, &prompts::flashcard_instruction(count))
            .await?;
        let cards = flashcards::parse(&raw);

        if cards.len() != count as usize {
            tracing::debug!(requested = count, parsed = cards.len(), "Flashcard count mismatch");
        }
        Ok(cards)
    }

    pub async fn answer(&self, question: &str, context: &str) -> LlmResult<String> {
        self.llm
            .generate(context, &prompts::answer_instruction(question))
            .await
    }
}
