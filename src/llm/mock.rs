//! In-process LLM stand-in for tests

use async_trait::async_trait;
use parking_lot::Mutex;
use regex::Regex;

use super::client::LlmClient;
use super::error::{LlmError, LlmResult};

type Responder = Box<dyn Fn(&str, &str) -> LlmResult<String> + Send + Sync>;

/// Records every `(text, instruction)` pair and answers through a closure
pub struct MockLlm {
    responder: Responder,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockLlm {
    pub fn with<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> LlmResult<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a cooperative model: summaries echo the first line of the
    /// text, flashcard prompts get exactly the requested number of cards and
    /// questions get a fixed answer.
    pub fn study() -> Self {
        let count = Regex::new(r"tạo đúng (\d+) flashcards").unwrap();
        Self::with(move |text, instruction| {
            if let Some(caps) = count.captures(instruction) {
                let n: usize = caps[1].parse().unwrap();
                let cards: Vec<String> = (1..=n)
                    .map(|i| format!("Q: Câu hỏi {}\nA: Trả lời {}", i, i))
                    .collect();
                Ok(cards.join("\n"))
            } else if instruction.starts_with("Tóm tắt") {
                Ok(format!("Tóm tắt: {}", text.lines().next().unwrap_or("")))
            } else {
                Ok("Câu trả lời".to_string())
            }
        })
    }

    pub fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::with(move |_, _| Ok(reply.clone()))
    }

    pub fn failing() -> Self {
        Self::with(|_, _| Err(LlmError::NoValidResponse))
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, text: &str, instruction: &str) -> LlmResult<String> {
        self.calls
            .lock()
            .push((text.to_string(), instruction.to_string()));
        (self.responder)(text, instruction)
    }
}
