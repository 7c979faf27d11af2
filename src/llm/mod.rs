//! Generative-text service client and prompt templates

mod client;
mod error;
pub mod prompts;
mod types;

#[cfg(test)]
mod mock;

pub use client::{GeminiClient, LlmClient};
pub use error::{LlmError, LlmResult};
pub use types::{GenerateRequest, GenerateResponse};

#[cfg(test)]
pub(crate) use mock::MockLlm;
