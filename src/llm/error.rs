//! LLM error types

use thiserror::Error;

/// Failure talking to the generative-text service
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network failure, timeout or client construction error
    #[error("LLM request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status from the service
    #[error("LLM service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON envelope
    #[error("Failed to decode LLM response: {0}")]
    Decode(String),

    /// Envelope decoded but carried no candidate text
    #[error("No valid response from the LLM service")]
    NoValidResponse,
}

/// Result type alias for LLM operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LlmError::Decode(err.to_string())
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}
