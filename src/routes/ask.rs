//! Question Route
//!
//! POST /ask - answer a question about the current document, or generate
//! more flashcards when the question asks for them

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::intent::Intent;
use crate::state::AppState;

use super::flashcards::{generate_and_append, FlashcardsResponse};

const NO_QUESTION: &str = "Chưa nhập câu hỏi";

#[derive(Debug, Default, Deserialize)]
struct AskRequest {
    #[serde(default)]
    question: Option<String>,
    /// Overrides the uploaded document as answering context
    #[serde(default)]
    context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Answer `{question, context?}`.
///
/// Returns `{flashcards}` when the question is a request for more cards,
/// `{answer}` otherwise.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let request: AskRequest = if body.is_empty() {
        AskRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?
    };

    let question = request
        .question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(NO_QUESTION.to_string()))?;

    match Intent::classify(&question) {
        Intent::MoreFlashcards { count } => {
            tracing::debug!(count, "Question requests more flashcards");
            let flashcards = generate_and_append(&state, count).await?;
            Ok(Json(FlashcardsResponse { flashcards }).into_response())
        }
        Intent::Question => {
            let context = request
                .context
                .or_else(|| state.session().document_text())
                .unwrap_or_default();

            let answer = state.study().answer(&question, &context).await?;
            Ok(Json(AskResponse { answer }).into_response())
        }
    }
}
