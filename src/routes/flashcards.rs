//! Flashcard Routes
//!
//! POST /flashcards - generate more cards from the current document

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::flashcards::Flashcard;
use crate::state::AppState;

use super::NO_DOCUMENT;

#[derive(Debug, Default, Deserialize)]
struct FlashcardsRequest {
    #[serde(default)]
    count: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

/// Generate more flashcards.
///
/// Body `{count?}`; a number or numeric string, anything else means the
/// default. A missing or malformed body also means the default.
pub async fn more_flashcards(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FlashcardsResponse>> {
    let request: FlashcardsRequest = serde_json::from_slice(&body).unwrap_or_default();
    let count = requested_count(request.count.as_ref())
        .unwrap_or(state.config().flashcards.default_count);

    let flashcards = generate_and_append(&state, count).await?;
    Ok(Json(FlashcardsResponse { flashcards }))
}

/// Generate `count` cards (clamped to the configured range) from the current
/// document and append them to the session. Returns only the new cards.
pub(super) async fn generate_and_append(state: &AppState, count: u32) -> Result<Vec<Flashcard>> {
    let text = state
        .session()
        .document_text()
        .ok_or_else(|| AppError::BadRequest(NO_DOCUMENT.to_string()))?;

    let count = state.config().flashcards.clamp(count);
    let cards = state.study().generate_flashcards(&text, count).await?;
    let total = state.session().append_flashcards(&cards);

    tracing::info!(requested = count, generated = cards.len(), total, "Flashcards appended");
    Ok(cards)
}

/// Interpret a client-supplied count. Non-positive values become 1.
fn requested_count(value: Option<&Value>) -> Option<u32> {
    let n = match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    Some(n.clamp(1, i64::from(u32::MAX)) as u32)
}
