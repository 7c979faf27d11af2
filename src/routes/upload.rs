//! Upload Route
//!
//! POST /upload - multipart field `file`; extracts the document, summarizes
//! it and generates the initial flashcard set.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::flashcards::Flashcard;
use crate::state::AppState;
use crate::storage;

const NO_FILE: &str = "Không có file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
}

/// Handle a document upload.
///
/// The session is replaced only once extraction, summary and flashcard
/// generation have all succeeded; any failure leaves it untouched.
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("Upload without multipart body: {}", e);
        AppError::BadRequest(NO_FILE.to_string())
    })?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read upload: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().and_then(storage::sanitize_filename) else {
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read file data: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| AppError::BadRequest(NO_FILE.to_string()))?;
    tracing::info!(filename = %filename, bytes = data.len(), "Document uploaded");

    let path = storage::save_upload(&state.config().storage.upload_dir, &filename, &data).await?;
    let text = state.reader().read(&path).await?;

    let study = state.study();
    let summary = study.summarize(&text).await?;
    let defaults = &state.config().flashcards;
    let flashcards = study
        .generate_flashcards(&text, defaults.clamp(defaults.default_count))
        .await?;

    state
        .session()
        .replace(text, summary.clone(), flashcards.clone());

    tracing::info!(filename = %filename, flashcards = flashcards.len(), "Upload processed");

    Ok(Json(UploadResponse {
        summary,
        flashcards,
    }))
}
