//! Route modules for the Lecture Digest server

pub mod ask;
pub mod download;
pub mod flashcards;
pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Error message when no document has been uploaded yet
pub(crate) const NO_DOCUMENT: &str = "Chưa có nội dung nào để tạo flashcards";

/// Build the application router
pub fn router(state: AppState) -> Router {
    let body_limit = state.config().storage.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/upload", post(upload::upload_document))
        .route("/flashcards", post(flashcards::more_flashcards))
        .route("/ask", post(ask::ask))
        .route("/download", get(download::download))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
