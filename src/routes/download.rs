//! Export Route
//!
//! GET /download - write the session export file and return it as an attachment

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::Result;
use crate::export;
use crate::state::AppState;
use crate::storage;

pub async fn download(State(state): State<AppState>) -> Result<Response> {
    let contents = export::render(&state.session().snapshot());
    let path = &state.config().storage.export_path;
    storage::write_export(path, &contents).await?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("result.txt");
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Export written");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        contents,
    )
        .into_response())
}
