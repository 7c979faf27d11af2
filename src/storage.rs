//! Local file persistence for uploads and exports

use std::io;
use std::path::{Path, PathBuf};

/// Reduce a client-supplied filename to its final path component.
///
/// Returns `None` when nothing usable remains (empty, `.` or `..`).
pub fn sanitize_filename(name: &str) -> Option<String> {
    let last = name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();

    match last {
        "" | "." | ".." => None,
        other => Some(other.to_string()),
    }
}

/// Persist an upload under `upload_dir`, creating the directory if needed.
///
/// An existing file with the same name is overwritten.
pub async fn save_upload(upload_dir: &Path, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(filename);
    tokio::fs::write(&path, data).await?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Saved upload");
    Ok(path)
}

/// Rewrite the export file in place, creating its parent directory if needed
pub async fn write_export(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await
}
