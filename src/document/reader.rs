//! Document Reader
//!
//! Dispatches on the file extension and returns the document's text.

use std::path::Path;

use crate::pdf::PdfExtractor;

use super::docx;
use super::error::{ExtractionError, ExtractionResult};
use super::types::DocumentFormat;

/// Reads uploaded documents into plain text
pub struct DocumentReader {
    pdf: PdfExtractor,
}

impl DocumentReader {
    pub fn new(pdf: PdfExtractor) -> Self {
        Self { pdf }
    }

    /// Read a document into text.
    ///
    /// - `.txt`: file content as UTF-8, unchanged
    /// - `.docx`: body paragraphs, each followed by `\n`
    /// - `.pdf`: text layer, or OCR output when the text layer is blank
    ///
    /// Anything else is `ExtractionError::UnsupportedFormat`.
    pub async fn read(&self, path: &Path) -> ExtractionResult<String> {
        let format = DocumentFormat::from_path(path);
        tracing::debug!(path = %path.display(), format = format.tag(), "Reading document");

        let text = match format {
            DocumentFormat::Text => read_plain_text(path).await?,
            DocumentFormat::WordDocument => {
                let path = path.to_path_buf();
                tokio::task::spawn_blocking(move || docx::extract_text(&path))
                    .await
                    .map_err(|e| ExtractionError::Task(format!("Task join error: {}", e)))??
            }
            DocumentFormat::Pdf => self.pdf.extract_text(path).await?,
            DocumentFormat::Unsupported(ext) => {
                tracing::warn!(path = %path.display(), extension = %ext, "Unsupported document format");
                return Err(ExtractionError::UnsupportedFormat(ext));
            }
        };

        tracing::info!(
            path = %path.display(),
            format = format.tag(),
            chars = text.chars().count(),
            "Document extracted"
        );

        Ok(text)
    }
}

async fn read_plain_text(path: &Path) -> ExtractionResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ExtractionError::io(path, e))?;

    String::from_utf8(bytes).map_err(|source| ExtractionError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}
