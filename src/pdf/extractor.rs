//! PDF text extraction with OCR fallback

use std::path::Path;
use std::sync::Arc;

use crate::document::{ExtractionError, ExtractionResult};
use crate::ocr::OcrService;

use super::raster::render_pages;
use super::text_layer::extract_text_layer;

/// Extracts text from PDFs, falling back to OCR for scanned documents
pub struct PdfExtractor {
    ocr: Arc<OcrService>,
    dpi: u32,
}

impl PdfExtractor {
    pub fn new(ocr: Arc<OcrService>, dpi: u32) -> Self {
        Self { ocr, dpi }
    }

    /// Extract the text layer; when it is blank, rasterize every page and OCR it.
    ///
    /// Opening the PDF for its text layer is the only hard failure. Rendering
    /// and OCR problems are logged and whatever text was recovered (possibly
    /// none) is returned.
    pub async fn extract_text(&self, path: &Path) -> ExtractionResult<String> {
        let owned = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || extract_text_layer(&owned))
            .await
            .map_err(|e| ExtractionError::Task(format!("Task join error: {}", e)))??;

        if !text.trim().is_empty() {
            return Ok(text);
        }

        tracing::info!(
            path = %path.display(),
            dpi = self.dpi,
            language = self.ocr.language(),
            "PDF has no text layer, falling back to OCR"
        );

        let owned = path.to_path_buf();
        let dpi = self.dpi;
        let pages = tokio::task::spawn_blocking(move || render_pages(&owned, dpi))
            .await
            .map_err(|e| ExtractionError::Task(format!("Task join error: {}", e)))?;

        Ok(self.ocr_pages(&pages).await)
    }

    async fn ocr_pages(&self, pages: &[Vec<u8>]) -> String {
        let mut text = String::new();
        if pages.is_empty() {
            return text;
        }

        let providers = self.ocr.ready_providers().await;
        if providers.is_empty() {
            tracing::warn!(pages = pages.len(), "No OCR provider available");
            return text;
        }

        for (index, image) in pages.iter().enumerate() {
            match self.ocr.recognize_with(&providers, image).await {
                Ok(result) => {
                    tracing::debug!(
                        page = index + 1,
                        provider = ?result.provider,
                        chars = result.text.len(),
                        "OCR page complete"
                    );
                    text.push_str(&result.text);
                    // Keep pages apart when a provider returns trimmed output
                    if !result.text.is_empty() && !result.text.ends_with(char::is_whitespace) {
                        text.push('\n');
                    }
                }
                Err(e) => {
                    tracing::warn!(page = index + 1, "OCR failed for page: {}", e);
                }
            }
        }

        text
    }
}
