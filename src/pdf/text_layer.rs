//! Embedded text layer extraction via MuPDF

use std::path::Path;

use mupdf::Document;

use crate::document::ExtractionResult;

/// Open a PDF from disk
pub(super) fn open_document(path: &Path) -> ExtractionResult<Document> {
    let path_str = path.to_string_lossy();
    Document::open(&*path_str).map_err(Into::into)
}

/// Concatenate the text layer of every page, in page order.
///
/// Blocking; run on a blocking thread.
pub fn extract_text_layer(path: &Path) -> ExtractionResult<String> {
    let doc = open_document(path)?;
    let page_count = doc.page_count()?;

    let mut text = String::new();
    for index in 0..page_count {
        let page = doc.load_page(index)?;
        text.push_str(&page.to_text()?);
    }

    tracing::debug!(
        path = %path.display(),
        pages = page_count,
        chars = text.len(),
        "Read PDF text layer"
    );

    Ok(text)
}
