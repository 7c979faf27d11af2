//! Document Reader
//!
//! Turns an uploaded file into plain text. The format is chosen from the
//! file extension:
//!
//! ```text
//!   .txt  ──► UTF-8 read
//!   .docx ──► word/document.xml paragraphs
//!   .pdf  ──► PdfExtractor (text layer, OCR fallback)
//!   other ──► ExtractionError::UnsupportedFormat
//! ```

pub mod docx;
mod error;
mod reader;
mod types;

pub use error::{ExtractionError, ExtractionResult};
pub use reader::DocumentReader;
pub use types::DocumentFormat;
