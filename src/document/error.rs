//! Document error types
//!
//! Every way reading an uploaded document can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Extraction error for all document formats
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Extension is not one of txt, docx, pdf
    #[error("Unsupported file format: .{0}")]
    UnsupportedFormat(String),

    /// Failed to read the file from disk
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plain-text file is not valid UTF-8
    #[error("File {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// DOCX container or document.xml could not be parsed
    #[error("Invalid DOCX document: {0}")]
    Docx(String),

    /// PDF could not be opened or its text layer read
    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    /// Blocking extraction task failed to complete
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Result type alias for extraction operations
pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

impl ExtractionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<mupdf::Error> for ExtractionError {
    fn from(err: mupdf::Error) -> Self {
        ExtractionError::Pdf(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}
