//! Core document types

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Document format, derived from the file extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    /// `.txt`
    Text,
    /// `.docx`
    WordDocument,
    /// `.pdf`
    Pdf,
    /// Anything else; carries the lowercased extension (possibly empty)
    Unsupported(String),
}

impl DocumentFormat {
    /// Detect format from file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => Self::Text,
            "docx" => Self::WordDocument,
            "pdf" => Self::Pdf,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Detect format from a file path
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }

    /// Tag used in logs and API payloads
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::WordDocument => "word-document",
            Self::Pdf => "pdf",
            Self::Unsupported(_) => "unsupported",
        }
    }
}
