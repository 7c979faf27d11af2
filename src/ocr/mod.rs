//! OCR Module
//!
//! Optical character recognition for PDF pages that carry no text layer.
//!
//! Supports multiple backends, tried in configured order:
//! - Tesseract (local, requires the `tesseract` binary and language data)
//! - Ollama vision models (local LLM)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lecture_digest::ocr::OcrService;
//!
//! let service = OcrService::new(&config.ocr);
//! let result = service.recognize(&png_bytes).await?;
//! println!("{}", result.text);
//! ```

mod provider;
mod service;
mod types;

pub use provider::{OcrProviderTrait, OllamaProvider, TesseractProvider};
pub use service::OcrService;
pub use types::{OcrError, OcrProvider, OcrResult};

#[cfg(test)]
pub(crate) use provider::MockProvider;
