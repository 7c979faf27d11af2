//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentReader;
use crate::llm::{GeminiClient, LlmClient, LlmError};
use crate::ocr::OcrService;
use crate::pdf::PdfExtractor;
use crate::session::Session;
use crate::study::StudyAssistant;

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to initialize LLM client: {0}")]
    LlmInit(#[from] LlmError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    ocr: Arc<OcrService>,
    reader: DocumentReader,
    study: StudyAssistant,
    session: Session,
}

impl AppState {
    /// Build state with the Gemini client and configured OCR providers
    pub fn new(config: Config) -> Result<Self, StateError> {
        let llm: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(&config.llm)?);
        let ocr = Arc::new(OcrService::new(&config.ocr));
        Ok(Self::with_components(config, llm, ocr))
    }

    /// Build state over explicit LLM and OCR backends
    pub fn with_components(config: Config, llm: Arc<dyn LlmClient>, ocr: Arc<OcrService>) -> Self {
        let reader = DocumentReader::new(PdfExtractor::new(ocr.clone(), config.ocr.dpi));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                ocr,
                reader,
                study: StudyAssistant::new(llm),
                session: Session::new(),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn ocr(&self) -> &OcrService {
        &self.inner.ocr
    }

    /// Get the document reader
    pub fn reader(&self) -> &DocumentReader {
        &self.inner.reader
    }

    pub fn study(&self) -> &StudyAssistant {
        &self.inner.study
    }

    /// Get the study session
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}
