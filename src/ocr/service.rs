//! OCR Service
//!
//! Tries configured OCR providers in order for each page image.

use std::sync::Arc;

use crate::config::OcrConfig;

use super::{
    provider::{OcrProviderTrait, OllamaProvider, TesseractProvider},
    types::{OcrError, OcrProvider, OcrResult},
};

/// OCR service for scanned PDF pages
pub struct OcrService {
    language: String,
    providers: Vec<Arc<dyn OcrProviderTrait>>,
}

impl OcrService {
    /// Create a new OCR service from configuration
    pub fn new(config: &OcrConfig) -> Self {
        let providers = config
            .providers
            .iter()
            .map(|provider| -> Arc<dyn OcrProviderTrait> {
                match provider {
                    OcrProvider::Tesseract => Arc::new(TesseractProvider::new()),
                    OcrProvider::Ollama => {
                        Arc::new(OllamaProvider::new(&config.ollama_url, &config.ollama_model))
                    }
                }
            })
            .collect();

        Self::with_providers(providers, &config.language)
    }

    /// Create a service over an explicit provider list
    pub fn with_providers(providers: Vec<Arc<dyn OcrProviderTrait>>, language: &str) -> Self {
        Self {
            language: language.to_string(),
            providers,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get available providers
    pub async fn available_providers(&self) -> Vec<OcrProvider> {
        let mut available = Vec::new();
        for provider in &self.providers {
            if provider.is_available().await {
                available.push(provider.provider_type());
            }
        }
        available
    }

    /// Providers that are currently usable, in configured order.
    ///
    /// Multi-page callers probe once and pass the list to [`Self::recognize_with`].
    pub async fn ready_providers(&self) -> Vec<Arc<dyn OcrProviderTrait>> {
        let mut ready = Vec::new();
        for provider in &self.providers {
            if provider.is_available().await {
                ready.push(provider.clone());
            } else {
                tracing::debug!("OCR provider {:?} not available", provider.provider_type());
            }
        }
        ready
    }

    /// Perform OCR on a page image with the first provider that succeeds
    pub async fn recognize(&self, image_data: &[u8]) -> Result<OcrResult, OcrError> {
        let ready = self.ready_providers().await;
        self.recognize_with(&ready, image_data).await
    }

    /// Perform OCR with an already probed provider list
    pub async fn recognize_with(
        &self,
        providers: &[Arc<dyn OcrProviderTrait>],
        image_data: &[u8],
    ) -> Result<OcrResult, OcrError> {
        for provider in providers {
            match provider.recognize(image_data, &self.language).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::warn!(
                        "OCR provider {:?} failed: {}, trying next",
                        provider.provider_type(),
                        e
                    );
                }
            }
        }

        Err(OcrError::ProviderNotAvailable(
            "No OCR providers available".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ocr::provider::MockProvider;

    #[test]
    fn test_ocr_service_creation() {
        let mut config = Config::default().ocr;
        config.providers = vec![OcrProvider::Tesseract, OcrProvider::Ollama];
        let service = OcrService::new(&config);

        assert_eq!(service.providers.len(), 2);
        assert_eq!(service.language(), "vie");
    }

    #[tokio::test]
    async fn test_no_providers() {
        let service = OcrService::with_providers(Vec::new(), "vie");
        let result = service.recognize(b"png").await;
        assert!(matches!(result, Err(OcrError::ProviderNotAvailable(_))));
        assert!(service.available_providers().await.is_empty());
    }

    #[tokio::test]
    async fn test_falls_through_failing_provider() {
        let failing = Arc::new(MockProvider::failing());
        let working = Arc::new(MockProvider::returning("xin chào"));
        let providers: Vec<Arc<dyn OcrProviderTrait>> = vec![failing.clone(), working.clone()];
        let service = OcrService::with_providers(providers, "vie");

        let result = service.recognize(b"png").await.unwrap();
        assert_eq!(result.text, "xin chào");
        assert_eq!(failing.calls(), 1);
        assert_eq!(working.calls(), 1);
    }

    #[tokio::test]
    async fn test_skips_unavailable_provider() {
        let offline = Arc::new(MockProvider {
            available: false,
            ..MockProvider::returning("never")
        });
        let working = Arc::new(MockProvider::returning("ok"));
        let providers: Vec<Arc<dyn OcrProviderTrait>> = vec![offline.clone(), working];
        let service = OcrService::with_providers(providers, "vie");

        assert_eq!(service.recognize(b"png").await.unwrap().text, "ok");
        assert_eq!(offline.calls(), 0);
    }

    #[tokio::test]
    async fn test_recognize_with_skips_probing() {
        let provider = Arc::new(MockProvider::returning("trang"));
        let providers: Vec<Arc<dyn OcrProviderTrait>> = vec![provider.clone()];
        let service = OcrService::with_providers(providers, "vie");

        let ready = service.ready_providers().await;
        for _ in 0..3 {
            assert_eq!(service.recognize_with(&ready, b"png").await.unwrap().text, "trang");
        }
        assert_eq!(provider.availability_checks(), 1);
        assert_eq!(provider.calls(), 3);
    }
}
