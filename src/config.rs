//! Configuration management for Lecture Digest

use std::env;
use std::path::PathBuf;

use crate::ocr::OcrProvider;

/// Errors raised while reading configuration from the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub ocr: OcrConfig,
    pub storage: StorageConfig,
    pub flashcards: FlashcardConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// `generateContent` endpoint for the configured model.
    ///
    /// The API key travels in the `x-goog-api-key` header, never in the URL.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language code
    pub language: String,
    /// Providers in the order they are tried
    pub providers: Vec<OcrProvider>,
    /// Rasterization density for OCR fallback
    pub dpi: u32,
    pub ollama_url: String,
    pub ollama_model: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub export_path: PathBuf,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct FlashcardConfig {
    pub default_count: u32,
    pub max_count: u32,
}

impl FlashcardConfig {
    /// Clamp a requested count into `1..=max_count`
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(1, self.max_count.max(1))
    }
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            llm: LlmConfig {
                api_key: String::new(),
                model: DEFAULT_GEMINI_MODEL.to_string(),
                base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
                timeout_secs: 120,
            },
            ocr: OcrConfig {
                language: "vie".to_string(),
                providers: vec![OcrProvider::Tesseract],
                dpi: 300,
                ollama_url: "http://localhost:11434".to_string(),
                ollama_model: "llava".to_string(),
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("uploads"),
                export_path: PathBuf::from("result.txt"),
                max_upload_bytes: 50 * 1024 * 1024,
            },
            flashcards: FlashcardConfig {
                default_count: 5,
                max_count: 50,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT", defaults.server.port)?,
            },
            llm: LlmConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .map_err(|_| ConfigError::Missing("GEMINI_API_KEY"))?,
                model: env::var("GEMINI_MODEL").unwrap_or(defaults.llm.model),
                base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.llm.base_url),
                timeout_secs: parse_var("LLM_TIMEOUT_SECS", defaults.llm.timeout_secs)?,
            },
            ocr: OcrConfig {
                language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr.language),
                providers: match env::var("OCR_PROVIDERS") {
                    Ok(list) => parse_providers(&list)?,
                    Err(_) => defaults.ocr.providers,
                },
                dpi: parse_var("OCR_DPI", defaults.ocr.dpi)?,
                ollama_url: env::var("OLLAMA_URL").unwrap_or(defaults.ocr.ollama_url),
                ollama_model: env::var("OLLAMA_MODEL").unwrap_or(defaults.ocr.ollama_model),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.upload_dir),
                export_path: env::var("EXPORT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.export_path),
                max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", defaults.storage.max_upload_bytes)?,
            },
            flashcards: FlashcardConfig {
                default_count: parse_var(
                    "FLASHCARD_DEFAULT_COUNT",
                    defaults.flashcards.default_count,
                )?,
                max_count: parse_var("FLASHCARD_MAX_COUNT", defaults.flashcards.max_count)?,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

fn parse_providers(list: &str) -> Result<Vec<OcrProvider>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| match name.to_lowercase().as_str() {
            "tesseract" => Ok(OcrProvider::Tesseract),
            "ollama" => Ok(OcrProvider::Ollama),
            _ => Err(ConfigError::Invalid {
                name: "OCR_PROVIDERS",
                value: name.to_string(),
            }),
        })
        .collect()
}
