//! Lecture Digest Library
//!
//! Turns uploaded lecture documents into summaries and flashcards.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: Format detection and text extraction (txt, docx, pdf)
//! - `pdf`: MuPDF text layer and page rasterization
//! - `ocr`: OCR providers for scanned PDFs
//! - `llm`: Generative-text client and prompt templates
//! - `flashcards`, `intent`, `study`: Prompt orchestration and output parsing
//! - `session`, `export`: Shared study session and its plain-text export
//! - `routes`: HTTP handlers

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod flashcards;
pub mod intent;
pub mod llm;
pub mod ocr;
pub mod pdf;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod study;
