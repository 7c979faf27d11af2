//! PDF extraction module
//!
//! Reads the embedded text layer with MuPDF. Scanned PDFs without a text
//! layer are rasterized page by page and handed to the OCR service.

mod extractor;
mod raster;
mod text_layer;

pub use extractor::PdfExtractor;
pub use raster::render_pages;
pub use text_layer::extract_text_layer;
