//! Page rasterization for OCR

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, RgbImage};
use mupdf::{Colorspace, Matrix};

use crate::document::{ExtractionError, ExtractionResult};

use super::text_layer::open_document;

/// PDF user space unit: 1/72 inch
const POINTS_PER_INCH: f32 = 72.0;

/// Render every page to an RGB PNG at `dpi`, in page order.
///
/// Failures are logged and end rendering; the pages rendered before the
/// failure are returned. Blocking; run on a blocking thread.
pub fn render_pages(path: &Path, dpi: u32) -> Vec<Vec<u8>> {
    let mut pages = Vec::new();
    if let Err(e) = render_into(path, dpi, &mut pages) {
        tracing::warn!(
            path = %path.display(),
            rendered = pages.len(),
            "PDF to image conversion failed: {}",
            e
        );
    }
    pages
}

fn render_into(path: &Path, dpi: u32, pages: &mut Vec<Vec<u8>>) -> ExtractionResult<()> {
    let doc = open_document(path)?;
    let page_count = doc.page_count()?;

    let scale = dpi as f32 / POINTS_PER_INCH;
    let matrix = Matrix::new_scale(scale, scale);
    let colorspace = Colorspace::device_rgb();

    for index in 0..page_count {
        let page = doc.load_page(index)?;
        let pixmap = page.to_pixmap(&matrix, &colorspace, false, true)?;
        pages.push(encode_rgb_png(&pixmap)?);
    }

    Ok(())
}

/// Byte length of a packed RGB buffer, computed in `usize`
fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Encode a MuPDF pixmap as an RGB PNG
fn encode_rgb_png(pixmap: &mupdf::Pixmap) -> ExtractionResult<Vec<u8>> {
    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let (w, h) = (width as usize, height as usize);
    let samples = pixmap.samples();
    let n = pixmap.n() as usize;

    let mut rgb_buffer = Vec::with_capacity(rgb_len(width, height));
    for y in 0..h {
        for x in 0..w {
            let offset = (y * w + x) * n;
            let r = samples.get(offset).copied().unwrap_or(255);
            let g = samples.get(offset + 1).copied().unwrap_or(255);
            let b = samples.get(offset + 2).copied().unwrap_or(255);
            rgb_buffer.extend_from_slice(&[r, g, b]);
        }
    }

    let img = RgbImage::from_raw(width, height, rgb_buffer)
        .ok_or_else(|| ExtractionError::Pdf("Failed to create image buffer".to_string()))?;

    let mut output = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)
        .map_err(|e| ExtractionError::Pdf(format!("Failed to encode page image: {}", e)))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::pdf_with_pages;
    use tempfile::TempDir;

    #[test]
    fn test_renders_every_page_at_dpi() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, pdf_with_pages(&[None, None])).unwrap();

        let pages = render_pages(&path, 144);
        assert_eq!(pages.len(), 2);

        // Fixture pages are 200pt square; 144 DPI doubles that
        let img = image::load_from_memory(&pages[0]).unwrap();
        assert_eq!((img.width(), img.height()), (400, 400));
        assert!(matches!(img, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn test_rgb_len_does_not_wrap_for_large_pages() {
        // 66 inch poster at 600 DPI
        let (w, h) = (40_000, 40_000);
        assert!((w as u64) * (h as u64) * 3 > u32::MAX as u64);
        assert_eq!(rgb_len(w, h) as u64, (w as u64) * (h as u64) * 3);
    }

    #[test]
    fn test_unreadable_pdf_yields_no_pages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();

        assert!(render_pages(&path, 300).is_empty());
    }
}
