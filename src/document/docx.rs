//! DOCX text extraction
//!
//! A `.docx` file is a ZIP container; the body lives in `word/document.xml`.
//! Text is collected per top-level body paragraph (`w:p`), in document order,
//! each paragraph followed by a newline. Paragraphs inside tables and text
//! boxes are not part of the body paragraph list and are skipped.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::error::{ExtractionError, ExtractionResult};

/// Archive entry holding the main document part
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract paragraph text from a DOCX file on disk
pub fn extract_text(path: &Path) -> ExtractionResult<String> {
    let file = File::open(path).map_err(|e| ExtractionError::io(path, e))?;
    extract_text_from_reader(BufReader::new(file))
}

/// Extract paragraph text from any seekable DOCX byte source
pub fn extract_text_from_reader<R: Read + Seek>(reader: R) -> ExtractionResult<String> {
    let mut archive = ZipArchive::new(reader)?;
    let mut part = archive.by_name(DOCUMENT_PART)?;

    let mut xml = String::with_capacity(part.size() as usize);
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;

    paragraphs_to_text(&xml)
}

/// Walk WordprocessingML and join body paragraphs with trailing newlines
pub fn paragraphs_to_text(xml: &str) -> ExtractionResult<String> {
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut paragraph: Option<String> = None;
    let mut in_text_run = false;
    // Nesting depth of containers whose paragraphs are not body paragraphs
    let mut nested = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested += 1,
                b"w:p" if nested == 0 => paragraph = Some(String::new()),
                b"w:t" if nested == 0 => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested = nested.saturating_sub(1),
                b"w:p" if nested == 0 => {
                    if let Some(p) = paragraph.take() {
                        text.push_str(&p);
                        text.push('\n');
                    }
                }
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Event::Empty(e) if nested == 0 => match e.name().as_ref() {
                b"w:p" => text.push('\n'),
                b"w:tab" => push_to(&mut paragraph, "\t"),
                b"w:br" | b"w:cr" => push_to(&mut paragraph, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text_run && nested == 0 => {
                let unescaped = t.unescape()?;
                push_to(&mut paragraph, &unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

fn push_to(paragraph: &mut Option<String>, s: &str) {
    if let Some(p) = paragraph.as_mut() {
        p.push_str(s);
    }
}
