//! Document Parsing Benchmarks
//!
//! Performance benchmarks for DOCX extraction, flashcard parsing and
//! question intent classification.
//!
//! Run with: `cargo bench --bench document_parsing`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;
use std::time::Duration;

use lecture_digest::document::{docx, DocumentFormat};
use lecture_digest::flashcards;
use lecture_digest::intent::Intent;

/// DOCX with `paragraphs` body paragraphs of Vietnamese lecture text
fn create_docx(paragraphs: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::{write::SimpleFileOptions, ZipWriter};

    let mut body = String::new();
    for i in 0..paragraphs {
        body.push_str(&format!(
            "<w:p><w:r><w:t>Đoạn {}: Định lý Pythagore phát biểu rằng</w:t></w:r>\
             <w:r><w:t xml:space=\"preserve\"> bình phương cạnh huyền bằng tổng bình phương hai cạnh góc vuông.</w:t></w:r></w:p>",
            i
        ));
    }

    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );

    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
            .unwrap();

        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(document.as_bytes()).unwrap();

        zip.finish().unwrap();
    }
    buffer
}

/// Model output with `cards` well-formed pairs and some noise around them
fn create_flashcard_output(cards: usize) -> String {
    let mut out = String::from("Dưới đây là các flashcards:\n\n");
    for i in 1..=cards {
        out.push_str(&format!(
            "Q: Câu hỏi số {} về nội dung bài giảng?\nA: Câu trả lời số {}.\n\n",
            i, i
        ));
    }
    out.push_str("Chúc bạn học tốt!");
    out
}

/// Benchmark DOCX text extraction
fn bench_docx_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_extraction");
    group.measurement_time(Duration::from_secs(10));

    for paragraphs in [10, 500] {
        let data = create_docx(paragraphs);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            &data,
            |b, data| {
                b.iter(|| {
                    let text = docx::extract_text_from_reader(Cursor::new(black_box(data.as_slice())))
                        .expect("Failed to extract DOCX");
                    black_box(text)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark flashcard parsing of model output
fn bench_flashcard_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("flashcard_parsing");

    for cards in [5, 50] {
        let raw = create_flashcard_output(cards);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("cards", cards), &raw, |b, raw| {
            b.iter(|| black_box(flashcards::parse(black_box(raw))))
        });
    }

    group.finish();
}

/// Benchmark intent classification and format detection
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("intent_more_flashcards", |b| {
        b.iter(|| Intent::classify(black_box("Làm ơn tạo thêm 3 flashcard về chương 2")))
    });

    group.bench_function("intent_question", |b| {
        b.iter(|| Intent::classify(black_box("Định lý Pythagore được chứng minh như thế nào?")))
    });

    group.bench_function("format_from_extension", |b| {
        b.iter(|| DocumentFormat::from_extension(black_box("DOCX")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_docx_extraction,
    bench_flashcard_parsing,
    bench_dispatch
);
criterion_main!(benches);
