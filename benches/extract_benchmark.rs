//! Benchmarks for docoutline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the full pipeline over synthetic multi-page documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docoutline::{Document, OutlineExtractor, PageContent, TextRun};

/// Creates a synthetic document with numbered sections and body text.
fn create_test_document(page_count: usize) -> Document {
    let mut doc = Document::new();

    for i in 0..page_count {
        let mut page = PageContent::new(i as u32 + 1);
        let mut plain = Vec::new();

        let heading = format!("{}. Section {}", i + 1, i + 1);
        page.add_line(vec![TextRun::bold(heading.clone(), 18.0)]);
        plain.push(heading);

        let sub = format!("{}.1 Details of part {}", i + 1, i + 1);
        page.add_line(vec![TextRun::new(sub.clone(), 14.0)]);
        plain.push(sub);

        for j in 0..30 {
            let line = format!("Body line {} on page {} with ordinary running text.", j, i + 1);
            page.add_line(vec![TextRun::new(line.clone(), 10.0)]);
            plain.push(line);
        }

        doc.add_page(page.with_plain_text(plain.join("\n")));
    }

    doc
}

/// Benchmark pattern catalog compilation.
fn bench_extractor_creation(c: &mut Criterion) {
    c.bench_function("extractor_creation", |b| {
        b.iter(|| OutlineExtractor::new().unwrap());
    });
}

/// Benchmark full extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let extractor = OutlineExtractor::new().unwrap();
    let mut group = c.benchmark_group("extraction");

    for page_count in [1, 10, 50].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| extractor.extract(black_box(&doc)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extractor_creation, bench_extraction);
criterion_main!(benches);
