//! Performance benchmarks for rs-declutter.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic HTML (~1KB) for microbenchmarks
//! - A generated long article to measure scaling with document size
//! - Real-world HTML files, when a local corpus is present

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_declutter::{parse, Options};
use std::fs;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article | Bench Daily</title>
    <meta name="author" content="John Doe">
    <meta name="description" content="A sample article for benchmarking.">
    <meta property="og:site_name" content="Bench Daily">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <div class="ad-banner">Buy now</div>
    <article>
        <h1>Sample Article</h1>
        <p class="byline">By John Doe</p>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that should survive clutter removal.</p>
        <p>Here is a second paragraph with more content. The parser should
        preserve the text while removing navigation and other clutter.</p>
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the parse performance.</p>
    </article>
    <aside class="sidebar">
        <h3>Related Articles</h3>
        <ul>
            <li><a href="/r1">Related article 1</a></li>
            <li><a href="/r2">Related article 2</a></li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn long_article(paragraphs: usize) -> String {
    let body: String = (0..paragraphs)
        .map(|i| format!("<p>Paragraph {i} talks about things, with commas, and sentences. It goes on.</p>"))
        .collect();
    format!("<html><body><nav><a href='/'>Home</a></nav><main><article>{body}</article></main></body></html>")
}

fn bench_parse_default(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("parse_default", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_parse_with_options(c: &mut Criterion) {
    let options = Options {
        url: Some("https://bench.example/post".to_string()),
        remove_images: true,
        remove_partial_selectors: false,
        ..Options::default()
    };

    c.bench_function("parse_with_options", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_document_size(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("document_size");

    for paragraphs in [10, 100, 1000] {
        let html = long_article(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", paragraphs), &html, |b, html| {
            b.iter(|| parse(black_box(html), black_box(&options)));
        });
    }

    group.finish();
}

/// Benchmark with real-world HTML files, skipped when none are present
fn bench_real_world_html(c: &mut Criterion) {
    let html_dir = "../data/html_files";
    let sample_files = ["0001.html", "0010.html", "0100.html"];
    let options = Options::default();

    let mut group = c.benchmark_group("real_world");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("parse", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| parse(black_box(html), black_box(&options)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_options,
    bench_document_size,
    bench_real_world_html
);
criterion_main!(benches);
