//! Benchmarks for markdown parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mdview::document::{Document, parse_blocks};

fn bench_parse_simple(c: &mut Criterion) {
    let md = "# Hello\n\nWorld";
    c.bench_function("parse_simple", |b| b.iter(|| Document::parse(black_box(md))));
}

fn bench_parse_medium(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    c.bench_function("parse_medium", |b| b.iter(|| Document::parse(black_box(md))));
}

fn bench_classify_large(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md").repeat(200);
    c.bench_function("parse_blocks_large", |b| {
        b.iter(|| parse_blocks(black_box(&md)))
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_medium,
    bench_classify_large
);
criterion_main!(benches);
