use criterion::{black_box, criterion_group, criterion_main, Criterion};
use privbin::{encode, PasteOptions};

fn options(text: String, compression: &str) -> PasteOptions {
    let mut options = PasteOptions::default();
    options.set_text(text);
    options.set_compression(compression).unwrap();
    options
}

fn bench_encode_small(c: &mut Criterion) {
    let zlib = options("x".repeat(1024), "zlib");
    let none = options("x".repeat(1024), "none");

    // Dominated by the 100k PBKDF2 iterations, which is the point: the
    // numbers show what one paste costs end to end.
    c.bench_function("encode_1kb_zlib", |b| b.iter(|| encode(black_box(&zlib)).unwrap()));
    c.bench_function("encode_1kb_none", |b| b.iter(|| encode(black_box(&none)).unwrap()));
}

fn bench_encode_large(c: &mut Criterion) {
    let text: String = "The quick brown fox jumps over the lazy dog. "
        .repeat(64 * 1024 / 45);
    let zlib = options(text.clone(), "zlib");
    let none = options(text, "none");

    c.bench_function("encode_64kb_zlib", |b| b.iter(|| encode(black_box(&zlib)).unwrap()));
    c.bench_function("encode_64kb_none", |b| b.iter(|| encode(black_box(&none)).unwrap()));
}

criterion_group!(benches, bench_encode_small, bench_encode_large);
criterion_main!(benches);
