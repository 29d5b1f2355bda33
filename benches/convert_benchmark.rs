//! Converter throughput benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hanconv::pipeline::{charmap_data, convert, CharMap, Direction};

fn bench_convert(c: &mut Criterion) {
    let map = CharMap::shared();
    // A large mixed document: every mapped character plus ASCII filler
    let text = format!("{} the quick brown fox 0123456789 ", charmap_data::SIMPLIFIED).repeat(50);

    c.bench_function("convert_to_traditional", |b| {
        b.iter(|| convert(map, black_box(&text), Direction::ToTraditional))
    });

    c.bench_function("convert_to_simplified_noop", |b| {
        b.iter(|| convert(map, black_box(&text), Direction::ToSimplified))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
