// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ror_search::graph::Graph;
use ror_search::sequence::{render, BitSequence, Format};
use ror_search::{Enumerator, Path, SearchContext, SearchEngine};

fn first_cycle(bits: u32) -> Path {
    let mut ctx = SearchContext::with_bits(bits);
    SearchEngine::new()
        .search(&mut ctx)
        .path()
        .expect("every width has a cycle")
}

fn bench_graph_build(c: &mut Criterion) {
    c.bench_function("graph build 16 bits", |b| {
        b.iter(|| Graph::new(black_box(16)))
    });
}

fn bench_first_cycle(c: &mut Criterion) {
    for bits in [8, 12, 16] {
        c.bench_function(&format!("first cycle {} bits", bits), |b| {
            b.iter(|| {
                let mut ctx = SearchContext::with_bits(black_box(bits));
                SearchEngine::new().search(&mut ctx)
            })
        });
    }
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate 10 bits", |b| {
        b.iter(|| {
            Enumerator::new(SearchContext::with_bits(black_box(10)), 256)
                .run(Vec::<Path>::new())
        })
    });
}

fn bench_render_hex(c: &mut Criterion) {
    let path = first_cycle(12);

    c.bench_function("render hex 12 bits", |b| {
        b.iter(|| render(black_box(&path), 12, Format::Hex))
    });
}

fn bench_verify_period(c: &mut Criterion) {
    let seq = BitSequence::from_path(&first_cycle(12), 12);

    c.bench_function("verify period 12 bits", |b| {
        b.iter(|| black_box(&seq).verify_full_period())
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_first_cycle,
    bench_enumerate,
    bench_render_hex,
    bench_verify_period,
);
criterion_main!(benches);
