//! Criterion benches for whole searches on small samples (group "search").
//!
//! Sizes stay tiny: the triangle has 48 admissible schedules and 36 restricted
//! ones; the associativity pattern is restricted only (`5!·4!` leaves).

use criterion::{criterion_group, criterion_main, Criterion};
use lgsched::api::*;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    let cfg = SearchCfg::default();

    let tri = samples::graph("triangle").unwrap().unwrap();
    group.bench_function("full/triangle", |b| {
        b.iter(|| search_full(&tri, &MicroLp, &cfg).unwrap())
    });
    group.bench_function("restricted/triangle", |b| {
        b.iter(|| search_restricted(&tri, &MicroLp, &cfg).unwrap())
    });

    let assoc = samples::graph("assoc").unwrap().unwrap();
    group.bench_function("restricted/assoc", |b| {
        b.iter(|| search_restricted(&assoc, &MicroLp, &cfg).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
