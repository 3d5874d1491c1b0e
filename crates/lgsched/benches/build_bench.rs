//! Criterion microbenches for constraint construction (group "build").
//!
//! - Building `(A, b)` for the five-clique sample schedule.
//! - Building for random admissible schedules of the four-clique.
//! - One LP solve of the triangle sample schedule.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lgsched::api::*;

fn sample(name: &str) -> Graph {
    samples::graph(name).unwrap().unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let five = sample("five-clique");
    let five_sched: Schedule = samples::FIVE_SCHEDULE.parse().unwrap();
    for incident in [IncidentEdges::Loaded, IncidentEdges::All] {
        let builder = ConstraintBuilder::with_cfg(&five, BuildCfg { incident });
        group.bench_function(BenchmarkId::new("five-clique", format!("{incident:?}")), |b| {
            b.iter(|| builder.build(&five_sched).unwrap())
        });
    }

    let four = sample("four-clique");
    let builder = ConstraintBuilder::new(&four);
    group.bench_function(BenchmarkId::new("four-clique-random", "admissible"), |b| {
        b.iter_batched(
            || draw_admissible(&four, ReplayToken { seed: 7, index: 0 }),
            |s| builder.build(&s).unwrap(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let tri = sample("triangle");
    let sys = build_constraints(&tri, &samples::TRI_SCHEDULE.parse().unwrap()).unwrap();
    c.bench_function("solve/triangle", |b| {
        b.iter(|| MicroLp.minimize(&sys, VarLayout::COST).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_solve);
criterion_main!(benches);
