//! Criterion benchmarks for RDP simplification on synthetic traces.
//! Focus sizes: points per edge in {4, 16, 64, 256} on a jittered square.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shapetrace::simplify::simplify;
use shapetrace::synth::{draw_sketch, SketchCfg};

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");
    for &per_edge in &[4usize, 16, 64, 256] {
        let cfg = SketchCfg {
            points_per_edge: per_edge,
            jitter: 1.5,
            ..SketchCfg::regular(4)
        };
        let points = draw_sketch(cfg, 42).points();
        group.bench_with_input(
            BenchmarkId::new("square", points.len()),
            &points,
            |b, pts| b.iter(|| simplify(pts, 5.0)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_simplify);
criterion_main!(benches);
