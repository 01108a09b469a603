//! Criterion benchmarks for the full classifier (simplify → corners → gates).
//! One jittered sketch per target shape; seeds fixed for comparability.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapetrace::api::{classify_drawing, draw_sketch, RecognizerCfg, Shape, SketchCfg};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let cfg = RecognizerCfg::default();
    for shape in Shape::ALL {
        group.bench_with_input(
            BenchmarkId::new("sketch", shape.name()),
            &shape,
            |b, &shape| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter_batched(
                    || {
                        let sketch = SketchCfg {
                            jitter: 1.0,
                            ..SketchCfg::regular(shape.corners())
                        };
                        draw_sketch(sketch, rng.gen())
                    },
                    |drawing| {
                        let _res = classify_drawing(&drawing, shape, 6.0, &cfg);
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
