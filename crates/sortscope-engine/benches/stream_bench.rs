//! Throughput of draining sort streams end to end.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sortscope_engine::{Algorithm, Distribution, generate_with};
use std::hint::black_box;

fn bench_drain(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0xBEEF);
    let input = generate_with(200, Distribution::Random, &mut rng);

    let mut group = c.benchmark_group("drain_200");
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
    ] {
        group.bench_function(algorithm.to_string(), |b| {
            b.iter(|| {
                let events = black_box(algorithm).stream(black_box(&input)).count();
                black_box(events)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drain);
criterion_main!(benches);
