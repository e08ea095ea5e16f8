use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use median_heap::{heap::MinHeap, MedianHeap};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<i64> = (0..2000)
        .map(|_| rng.gen_range(-1_000_000..1_000_000))
        .collect();

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("running median over 2000 values", |b| {
        b.iter(|| {
            let mut heap = MedianHeap::new();

            for v in data.iter() {
                heap.insert(*v);
            }

            let _median = heap.median();
        })
    });

    group.bench_function("min-heap push and drain 2000 values", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();

            for v in data.iter() {
                heap.push(*v);
            }

            while heap.pop().is_some() {}
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
