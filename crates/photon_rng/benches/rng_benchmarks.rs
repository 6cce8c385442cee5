//! Criterion benchmarks for per-worker streams.
//!
//! Benchmarks cover:
//! - Single-draw and batch sampling from one stream
//! - Full launches seeding one stream per worker (1K, 10K, 100K workers)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use photon_rng::guard::device;
use photon_rng::launch::{Launch, LaunchConfig};
use rand_distr::{Distribution, Exp1};

/// Benchmark draws from a single stream inside a one-worker launch.
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let config = LaunchConfig::builder().seed(42).workers(1).threads(1).build().unwrap();
    let launch = Launch::new(config).unwrap();

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("next", n_samples),
            &n_samples,
            |b, &n| {
                b.iter(|| {
                    launch.run(|seed, worker| {
                        let mut stream = device::init(seed, worker);
                        let mut sum = 0.0;
                        for _ in 0..n {
                            sum += device::next(&mut stream);
                        }
                        black_box(sum)
                    })
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fill_uniform", n_samples),
            &n_samples,
            |b, &n| {
                b.iter(|| {
                    launch.run(|seed, worker| {
                        let mut stream = device::init(seed, worker);
                        let mut buffer = vec![0.0; n];
                        device::fill_uniform(&mut stream, &mut buffer);
                        black_box(buffer.iter().sum::<f64>())
                    })
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("exp1_step_length", n_samples),
            &n_samples,
            |b, &n| {
                b.iter(|| {
                    launch.run(|seed, worker| {
                        let mut stream = device::init(seed, worker);
                        let mut sum = 0.0;
                        for _ in 0..n {
                            let step: f64 = Exp1.sample(&mut stream);
                            sum += step;
                        }
                        black_box(sum)
                    })
                });
            },
        );
    }

    group.finish();
}

/// Benchmark full launches where every worker seeds a stream and draws.
fn bench_launch(c: &mut Criterion) {
    let mut group = c.benchmark_group("launch");
    group.sample_size(30);

    for n_workers in [1_000u32, 10_000, 100_000] {
        let config = LaunchConfig::builder().seed(7).workers(n_workers).build().unwrap();
        let launch = Launch::new(config).unwrap();

        group.bench_with_input(
            BenchmarkId::new("init_and_64_draws", n_workers),
            &n_workers,
            |b, _| {
                b.iter(|| {
                    let sums = launch.run(|seed, worker| {
                        let mut stream = device::init(seed, worker);
                        (0..64).map(|_| device::next(&mut stream)).sum::<f64>()
                    });
                    black_box(sums)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_launch);
criterion_main!(benches);
