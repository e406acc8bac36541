//! Benchmarks for ringlace puzzle generation.
//!
//! Measures the complete generation process (solved-layout placement plus
//! the scramble) for the default board and for a larger configuration.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple placement and scramble shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use ringlace_core::Layout;
use ringlace_generator::{GeneratorConfig, PuzzleGenerator};

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn bench_generator_default(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GeneratorConfig::default());

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generator_default", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_large(c: &mut Criterion) {
    let config = GeneratorConfig::new(Layout::new(8), 6, 10);
    let generator = PuzzleGenerator::new(config);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generator_large", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_default,
        bench_generator_large
);
criterion_main!(benches);
