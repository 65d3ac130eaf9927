//! Benchmarks for scenario evaluation.
//!
//! Run with: cargo bench -p rotation-scenarios --features parallel

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rotation_core::{compute, CalculationInput, InputField};
use rotation_scenarios::{EvaluationConfig, ScenarioSet};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_sweep(n: usize) -> ScenarioSet {
    let mut set = ScenarioSet::new();
    for i in 0..n {
        let input = CalculationInput::default()
            .with(InputField::LocalCustomers, (i % 1000) as f64 * 10.0)
            .with(InputField::WalkInDaily, (i % 100) as f64);
        set.add_named(format!("Sweep {i}"), input);
    }
    set
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_compute(c: &mut Criterion) {
    let input = CalculationInput::default();
    c.bench_function("compute_default", |b| b.iter(|| compute(black_box(&input))));
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_evaluate");
    for size in [10usize, 100, 1_000, 10_000] {
        let set = create_sweep(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &set, |b, set| {
            let config = EvaluationConfig::sequential();
            b.iter(|| set.evaluate(black_box(&config)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &set, |b, set| {
            let config = EvaluationConfig::default();
            b.iter(|| set.evaluate(black_box(&config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_evaluate);
criterion_main!(benches);
