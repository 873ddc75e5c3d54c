//! Estimation benchmarks: single scenario, standard set and large sweeps.
//!
//! Run with: `cargo bench --package xferplan-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xferplan_bench::BenchmarkConfig;
use xferplan_lib::{Estimator, NetworkProfile, ScenarioKind, ScenarioSet, estimate};

fn single_benchmark(c: &mut Criterion) {
    let config = BenchmarkConfig::default();
    let input = config.input();
    let set = ScenarioSet::derive(NetworkProfile::Fastconnect.defaults().params);

    c.bench_function("estimate/realistic", |b| {
        b.iter(|| estimate(black_box(&input), black_box(&set.realistic)));
    });

    let estimator = Estimator::new(input);
    c.bench_function("estimate/all-kinds", |b| {
        b.iter(|| estimator.estimate_kinds(black_box(&set), ScenarioKind::all()));
    });
}

fn sweep_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    for count in [16_usize, 256, 4_096] {
        let config = BenchmarkConfig::with_scenarios(count);
        let scenarios = config.scenarios();
        let estimator = Estimator::new(config.input());
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("parallel", count), &scenarios, |b, s| {
            b.iter(|| estimator.estimate_all(black_box(s)));
        });

        group.bench_with_input(BenchmarkId::new("sequential", count), &scenarios, |b, s| {
            b.iter(|| {
                s.iter()
                    .map(|scenario| estimator.estimate(black_box(scenario)))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, single_benchmark, sweep_benchmark);
criterion_main!(benches);
