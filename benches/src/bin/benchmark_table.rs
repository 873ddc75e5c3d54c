//! Benchmark runner that outputs a markdown table for the README.
//!
//! Run with: `cargo run --package xferplan-bench --bin benchmark_table --release`

use std::time::{Duration, Instant};
use xferplan_bench::{BenchmarkConfig, format_micros};
use xferplan_lib::Estimator;

/// Number of iterations per measurement.
const ITERATIONS: u32 = 50;

fn time<F: FnMut()>(mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        f();
    }
    start.elapsed() / ITERATIONS
}

fn main() {
    println!("xferplan estimation benchmark");
    println!("=============================\n");
    println!("Running benchmarks ({ITERATIONS} iterations each)...\n");

    println!("| Scenarios | Sequential | Parallel | Speedup |");
    println!("|----------:|-----------:|---------:|--------:|");

    for count in [3_usize, 64, 1_024, 16_384] {
        let config = BenchmarkConfig::with_scenarios(count);
        let scenarios = config.scenarios();
        let estimator = Estimator::new(config.input());

        let sequential = time(|| {
            let results: Vec<_> = scenarios.iter().map(|s| estimator.estimate(s)).collect();
            std::hint::black_box(results);
        });
        let parallel = time(|| {
            std::hint::black_box(estimator.estimate_all(&scenarios));
        });

        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!(
            "| {count} | {} | {} | {speedup:.2}x |",
            format_micros(sequential),
            format_micros(parallel)
        );
    }
}
