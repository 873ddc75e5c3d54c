//! Benchmark fixtures for xferplan.

use xferplan_lib::{EstimateInput, NetworkProfile, Scenario, ScenarioParams};

/// A transfer to benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Total bytes to move.
    pub total_bytes: u64,
    /// Link rate in bits per second.
    pub link_bps: u64,
    /// Number of caller-defined scenarios to estimate.
    pub scenarios: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            total_bytes: 5_000_000_000_000,
            link_bps: 1_000_000_000,
            scenarios: 3,
        }
    }
}

impl BenchmarkConfig {
    /// Returns a config estimating `scenarios` scenarios.
    #[must_use]
    pub fn with_scenarios(scenarios: usize) -> Self {
        Self {
            scenarios,
            ..Self::default()
        }
    }

    /// Builds the estimator input: 4 streams, 8h windows, one week available.
    #[must_use]
    pub fn input(&self) -> EstimateInput {
        EstimateInput::new(self.total_bytes, self.link_bps)
            .with_parallelism(NetworkProfile::Fastconnect.defaults().parallelism)
            .with_availability(7 * 86_400)
    }

    /// Generates a sweep of scenarios over overhead and stream efficiency.
    #[must_use]
    pub fn scenarios(&self) -> Vec<Scenario> {
        let count = self.scenarios.max(1) as f64;
        (0..self.scenarios)
            .map(|i| {
                let t = i as f64 / count;
                Scenario::new(
                    format!("sweep-{i}"),
                    ScenarioParams::new(0.05 + 0.4 * t, 0.3, 0.85, 0.3 + 0.6 * t),
                )
            })
            .collect()
    }
}

/// Formats a duration in microseconds for the benchmark table.
#[must_use]
pub fn format_micros(duration: std::time::Duration) -> String {
    format!("{:.1} µs", duration.as_secs_f64() * 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xferplan_lib::Estimator;

    #[test]
    fn test_sweep_is_estimable() {
        let config = BenchmarkConfig::with_scenarios(64);
        let scenarios = config.scenarios();
        assert_eq!(scenarios.len(), 64);
        assert!(scenarios.iter().all(|s| s.params.validate().is_ok()));

        let results = Estimator::new(config.input()).estimate_all(&scenarios);
        assert!(results.iter().all(|r| r.is_feasible()));
    }
}
