//! Transfer estimation across scenarios.

use std::num::NonZeroU32;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use xferplan_types::{RangeError, Scenario, ScenarioKind, ScenarioSet};

use crate::breakdown::DurationBreakdown;
use crate::schedule::{
    Availability, Bounded, Schedule, compressed_volume, serialize_seconds,
    transfer_duration_secs,
};
use crate::throughput::{ThroughputSource, resolve_throughput};

/// Default daily execution window: 8 hours.
pub const DEFAULT_DAILY_WINDOW_SECS: u64 = 8 * 3_600;

/// Scenario-independent inputs of an estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    /// Total data to move, in bytes.
    pub total_bytes: u64,
    /// Nominal link rate, in bits per second.
    pub link_bps: u64,
    /// Number of parallel streams.
    pub parallelism: NonZeroU32,
    /// Length of the daily execution window, in seconds.
    pub daily_window_secs: u64,
    /// Calendar time available, in seconds; 0 means unlimited.
    pub availability_secs: u64,
    /// Measured throughput replacing the model, in bits per second.
    pub throughput_override_bps: Option<f64>,
}

impl EstimateInput {
    /// Creates an input with one stream, an 8 hour window and no horizon.
    #[must_use]
    pub const fn new(total_bytes: u64, link_bps: u64) -> Self {
        Self {
            total_bytes,
            link_bps,
            parallelism: NonZeroU32::MIN,
            daily_window_secs: DEFAULT_DAILY_WINDOW_SECS,
            availability_secs: 0,
            throughput_override_bps: None,
        }
    }

    /// Sets the number of parallel streams.
    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: NonZeroU32) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the number of parallel streams from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Parallelism`] if `parallelism` is 0.
    pub fn try_with_parallelism(self, parallelism: u32) -> Result<Self, RangeError> {
        NonZeroU32::new(parallelism)
            .map(|p| self.with_parallelism(p))
            .ok_or(RangeError::Parallelism)
    }

    /// Sets the daily window length in seconds.
    #[must_use]
    pub const fn with_daily_window(mut self, secs: u64) -> Self {
        self.daily_window_secs = secs;
        self
    }

    /// Sets the availability horizon in seconds (0 for unlimited).
    #[must_use]
    pub const fn with_availability(mut self, secs: u64) -> Self {
        self.availability_secs = secs;
        self
    }

    /// Sets or clears a throughput override in bits per second.
    #[must_use]
    pub const fn with_throughput_override(mut self, bps: Option<f64>) -> Self {
        self.throughput_override_bps = bps;
        self
    }

    /// Returns the override if it is a positive rate.
    #[must_use]
    pub fn effective_override(&self) -> Option<f64> {
        self.throughput_override_bps.filter(|bps| *bps > 0.0)
    }
}

/// Outcome of estimating one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Scenario the estimate was made for.
    pub scenario: Scenario,
    /// Bytes left to move after compression.
    pub volume_bytes: u64,
    /// Sustained throughput in bits per second.
    pub throughput_bps: f64,
    /// Whether the throughput was modeled or supplied.
    pub throughput_source: ThroughputSource,
    /// Transfer time in seconds; infinite when throughput is zero.
    #[serde(serialize_with = "serialize_seconds")]
    pub duration_secs: f64,
    /// Daily window decomposition.
    pub schedule: Schedule,
}

impl EstimateResult {
    /// Returns the number of daily windows needed.
    #[must_use]
    pub const fn windows(&self) -> Bounded<u64> {
        self.schedule.windows
    }

    /// Returns the number of calendar days needed.
    #[must_use]
    pub const fn days(&self) -> Bounded<u64> {
        self.schedule.days
    }

    /// Returns the unused seconds of the last window.
    #[must_use]
    pub const fn leftover_secs(&self) -> Bounded<u64> {
        self.schedule.leftover_secs
    }

    /// Returns the availability verdict.
    #[must_use]
    pub const fn availability(&self) -> Availability {
        self.schedule.availability
    }

    /// Returns true only if the transfer is known to fit the horizon.
    #[must_use]
    pub const fn fits_within_availability(&self) -> bool {
        self.schedule.availability.fits()
    }

    /// Returns true if the transfer completes in finite time.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.duration_secs.is_finite()
    }

    /// Returns the duration as days, hours, minutes and seconds.
    #[must_use]
    pub fn breakdown(&self) -> Option<DurationBreakdown> {
        DurationBreakdown::from_secs(self.duration_secs)
    }
}

/// Estimates one scenario.
#[must_use]
pub fn estimate(input: &EstimateInput, scenario: &Scenario) -> EstimateResult {
    let volume_bytes = compressed_volume(input.total_bytes, scenario.compression());
    let throughput = resolve_throughput(input, scenario);
    let duration_secs = transfer_duration_secs(volume_bytes, throughput.bps);
    let schedule = Schedule::plan(
        duration_secs,
        input.daily_window_secs,
        input.availability_secs,
    );

    debug!(
        scenario = %scenario.name,
        volume_bytes,
        throughput_bps = throughput.bps,
        source = %throughput.source,
        duration_secs,
        windows = %schedule.windows,
        availability = %schedule.availability,
        "estimated scenario"
    );

    EstimateResult {
        scenario: scenario.clone(),
        volume_bytes,
        throughput_bps: throughput.bps,
        throughput_source: throughput.source,
        duration_secs,
        schedule,
    }
}

/// Estimates scenarios against one fixed input.
#[derive(Debug, Clone)]
pub struct Estimator {
    input: EstimateInput,
}

impl Estimator {
    /// Creates an estimator for an input.
    #[must_use]
    pub const fn new(input: EstimateInput) -> Self {
        Self { input }
    }

    /// Returns the input.
    #[must_use]
    pub const fn input(&self) -> &EstimateInput {
        &self.input
    }

    /// Estimates one scenario.
    #[must_use]
    pub fn estimate(&self, scenario: &Scenario) -> EstimateResult {
        estimate(&self.input, scenario)
    }

    /// Estimates every scenario in parallel, preserving order.
    #[must_use]
    pub fn estimate_all(&self, scenarios: &[Scenario]) -> Vec<EstimateResult> {
        scenarios
            .par_iter()
            .map(|scenario| self.estimate(scenario))
            .collect()
    }

    /// Estimates the requested kinds of a scenario set, in the requested order.
    #[must_use]
    pub fn estimate_kinds(&self, set: &ScenarioSet, kinds: &[ScenarioKind]) -> Vec<EstimateResult> {
        self.estimate_all(&set.select(kinds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use xferplan_types::{NetworkProfile, ScenarioParams};

    const FIVE_TB: u64 = 5_000_000_000_000;
    const GBPS: u64 = 1_000_000_000;
    const WEEK: u64 = 7 * 86_400;

    fn five_tb_input() -> EstimateInput {
        EstimateInput::new(FIVE_TB, GBPS)
            .try_with_parallelism(4)
            .unwrap()
            .with_availability(WEEK)
    }

    #[test]
    fn test_five_terabytes_over_fastconnect() {
        let base = NetworkProfile::Fastconnect.defaults().params;
        let set = ScenarioSet::derive(base);
        let results = Estimator::new(five_tb_input()).estimate_kinds(&set, ScenarioKind::all());

        let [pessimistic, realistic, optimistic] = results.as_slice() else {
            panic!("expected three results");
        };

        assert_eq!(realistic.scenario.name, "realistic");
        assert_eq!(realistic.volume_bytes, 3_500_000_000_000);
        assert_relative_eq!(realistic.throughput_bps, 850_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(realistic.duration_secs, 32_941.176_470_588, max_relative = 1e-9);
        assert_eq!(realistic.windows(), Bounded::Finite(2));
        assert_eq!(realistic.days(), Bounded::Finite(2));
        assert_eq!(realistic.leftover_secs(), Bounded::Finite(24_658));
        assert!(realistic.fits_within_availability());
        assert_eq!(realistic.breakdown().unwrap().to_string(), "0d 9h 9m 1s");

        assert_eq!(pessimistic.scenario.name, "pessimistic");
        assert_relative_eq!(pessimistic.throughput_bps, 750_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(pessimistic.duration_secs, 42_666.666_666, max_relative = 1e-6);
        assert_eq!(pessimistic.windows(), Bounded::Finite(2));

        assert_eq!(optimistic.scenario.name, "optimistic");
        assert_relative_eq!(optimistic.duration_secs, 26_666.666_666, max_relative = 1e-6);
        assert_eq!(optimistic.windows(), Bounded::Finite(1));
        assert!(optimistic.fits_within_availability());
    }

    #[test]
    fn test_full_overhead_never_completes() {
        let scenario = Scenario::new("blocked", ScenarioParams::new(1.0, 0.0, 1.0, 1.0));
        let result = estimate(&five_tb_input(), &scenario);
        assert_eq!(result.throughput_bps, 0.0);
        assert!(result.duration_secs.is_infinite());
        assert!(!result.is_feasible());
        assert!(result.windows().is_infinite());
        assert!(result.breakdown().is_none());
        assert_eq!(result.availability(), Availability::Exceeds);
        assert!(!result.fits_within_availability());
    }

    #[test]
    fn test_unlimited_horizon_with_zero_throughput_is_indeterminate() {
        let scenario = Scenario::new("blocked", ScenarioParams::new(1.0, 0.0, 1.0, 1.0));
        let input = EstimateInput::new(FIVE_TB, GBPS);
        let result = estimate(&input, &scenario);
        assert_eq!(result.availability(), Availability::Indeterminate);
        assert!(!result.fits_within_availability());
    }

    #[test]
    fn test_zero_bytes() {
        let scenario = Scenario::new("empty", ScenarioParams::new(0.1, 0.0, 0.5, 0.5));
        let result = estimate(&EstimateInput::new(0, GBPS), &scenario);
        assert_eq!(result.volume_bytes, 0);
        assert_eq!(result.duration_secs, 0.0);
        assert_eq!(result.windows(), Bounded::Finite(0));
        assert!(result.fits_within_availability());
    }

    #[test]
    fn test_zero_window_never_completes() {
        let scenario = Scenario::new("x", ScenarioParams::new(0.1, 0.0, 0.5, 0.5));
        let input = EstimateInput::new(FIVE_TB, GBPS).with_daily_window(0);
        let result = estimate(&input, &scenario);
        assert!(result.is_feasible());
        assert!(result.windows().is_infinite());
        assert!(!result.fits_within_availability());
    }

    #[test]
    fn test_horizon_exceeded() {
        // 1 TB at 1 Mbps takes about 92 days of 24h windows
        let scenario = Scenario::new("slow", ScenarioParams::new(0.0, 0.0, 1.0, 1.0));
        let input = EstimateInput::new(1_000_000_000_000, 1_000_000)
            .with_daily_window(86_400)
            .with_availability(WEEK);
        let result = estimate(&input, &scenario);
        assert_eq!(result.days(), Bounded::Finite(93));
        assert_eq!(result.availability(), Availability::Exceeds);
    }

    #[test]
    fn test_throughput_override() {
        let scenario = Scenario::new("measured", ScenarioParams::new(0.9, 0.0, 0.1, 0.1));
        let input = EstimateInput::new(1_000_000_000, GBPS).with_throughput_override(Some(8e8));
        let result = estimate(&input, &scenario);
        assert_eq!(result.throughput_source, ThroughputSource::Override);
        assert_relative_eq!(result.duration_secs, 10.0);
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        assert_eq!(
            EstimateInput::new(1, 1).try_with_parallelism(0),
            Err(RangeError::Parallelism)
        );
    }

    #[test]
    fn test_estimate_all_preserves_order() {
        let scenarios: Vec<_> = (1..=16)
            .map(|i| {
                Scenario::new(
                    format!("s{i}"),
                    ScenarioParams::new(0.0, 0.0, 1.0, f64::from(i) / 16.0),
                )
            })
            .collect();
        let results = Estimator::new(EstimateInput::new(FIVE_TB, GBPS)).estimate_all(&scenarios);
        let names: Vec<_> = results.iter().map(|r| r.scenario.name.as_str()).collect();
        let expected: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_serialize_infinite_result() {
        let scenario = Scenario::new("blocked", ScenarioParams::new(1.0, 0.0, 1.0, 1.0));
        let result = estimate(&EstimateInput::new(10, GBPS), &scenario);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration_secs"], "infinite");
        assert_eq!(json["schedule"]["windows"], "infinite");
        assert_eq!(json["schedule"]["availability"], "indeterminate");
        assert_eq!(json["scenario"]["name"], "blocked");
        assert_eq!(json["throughput_source"], "modeled");
    }

    proptest! {
        #[test]
        fn prop_scenarios_are_ordered(
            total in 1u64..100_000_000_000_000,
            link in 1_000u64..100_000_000_000,
            parallelism in 1u32..64,
            overhead in 0.0f64..=0.5,
            compression in 0.0f64..=0.9,
            efficacy in 0.3f64..=1.0,
            stream in 0.3f64..=1.0,
        ) {
            let set = ScenarioSet::derive(ScenarioParams::new(overhead, compression, efficacy, stream));
            let input = EstimateInput::new(total, link).try_with_parallelism(parallelism).unwrap();
            let results = Estimator::new(input).estimate_kinds(&set, ScenarioKind::all());
            prop_assert!(results[0].duration_secs >= results[1].duration_secs);
            prop_assert!(results[1].duration_secs >= results[2].duration_secs);
            prop_assert!(results[0].throughput_bps <= results[1].throughput_bps);
            prop_assert!(results[1].throughput_bps <= results[2].throughput_bps);
        }
    }
}
