//! Effective throughput model.
//!
//! A single stream reaches `stream_efficiency` of the capacity left after
//! overhead. Each additional stream adds `parallelism_efficacy` of a single
//! stream's rate, and the total is capped at the usable capacity.

use serde::Serialize;
use tracing::trace;
use xferplan_types::Scenario;

use crate::EstimateInput;

/// Where an effective throughput figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThroughputSource {
    /// Computed by the throughput model.
    #[default]
    Modeled,
    /// Supplied by the caller (e.g. a measured rate).
    Override,
}

impl ThroughputSource {
    /// Returns the source as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modeled => "modeled",
            Self::Override => "override",
        }
    }
}

impl std::fmt::Display for ThroughputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An effective throughput and its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Sustained rate in bits per second.
    pub bps: f64,
    /// Whether the rate was modeled or supplied.
    pub source: ThroughputSource,
}

/// Returns the link capacity left after protocol overhead, in bits per second.
#[must_use]
pub fn usable_capacity_bps(link_bps: u64, overhead: f64) -> f64 {
    (link_bps as f64 * (1.0 - overhead)).max(0.0)
}

/// Computes the sustained throughput of `parallelism` streams on a link.
///
/// The result never exceeds [`usable_capacity_bps`]. Efficiency and efficacy
/// are clamped to `[0, 1]`; a parallelism of 0 or 1 means a single stream.
#[must_use]
pub fn effective_throughput_bps(
    link_bps: u64,
    overhead: f64,
    parallelism: u32,
    parallelism_efficacy: f64,
    stream_efficiency: f64,
) -> f64 {
    let capacity = usable_capacity_bps(link_bps, overhead);
    let single = capacity * stream_efficiency.clamp(0.0, 1.0);

    let effective = if parallelism <= 1 {
        single.min(capacity)
    } else {
        let gain = 1.0 + f64::from(parallelism - 1) * parallelism_efficacy.clamp(0.0, 1.0);
        (single * gain).min(capacity)
    };

    trace!(capacity, single, parallelism, effective, "throughput model");
    effective
}

/// Returns the throughput for a scenario, honoring a positive override.
#[must_use]
pub fn resolve_throughput(input: &EstimateInput, scenario: &Scenario) -> Throughput {
    if let Some(bps) = input.effective_override() {
        return Throughput {
            bps,
            source: ThroughputSource::Override,
        };
    }

    Throughput {
        bps: effective_throughput_bps(
            input.link_bps,
            scenario.overhead(),
            input.parallelism.get(),
            scenario.parallelism_efficacy(),
            scenario.stream_efficiency(),
        ),
        source: ThroughputSource::Modeled,
    }
}
