//! Transfer duration estimation for xferplan.
//!
//! This crate turns a request and its scenarios into estimates:
//!
//! - [`effective_throughput_bps`] - Sustained rate of parallel streams on a link
//! - [`Schedule`] - Decomposition of a transfer into daily windows
//! - [`Estimator`] - Estimates one input against many scenarios in parallel
//! - [`EstimateResult`] - Volume, throughput, duration and schedule of one scenario
//! - [`DayPlan`] - Day-by-day view of a finite schedule

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/xferplan/xferplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod breakdown;
mod estimator;
mod schedule;
mod throughput;

pub use breakdown::DurationBreakdown;
pub use estimator::{
    DEFAULT_DAILY_WINDOW_SECS, EstimateInput, EstimateResult, Estimator, estimate,
};
pub use schedule::{
    Availability, Bounded, DayPlan, INFINITE, PlannedDay, SECONDS_PER_DAY, Schedule,
    compressed_volume, transfer_duration_secs,
};
pub use throughput::{
    Throughput, ThroughputSource, effective_throughput_bps, resolve_throughput,
    usable_capacity_bps,
};
