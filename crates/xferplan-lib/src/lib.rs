//! Data transfer time estimation.
//!
//! This is a facade crate that re-exports functionality from the xferplan
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use xferplan_lib::prelude::*;
//!
//! let input = EstimateInput::new(parse_size("500GiB")?, parse_bitrate("100Mbps")?)
//!     .with_daily_window(parse_time_window("24h")?);
//! let scenarios = derive_scenarios(NetworkProfile::Internet.defaults().params);
//!
//! for result in Estimator::new(input).estimate_kinds(&scenarios, ScenarioKind::all()) {
//!     println!("{}: {} days", result.scenario.name, result.days());
//! }
//! # Ok::<(), XferplanError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/xferplan/xferplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use xferplan_types::*;

// Re-export estimation
pub use xferplan_estimate::{
    Availability, Bounded, DEFAULT_DAILY_WINDOW_SECS, DayPlan, DurationBreakdown, EstimateInput,
    EstimateResult, Estimator, INFINITE, PlannedDay, SECONDS_PER_DAY, Schedule, Throughput,
    ThroughputSource, compressed_volume, effective_throughput_bps, estimate, resolve_throughput,
    transfer_duration_secs, usable_capacity_bps,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use xferplan_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, MarkdownFormatter, OutputFormat,
    TableFormatter, humanize,
};

/// Prelude module for convenient imports.
///
/// ```
/// use xferplan_lib::prelude::*;
/// ```
pub mod prelude {
    pub use xferplan_types::{
        NetworkProfile, Result, Scenario, ScenarioKind, ScenarioParams, ScenarioSet,
        XferplanError, derive_scenarios, parse_bitrate, parse_percentage, parse_size,
        parse_time_window,
    };

    pub use xferplan_estimate::{
        Availability, Bounded, EstimateInput, EstimateResult, Estimator, Schedule, estimate,
    };

    #[cfg(feature = "format")]
    pub use xferplan_format::{Formatter, OutputFormat};
}
