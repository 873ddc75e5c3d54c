//! Core types for xferplan transfer estimates.
//!
//! This crate provides the input side of the estimator:
//!
//! - [`parse_size`], [`parse_bitrate`], [`parse_time_window`],
//!   [`parse_percentage`] - Unit-aware parsing into canonical units
//! - [`Scenario`] - A named set of modeling parameters
//! - [`ScenarioSet`] - Pessimistic, realistic and optimistic scenarios
//! - [`NetworkProfile`] - Typical parameters for common link types

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/xferplan/xferplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod profile;
mod scenario;
mod units;

pub use error::{ParseError, Quantity, RangeError, Result, XferplanError};
pub use profile::{NetworkProfile, ProfileDefaults, ProfileParseError};
pub use scenario::{
    Scenario, ScenarioKind, ScenarioKindParseError, ScenarioParams, ScenarioSet, derive_scenarios,
};
pub use units::{
    BitrateUnit, SizeUnit, TimeUnit, UnitSuffix, parse_bitrate, parse_fraction, parse_percentage,
    parse_scaled, parse_size, parse_time_window,
};
