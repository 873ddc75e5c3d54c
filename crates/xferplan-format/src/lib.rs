//! Output formatters for xferplan estimates.
//!
//! This crate provides formatters for writing estimate results:
//!
//! - [`TableFormatter`] - Human-readable text blocks
//! - [`CsvFormatter`] - CSV, one row per scenario
//! - [`MarkdownFormatter`] - Markdown tables
//! - [`JsonFormatter`] - JSON object or array
//! - [`humanize`] - Gigabytes, megabits, durations and IEC sizes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/xferplan/xferplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
pub mod humanize;
mod json;
mod markdown;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use table::TableFormatter;
