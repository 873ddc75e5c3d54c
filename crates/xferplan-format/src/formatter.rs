//! Output format abstraction.

use std::io::Write;
use thiserror::Error;
use xferplan_estimate::{EstimateResult, ThroughputSource};

use crate::humanize::{format_availability, format_duration, format_gigabytes, format_mbps};
use crate::{CsvFormatter, JsonFormatter, MarkdownFormatter, TableFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human-readable text blocks.
    #[default]
    Table,
    /// CSV with one row per scenario.
    Csv,
    /// Markdown tables.
    Markdown,
    /// JSON object or array.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Csv => "csv",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Markdown, Self::Json]
    }

    /// Writes results with this format's default formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    pub fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table => TableFormatter::new().write_results(results, writer),
            Self::Csv => CsvFormatter::new().write_results(results, writer),
            Self::Markdown => MarkdownFormatter::new().write_results(results, writer),
            Self::Json => JsonFormatter::new().with_pretty(true).write_results(results, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "txt" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes estimate results to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Labeled, human-readable fields of one result, shared by the text formats.
pub(crate) fn summary_rows(result: &EstimateResult) -> [(&'static str, String); 8] {
    let throughput = match result.throughput_source {
        ThroughputSource::Modeled => format!("{} Mbps", format_mbps(result.throughput_bps)),
        ThroughputSource::Override => {
            format!("{} Mbps (override)", format_mbps(result.throughput_bps))
        }
    };
    let leftover = format_duration(
        result
            .leftover_secs()
            .finite()
            .map_or(f64::INFINITY, |secs| secs as f64),
    );

    [
        ("Scenario", result.scenario.name.clone()),
        (
            "Data (after compression)",
            format!("{} GB", format_gigabytes(result.volume_bytes)),
        ),
        ("Effective throughput", throughput),
        ("Total duration", format_duration(result.duration_secs)),
        ("Windows needed", result.windows().to_string()),
        ("Total days (1 window/day)", result.days().to_string()),
        ("Leftover in final window", leftover),
        (
            "Fits within availability",
            format_availability(result.availability()).to_string(),
        ),
    ]
}
