//! Display utilities and output formatting for the xferplan CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;
use xferplan_lib::humanize::format_duration;
use xferplan_lib::prelude::*;

/// Output format for estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[value(alias = "txt")]
    Table,
    Csv,
    #[value(alias = "markdown")]
    Md,
    Json,
}

impl Format {
    /// Returns every format, in menu order.
    pub(crate) const fn all() -> &'static [Self] {
        &[Self::Table, Self::Csv, Self::Md, Self::Json]
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Md => "md",
            Self::Json => "json",
        }
    }

    /// Returns true for formats meant to be read by people.
    const fn is_textual(&self) -> bool {
        matches!(self, Self::Table | Self::Md)
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Md => Self::Markdown,
            Format::Json => Self::Json,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which scenarios to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScenarioChoice {
    Realistic,
    Pessimistic,
    Optimistic,
    All,
}

impl ScenarioChoice {
    /// Returns every choice, in menu order.
    pub(crate) const fn all() -> &'static [Self] {
        &[Self::Realistic, Self::Pessimistic, Self::Optimistic, Self::All]
    }

    /// Returns the scenario kinds to estimate, worst first for `All`.
    pub(crate) const fn kinds(&self) -> &'static [ScenarioKind] {
        match self {
            Self::Realistic => &[ScenarioKind::Realistic],
            Self::Pessimistic => &[ScenarioKind::Pessimistic],
            Self::Optimistic => &[ScenarioKind::Optimistic],
            Self::All => ScenarioKind::all(),
        }
    }
}

impl std::fmt::Display for ScenarioChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Realistic => write!(f, "realistic"),
            Self::Pessimistic => write!(f, "pessimistic"),
            Self::Optimistic => write!(f, "optimistic"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Opens `path` for writing, or stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

/// Writes results in `format`, followed by day plans when requested.
pub(crate) fn emit<W: Write>(
    results: &[EstimateResult],
    format: Format,
    plan: bool,
    start: Option<NaiveDate>,
    mut writer: W,
) -> Result<()> {
    OutputFormat::from(format)
        .write_results(results, &mut writer)
        .context("Failed to write estimate")?;

    if plan {
        if format.is_textual() {
            for result in results {
                writeln!(writer)?;
                write_plan(result, start, &mut writer)?;
            }
        } else {
            warn!(%format, "day plan is only printed for table and md output");
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the day-by-day plan of one result.
pub(crate) fn write_plan<W: Write>(
    result: &EstimateResult,
    start: Option<NaiveDate>,
    mut writer: W,
) -> Result<()> {
    writeln!(writer, "Day plan ({}):", result.scenario.name)?;

    let Some(days) = result.schedule.day_plan() else {
        writeln!(writer, "  transfer never completes")?;
        return Ok(());
    };
    let days = match start {
        Some(start) => days.starting(start),
        None => days,
    };

    writeln!(writer, "{:<6} {:<12} {:<16}", "DAY", "DATE", "ACTIVE")?;
    writeln!(writer, "{}", "-".repeat(36))?;
    for day in days {
        let date = day
            .date
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
        writeln!(
            writer,
            "{:<6} {:<12} {:<16}",
            day.day,
            date,
            format_duration(day.active_secs as f64)
        )?;
    }

    if let Some(done) = start.and_then(|s| result.schedule.completion_date(s)) {
        writeln!(writer, "Completes on: {}", done.format("%Y-%m-%d"))?;
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid start date: {s}"))
}
