//! Interactive command implementation.
//!
//! Prompts for the same inputs as `estimate` and runs the same pipeline.

use anyhow::{Context, Result};
use inquire::{Confirm, CustomType, Select};
use std::num::NonZeroU32;
use xferplan_lib::prelude::*;
use xferplan_lib::{BitrateUnit, SizeUnit};

use super::estimate::Request;
use crate::display::{Format, ScenarioChoice, emit};

const PROFILE_MODE: &str = "Network profile";
const MANUAL_MODE: &str = "Manual parameters";

fn prompt_number(message: &str, default: f64) -> Result<f64> {
    CustomType::<f64>::new(message)
        .with_default(default)
        .with_error_message("Please enter a number")
        .prompt()
        .context("Prompt cancelled")
}

fn prompt_quantity<U: std::fmt::Display + Clone>(
    message: &str,
    default: f64,
    units: &[U],
    default_unit: usize,
) -> Result<String> {
    let value = prompt_number(message, default)?;
    let unit = Select::new("Unit:", units.to_vec())
        .with_starting_cursor(default_unit)
        .prompt()
        .context("Prompt cancelled")?;
    Ok(format!("{value}{unit}"))
}

fn prompt_params() -> Result<(ScenarioParams, NonZeroU32)> {
    let mode = Select::new("Parameters:", vec![PROFILE_MODE, MANUAL_MODE])
        .prompt()
        .context("Prompt cancelled")?;

    if mode == PROFILE_MODE {
        let profile = Select::new("Network profile:", NetworkProfile::all().to_vec())
            .prompt()
            .context("Prompt cancelled")?;
        let defaults = profile.defaults();
        return Ok((defaults.params, defaults.parallelism));
    }

    let seed = Request::seed(None);
    let overhead = prompt_number("Protocol overhead (%):", seed.params.overhead * 100.0)?;
    let compression = prompt_number("Compression (%):", seed.params.compression * 100.0)?;
    let parallelism = CustomType::<u32>::new("Parallel streams:")
        .with_default(seed.parallelism.get())
        .with_error_message("Please enter a whole number")
        .prompt()
        .context("Prompt cancelled")?;
    let efficacy = prompt_number(
        "Parallelism efficacy (0..1):",
        seed.params.parallelism_efficacy,
    )?;
    let stream = prompt_number(
        "Single-stream efficiency (0..1):",
        seed.params.stream_efficiency,
    )?;

    let overhead = parse_percentage(&format!("{overhead}%"))?;
    let compression = parse_percentage(&format!("{compression}%"))?;
    let parallelism =
        NonZeroU32::new(parallelism).context("Parallel streams must be at least 1")?;

    Ok((
        ScenarioParams::new(overhead, compression, efficacy, stream),
        parallelism,
    ))
}

/// Prompt for transfer parameters and print the estimate.
pub(crate) fn interactive() -> Result<()> {
    let data = prompt_quantity("Total data size:", 1.0, SizeUnit::all(), 4)?;
    let total_bytes = parse_size(&data).with_context(|| format!("Invalid data size: {data}"))?;

    let bandwidth = prompt_quantity("Link bandwidth:", 1.0, BitrateUnit::all(), 3)?;
    let link_bps =
        parse_bitrate(&bandwidth).with_context(|| format!("Invalid bandwidth: {bandwidth}"))?;

    let window_hours = prompt_number("Daily window (hours):", 8.0)?;
    let window_secs = parse_time_window(&format!("{window_hours}h"))?;
    let availability_days = prompt_number("Availability (days, 0 = unlimited):", 0.0)?;
    let availability_secs = parse_time_window(&format!("{availability_days}d"))?;

    let (params, parallelism) = prompt_params()?;

    let effective_mbps = if Confirm::new("Use a measured effective rate instead of the model?")
        .with_default(false)
        .prompt()
        .context("Prompt cancelled")?
    {
        Some(prompt_number("Effective rate (Mbps):", 100.0)?)
    } else {
        None
    };

    let scenario = Select::new("Scenario:", ScenarioChoice::all().to_vec())
        .prompt()
        .context("Prompt cancelled")?;
    let format = Select::new("Output format:", Format::all().to_vec())
        .prompt()
        .context("Prompt cancelled")?;

    let request = Request {
        total_bytes,
        link_bps,
        params,
        parallelism,
        window_secs,
        availability_secs,
        effective_mbps,
        kinds: scenario.kinds(),
    };
    let results = request.run()?;

    println!();
    emit(&results, format, false, None, std::io::stdout().lock())
}
