//! Estimate command implementation.
//!
//! Resolves flags, environment variables and an optional network profile into
//! one [`Request`], runs it for the chosen scenarios and writes the results.

use anyhow::{Context, Result};
use clap::Args;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{info, warn};
use xferplan_lib::prelude::*;
use xferplan_lib::{ProfileDefaults, RangeError, parse_fraction};

use crate::display::{Format, ScenarioChoice, emit, open_output, parse_date};

/// Protocol overhead used when neither a flag nor a profile sets one.
pub(crate) const DEFAULT_OVERHEAD: f64 = 0.15;
/// Compression used when neither a flag nor a profile sets one.
pub(crate) const DEFAULT_COMPRESSION: f64 = 0.0;
/// Parallelism efficacy used when neither a flag nor a profile sets one.
pub(crate) const DEFAULT_PARALLELISM_EFFICACY: f64 = 0.7;
/// Single-stream efficiency used when neither a flag nor a profile sets one.
pub(crate) const DEFAULT_STREAM_EFFICIENCY: f64 = 0.6;

fn parse_parallelism(s: &str) -> Result<NonZeroU32, String> {
    let n: u32 = s.trim().parse().map_err(|e| format!("invalid stream count '{s}': {e}"))?;
    NonZeroU32::new(n).ok_or_else(|| RangeError::Parallelism.to_string())
}

/// Arguments of the `estimate` command.
#[derive(Debug, Args)]
pub(crate) struct EstimateArgs {
    /// Total data to transfer (e.g. 5TB, 500GiB)
    #[arg(short, long, env = "XFERPLAN_DATA", value_parser = parse_size)]
    data: u64,

    /// Link bandwidth (e.g. 1Gbps, 500Mbps)
    #[arg(short, long, env = "XFERPLAN_BANDWIDTH", value_parser = parse_bitrate)]
    bandwidth: u64,

    /// Network profile seeding the parameters below (fastconnect, vpn, internet, lan, conservative)
    #[arg(short, long, env = "XFERPLAN_PROFILE")]
    profile: Option<NetworkProfile>,

    /// Protocol overhead (e.g. 15%) [default: 15%]
    #[arg(long, value_parser = parse_percentage)]
    overhead: Option<f64>,

    /// Volume removed by compression (e.g. 30%) [default: 0%]
    #[arg(long, value_parser = parse_percentage)]
    compression: Option<f64>,

    /// Number of parallel streams [default: 1]
    #[arg(long, value_parser = parse_parallelism)]
    parallelism: Option<NonZeroU32>,

    /// Throughput each extra stream adds, as a fraction of one stream (0..1) [default: 0.7]
    #[arg(long, value_parser = parse_fraction)]
    parallel_efficacy: Option<f64>,

    /// Fraction of usable capacity a single stream reaches (0..1) [default: 0.6]
    #[arg(long, value_parser = parse_fraction)]
    stream_efficiency: Option<f64>,

    /// Daily execution window (e.g. 8h)
    #[arg(short, long, env = "XFERPLAN_WINDOW", default_value = "8h", value_parser = parse_time_window)]
    window: u64,

    /// Total calendar time available (e.g. 7d); 0d means unlimited
    #[arg(short, long, env = "XFERPLAN_AVAILABILITY", default_value = "0d", value_parser = parse_time_window)]
    availability: u64,

    /// Scenario to estimate
    #[arg(short, long, value_enum, default_value = "realistic")]
    scenario: ScenarioChoice,

    /// Output format
    #[arg(short, long, value_enum, env = "XFERPLAN_FORMAT", default_value = "table")]
    format: Format,

    /// Measured effective throughput in Mbps, replacing the throughput model
    #[arg(long)]
    effective_mbps: Option<f64>,

    /// Print a day-by-day plan after each estimate
    #[arg(long)]
    plan: bool,

    /// First day of the plan (YYYY-MM-DD)
    #[arg(long, requires = "plan")]
    start: Option<String>,

    /// Output file path. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// A fully resolved estimation request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Request {
    pub(crate) total_bytes: u64,
    pub(crate) link_bps: u64,
    pub(crate) params: ScenarioParams,
    pub(crate) parallelism: NonZeroU32,
    pub(crate) window_secs: u64,
    pub(crate) availability_secs: u64,
    pub(crate) effective_mbps: Option<f64>,
    pub(crate) kinds: &'static [ScenarioKind],
}

impl Request {
    /// Returns the parameters a profile implies, or the built-in defaults.
    pub(crate) fn seed(profile: Option<NetworkProfile>) -> ProfileDefaults {
        profile.map_or(
            ProfileDefaults {
                params: ScenarioParams::new(
                    DEFAULT_OVERHEAD,
                    DEFAULT_COMPRESSION,
                    DEFAULT_PARALLELISM_EFFICACY,
                    DEFAULT_STREAM_EFFICIENCY,
                ),
                parallelism: NonZeroU32::MIN,
            },
            |profile| profile.defaults(),
        )
    }

    /// Builds the scenario-independent estimator input.
    pub(crate) fn input(&self) -> EstimateInput {
        EstimateInput::new(self.total_bytes, self.link_bps)
            .with_parallelism(self.parallelism)
            .with_daily_window(self.window_secs)
            .with_availability(self.availability_secs)
            .with_throughput_override(self.effective_mbps.map(|mbps| mbps * 1e6))
    }

    /// Validates the parameters and estimates every requested scenario.
    pub(crate) fn run(&self) -> Result<Vec<EstimateResult>> {
        let params = self
            .params
            .validated()
            .context("Invalid scenario parameters")?;
        let input = self.input();

        if let Some(bps) = input.effective_override() {
            warn!(bps, "effective rate override bypasses the throughput model");
        }
        info!(
            total_bytes = self.total_bytes,
            link_bps = self.link_bps,
            parallelism = self.parallelism.get(),
            scenarios = self.kinds.len(),
            "estimating transfer"
        );

        let set = ScenarioSet::derive(params);
        Ok(Estimator::new(input).estimate_kinds(&set, self.kinds))
    }
}

impl EstimateArgs {
    /// Resolves flags over the profile seed over the built-in defaults.
    pub(crate) fn request(&self) -> Request {
        let seed = Request::seed(self.profile);
        Request {
            total_bytes: self.data,
            link_bps: self.bandwidth,
            params: ScenarioParams::new(
                self.overhead.unwrap_or(seed.params.overhead),
                self.compression.unwrap_or(seed.params.compression),
                self.parallel_efficacy
                    .unwrap_or(seed.params.parallelism_efficacy),
                self.stream_efficiency
                    .unwrap_or(seed.params.stream_efficiency),
            ),
            parallelism: self.parallelism.unwrap_or(seed.parallelism),
            window_secs: self.window,
            availability_secs: self.availability,
            effective_mbps: self.effective_mbps,
            kinds: self.scenario.kinds(),
        }
    }
}

/// Estimate a transfer and write the results.
pub(crate) fn estimate(args: &EstimateArgs, quiet: bool) -> Result<()> {
    let start = args.start.as_deref().map(parse_date).transpose()?;
    let results = args.request().run()?;

    let writer = open_output(args.output.as_deref())?;
    emit(&results, args.format, args.plan, start, writer)?;

    if let Some(output) = &args.output
        && !quiet
    {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: EstimateArgs,
    }

    fn parse(argv: &[&str]) -> EstimateArgs {
        let mut full = vec!["xferplan"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_defaults_without_profile() {
        let request = parse(&["--data", "5TB", "--bandwidth", "1Gbps"]).request();
        assert_eq!(request.total_bytes, 5_000_000_000_000);
        assert_eq!(request.link_bps, 1_000_000_000);
        assert_eq!(request.params, ScenarioParams::new(0.15, 0.0, 0.7, 0.6));
        assert_eq!(request.parallelism.get(), 1);
        assert_eq!(request.window_secs, 8 * 3_600);
        assert_eq!(request.availability_secs, 0);
        assert_eq!(request.kinds, &[ScenarioKind::Realistic]);
    }

    #[test]
    fn test_profile_seeds_and_flags_override() {
        let request = parse(&[
            "-d", "1TB", "-b", "100Mbps", "--profile", "vpn", "--compression", "10%",
        ])
        .request();
        assert_eq!(request.params, ScenarioParams::new(0.25, 0.10, 0.70, 0.5));
        assert_eq!(request.parallelism.get(), 4);
    }

    #[test]
    fn test_unit_errors_are_reported() {
        let mut argv = vec!["xferplan", "--data", "5XB", "--bandwidth", "1Gbps"];
        let err = TestCli::try_parse_from(argv.clone()).err().unwrap();
        assert!(err.to_string().contains("XB"));

        argv[2] = "5TB";
        argv.extend(["--parallelism", "0"]);
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_run_all_scenarios() {
        let request = parse(&[
            "-d", "5TB", "-b", "1Gbps", "-p", "fastconnect", "-a", "7d", "-s", "all",
        ])
        .request();
        let results = request.run().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.scenario.name.as_str()).collect();
        assert_eq!(names, ["pessimistic", "realistic", "optimistic"]);
        assert_eq!(results[1].windows(), Bounded::Finite(2));
        assert!(results.iter().all(EstimateResult::fits_within_availability));
    }

    #[test]
    fn test_effective_mbps_override() {
        let request = parse(&["-d", "1GB", "-b", "1Gbps", "--effective-mbps", "80"]).request();
        let results = request.run().unwrap();
        assert!((results[0].duration_secs - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_flags_rejected() {
        for flag in [
            ["--parallel-efficacy", "1.5"],
            ["--overhead", "100%"],
            ["--compression", "-5%"],
        ] {
            let mut argv = vec!["xferplan", "-d", "1GB", "-b", "1Gbps"];
            argv.extend(flag);
            assert!(TestCli::try_parse_from(argv).is_err(), "{flag:?}");
        }
    }

    #[test]
    fn test_invalid_parameters_rejected_at_run() {
        let mut request = parse(&["-d", "1GB", "-b", "1Gbps"]).request();
        request.params.overhead = 1.0;
        assert!(request.run().is_err());
    }
}
