//! CSV output format.

use std::borrow::Cow;
use std::io::Write;
use xferplan_estimate::{Bounded, EstimateResult};

use crate::humanize::{format_gigabytes, format_mbps};
use crate::{FormatError, Formatter};

/// CSV formatter with one row per scenario.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes `value` when it holds the delimiter, a quote or a line break.
    fn field<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(value: Bounded<u64>) -> String {
    value.finite().map_or_else(|| "inf".to_string(), |v| v.to_string())
}

impl Formatter for CsvFormatter {
    fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "scenario{d}volume_gb{d}throughput_mbps{d}duration_secs{d}windows{d}days{d}leftover_secs{d}fits"
            )?;
        }

        for result in results {
            let duration = if result.duration_secs.is_finite() {
                (result.duration_secs as u64).to_string()
            } else {
                "inf".to_string()
            };
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.field(&result.scenario.name),
                format_gigabytes(result.volume_bytes),
                format_mbps(result.throughput_bps),
                duration,
                cell(result.windows()),
                cell(result.days()),
                cell(result.leftover_secs()),
                result.fits_within_availability()
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use xferplan_estimate::{EstimateInput, estimate};
    use xferplan_types::{Scenario, ScenarioParams};

    fn create_test_results() -> Vec<EstimateResult> {
        let input = EstimateInput::new(5_000_000_000_000, 1_000_000_000)
            .try_with_parallelism(4)
            .unwrap();
        vec![
            estimate(
                &input,
                &Scenario::new("realistic", ScenarioParams::new(0.15, 0.30, 0.85, 0.6)),
            ),
            estimate(
                &input,
                &Scenario::new("blocked", ScenarioParams::new(1.0, 0.0, 1.0, 1.0)),
            ),
        ]
    }

    #[test]
    fn test_csv_rows() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_results(&create_test_results(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "scenario,volume_gb,throughput_mbps,duration_secs,windows,days,leftover_secs,fits"
        );
        assert_eq!(lines[1], "realistic,3500.00,850.00,32941,2,2,24658,true");
        assert_eq!(lines[2], "blocked,5000.00,0.00,inf,inf,inf,inf,false");
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_results(&create_test_results(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("scenario,volume_gb"));
        assert_eq!(result.lines().count(), 2);
    }

    #[test]
    fn test_default_matches_new() {
        let mut from_default = Cursor::new(Vec::new());
        let mut from_new = Cursor::new(Vec::new());
        let results = create_test_results();

        CsvFormatter::default()
            .write_results(&results, &mut from_default)
            .unwrap();
        CsvFormatter::new()
            .write_results(&results, &mut from_new)
            .unwrap();

        assert_eq!(from_default.into_inner(), from_new.into_inner());
    }

    #[test]
    fn test_scenario_name_is_quoted_when_needed() {
        let input = EstimateInput::new(1_000_000_000, 1_000_000_000);
        let params = ScenarioParams::new(0.0, 0.0, 1.0, 1.0);
        let results: Vec<_> = ["wan, night", "say \"hi\"", "two\nlines", "plain"]
            .into_iter()
            .map(|name| estimate(&input, &Scenario::new(name, params)))
            .collect();
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new()
            .with_header(false)
            .write_results(&results, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("\"wan, night\",1.00,"));
        assert!(result.contains("\"say \"\"hi\"\"\",1.00,"));
        assert!(result.contains("\"two\nlines\",1.00,"));
        assert!(result.contains("\nplain,1.00,"));
    }

    #[test]
    fn test_tsv_quotes_only_tabs() {
        let input = EstimateInput::new(1_000_000_000, 1_000_000_000);
        let params = ScenarioParams::new(0.0, 0.0, 1.0, 1.0);
        let results = vec![
            estimate(&input, &Scenario::new("a,b", params)),
            estimate(&input, &Scenario::new("a\tb", params)),
        ];
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::tsv()
            .with_header(false)
            .write_results(&results, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert!(lines[0].starts_with("a,b\t"));
        assert!(lines[1].starts_with("\"a\tb\"\t"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_results(&create_test_results(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("scenario\tvolume_gb\tthroughput_mbps"));
    }
}
