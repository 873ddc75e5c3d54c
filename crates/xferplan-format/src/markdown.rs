//! Markdown output format.

use std::io::Write;
use xferplan_estimate::EstimateResult;

use crate::formatter::summary_rows;
use crate::{FormatError, Formatter};

/// Markdown formatter with one heading and table per scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a new Markdown formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for MarkdownFormatter {
    fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "### Scenario: {}", result.scenario.name)?;
            writeln!(writer)?;
            writeln!(writer, "| Field | Value |")?;
            writeln!(writer, "|---|---:|")?;
            for (label, value) in summary_rows(result) {
                writeln!(writer, "| {label} | {value} |")?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "md"
    }
}
