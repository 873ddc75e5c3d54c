//! Plain-text block output.

use std::io::Write;
use xferplan_estimate::EstimateResult;

use crate::formatter::summary_rows;
use crate::{FormatError, Formatter};

const TITLE: &str = "==================== Transfer Estimate ====================";
const RULE: &str = "-----------------------------------------------------------";

/// Human-readable formatter with one block per scenario.
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    /// Whether to print the banner above each block.
    banner: bool,
}

impl TableFormatter {
    /// Creates a new table formatter with banners.
    #[must_use]
    pub const fn new() -> Self {
        Self { banner: true }
    }

    /// Sets whether to print the banner.
    #[must_use]
    pub const fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}

impl Formatter for TableFormatter {
    fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            let rows = summary_rows(result);
            let (first, rest) = rows.split_at(1);

            if self.banner {
                writeln!(writer, "{TITLE}")?;
            }
            for (label, value) in first {
                writeln!(writer, "{label}: {value}")?;
            }
            writeln!(writer, "{RULE}")?;
            for (label, value) in rest {
                writeln!(writer, "{label}: {value}")?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
