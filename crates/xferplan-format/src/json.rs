//! JSON output format.

use std::io::Write;
use xferplan_estimate::EstimateResult;

use crate::{FormatError, Formatter};

/// JSON formatter.
///
/// A single result is written as an object, anything else as an array.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<W: Write, T: serde::Serialize + ?Sized>(
        &self,
        value: &T,
        writer: &mut W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_results<W: Write>(
        &self,
        results: &[EstimateResult],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match results {
            [single] => self.write_value(single, &mut writer)?,
            many => self.write_value(many, &mut writer)?,
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
