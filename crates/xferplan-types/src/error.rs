//! Error types for xferplan.

use thiserror::Error;

/// Result type alias for xferplan operations.
pub type Result<T> = std::result::Result<T, XferplanError>;

/// Errors that can occur while building an estimate from raw input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XferplanError {
    /// Malformed literal or unrecognized unit.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Value outside its allowed domain.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Kind of quantity a literal was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Data size (bytes).
    Size,
    /// Bitrate (bits per second).
    Bitrate,
    /// Time window (seconds).
    TimeWindow,
    /// Percentage (0 to 100).
    Percentage,
    /// Plain fraction (0 to 1).
    Fraction,
}

impl Quantity {
    /// Returns the quantity as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Bitrate => "bitrate",
            Self::TimeWindow => "time window",
            Self::Percentage => "percentage",
            Self::Fraction => "fraction",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for literals that cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The unit suffix is not part of the quantity's unit table.
    #[error("unknown {quantity} unit '{unit}' in '{literal}', expected one of: {expected}")]
    InvalidUnit {
        /// Quantity being parsed.
        quantity: Quantity,
        /// The full literal as given.
        literal: String,
        /// The offending suffix.
        unit: String,
        /// Accepted suffixes.
        expected: &'static str,
    },

    /// The numeric part is empty or malformed.
    #[error("invalid number '{number}' in {quantity} '{literal}'")]
    InvalidNumber {
        /// Quantity being parsed.
        quantity: Quantity,
        /// The full literal as given.
        literal: String,
        /// The numeric prefix that failed to parse.
        number: String,
    },
}

/// Error for values outside their allowed domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Percentage not within `0 <= v < 100`.
    #[error("percentage must satisfy 0 <= v < 100, got {value} in '{literal}'")]
    Percentage {
        /// The full literal as given.
        literal: String,
        /// Parsed percentage value.
        value: f64,
    },

    /// Fraction outside its allowed interval.
    #[error("{name} must be within {bounds}, got {value}")]
    Fraction {
        /// Parameter name.
        name: &'static str,
        /// Human readable interval, e.g. `[0, 1)`.
        bounds: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Parallel stream count of zero.
    #[error("parallel stream count must be at least 1")]
    Parallelism,

    /// Negative size, bitrate or time window.
    #[error("{quantity} '{literal}' must not be negative")]
    Negative {
        /// Quantity being parsed.
        quantity: Quantity,
        /// The full literal as given.
        literal: String,
    },

    /// Value does not fit the canonical integer unit.
    #[error("{quantity} '{literal}' is too large")]
    Overflow {
        /// Quantity being parsed.
        quantity: Quantity,
        /// The full literal as given.
        literal: String,
    },
}
