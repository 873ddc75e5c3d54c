//! Unit-aware parsing of sizes, bitrates, time windows and percentages.
//!
//! Every parser accepts a numeric literal immediately followed by a unit
//! suffix. Whitespace anywhere in the literal is ignored, `,` and `.` are
//! both accepted as the fractional separator, and suffixes match exactly
//! (`Mb` is not `MB`). An unknown suffix or a malformed number is always an
//! error; nothing is silently defaulted except a missing suffix, which means
//! the base unit of the quantity. A leading `-` is read as part of the
//! number, so negative literals fail the range check rather than the unit
//! lookup.

use std::str::FromStr;

use crate::{ParseError, Quantity, RangeError, Result};

/// A table of unit suffixes scaling into one canonical integer unit.
pub trait UnitSuffix: Copy + Sized + 'static {
    /// Quantity the table measures.
    const QUANTITY: Quantity;

    /// Accepted suffixes, for error messages.
    const EXPECTED: &'static str;

    /// Unit assumed when the literal has no suffix.
    const BASE: Self;

    /// Returns every unit of the table.
    fn units() -> &'static [Self];

    /// Returns the canonical suffix.
    fn suffix(&self) -> &'static str;

    /// Returns how many canonical units one of this unit is worth.
    fn factor(&self) -> u64;

    /// Looks up a suffix. Case matters.
    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::units()
            .iter()
            .copied()
            .find(|unit| unit.suffix() == suffix)
    }

    /// Renders a canonical value in this unit (e.g. `1.5TiB`).
    ///
    /// The output parses back to `value` up to floating-point rounding.
    fn render(&self, value: u64) -> String {
        format!("{}{}", value as f64 / self.factor() as f64, self.suffix())
    }
}

/// Byte multiples for data sizes, SI (powers of 1000) and IEC (powers of 1024).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeUnit {
    /// Bytes.
    #[default]
    Byte,
    /// 10^3 bytes.
    Kilobyte,
    /// 10^6 bytes.
    Megabyte,
    /// 10^9 bytes.
    Gigabyte,
    /// 10^12 bytes.
    Terabyte,
    /// 10^15 bytes.
    Petabyte,
    /// 2^10 bytes.
    Kibibyte,
    /// 2^20 bytes.
    Mebibyte,
    /// 2^30 bytes.
    Gibibyte,
    /// 2^40 bytes.
    Tebibyte,
    /// 2^50 bytes.
    Pebibyte,
}

impl SizeUnit {
    /// Returns the number of bytes in one unit.
    #[must_use]
    pub const fn multiplier(&self) -> u64 {
        match self {
            Self::Byte => 1,
            Self::Kilobyte => 1_000,
            Self::Megabyte => 1_000_000,
            Self::Gigabyte => 1_000_000_000,
            Self::Terabyte => 1_000_000_000_000,
            Self::Petabyte => 1_000_000_000_000_000,
            Self::Kibibyte => 1 << 10,
            Self::Mebibyte => 1 << 20,
            Self::Gibibyte => 1 << 30,
            Self::Tebibyte => 1 << 40,
            Self::Pebibyte => 1 << 50,
        }
    }

    /// Returns the unit suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "KB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
            Self::Petabyte => "PB",
            Self::Kibibyte => "KiB",
            Self::Mebibyte => "MiB",
            Self::Gibibyte => "GiB",
            Self::Tebibyte => "TiB",
            Self::Pebibyte => "PiB",
        }
    }

    /// Returns all size units.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Byte,
            Self::Kilobyte,
            Self::Megabyte,
            Self::Gigabyte,
            Self::Terabyte,
            Self::Petabyte,
            Self::Kibibyte,
            Self::Mebibyte,
            Self::Gibibyte,
            Self::Tebibyte,
            Self::Pebibyte,
        ]
    }
}

impl UnitSuffix for SizeUnit {
    const QUANTITY: Quantity = Quantity::Size;
    const EXPECTED: &'static str = "B, KB, MB, GB, TB, PB, KiB, MiB, GiB, TiB, PiB";
    const BASE: Self = Self::Byte;

    fn units() -> &'static [Self] {
        Self::all()
    }

    fn suffix(&self) -> &'static str {
        self.as_str()
    }

    fn factor(&self) -> u64 {
        self.multiplier()
    }
}

/// Bitrate units (powers of 1000 bits per second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitrateUnit {
    /// Bits per second.
    #[default]
    Bps,
    /// 10^3 bits per second.
    Kbps,
    /// 10^6 bits per second.
    Mbps,
    /// 10^9 bits per second.
    Gbps,
    /// 10^12 bits per second.
    Tbps,
}

impl BitrateUnit {
    /// Returns the number of bits per second in one unit.
    #[must_use]
    pub const fn multiplier(&self) -> u64 {
        match self {
            Self::Bps => 1,
            Self::Kbps => 1_000,
            Self::Mbps => 1_000_000,
            Self::Gbps => 1_000_000_000,
            Self::Tbps => 1_000_000_000_000,
        }
    }

    /// Returns the unit suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bps => "bps",
            Self::Kbps => "Kbps",
            Self::Mbps => "Mbps",
            Self::Gbps => "Gbps",
            Self::Tbps => "Tbps",
        }
    }

    /// Returns all bitrate units.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bps, Self::Kbps, Self::Mbps, Self::Gbps, Self::Tbps]
    }
}

impl UnitSuffix for BitrateUnit {
    const QUANTITY: Quantity = Quantity::Bitrate;
    const EXPECTED: &'static str = "bps, Kbps, Mbps, Gbps, Tbps";
    const BASE: Self = Self::Bps;

    fn units() -> &'static [Self] {
        Self::all()
    }

    fn suffix(&self) -> &'static str {
        self.as_str()
    }

    fn factor(&self) -> u64 {
        self.multiplier()
    }
}

/// Time window units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Seconds.
    #[default]
    Second,
    /// 60 seconds.
    Minute,
    /// 3600 seconds.
    Hour,
    /// 86400 seconds.
    Day,
}

impl TimeUnit {
    /// Returns the number of seconds in one unit.
    #[must_use]
    pub const fn multiplier(&self) -> u64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3_600,
            Self::Day => 86_400,
        }
    }

    /// Returns the unit suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
        }
    }

    /// Returns all time units.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Second, Self::Minute, Self::Hour, Self::Day]
    }
}

impl UnitSuffix for TimeUnit {
    const QUANTITY: Quantity = Quantity::TimeWindow;
    const EXPECTED: &'static str = "s, m, h, d";
    const BASE: Self = Self::Second;

    fn units() -> &'static [Self] {
        Self::all()
    }

    fn suffix(&self) -> &'static str {
        self.as_str()
    }

    fn factor(&self) -> u64 {
        self.multiplier()
    }
}

macro_rules! unit_str_impls {
    ($($unit:ty),* $(,)?) => {$(
        impl std::fmt::Display for $unit {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $unit {
            type Err = ParseError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let suffix = s.trim();
                <Self as UnitSuffix>::from_suffix(suffix).ok_or_else(|| ParseError::InvalidUnit {
                    quantity: <Self as UnitSuffix>::QUANTITY,
                    literal: s.to_string(),
                    unit: suffix.to_string(),
                    expected: <Self as UnitSuffix>::EXPECTED,
                })
            }
        }
    )*};
}

unit_str_impls!(SizeUnit, BitrateUnit, TimeUnit);

/// A literal split into its numeric prefix and unit suffix.
#[derive(Debug)]
struct Literal {
    number: String,
    suffix: String,
}

impl Literal {
    fn split(raw: &str) -> Self {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let sign = usize::from(compact.starts_with('-'));
        let boundary = compact[sign..]
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .map_or(compact.len(), |i| i + sign);
        let (number, suffix) = compact.split_at(boundary);
        Self {
            number: number.to_string(),
            suffix: suffix.to_string(),
        }
    }

    fn value(&self, quantity: Quantity, raw: &str) -> Result<f64> {
        self.number
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                ParseError::InvalidNumber {
                    quantity,
                    literal: raw.to_string(),
                    number: self.number.clone(),
                }
                .into()
            })
    }
}

/// Parses a literal against a unit table into the table's canonical unit.
///
/// The suffix is checked before the number, so `"5XB"` reports the unit.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUnit`] for an unknown suffix,
/// [`ParseError::InvalidNumber`] for a malformed number,
/// [`RangeError::Negative`] for a value below zero and
/// [`RangeError::Overflow`] when the result does not fit in a `u64`.
pub fn parse_scaled<U: UnitSuffix>(literal: &str) -> Result<u64> {
    let parts = Literal::split(literal);
    let unit = if parts.suffix.is_empty() {
        U::BASE
    } else {
        U::from_suffix(&parts.suffix).ok_or_else(|| ParseError::InvalidUnit {
            quantity: U::QUANTITY,
            literal: literal.to_string(),
            unit: parts.suffix.clone(),
            expected: U::EXPECTED,
        })?
    };
    let scaled = parts.value(U::QUANTITY, literal)? * unit.factor() as f64;

    if scaled < 0.0 {
        return Err(RangeError::Negative {
            quantity: U::QUANTITY,
            literal: literal.to_string(),
        }
        .into());
    }
    if scaled >= u64::MAX as f64 {
        return Err(RangeError::Overflow {
            quantity: U::QUANTITY,
            literal: literal.to_string(),
        }
        .into());
    }
    Ok(scaled as u64)
}

/// Parses a data size such as `500GB`, `5 TiB` or `1,5TB` into bytes.
///
/// # Errors
///
/// Returns an error for unknown suffixes or malformed numbers.
pub fn parse_size(literal: &str) -> Result<u64> {
    parse_scaled::<SizeUnit>(literal)
}

/// Parses a bitrate such as `1Gbps` or `500 Mbps` into bits per second.
///
/// # Errors
///
/// Returns an error for unknown suffixes or malformed numbers.
pub fn parse_bitrate(literal: &str) -> Result<u64> {
    parse_scaled::<BitrateUnit>(literal)
}

/// Parses a time window such as `8h`, `12 m` or `1.5d` into seconds.
///
/// # Errors
///
/// Returns an error for unknown suffixes or malformed numbers.
pub fn parse_time_window(literal: &str) -> Result<u64> {
    parse_scaled::<TimeUnit>(literal)
}

/// Parses `15` or `15%` into the fraction `0.15`.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input and
/// [`RangeError::Percentage`] unless `0 <= v < 100`.
pub fn parse_percentage(literal: &str) -> Result<f64> {
    let parts = Literal::split(literal);
    if !parts.suffix.is_empty() && parts.suffix != "%" {
        return Err(ParseError::InvalidUnit {
            quantity: Quantity::Percentage,
            literal: literal.to_string(),
            unit: parts.suffix,
            expected: "%",
        }
        .into());
    }

    let value = parts.value(Quantity::Percentage, literal)?;
    if !(0.0..100.0).contains(&value) {
        return Err(RangeError::Percentage {
            literal: literal.to_string(),
            value,
        }
        .into());
    }
    Ok(value / 100.0)
}

/// Parses a plain fraction such as `0.85` and checks it lies in `[0, 1]`.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input (including any suffix) and
/// [`RangeError::Fraction`] unless `0 <= v <= 1`.
pub fn parse_fraction(literal: &str) -> Result<f64> {
    let parts = Literal::split(literal);
    if !parts.suffix.is_empty() {
        return Err(ParseError::InvalidUnit {
            quantity: Quantity::Fraction,
            literal: literal.to_string(),
            unit: parts.suffix,
            expected: "no unit",
        }
        .into());
    }

    let value = parts.value(Quantity::Fraction, literal)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(RangeError::Fraction {
            name: "fraction",
            bounds: "[0, 1]",
            value,
        }
        .into());
    }
    Ok(value)
}
