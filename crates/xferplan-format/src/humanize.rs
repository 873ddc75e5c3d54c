//! Human-readable rendering of quantities.

use xferplan_estimate::{Availability, DurationBreakdown, INFINITE};

const IEC_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Formats bytes as decimal gigabytes with two decimals (e.g. `3500.00`).
#[must_use]
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1e9)
}

/// Formats bits per second as megabits per second with two decimals.
#[must_use]
pub fn format_mbps(bps: f64) -> String {
    if bps.is_finite() {
        format!("{:.2}", bps / 1e6)
    } else {
        INFINITE.to_string()
    }
}

/// Formats seconds as `Xd Yh Zm Ws`, or `infinite`.
#[must_use]
pub fn format_duration(secs: f64) -> String {
    DurationBreakdown::from_secs(secs).map_or_else(|| INFINITE.to_string(), |b| b.to_string())
}

/// Formats bytes with an auto-scaled IEC unit (e.g. `1.50 TiB`).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < IEC_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", IEC_UNITS[unit])
    }
}

/// Formats an availability verdict as `yes`, `no` or `n/a`.
#[must_use]
pub const fn format_availability(availability: Availability) -> &'static str {
    match availability {
        Availability::Fits => "yes",
        Availability::Exceeds => "no",
        Availability::Indeterminate => "n/a",
    }
}
