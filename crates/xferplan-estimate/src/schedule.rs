//! Transfer duration and daily window scheduling.

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Rendering of unbounded values in text and serialized output.
pub const INFINITE: &str = "infinite";

/// A count that may be unbounded.
///
/// Used where an integer quantity (windows, days, seconds) has no finite
/// value because the transfer never completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bounded<T> {
    /// A finite value.
    Finite(T),
    /// No finite value exists.
    Infinite,
}

impl<T> Bounded<T> {
    /// Returns true if there is no finite value.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn finite(self) -> Option<T> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite => None,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Bounded<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str(INFINITE),
        }
    }
}

impl<T: Serialize> Serialize for Bounded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => value.serialize(serializer),
            Self::Infinite => serializer.serialize_str(INFINITE),
        }
    }
}

/// Serializes seconds as a number, or as `"infinite"` when unbounded.
pub(crate) fn serialize_seconds<S: Serializer>(secs: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if secs.is_finite() {
        serializer.serialize_f64(*secs)
    } else {
        serializer.serialize_str(INFINITE)
    }
}

/// Whether a schedule fits the availability horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// The required days fit, or no horizon constrains a finite schedule.
    Fits,
    /// The required days exceed the horizon.
    Exceeds,
    /// The transfer never completes and no horizon was given.
    Indeterminate,
}

impl Availability {
    /// Returns true only when the schedule is known to fit.
    #[must_use]
    pub const fn fits(&self) -> bool {
        matches!(self, Self::Fits)
    }

    /// Returns the verdict as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fits => "fits",
            Self::Exceeds => "exceeds",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the data volume left after compression, in whole bytes.
#[must_use]
pub fn compressed_volume(total_bytes: u64, compression: f64) -> u64 {
    (total_bytes as f64 * (1.0 - compression)).max(0.0) as u64
}

/// Returns the seconds needed to move `volume_bytes` at `throughput_bps`.
///
/// A throughput of zero or less never completes and yields `f64::INFINITY`.
#[must_use]
pub fn transfer_duration_secs(volume_bytes: u64, throughput_bps: f64) -> f64 {
    if throughput_bps > 0.0 {
        volume_bytes as f64 * 8.0 / throughput_bps
    } else {
        f64::INFINITY
    }
}

/// Decomposition of a transfer into daily execution windows.
///
/// One window runs per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Length of the daily window in seconds.
    pub window_secs: u64,
    /// Windows needed to complete the transfer.
    pub windows: Bounded<u64>,
    /// Calendar days needed.
    pub days: Bounded<u64>,
    /// Unused seconds of the final window.
    pub leftover_secs: Bounded<u64>,
    /// Verdict against the availability horizon.
    pub availability: Availability,
}

impl Schedule {
    /// Plans a transfer of `duration_secs` into daily windows of `window_secs`.
    ///
    /// `horizon_secs` is the total calendar time available; 0 means unlimited.
    #[must_use]
    pub fn plan(duration_secs: f64, window_secs: u64, horizon_secs: u64) -> Self {
        if !duration_secs.is_finite() || window_secs == 0 {
            let availability = if horizon_secs > 0 {
                Availability::Exceeds
            } else {
                Availability::Indeterminate
            };
            trace!(duration_secs, window_secs, "transfer has no finite schedule");
            return Self {
                window_secs,
                windows: Bounded::Infinite,
                days: Bounded::Infinite,
                leftover_secs: Bounded::Infinite,
                availability,
            };
        }

        let window = window_secs as f64;
        let windows = (duration_secs / window).ceil() as u64;
        let days = windows;
        let leftover = (windows as f64 * window - duration_secs).max(0.0) as u64;
        let availability =
            if horizon_secs == 0 || days.saturating_mul(SECONDS_PER_DAY) <= horizon_secs {
                Availability::Fits
            } else {
                Availability::Exceeds
            };

        trace!(duration_secs, windows, leftover, %availability, "planned schedule");
        Self {
            window_secs,
            windows: Bounded::Finite(windows),
            days: Bounded::Finite(days),
            leftover_secs: Bounded::Finite(leftover),
            availability,
        }
    }

    /// Returns the per-day plan, or `None` if the transfer never completes.
    #[must_use]
    pub fn day_plan(&self) -> Option<DayPlan> {
        let days = self.days.finite()?;
        let leftover = self.leftover_secs.finite()?;
        Some(DayPlan {
            next: 1,
            days,
            window_secs: self.window_secs,
            last_active_secs: self.window_secs.saturating_sub(leftover),
            start: None,
        })
    }

    /// Returns the date of the final window for a transfer starting on `start`.
    ///
    /// `None` if the transfer never completes, needs no windows, or the date
    /// is out of range.
    #[must_use]
    pub fn completion_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        let days = self.days.finite().filter(|days| *days > 0)?;
        start.checked_add_days(Days::new(days - 1))
    }
}

/// One day of a transfer plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedDay {
    /// Day number, starting at 1.
    pub day: u64,
    /// Calendar date, when the plan has a start date.
    pub date: Option<NaiveDate>,
    /// Seconds of the window spent transferring.
    pub active_secs: u64,
}

/// Iterator over the days of a finite schedule.
///
/// Every day runs a full window except the last, which runs the window
/// minus the leftover.
#[derive(Debug, Clone)]
pub struct DayPlan {
    next: u64,
    days: u64,
    window_secs: u64,
    last_active_secs: u64,
    start: Option<NaiveDate>,
}

impl DayPlan {
    /// Attaches calendar dates, with day 1 on `start`.
    #[must_use]
    pub const fn starting(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }
}

impl Iterator for DayPlan {
    type Item = PlannedDay;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.days {
            return None;
        }

        let day = self.next;
        self.next += 1;
        let active_secs = if day == self.days {
            self.last_active_secs
        } else {
            self.window_secs
        };
        let date = self
            .start
            .and_then(|start| start.checked_add_days(Days::new(day - 1)));

        Some(PlannedDay {
            day,
            date,
            active_secs,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.days + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayPlan {}
