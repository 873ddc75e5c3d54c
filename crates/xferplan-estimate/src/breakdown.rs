//! Human-readable decomposition of a duration.

use chrono::TimeDelta;

/// A duration split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationBreakdown {
    /// Whole days.
    pub days: i64,
    /// Hours within the last day.
    pub hours: i64,
    /// Minutes within the last hour.
    pub minutes: i64,
    /// Seconds within the last minute.
    pub seconds: i64,
}

impl DurationBreakdown {
    /// Breaks `secs` down, rounded to the nearest whole second.
    ///
    /// Returns `None` for infinite, NaN, negative or out-of-range input.
    #[must_use]
    pub fn from_secs(secs: f64) -> Option<Self> {
        if !secs.is_finite() || secs < 0.0 || secs >= i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_seconds(secs.round() as i64).map(Self::from_delta)
    }

    /// Breaks a [`TimeDelta`] down.
    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        let days = delta.num_days();
        let rem = delta - TimeDelta::days(days);
        let hours = rem.num_hours();
        let rem = rem - TimeDelta::hours(hours);
        let minutes = rem.num_minutes();
        let seconds = (rem - TimeDelta::minutes(minutes)).num_seconds();
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown() {
        let b = DurationBreakdown::from_secs(32_941.18).unwrap();
        assert_eq!(b.to_string(), "0d 9h 9m 1s");

        let b = DurationBreakdown::from_secs(2.0 * 86_400.0 + 3_725.0).unwrap();
        assert_eq!(
            b,
            DurationBreakdown {
                days: 2,
                hours: 1,
                minutes: 2,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_breakdown_rounds_to_nearest_second() {
        let b = DurationBreakdown::from_secs(42_666.67).unwrap();
        assert_eq!(b.to_string(), "0d 11h 51m 7s");
        assert_eq!(DurationBreakdown::from_secs(59.4).unwrap().seconds, 59);
        assert_eq!(
            DurationBreakdown::from_secs(59.6).unwrap().to_string(),
            "0d 0h 1m 0s"
        );
    }

    #[test]
    fn test_breakdown_rejects_unbounded() {
        assert!(DurationBreakdown::from_secs(f64::INFINITY).is_none());
        assert!(DurationBreakdown::from_secs(f64::NAN).is_none());
        assert!(DurationBreakdown::from_secs(-1.0).is_none());
    }
}
