//! Seconds-since-midnight to time-of-day conversion.
//!
//! The presence API reports times as seconds elapsed since midnight (mean
//! arrival, mean departure, ...). [`format_interval`] turns such a number
//! into a [`TimeOffset`] that can be displayed as a wall-clock time.
//!
//! Values outside a single day wrap around: `-1` becomes `23:59:59.000`
//! and `86_401` becomes `00:00:01.000`. Only the time-of-day is kept.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Errors from [`format_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    #[error("interval must be a finite number of seconds")]
    NonFinite,

    #[error("interval of {0} seconds is too large to represent")]
    OutOfRange(f64),
}

/// A time of day with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOffset(NaiveTime);

impl TimeOffset {
    /// Midnight, `00:00:00.000`.
    pub const MIDNIGHT: TimeOffset = TimeOffset(NaiveTime::MIN);

    /// Build from components. Returns `None` when any component is out of
    /// its clock range.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(Self)
    }

    fn from_millis_of_day(millis: u32) -> Option<Self> {
        NaiveTime::from_num_seconds_from_midnight_opt(millis / 1000, (millis % 1000) * 1_000_000)
            .map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Whole seconds since midnight, ignoring milliseconds.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Milliseconds since midnight.
    pub fn total_millis(&self) -> u64 {
        u64::from(self.seconds_since_midnight()) * 1000 + u64::from(self.millisecond())
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.3f"))
    }
}

/// Convert a number of seconds since midnight into a time of day.
///
/// Fractional seconds are rounded to the nearest millisecond. Inputs
/// outside `[0, 86400)` wrap around the day.
pub fn format_interval(seconds: f64) -> Result<TimeOffset, IntervalError> {
    if !seconds.is_finite() {
        return Err(IntervalError::NonFinite);
    }

    let millis = (seconds * 1000.0).round();
    // i64::MAX is not exactly representable; anything at or past the
    // nearest f64 would saturate on the cast.
    if millis.abs() >= i64::MAX as f64 {
        return Err(IntervalError::OutOfRange(seconds));
    }

    let of_day = (millis as i64).rem_euclid(MILLIS_PER_DAY);
    u32::try_from(of_day)
        .ok()
        .and_then(TimeOffset::from_millis_of_day)
        .ok_or(IntervalError::OutOfRange(seconds))
}

/// Signed number of whole seconds from `start` to `end`.
pub fn interval(start: TimeOffset, end: TimeOffset) -> i64 {
    i64::from(end.seconds_since_midnight()) - i64::from(start.seconds_since_midnight())
}

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(items: &[f64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().sum::<f64>() / items.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_midnight() {
        let t = format_interval(0.0).unwrap();
        assert_eq!(t, TimeOffset::MIDNIGHT);
        assert_eq!(t.to_string(), "00:00:00.000");
    }

    #[test]
    fn one_hour_one_minute_one_second() {
        let t = format_interval(3661.0).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (1, 1, 1, 0));
        assert_eq!(t.to_string(), "01:01:01.000");
    }

    #[test]
    fn fractional_seconds_keep_millis() {
        let t = format_interval(30047.25).unwrap();
        assert_eq!(t.to_string(), "08:20:47.250");
        assert_eq!(t.millisecond(), 250);
    }

    #[test]
    fn total_millis_matches_rounded_input_within_a_day() {
        let samples = [
            0.0, 0.0004, 0.0005, 0.001, 1.5, 59.999, 3600.0, 36335.0, 43199.123, 67747.0,
            86399.999,
        ];
        for s in samples {
            let t = format_interval(s).unwrap();
            assert_eq!(t.total_millis(), (s * 1000.0).round() as u64, "seconds = {s}");
        }

        let mut s = 0.0;
        while s < 86400.0 {
            let t = format_interval(s).unwrap();
            assert_eq!(t.total_millis(), (s * 1000.0).round() as u64, "seconds = {s}");
            s += 777.777;
        }
    }

    #[test]
    fn wraps_past_end_of_day() {
        assert_eq!(format_interval(86400.0).unwrap(), TimeOffset::MIDNIGHT);
        assert_eq!(format_interval(86401.0).unwrap().to_string(), "00:00:01.000");
        assert_eq!(format_interval(3.0 * 86400.0 + 60.0).unwrap().to_string(), "00:01:00.000");
    }

    #[test]
    fn negative_wraps_backwards() {
        assert_eq!(format_interval(-1.0).unwrap().to_string(), "23:59:59.000");
        assert_eq!(format_interval(-0.5).unwrap().to_string(), "23:59:59.500");
    }

    #[test]
    fn rounding_up_to_a_full_day_wraps() {
        assert_eq!(format_interval(86399.9996).unwrap(), TimeOffset::MIDNIGHT);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(format_interval(f64::NAN), Err(IntervalError::NonFinite));
        assert_eq!(format_interval(f64::INFINITY), Err(IntervalError::NonFinite));
        assert_eq!(format_interval(f64::NEG_INFINITY), Err(IntervalError::NonFinite));
    }

    #[test]
    fn huge_values_are_rejected() {
        assert!(matches!(format_interval(1e300), Err(IntervalError::OutOfRange(_))));
        assert!(matches!(format_interval(-1e17), Err(IntervalError::OutOfRange(_))));
    }

    #[test]
    fn seconds_since_midnight_ignores_millis() {
        let t = TimeOffset::from_hms_milli(10, 5, 35, 900).unwrap();
        assert_eq!(t.seconds_since_midnight(), 36335);
        let t = TimeOffset::from_hms_milli(18, 49, 7, 0).unwrap();
        assert_eq!(t.seconds_since_midnight(), 67747);
    }

    #[test]
    fn interval_between_offsets() {
        let start = TimeOffset::from_hms_milli(9, 39, 5, 0).unwrap();
        let stop = TimeOffset::from_hms_milli(17, 59, 52, 0).unwrap();
        assert_eq!(interval(start, stop), 30047);

        let start = TimeOffset::from_hms_milli(3, 15, 41, 0).unwrap();
        let stop = TimeOffset::from_hms_milli(20, 55, 22, 0).unwrap();
        assert_eq!(interval(start, stop), 63581);
        assert_eq!(interval(stop, start), -63581);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2345.0, 6789.0]), 4567.0);
    }

    #[test]
    fn invalid_components_are_rejected() {
        assert!(TimeOffset::from_hms_milli(24, 0, 0, 0).is_none());
        assert!(TimeOffset::from_hms_milli(0, 60, 0, 0).is_none());
    }
}
