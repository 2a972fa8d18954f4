//! Coarse single-unit ages such as `3D` or `45s`.

use std::fmt;

use chrono::{DateTime, Utc};

const SECOND: i64 = 1;
const MINUTE: i64 = SECOND * 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const WEEK: i64 = DAY * 7;
// 30.4 days, truncated to whole seconds
const MONTH: i64 = DAY * 304 / 10;
const YEAR: i64 = MONTH * 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Largest unit first, so the first threshold that fits wins.
    const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Second => SECOND,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => WEEK,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "D",
            TimeUnit::Week => "W",
            TimeUnit::Month => "M",
            TimeUnit::Year => "Y",
        }
    }
}

/// An elapsed time expressed in exactly one unit, e.g. `{ 3, Day }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyTime {
    pub magnitude: u64,
    pub unit: TimeUnit,
}

impl fmt::Display for FuzzyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.symbol())
    }
}

/// Approximate `now - timestamp` (both unix seconds) with the largest unit
/// that fits.
///
/// Anything under one second, including a timestamp in the future, yields
/// `0s`.
pub fn fuzzy_time(timestamp: i64, now: i64) -> FuzzyTime {
    let elapsed = now.saturating_sub(timestamp);

    TimeUnit::DESCENDING
        .iter()
        .find(|unit| elapsed >= unit.seconds())
        .map(|&unit| FuzzyTime {
            magnitude: (elapsed / unit.seconds()) as u64,
            unit,
        })
        .unwrap_or(FuzzyTime {
            magnitude: 0,
            unit: TimeUnit::Second,
        })
}

pub fn fuzzy_since(pushed_at: &DateTime<Utc>, now: i64) -> FuzzyTime {
    fuzzy_time(pushed_at.timestamp(), now)
}
