//! Minute-of-day time value used by activities, sub-steps and flow blocks.
//!
//! On the wire a `ClockTime` is an `HH:MM` string. Internally it is a plain
//! minute offset so the analyzer can do interval arithmetic without caring
//! about calendar dates. Values past `23:59` are allowed on output (the last
//! analysis window of a shift may run over) and are printed as `24:10` etc.

use crate::errors::AppError;
use crate::utils::time::{format_minutes, minutes_of_day, parse_time_strict};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i64);

impl ClockTime {
    /// Build from hours and minutes (`ClockTime::hm(9, 30)` → `09:30`).
    pub const fn hm(hours: i64, minutes: i64) -> Self {
        Self(hours * 60 + minutes)
    }

    pub const fn minutes(self) -> i64 {
        self.0
    }

    /// Signed distance in minutes from `self` to `later`.
    pub const fn minutes_until(self, later: ClockTime) -> i64 {
        later.0 - self.0
    }

    /// Saturates instead of overflowing on absurdly long intervals.
    pub const fn add_minutes(self, minutes: i64) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_strict(s.trim()).map(|t| Self(minutes_of_day(t)))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Accepted input shapes: `"HH:MM"` or a raw minute-of-day integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClock {
    Text(String),
    Minutes(i64),
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawClock::deserialize(deserializer)? {
            RawClock::Text(s) => s.parse().map_err(serde::de::Error::custom),
            RawClock::Minutes(m) if (0..MINUTES_PER_DAY).contains(&m) => Ok(Self(m)),
            RawClock::Minutes(m) => Err(serde::de::Error::custom(format!(
                "minute of day {m} out of range 0..={}",
                MINUTES_PER_DAY - 1
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_hh_mm() {
        let t: ClockTime = "07:05".parse().unwrap();
        assert_eq!(t.minutes(), 425);
        assert_eq!(t.to_string(), "07:05");
    }

    #[test]
    fn overrun_past_midnight_is_printed_as_is() {
        assert_eq!(ClockTime::hm(24, 10).to_string(), "24:10");
    }

    #[test]
    fn raw_minutes_must_fall_within_the_day() {
        let ok: ClockTime = serde_json::from_str("1439").unwrap();
        assert_eq!(ok.to_string(), "23:59");
        assert!(serde_json::from_str::<ClockTime>("1440").is_err());
        assert!(serde_json::from_str::<ClockTime>("-9000000000000000000").is_err());
    }

    #[test]
    fn add_minutes_saturates() {
        assert_eq!(ClockTime::hm(7, 0).add_minutes(i64::MAX).minutes(), i64::MAX);
    }

    #[test]
    fn rejects_garbage() {
        assert!("7 o'clock".parse::<ClockTime>().is_err());
    }
}
