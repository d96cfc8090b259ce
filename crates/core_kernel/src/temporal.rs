//! Timestamp display
//!
//! Claims are stored with UTC timestamps. The hospital reads them in its own
//! local time, so every rendered date goes through a configured [`Timezone`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format used for every timestamp cell: `2024-03-01 14:05:09`
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone wrapper for the hospital's display zone
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Formats a UTC timestamp for display in this timezone
    pub fn format_timestamp(&self, utc: DateTime<Utc>) -> String {
        self.to_local(utc).format(DISPLAY_FORMAT).to_string()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_display() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
        assert_eq!(Timezone::default().format_timestamp(ts), "2024-03-01 14:05:09");
    }

    #[test]
    fn test_local_display_crosses_midnight() {
        let tz: Timezone = "Africa/Johannesburg".parse().unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        assert_eq!(tz.format_timestamp(ts), "2024-03-02 01:30:00");
    }

    #[test]
    fn test_invalid_timezone() {
        assert_eq!(
            "Mars/Olympus".parse::<Timezone>(),
            Err(TemporalError::InvalidTimezone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_serde_round_trips_through_name() {
        let tz: Timezone = serde_json::from_str("\"Africa/Harare\"").unwrap();
        assert_eq!(serde_json::to_string(&tz).unwrap(), "\"Africa/Harare\"");
    }
}
