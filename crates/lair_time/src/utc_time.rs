//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the human-facing form of an [`Epoch`](crate::Epoch): it is
//! what the CLI parses and prints and what FFI callers fill in.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field names a real calendar instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidCalendar("no such year/month/day"));
        }
        if self.hour >= 24 {
            return Err(TimeError::InvalidCalendar("hour must be < 24"));
        }
        if self.minute >= 60 {
            return Err(TimeError::InvalidCalendar("minute must be < 60"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidCalendar("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Julian Date (UTC) of this instant.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / MINUTES_PER_DAY
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts RFC 3339 (`2024-03-20T12:00:00Z`, `2024-03-20T13:00:00+01:00`)
    /// and offset-less `YYYY-MM-DDThh:mm[:ss]`, which is read as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from(dt.with_timezone(&Utc)));
        }
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))?;
        Ok(Self::from(naive.and_utc()))
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-6 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
