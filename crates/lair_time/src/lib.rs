//! UTC epochs and calendar conversions for the Astro-Lair ephemeris core.
//!
//! This crate provides:
//! - Calendar to Julian Date conversion
//! - `UtcTime`, a calendar date-time that parses and prints ISO 8601
//! - `Epoch`, the instant type every ephemeris function takes
//!
//! Every `Epoch` is a UTC instant. There is no TT/TDB handling here: the
//! models built on top are mean-motion approximations where the ~70 s
//! difference between UTC and TT is far below their accuracy.

pub mod error;
pub mod julian;
pub mod utc_time;

use chrono::{DateTime, TimeZone, Utc};

pub use error::TimeError;
pub use julian::{J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};
pub use utc_time::UtcTime;

/// A UTC instant represented as a Julian Date.
///
/// This is the primary time type used throughout the workspace.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    jd_utc: f64,
}

impl Epoch {
    /// Create an epoch from a Julian Date (UTC) without validation.
    ///
    /// Intended for compile-time constants; use [`Epoch::try_from_jd_utc`]
    /// for values supplied by callers.
    pub const fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    /// Create an epoch from a Julian Date (UTC), rejecting NaN and infinities.
    pub fn try_from_jd_utc(jd_utc: f64) -> Result<Self, TimeError> {
        if !jd_utc.is_finite() {
            return Err(TimeError::NonFinite);
        }
        Ok(Self { jd_utc })
    }

    /// Create an epoch from UTC calendar fields.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: f64,
    ) -> Result<Self, TimeError> {
        Self::from_utc_time(&UtcTime::new(year, month, day, hour, min, sec))
    }

    /// Create an epoch from a validated [`UtcTime`].
    pub fn from_utc_time(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Ok(Self {
            jd_utc: utc.to_jd_utc(),
        })
    }

    /// Create an epoch from a `chrono` date-time in any time zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let unix_s = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
        Self {
            jd_utc: UNIX_EPOCH_JD + unix_s / SECONDS_PER_DAY,
        }
    }

    /// The current instant from the system clock.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Julian Date (UTC).
    pub fn as_jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Days elapsed from `earlier` to `self` (negative if `self` is earlier).
    pub fn days_since(self, earlier: Epoch) -> f64 {
        self.jd_utc - earlier.jd_utc
    }

    /// Shift by a (possibly negative, possibly fractional) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    /// Shift by a number of minutes.
    pub fn add_minutes(self, minutes: f64) -> Self {
        self.add_days(minutes / MINUTES_PER_DAY)
    }

    /// Convert to a `chrono` UTC date-time, rounded to the millisecond.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        let millis = ((self.jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(TimeError::OutOfRange);
        }
        DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Epoch {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            Err(_) => write!(f, "JD {:.6}", self.jd_utc),
        }
    }
}
