//! Proleptic Gregorian calendar to Julian Date conversion.
//!
//! Meeus, *Astronomical Algorithms* ch. 7, with the Gregorian correction
//! applied unconditionally so the results agree with `chrono` for every year.

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `1.5` for noon on the first.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}
