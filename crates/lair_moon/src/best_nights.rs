//! Scan a run of calendar days for nights with little moonlight.
//!
//! Each day is sampled once, at a fixed local clock time in the caller's
//! time zone. The zone is always an explicit argument so results never
//! depend on the host's TZ setting.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use lair_time::Epoch;
use log::{debug, trace};

use crate::error::MoonError;
use crate::phase::{illumination, phase_fraction, phase_name};
use crate::phase_types::{MoonPhaseName, ObservingQuality};

/// Illumination ceiling for a night to be listed.
pub const DEFAULT_MAX_ILLUMINATION: f64 = 0.30;

/// Local hour at which each night is sampled.
pub const DEFAULT_OBSERVATION_HOUR: u32 = 22;

/// Longest DST gap we step over when the sampling time does not exist.
const MAX_GAP_SHIFT_MINUTES: i64 = 180;

/// Configuration for the best-night scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestNightsConfig {
    /// Local hour of the sample (0-23, default 22).
    pub observation_hour: u32,
    /// Local minute of the sample (0-59, default 0).
    pub observation_minute: u32,
    /// Nights brighter than this are dropped (default 0.30, inclusive).
    pub max_illumination: f64,
}

impl Default for BestNightsConfig {
    fn default() -> Self {
        Self {
            observation_hour: DEFAULT_OBSERVATION_HOUR,
            observation_minute: 0,
            max_illumination: DEFAULT_MAX_ILLUMINATION,
        }
    }
}

impl BestNightsConfig {
    /// Default config sampling at `hour`:00 local time.
    pub fn at_hour(hour: u32) -> Self {
        Self {
            observation_hour: hour,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.observation_hour >= 24 {
            return Err("observation_hour must be < 24");
        }
        if self.observation_minute >= 60 {
            return Err("observation_minute must be < 60");
        }
        if !self.max_illumination.is_finite() || !(0.0..=1.0).contains(&self.max_illumination) {
            return Err("max_illumination must be in [0, 1]");
        }
        Ok(())
    }

    fn observation_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.observation_hour, self.observation_minute, 0)
    }
}

/// One night that passed the illumination filter.
#[derive(Debug, Clone)]
pub struct BestNightEntry<Tz: TimeZone> {
    /// Local sampling instant.
    pub date: DateTime<Tz>,
    /// The same instant as a UTC epoch.
    pub epoch: Epoch,
    pub illumination: f64,
    pub phase_name: MoonPhaseName,
    pub quality: ObservingQuality,
}

/// Lazy day-by-day scan, yielding qualifying nights in date order.
///
/// Built by [`BestNightScan::new`], which validates everything up front so
/// iteration itself cannot fail.
#[derive(Debug, Clone)]
pub struct BestNightScan<'a, Tz: TimeZone> {
    tz: &'a Tz,
    start: NaiveDate,
    time: NaiveTime,
    max_illumination: f64,
    next_offset: u32,
    num_days: u32,
}

impl<'a, Tz: TimeZone> BestNightScan<'a, Tz> {
    pub fn new(
        start: NaiveDate,
        num_days: u32,
        tz: &'a Tz,
        config: &BestNightsConfig,
    ) -> Result<Self, MoonError> {
        config.validate().map_err(MoonError::InvalidConfig)?;
        let time = config
            .observation_time()
            .ok_or(MoonError::InvalidConfig("observation time out of range"))?;
        start
            .checked_add_days(Days::new(u64::from(num_days)))
            .ok_or(MoonError::DateOutOfRange)?;
        debug!("best-night scan from {start} for {num_days} days at {time}");
        Ok(Self {
            tz,
            start,
            time,
            max_illumination: config.max_illumination,
            next_offset: 0,
            num_days,
        })
    }

    /// Resolve a local wall-clock time to an instant.
    ///
    /// Ambiguous times (clocks going back) take the earlier instant. Times
    /// inside a gap (clocks going forward) move forward minute by minute to
    /// the first existing local time.
    fn resolve_local(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        if let Some(dt) = self.tz.from_local_datetime(&naive).earliest() {
            return Some(dt);
        }
        (1..=MAX_GAP_SHIFT_MINUTES).find_map(|m| {
            let shifted = naive.checked_add_signed(TimeDelta::minutes(m))?;
            let dt = self.tz.from_local_datetime(&shifted).earliest()?;
            debug!("{naive} does not exist locally; sampling at {shifted} instead");
            Some(dt)
        })
    }

    fn evaluate(&self, date: NaiveDate) -> Option<BestNightEntry<Tz>> {
        let local = self.resolve_local(date.and_time(self.time))?;
        let epoch = Epoch::from_datetime(&local);
        let fraction = phase_fraction(epoch).fraction;
        let illum = illumination(fraction);
        trace!("{date}: illumination {illum:.3}");
        if illum > self.max_illumination {
            return None;
        }
        Some(BestNightEntry {
            date: local,
            epoch,
            illumination: illum,
            phase_name: phase_name(fraction),
            quality: ObservingQuality::from_illumination(illum),
        })
    }
}

impl<Tz: TimeZone> Iterator for BestNightScan<'_, Tz> {
    type Item = BestNightEntry<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_offset < self.num_days {
            let offset = self.next_offset;
            self.next_offset += 1;
            let date = self.start.checked_add_days(Days::new(u64::from(offset)))?;
            if let Some(entry) = self.evaluate(date) {
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.num_days - self.next_offset) as usize))
    }
}

/// Nights in `[start, start + num_days)` with illumination at or below the
/// configured ceiling, in ascending date order.
pub fn best_nights<Tz: TimeZone>(
    start: NaiveDate,
    num_days: u32,
    tz: &Tz,
    config: &BestNightsConfig,
) -> Result<Vec<BestNightEntry<Tz>>, MoonError> {
    Ok(BestNightScan::new(start, num_days, tz, config)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let c = BestNightsConfig::default();
        assert_eq!(c.observation_hour, 22);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_hour() {
        let c = BestNightsConfig::at_hour(24);
        assert!(c.validate().is_err());
        let err = best_nights(date(2025, 1, 1), 3, &Utc, &c).unwrap_err();
        assert!(matches!(err, MoonError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_nan_ceiling() {
        let c = BestNightsConfig {
            max_illumination: f64::NAN,
            ..BestNightsConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_days_is_empty() {
        let nights = best_nights(date(2025, 1, 1), 0, &Utc, &BestNightsConfig::default()).unwrap();
        assert!(nights.is_empty());
    }

    #[test]
    fn overflowing_window_is_rejected() {
        let err = best_nights(NaiveDate::MAX, 2, &Utc, &BestNightsConfig::default()).unwrap_err();
        assert_eq!(err, MoonError::DateOutOfRange);
    }

    #[test]
    fn samples_at_local_hour() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let config = BestNightsConfig {
            max_illumination: 1.0,
            ..BestNightsConfig::default()
        };
        let nights = best_nights(date(2025, 3, 1), 5, &tz, &config).unwrap();
        assert_eq!(nights.len(), 5);
        for n in &nights {
            assert_eq!(n.date.format("%H:%M").to_string(), "22:00");
            let utc = n.epoch.to_datetime().unwrap();
            assert_eq!(utc.format("%H:%M").to_string(), "21:00");
        }
    }

    #[test]
    fn size_hint_bounds_remaining_days() {
        let scan = BestNightScan::new(date(2025, 1, 1), 10, &Utc, &BestNightsConfig::default())
            .unwrap();
        assert_eq!(scan.size_hint(), (0, Some(10)));
    }
}
