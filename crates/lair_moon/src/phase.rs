//! Mean-synodic moon phase model.
//!
//! The moon's age is the time since a fixed reference new moon taken modulo
//! the mean synodic month. This ignores the ±14 h wobble of real lunations
//! caused by the eccentric lunar and solar orbits, which is fine for choosing
//! observing nights and picking a sprite but not for predicting eclipses.

use std::f64::consts::TAU;

use lair_time::Epoch;

use crate::phase_types::{MoonPhaseName, MoonState, PhaseSample};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Julian Date (UTC) of the reference new moon, 2000-01-06T18:14:00Z.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5 + (18.0 * 60.0 + 14.0) / 1440.0;

/// Half-width of the band around 0, ¼, ½ and ¾ reported as a principal phase.
pub const PRINCIPAL_PHASE_TOLERANCE: f64 = 0.03;

/// Number of display buckets produced by [`sprite_bucket`].
pub const SPRITE_BUCKETS: u8 = 8;

/// The reference new moon as an [`Epoch`].
pub const fn reference_new_moon() -> Epoch {
    Epoch::from_jd_utc(REFERENCE_NEW_MOON_JD)
}

/// Wrap `value` into [0, 1).
///
/// `rem_euclid` can round up to exactly 1.0 for tiny negative inputs; that
/// case folds back to 0.
pub(crate) fn wrap_unit(value: f64) -> f64 {
    let f = value.rem_euclid(1.0);
    if f >= 1.0 { 0.0 } else { f }
}

/// Phase fraction and age of the moon at `epoch`.
///
/// Works for instants before the reference epoch as well as after: the age
/// is always in [0, [`SYNODIC_MONTH_DAYS`]).
pub fn phase_fraction(epoch: Epoch) -> PhaseSample {
    let days = epoch.days_since(reference_new_moon());
    let mut age_days = days.rem_euclid(SYNODIC_MONTH_DAYS);
    let mut fraction = age_days / SYNODIC_MONTH_DAYS;
    if age_days >= SYNODIC_MONTH_DAYS || fraction >= 1.0 {
        age_days = 0.0;
        fraction = 0.0;
    }
    PhaseSample { fraction, age_days }
}

/// Illuminated fraction of the disk for a phase fraction.
///
/// `0.5 · (1 − cos 2πf)`: 0 at new moon, 1 at full moon, 0.5 at the quarters.
pub fn illumination(fraction: f64) -> f64 {
    0.5 * (1.0 - (TAU * fraction).cos())
}

fn is_near_phase(value: f64, target: f64) -> bool {
    let diff = (value - target).abs();
    diff <= PRINCIPAL_PHASE_TOLERANCE || diff >= 1.0 - PRINCIPAL_PHASE_TOLERANCE
}

/// Classify a phase fraction into one of the eight named phases.
///
/// The input need not be normalized; it is wrapped modulo 1 first. Principal
/// phases win over the crescent/gibbous ranges, so 0.26 is First Quarter.
pub fn phase_name(fraction: f64) -> MoonPhaseName {
    let f = wrap_unit(fraction);

    if is_near_phase(f, 0.0) {
        MoonPhaseName::NewMoon
    } else if is_near_phase(f, 0.25) {
        MoonPhaseName::FirstQuarter
    } else if is_near_phase(f, 0.5) {
        MoonPhaseName::FullMoon
    } else if is_near_phase(f, 0.75) {
        MoonPhaseName::LastQuarter
    } else if f < 0.25 {
        MoonPhaseName::WaxingCrescent
    } else if f < 0.5 {
        MoonPhaseName::WaxingGibbous
    } else if f < 0.75 {
        MoonPhaseName::WaningGibbous
    } else {
        MoonPhaseName::WaningCrescent
    }
}

/// Display bucket 0..=7 for a phase fraction.
///
/// Each bucket spans 1/8 of the cycle centred on a phase anchor, so fractions
/// just below 1.0 land in bucket 0 with new moon.
pub fn sprite_bucket(fraction: f64) -> u8 {
    let f = wrap_unit(fraction);
    ((f * SPRITE_BUCKETS as f64).round() as u8) % SPRITE_BUCKETS
}

/// Full moon state at `epoch`.
pub fn moon_state(epoch: Epoch) -> MoonState {
    let PhaseSample { fraction, age_days } = phase_fraction(epoch);
    MoonState {
        fraction,
        age_days,
        illumination: illumination(fraction),
        phase_name: phase_name(fraction),
        sprite_bucket: sprite_bucket(fraction),
    }
}
