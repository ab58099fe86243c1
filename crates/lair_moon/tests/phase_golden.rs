//! Golden-value tests for the mean-synodic phase model.
//!
//! Reference instants are published new/full moon times (UTC). The mean model
//! drifts from the true lunation by up to ~14 h, so classification is checked
//! rather than exact timing.

use approx::assert_abs_diff_eq;
use lair_moon::{
    MoonPhaseName, SYNODIC_MONTH_DAYS, illumination, moon_state, phase_fraction, phase_name,
    reference_new_moon, sprite_bucket,
};
use lair_time::Epoch;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Epoch {
    Epoch::from_utc(y, mo, d, h, mi, 0.0).expect("valid calendar date")
}

/// New Moon 2024-Jan-11 11:57 UTC
#[test]
fn new_moon_jan_2024() {
    let st = moon_state(utc(2024, 1, 11, 11, 57));
    assert_eq!(st.phase_name, MoonPhaseName::NewMoon);
    assert_eq!(st.sprite_bucket, 0);
    assert!(st.illumination < 0.01, "illum {}", st.illumination);
}

/// Full Moon 2024-Jan-25 17:54 UTC
#[test]
fn full_moon_jan_2024() {
    let st = moon_state(utc(2024, 1, 25, 17, 54));
    assert_eq!(st.phase_name, MoonPhaseName::FullMoon);
    assert_eq!(st.sprite_bucket, 4);
    assert!(st.illumination > 0.99);
}

/// Full Moon 2024-Feb-24 12:30 UTC
#[test]
fn full_moon_feb_2024() {
    assert_eq!(moon_state(utc(2024, 2, 24, 12, 30)).phase_name, MoonPhaseName::FullMoon);
}

/// New Moon 2025-Jan-29 12:36 UTC
#[test]
fn new_moon_jan_2025() {
    assert_eq!(moon_state(utc(2025, 1, 29, 12, 36)).phase_name, MoonPhaseName::NewMoon);
}

/// Full Moon 2025-Mar-14 06:55 UTC (total lunar eclipse)
#[test]
fn full_moon_mar_2025() {
    assert_eq!(moon_state(utc(2025, 3, 14, 6, 55)).phase_name, MoonPhaseName::FullMoon);
}

/// Full Moon 1999-Dec-22 17:31 UTC, before the reference new moon
#[test]
fn full_moon_before_reference() {
    let s = phase_fraction(utc(1999, 12, 22, 17, 31));
    assert!(s.fraction > 0.47 && s.fraction < 0.53, "fraction {}", s.fraction);
    assert_eq!(phase_name(s.fraction), MoonPhaseName::FullMoon);
}

#[test]
fn fraction_and_age_stay_in_range_far_from_reference() {
    let reference = reference_new_moon();
    let mut offset = -400_000.0;
    while offset <= 400_000.0 {
        let s = phase_fraction(reference.add_days(offset));
        assert!((0.0..1.0).contains(&s.fraction), "fraction {} at {offset}", s.fraction);
        assert!(
            (0.0..SYNODIC_MONTH_DAYS).contains(&s.age_days),
            "age {} at {offset}",
            s.age_days
        );
        offset += 1234.567;
    }
}

#[test]
fn periodic_over_synodic_month() {
    let start = utc(2031, 5, 17, 3, 0);
    for k in [-50.0, -1.0, 1.0, 12.0, 300.0] {
        let a = phase_fraction(start).fraction;
        let b = phase_fraction(start.add_days(k * SYNODIC_MONTH_DAYS)).fraction;
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }
}

#[test]
fn fraction_increases_within_cycle() {
    let start = reference_new_moon().add_days(0.01);
    let mut prev = phase_fraction(start).fraction;
    for hour in 1..700 {
        let f = phase_fraction(start.add_days(hour as f64 / 24.0)).fraction;
        assert!(f >= prev, "fraction decreased at hour {hour}: {prev} -> {f}");
        prev = f;
    }
}

#[test]
fn quarters_have_equal_light() {
    assert_abs_diff_eq!(illumination(0.25), illumination(0.75), epsilon = 1e-12);
    assert_eq!(phase_name(0.25), MoonPhaseName::FirstQuarter);
    assert_eq!(phase_name(0.75), MoonPhaseName::LastQuarter);
}

#[test]
fn sprite_bucket_edge_wrap() {
    assert_eq!(sprite_bucket(1.0), sprite_bucket(0.0));
    assert_eq!(sprite_bucket(0.0), 0);
}
