//! Integration tests for the C FFI layer.

use std::ptr;

use approx::assert_abs_diff_eq;
use lair_ffi_c::*;

/// 2025-01-01T00:00:00Z, the satellite model epoch.
const MODEL_EPOCH_JD: f64 = 2_460_676.5;

/// 2000-01-06T18:14:00Z, the reference new moon.
const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5 + (18.0 * 60.0 + 14.0) / 1440.0;

fn jan_2025() -> LairDate {
    LairDate {
        year: 2025,
        month: 1,
        day: 1,
    }
}

#[test]
fn api_version_is_stable() {
    assert_eq!(lair_api_version(), LAIR_API_VERSION);
}

#[test]
fn moon_state_at_reference_new_moon() {
    let mut state = LairMoonState::default();
    // SAFETY: Valid pointer to a stack value.
    let status = unsafe { lair_moon_state(REFERENCE_NEW_MOON_JD, &mut state) };
    assert_eq!(status, LairStatus::Ok);
    assert!(state.fraction < 1e-6 || state.fraction > 1.0 - 1e-6);
    assert!(state.illumination < 1e-6);
    assert_eq!(state.phase_index, 0);
    assert_eq!(state.sprite_bucket, 0);
    assert_eq!(decode_c_utf8(&state.phase_name_utf8).unwrap(), "New Moon");
}

#[test]
fn moon_state_half_month_later_is_full() {
    let state = lair_moon_state_internal(REFERENCE_NEW_MOON_JD + 29.530_588_67 / 2.0).unwrap();
    assert_abs_diff_eq!(state.fraction, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(state.illumination, 1.0, epsilon = 1e-9);
    assert_eq!(state.sprite_bucket, 4);
    assert_eq!(decode_c_utf8(&state.phase_name_utf8).unwrap(), "Full Moon");
}

#[test]
fn jupiter_positions_through_c_abi() {
    let mut out = [LairSatellitePosition::default(); 4];
    let mut count = 0_u32;
    // SAFETY: Buffer holds `capacity` entries and count is a valid pointer.
    let status =
        unsafe { lair_satellite_positions(599, MODEL_EPOCH_JD, out.as_mut_ptr(), 4, &mut count) };
    assert_eq!(status, LairStatus::Ok);
    assert_eq!(count, 4);

    let names: Vec<_> = out
        .iter()
        .map(|p| decode_c_utf8(&p.name_utf8).unwrap())
        .collect();
    assert_eq!(names, ["Io", "Europa", "Ganymede", "Callisto"]);
    assert_abs_diff_eq!(out[0].x, 5.9 * (0.2 * std::f64::consts::PI).sin(), epsilon = 1e-9);
    assert_eq!(out[0].behind_planet, 0);
    assert_eq!(out[2].behind_planet, 1);
}

#[test]
fn satellite_size_query_with_zero_capacity() {
    let mut count = 0_u32;
    // SAFETY: Null buffer is allowed with zero capacity.
    let status =
        unsafe { lair_satellite_positions(699, MODEL_EPOCH_JD, ptr::null_mut(), 0, &mut count) };
    assert_eq!(status, LairStatus::BufferTooSmall);
    assert_eq!(count, 7);
}

#[test]
fn satellite_buffer_too_small_leaves_buffer_untouched() {
    let mut out = [LairSatellitePosition::default(); 3];
    let mut count = 0_u32;
    // SAFETY: Buffer holds `capacity` entries.
    let status =
        unsafe { lair_satellite_positions(699, MODEL_EPOCH_JD, out.as_mut_ptr(), 3, &mut count) };
    assert_eq!(status, LairStatus::BufferTooSmall);
    assert_eq!(count, 7);
    assert!(out.iter().all(|p| *p == LairSatellitePosition::default()));
}

#[test]
fn unknown_planet_code_is_invalid_argument() {
    let mut out = [LairSatellitePosition::default(); 8];
    let mut count = 0_u32;
    // SAFETY: Buffer holds `capacity` entries.
    let status =
        unsafe { lair_satellite_positions(499, MODEL_EPOCH_JD, out.as_mut_ptr(), 8, &mut count) };
    assert_eq!(status, LairStatus::InvalidArgument);
}

#[test]
fn best_nights_january_2025_utc() {
    let mut out = [LairBestNight::default(); 31];
    let mut count = 0_u32;
    // SAFETY: Null config selects defaults; buffer holds `capacity` entries.
    let status = unsafe {
        lair_best_nights(jan_2025(), 31, 0, ptr::null(), out.as_mut_ptr(), 31, &mut count)
    };
    assert_eq!(status, LairStatus::Ok);
    assert!(count > 0 && count < 31);

    let nights = &out[..count as usize];
    for night in nights {
        assert_eq!(night.date.year, 2025);
        assert_eq!(night.date.month, 1);
        assert_eq!((night.hour, night.minute), (22, 0));
        assert!(night.illumination <= 0.30);
        assert!((0..=3).contains(&night.quality));
    }
    for pair in nights.windows(2) {
        assert!(pair[0].date.day < pair[1].date.day);
        assert!(pair[0].jd_utc < pair[1].jd_utc);
    }
}

#[test]
fn best_nights_null_config_matches_default_config() {
    let mut config = LairBestNightsConfig {
        observation_hour: 0,
        observation_minute: 0,
        max_illumination: 0.0,
    };
    // SAFETY: Valid pointer to a stack value.
    assert_eq!(
        unsafe { lair_best_nights_config_default(&mut config) },
        LairStatus::Ok
    );
    assert_eq!(config.observation_hour, 22);
    assert_abs_diff_eq!(config.max_illumination, 0.30);

    let explicit = lair_best_nights_internal(jan_2025(), 31, 0, &config).unwrap();

    let mut out = [LairBestNight::default(); 31];
    let mut count = 0_u32;
    // SAFETY: Null config selects defaults; buffer holds `capacity` entries.
    let status = unsafe {
        lair_best_nights(jan_2025(), 31, 0, ptr::null(), out.as_mut_ptr(), 31, &mut count)
    };
    assert_eq!(status, LairStatus::Ok);
    assert_eq!(&out[..count as usize], explicit.as_slice());
}

#[test]
fn best_nights_utc_offset_shifts_sample_instant() {
    let config = LairBestNightsConfig::default();
    let utc = lair_best_nights_internal(jan_2025(), 31, 0, &config).unwrap();
    let east = lair_best_nights_internal(jan_2025(), 31, 120, &config).unwrap();
    let first_utc = utc.first().unwrap();
    let same_day = east.iter().find(|n| n.date == first_utc.date).unwrap();
    // 22:00 at UTC+2 is two hours before 22:00 UTC
    assert_abs_diff_eq!(first_utc.jd_utc - same_day.jd_utc, 2.0 / 24.0, epsilon = 1e-6);
}

#[test]
fn best_nights_zero_days_is_empty() {
    let mut count = 99_u32;
    // SAFETY: Null buffer is allowed with zero capacity.
    let status =
        unsafe { lair_best_nights(jan_2025(), 0, 0, ptr::null(), ptr::null_mut(), 0, &mut count) };
    assert_eq!(status, LairStatus::Ok);
    assert_eq!(count, 0);
}

#[test]
fn sprite_bucket_stays_below_eight_over_a_lunation() {
    let mut jd = REFERENCE_NEW_MOON_JD - 0.5;
    let mut seen = [false; 8];
    while jd < REFERENCE_NEW_MOON_JD + 30.0 {
        let state = lair_moon_state_internal(jd).unwrap();
        assert!((0..=7).contains(&state.sprite_bucket), "bucket {}", state.sprite_bucket);
        seen[state.sprite_bucket as usize] = true;
        jd += 0.1;
    }
    assert!(seen.iter().all(|s| *s));
}
