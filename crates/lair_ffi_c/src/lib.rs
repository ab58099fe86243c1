//! C-facing adapter for the lair moon phase and satellite engines.
//!
//! Every exported function returns a [`LairStatus`] and writes results
//! through caller-owned pointers. Variable-length results use a
//! caller-allocated array plus capacity; the required length is always
//! written to `out_count`, so passing `capacity = 0` queries the size.

use std::sync::Once;

use chrono::{Datelike, FixedOffset, NaiveDate, Timelike};
use lair_moon::{BestNightEntry, BestNightsConfig, MoonError, MoonState, best_nights, moon_state};
use lair_satellites::{SatelliteError, SatellitePosition, satellite_positions_by_code};
use lair_time::Epoch;
use log::debug;

/// ABI version for downstream bindings.
pub const LAIR_API_VERSION: u32 = 1;

/// Fixed UTF-8 buffer size for name fields in C-compatible structs.
pub const LAIR_NAME_CAPACITY: usize = 32;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LairStatus {
    Ok = 0,
    InvalidArgument = 1,
    InvalidConfig = 2,
    BufferTooSmall = 3,
    NullPointer = 4,
    Internal = 255,
}

impl From<&MoonError> for LairStatus {
    fn from(value: &MoonError) -> Self {
        match value {
            MoonError::InvalidConfig(_) => Self::InvalidConfig,
            MoonError::InvalidArgument(_) | MoonError::DateOutOfRange | MoonError::Time(_) => {
                Self::InvalidArgument
            }
            _ => Self::Internal,
        }
    }
}

impl From<&SatelliteError> for LairStatus {
    fn from(value: &SatelliteError) -> Self {
        match value {
            SatelliteError::UnknownPlanet(_)
            | SatelliteError::UnknownPlanetName(_)
            | SatelliteError::Time(_) => Self::InvalidArgument,
            _ => Self::Internal,
        }
    }
}

/// C-compatible moon state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LairMoonState {
    /// Position in the synodic cycle, [0, 1).
    pub fraction: f64,
    pub age_days: f64,
    pub illumination: f64,
    /// Index into the eight phase names, 0 = New Moon.
    pub phase_index: i32,
    /// Sprite bucket, 0..=7.
    pub sprite_bucket: i32,
    pub phase_name_utf8: [u8; LAIR_NAME_CAPACITY],
}

impl TryFrom<MoonState> for LairMoonState {
    type Error = LairStatus;

    fn try_from(value: MoonState) -> Result<Self, Self::Error> {
        Ok(Self {
            fraction: value.fraction,
            age_days: value.age_days,
            illumination: value.illumination,
            phase_index: i32::from(value.phase_name.index()),
            sprite_bucket: i32::from(value.sprite_bucket),
            phase_name_utf8: encode_c_utf8(value.phase_name.name())?,
        })
    }
}

/// C-compatible satellite position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LairSatellitePosition {
    pub name_utf8: [u8; LAIR_NAME_CAPACITY],
    /// Lateral offset in planet radii.
    pub x: f64,
    /// Line-of-sight coordinate in planet radii; negative is far side.
    pub depth: f64,
    /// 1 when the satellite is on the far side, else 0.
    pub behind_planet: u8,
}

impl TryFrom<&SatellitePosition> for LairSatellitePosition {
    type Error = LairStatus;

    fn try_from(value: &SatellitePosition) -> Result<Self, Self::Error> {
        Ok(Self {
            name_utf8: encode_c_utf8(value.name)?,
            x: value.x,
            depth: value.depth,
            behind_planet: u8::from(value.behind_planet),
        })
    }
}

/// C-compatible calendar date.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LairDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl TryFrom<LairDate> for NaiveDate {
    type Error = LairStatus;

    fn try_from(value: LairDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(value.year, value.month, value.day)
            .ok_or(LairStatus::InvalidArgument)
    }
}

/// C-compatible best-night scan configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LairBestNightsConfig {
    pub observation_hour: u32,
    pub observation_minute: u32,
    pub max_illumination: f64,
}

impl Default for LairBestNightsConfig {
    fn default() -> Self {
        let config = BestNightsConfig::default();
        Self {
            observation_hour: config.observation_hour,
            observation_minute: config.observation_minute,
            max_illumination: config.max_illumination,
        }
    }
}

impl From<&LairBestNightsConfig> for BestNightsConfig {
    fn from(value: &LairBestNightsConfig) -> Self {
        Self {
            observation_hour: value.observation_hour,
            observation_minute: value.observation_minute,
            max_illumination: value.max_illumination,
        }
    }
}

/// C-compatible best-night entry. Date and time fields are local.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LairBestNight {
    pub date: LairDate,
    pub hour: u32,
    pub minute: u32,
    pub jd_utc: f64,
    pub illumination: f64,
    pub phase_index: i32,
    /// 0 Excellent, 1 Good, 2 Fair, 3 Poor.
    pub quality: i32,
}

impl From<&BestNightEntry<FixedOffset>> for LairBestNight {
    fn from(value: &BestNightEntry<FixedOffset>) -> Self {
        Self {
            date: LairDate {
                year: value.date.year(),
                month: value.date.month(),
                day: value.date.day(),
            },
            hour: value.date.hour(),
            minute: value.date.minute(),
            jd_utc: value.epoch.as_jd_utc(),
            illumination: value.illumination,
            phase_index: i32::from(value.phase_name.index()),
            quality: value.quality as i32,
        }
    }
}

/// Moon state at a UTC Julian Date.
pub fn lair_moon_state_internal(jd_utc: f64) -> Result<LairMoonState, LairStatus> {
    let epoch = Epoch::try_from_jd_utc(jd_utc).map_err(|_| LairStatus::InvalidArgument)?;
    LairMoonState::try_from(moon_state(epoch))
}

/// Satellite positions for a planet code (599 Jupiter, 699 Saturn).
pub fn lair_satellite_positions_internal(
    planet_code: i32,
    jd_utc: f64,
) -> Result<Vec<LairSatellitePosition>, LairStatus> {
    let epoch = Epoch::try_from_jd_utc(jd_utc).map_err(|_| LairStatus::InvalidArgument)?;
    let positions =
        satellite_positions_by_code(planet_code, epoch).map_err(|err| LairStatus::from(&err))?;
    positions.iter().map(LairSatellitePosition::try_from).collect()
}

/// Best nights starting at a local date in a fixed UTC offset.
pub fn lair_best_nights_internal(
    start: LairDate,
    num_days: u32,
    utc_offset_minutes: i32,
    config: &LairBestNightsConfig,
) -> Result<Vec<LairBestNight>, LairStatus> {
    let start = NaiveDate::try_from(start)?;
    let tz = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(LairStatus::InvalidArgument)?;
    let entries = best_nights(start, num_days, &tz, &BestNightsConfig::from(config))
        .map_err(|err| LairStatus::from(&err))?;
    debug!("best nights from {start}: {} of {num_days} days", entries.len());
    Ok(entries.iter().map(LairBestNight::from).collect())
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn lair_api_version() -> u32 {
    LAIR_API_VERSION
}

/// Install the `env_logger` backend. Safe to call more than once.
///
/// Honors `RUST_LOG`; defaults to `warn`.
#[unsafe(no_mangle)]
pub extern "C" fn lair_init_logging() -> LairStatus {
    ffi_boundary(|| {
        init_logger();
        LairStatus::Ok
    })
}

/// Compute the moon state for a UTC Julian Date.
///
/// # Safety
/// `out_state` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lair_moon_state(jd_utc: f64, out_state: *mut LairMoonState) -> LairStatus {
    ffi_boundary(|| {
        if out_state.is_null() {
            return LairStatus::NullPointer;
        }

        match lair_moon_state_internal(jd_utc) {
            Ok(state) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_state = state };
                LairStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Compute satellite positions for a planet code at a UTC Julian Date.
///
/// Writes the number of satellites to `out_count` even when `capacity` is too
/// small, in which case nothing is written to `out_positions`.
///
/// # Safety
/// `out_count` must be a valid, non-null pointer. `out_positions` must be
/// valid for `capacity` writes, and may be null only when `capacity` is 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lair_satellite_positions(
    planet_code: i32,
    jd_utc: f64,
    out_positions: *mut LairSatellitePosition,
    capacity: u32,
    out_count: *mut u32,
) -> LairStatus {
    ffi_boundary(|| {
        if out_count.is_null() || (out_positions.is_null() && capacity > 0) {
            return LairStatus::NullPointer;
        }

        match lair_satellite_positions_internal(planet_code, jd_utc) {
            // SAFETY: Pointers are checked above against `capacity`.
            Ok(positions) => unsafe { write_entries(&positions, out_positions, capacity, out_count) },
            Err(status) => status,
        }
    })
}

/// Fill `out_config` with the default best-night configuration.
///
/// # Safety
/// `out_config` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lair_best_nights_config_default(
    out_config: *mut LairBestNightsConfig,
) -> LairStatus {
    ffi_boundary(|| {
        if out_config.is_null() {
            return LairStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_config = LairBestNightsConfig::default() };
        LairStatus::Ok
    })
}

/// Scan `num_days` local days from `start` for dark nights.
///
/// `config` may be null to use the defaults (22:00, illumination <= 0.30).
/// Count and buffer semantics match [`lair_satellite_positions`].
///
/// # Safety
/// `config`, when non-null, must be valid for reads. `out_count` must be a
/// valid, non-null pointer. `out_nights` must be valid for `capacity` writes,
/// and may be null only when `capacity` is 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lair_best_nights(
    start: LairDate,
    num_days: u32,
    utc_offset_minutes: i32,
    config: *const LairBestNightsConfig,
    out_nights: *mut LairBestNight,
    capacity: u32,
    out_count: *mut u32,
) -> LairStatus {
    ffi_boundary(|| {
        if out_count.is_null() || (out_nights.is_null() && capacity > 0) {
            return LairStatus::NullPointer;
        }

        let config_value = if config.is_null() {
            LairBestNightsConfig::default()
        } else {
            // SAFETY: Pointer is checked for null and copied by value.
            unsafe { *config }
        };

        match lair_best_nights_internal(start, num_days, utc_offset_minutes, &config_value) {
            // SAFETY: Pointers are checked above against `capacity`.
            Ok(nights) => unsafe { write_entries(&nights, out_nights, capacity, out_count) },
            Err(status) => status,
        }
    })
}

static INIT_LOGGER: Once = Once::new();

fn init_logger() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .try_init();
    });
}

fn ffi_boundary(f: impl FnOnce() -> LairStatus) -> LairStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => LairStatus::Internal,
    }
}

/// Copy `items` into a caller buffer, always reporting the full length.
///
/// # Safety
/// `out_count` must be valid for one write. `out` must be valid for
/// `capacity` writes whenever `capacity` is non-zero.
unsafe fn write_entries<T: Copy>(
    items: &[T],
    out: *mut T,
    capacity: u32,
    out_count: *mut u32,
) -> LairStatus {
    let Ok(count) = u32::try_from(items.len()) else {
        return LairStatus::Internal;
    };
    // SAFETY: Caller guarantees `out_count` is valid.
    unsafe { *out_count = count };
    if count > capacity {
        return LairStatus::BufferTooSmall;
    }
    if count > 0 {
        // SAFETY: `count <= capacity`, so `out` is non-null and valid for `count` writes.
        let dst = unsafe { std::slice::from_raw_parts_mut(out, items.len()) };
        dst.copy_from_slice(items);
    }
    LairStatus::Ok
}

fn encode_c_utf8(input: &str) -> Result<[u8; LAIR_NAME_CAPACITY], LairStatus> {
    let bytes = input.as_bytes();
    if bytes.len() >= LAIR_NAME_CAPACITY || bytes.contains(&0) {
        return Err(LairStatus::Internal);
    }

    let mut out = [0_u8; LAIR_NAME_CAPACITY];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Decode a NUL-terminated name buffer.
pub fn decode_c_utf8(buffer: &[u8; LAIR_NAME_CAPACITY]) -> Result<&str, std::str::Utf8Error> {
    let end = buffer
        .iter()
        .position(|b| *b == 0)
        .unwrap_or(LAIR_NAME_CAPACITY);
    std::str::from_utf8(&buffer[..end])
}
