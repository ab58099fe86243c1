//! Mean-synodic moon phase engine.
//!
//! This crate provides:
//! - Phase fraction and age from a UTC [`Epoch`](lair_time::Epoch)
//! - Illumination, phase name, and sprite bucket from a phase fraction
//! - A lazy best-observing-night scan over local calendar days
//! - Sprite asset naming and a caller-owned [`SpriteSheet`]
//!
//! Everything here is a pure function of its arguments. Accuracy is that of
//! a mean lunation (±14 h on the timing of a real new or full moon).

pub mod best_nights;
pub mod error;
pub mod phase;
pub mod phase_types;
pub mod sprite;

pub use best_nights::{
    BestNightEntry, BestNightScan, BestNightsConfig, DEFAULT_MAX_ILLUMINATION,
    DEFAULT_OBSERVATION_HOUR, best_nights,
};
pub use error::MoonError;
pub use phase::{
    PRINCIPAL_PHASE_TOLERANCE, REFERENCE_NEW_MOON_JD, SPRITE_BUCKETS, SYNODIC_MONTH_DAYS,
    illumination, moon_state, phase_fraction, phase_name, reference_new_moon, sprite_bucket,
};
pub use phase_types::{ALL_PHASE_NAMES, MoonPhaseName, MoonState, ObservingQuality, PhaseSample};
pub use sprite::{SPRITE_SLOTS, SpriteSheet, sprite_asset_name, sprite_slot_name};
