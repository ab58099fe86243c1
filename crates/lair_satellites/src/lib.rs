//! Simplified positions of the major moons of Jupiter and Saturn.
//!
//! Orbits are circular, coplanar with the line of sight, and uniform in
//! angular speed. Output is a lateral offset and a depth in units of the
//! planet's radius, good enough to draw a recognisable moon pattern next to
//! a planet disk. Not suitable for event timing (transits, eclipses).

pub mod error;
pub mod model;
pub mod planet;
pub mod tables;

pub use error::SatelliteError;
pub use model::{
    SatellitePosition, body_position, orbital_angle, satellite_positions,
    satellite_positions_by_code, split_by_depth,
};
pub use planet::{ALL_PLANETS, Planet};
pub use tables::{
    JUPITER_REFERENCE_JD, JUPITER_SATELLITES, OrbitalBody, SATURN_REFERENCE_JD, SATURN_SATELLITES,
};
