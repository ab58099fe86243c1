//! Circular, coplanar, uniform-motion satellite model.
//!
//! Each moon moves on a circle seen exactly edge-on:
//!
//! ```text
//! angle = 2π · (Δt / period + phase_offset)
//! x     = r · sin(angle)   lateral offset on the sky
//! z     = r · cos(angle)   depth along the line of sight, z < 0 is far side
//! ```
//!
//! There is no inclination, eccentricity, or light-time; a moon is "behind"
//! whenever it is on the far half of its orbit, even if it is far outside the
//! planet's disk. Moons never occult each other.

use std::f64::consts::TAU;

use lair_time::Epoch;
use log::trace;

use crate::error::SatelliteError;
use crate::planet::Planet;
use crate::tables::OrbitalBody;

/// Sky-plane position of one satellite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitePosition {
    pub name: &'static str,
    /// Signed lateral offset in primary radii.
    pub x: f64,
    /// Line-of-sight coordinate in primary radii; negative is far side.
    pub depth: f64,
    pub behind_planet: bool,
}

/// Orbital angle in radians, not reduced to [0, 2π).
pub fn orbital_angle(body: &OrbitalBody, dt_days: f64) -> f64 {
    TAU * (dt_days / body.period_days + body.phase_offset)
}

/// Position of `body` `dt_days` after its model epoch.
pub fn body_position(body: &OrbitalBody, dt_days: f64) -> SatellitePosition {
    let (sin, cos) = orbital_angle(body, dt_days).sin_cos();
    let depth = body.radius_planet_radii * cos;
    SatellitePosition {
        name: body.name,
        x: body.radius_planet_radii * sin,
        depth,
        behind_planet: depth < 0.0,
    }
}

/// Positions of every modelled moon of `planet` at `epoch`, in table order.
pub fn satellite_positions(planet: Planet, epoch: Epoch) -> Vec<SatellitePosition> {
    let dt_days = epoch.days_since(planet.reference_epoch());
    trace!("{planet} satellites at {dt_days:.4} d from model epoch");
    planet
        .satellites()
        .iter()
        .map(|body| body_position(body, dt_days))
        .collect()
}

/// Same as [`satellite_positions`] for callers holding a raw planet code.
pub fn satellite_positions_by_code(
    code: i32,
    epoch: Epoch,
) -> Result<Vec<SatellitePosition>, SatelliteError> {
    let planet = Planet::try_from(code)?;
    Ok(satellite_positions(planet, epoch))
}

/// Split positions into `(behind, in_front)`, each keeping input order.
///
/// Renderers draw the first list, then the planet disk, then the second.
pub fn split_by_depth(
    positions: &[SatellitePosition],
) -> (Vec<SatellitePosition>, Vec<SatellitePosition>) {
    positions.iter().partition(|p| p.behind_planet)
}
