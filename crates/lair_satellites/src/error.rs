//! Error types for satellite position queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lair_time::TimeError;

/// Errors from satellite model queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SatelliteError {
    /// Planet code is not Jupiter (599) or Saturn (699).
    UnknownPlanet(i32),
    /// Planet name did not match a modelled planet.
    UnknownPlanetName(String),
    /// Error from epoch construction.
    Time(TimeError),
}

impl Display for SatelliteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlanet(code) => write!(f, "unsupported planet code: {code}"),
            Self::UnknownPlanetName(name) => write!(f, "unsupported planet: {name}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SatelliteError {}

impl From<TimeError> for SatelliteError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
