//! Planets with a satellite model.

use std::str::FromStr;

use lair_time::Epoch;

use crate::error::SatelliteError;
use crate::tables::{
    JUPITER_REFERENCE_JD, JUPITER_SATELLITES, OrbitalBody, SATURN_REFERENCE_JD, SATURN_SATELLITES,
};

/// A primary whose major moons are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Jupiter,
    Saturn,
}

/// All modelled planets.
pub const ALL_PLANETS: [Planet; 2] = [Planet::Jupiter, Planet::Saturn];

impl Planet {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Jupiter => 599,
            Self::Saturn => 699,
        }
    }

    /// Convert a NAIF-style body code into a [`Planet`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Satellite table in output order.
    pub const fn satellites(self) -> &'static [OrbitalBody] {
        match self {
            Self::Jupiter => &JUPITER_SATELLITES,
            Self::Saturn => &SATURN_SATELLITES,
        }
    }

    /// Instant at which each satellite sits at its phase offset.
    pub const fn reference_epoch(self) -> Epoch {
        match self {
            Self::Jupiter => Epoch::from_jd_utc(JUPITER_REFERENCE_JD),
            Self::Saturn => Epoch::from_jd_utc(SATURN_REFERENCE_JD),
        }
    }
}

impl TryFrom<i32> for Planet {
    type Error = SatelliteError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(SatelliteError::UnknownPlanet(code))
    }
}

impl FromStr for Planet {
    type Err = SatelliteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jupiter" => Ok(Self::Jupiter),
            "saturn" => Ok(Self::Saturn),
            _ => Err(SatelliteError::UnknownPlanetName(s.to_string())),
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
