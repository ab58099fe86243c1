//! Orbital parameter tables for the modelled moons.
//!
//! Periods are sidereal, radii are mean orbital distances in units of the
//! primary's equatorial radius. Phase offsets are arbitrary and only spread
//! the moons apart at the reference epoch; they are not fitted to real
//! positions.

/// Static circular-orbit parameters for one satellite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalBody {
    pub name: &'static str,
    /// Orbital period in days.
    pub period_days: f64,
    /// Orbit radius in primary radii.
    pub radius_planet_radii: f64,
    /// Orbit fraction already completed at the reference epoch, [0, 1).
    pub phase_offset: f64,
}

impl OrbitalBody {
    pub const fn new(
        name: &'static str,
        period_days: f64,
        radius_planet_radii: f64,
        phase_offset: f64,
    ) -> Self {
        Self {
            name,
            period_days,
            radius_planet_radii,
            phase_offset,
        }
    }
}

/// Julian Date (UTC) of the Jovian model epoch, 2025-01-01T00:00:00Z.
pub const JUPITER_REFERENCE_JD: f64 = 2_460_676.5;

/// Julian Date (UTC) of the Saturnian model epoch, 2025-01-01T00:00:00Z.
pub const SATURN_REFERENCE_JD: f64 = 2_460_676.5;

/// The Galilean moons, innermost first.
pub const JUPITER_SATELLITES: [OrbitalBody; 4] = [
    OrbitalBody::new("Io", 1.769, 5.9, 0.10),
    OrbitalBody::new("Europa", 3.551, 9.4, 0.30),
    OrbitalBody::new("Ganymede", 7.155, 15.0, 0.55),
    OrbitalBody::new("Callisto", 16.689, 26.3, 0.80),
];

/// Saturn's seven major moons, innermost first.
pub const SATURN_SATELLITES: [OrbitalBody; 7] = [
    OrbitalBody::new("Mimas", 0.942, 3.1, 0.10),
    OrbitalBody::new("Enceladus", 1.370, 3.9, 0.25),
    OrbitalBody::new("Tethys", 1.888, 4.9, 0.40),
    OrbitalBody::new("Dione", 2.737, 6.3, 0.55),
    OrbitalBody::new("Rhea", 4.518, 8.8, 0.70),
    OrbitalBody::new("Titan", 15.945, 20.3, 0.20),
    OrbitalBody::new("Iapetus", 79.321, 59.0, 0.85),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn check_table(table: &[OrbitalBody]) {
        for body in table {
            assert!(body.period_days > 0.0, "{}", body.name);
            assert!(body.radius_planet_radii > 1.0, "{}", body.name);
            assert!((0.0..1.0).contains(&body.phase_offset), "{}", body.name);
        }
        for pair in table.windows(2) {
            assert!(pair[0].period_days < pair[1].period_days);
            assert!(pair[0].radius_planet_radii < pair[1].radius_planet_radii);
        }
    }

    #[test]
    fn jupiter_table_is_ordered_outward() {
        check_table(&JUPITER_SATELLITES);
    }

    #[test]
    fn saturn_table_is_ordered_outward() {
        check_table(&SATURN_SATELLITES);
    }
}
