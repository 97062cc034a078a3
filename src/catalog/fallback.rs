//! Built-in fallback catalog.
//!
//! Six well-studied near-Earth objects used whenever the live catalog is
//! unreachable or returns nothing usable. Masses are published estimates;
//! velocities are typical Earth-encounter speeds.

use super::CatalogRecord;

/// A curated fallback entry.
#[derive(Clone, Copy, Debug)]
pub struct FallbackAsteroid {
    pub id: &'static str,
    pub name: &'static str,
    /// Mean diameter (km)
    pub diameter_km: f64,
    /// Encounter velocity relative to Earth (km/s)
    pub velocity_km_s: f64,
    /// Mass (kg)
    pub mass_kg: f64,
    pub hazardous: bool,
}

impl FallbackAsteroid {
    pub fn to_record(&self) -> CatalogRecord {
        CatalogRecord::new(self.id, self.name, self.diameter_km, self.velocity_km_s)
            .with_mass(self.mass_kg)
            .with_hazardous(self.hazardous)
    }
}

/// All fallback entries, in display order.
pub static FALLBACK_ASTEROIDS: &[FallbackAsteroid] = &[
    APOPHIS,
    BENNU,
    DIDYMOS,
    TOUTATIS,
    PHAETHON,
    SISYPHUS,
];

/// 99942 Apophis: 2029 close approach, the classic "city killer".
pub static APOPHIS: FallbackAsteroid = FallbackAsteroid {
    id: "2099942",
    name: "99942 Apophis (2004 MN4)",
    diameter_km: 0.34,
    velocity_km_s: 7.42,
    mass_kg: 6.1e10,
    hazardous: true,
};

/// 101955 Bennu: OSIRIS-REx sample-return target.
pub static BENNU: FallbackAsteroid = FallbackAsteroid {
    id: "2101955",
    name: "101955 Bennu (1999 RQ36)",
    diameter_km: 0.49,
    velocity_km_s: 12.7,
    mass_kg: 7.33e10,
    hazardous: true,
};

/// 65803 Didymos: DART kinetic impactor test system.
pub static DIDYMOS: FallbackAsteroid = FallbackAsteroid {
    id: "2065803",
    name: "65803 Didymos (1996 GT)",
    diameter_km: 0.78,
    velocity_km_s: 6.0,
    mass_kg: 5.4e11,
    hazardous: true,
};

/// 4179 Toutatis: elongated tumbling rotator.
pub static TOUTATIS: FallbackAsteroid = FallbackAsteroid {
    id: "2004179",
    name: "4179 Toutatis (1989 AC)",
    diameter_km: 2.45,
    velocity_km_s: 11.0,
    mass_kg: 5.0e13,
    hazardous: true,
};

/// 3200 Phaethon: Geminid meteor shower parent body.
pub static PHAETHON: FallbackAsteroid = FallbackAsteroid {
    id: "2003200",
    name: "3200 Phaethon (1983 TB)",
    diameter_km: 5.1,
    velocity_km_s: 33.4,
    mass_kg: 1.4e14,
    hazardous: true,
};

/// 1866 Sisyphus: largest known Apollo asteroid.
pub static SISYPHUS: FallbackAsteroid = FallbackAsteroid {
    id: "2001866",
    name: "1866 Sisyphus (1972 XA)",
    diameter_km: 8.5,
    velocity_km_s: 29.0,
    mass_kg: 9.0e14,
    hazardous: false,
};

/// Fallback catalog as records. Deterministic, no I/O.
pub fn fallback_asteroids() -> Vec<CatalogRecord> {
    FALLBACK_ASTEROIDS.iter().map(FallbackAsteroid::to_record).collect()
}
