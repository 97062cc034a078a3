//! Impact energy and damage estimates.
//!
//! Maps asteroid parameters to the four headline impact metrics:
//! - Kinetic energy at impact (J)
//! - TNT equivalent (megatons)
//! - Final crater diameter (km)
//! - Seismic magnitude (Richter-like)
//!
//! All functions are pure and total: zero effective velocity yields zero
//! energy, and every metric degrades to its floor instead of NaN.

#[cfg(test)]
mod proptest_impact;

use std::fmt;

use crate::outcome::{evaluate_mission, MissionStatus};
use crate::types::{AsteroidParameters, DEG_TO_RAD, KM_TO_M, TNT_JOULES_PER_MEGATON};

/// Crater diameter (km) produced by a 1 Mt vertical impact.
pub const CRATER_SCALE_KM: f64 = 0.8;

/// Energy scaling exponent for crater diameter (gravity-regime scaling, 1/3.4).
pub const CRATER_ENERGY_EXPONENT: f64 = 1.0 / 3.4;

/// Magnitude gained per decade of impact energy.
pub const SEISMIC_MAGNITUDE_PER_DECADE: f64 = 0.67;

/// Offset of the energy-magnitude relation (Earth Impact Effects Program form).
pub const SEISMIC_MAGNITUDE_OFFSET: f64 = 5.87;

/// Lowest reported seismic magnitude.
pub const SEISMIC_MAGNITUDE_FLOOR: f64 = 0.0;

/// Snapshot of the derived impact metrics for one parameter set.
///
/// Recomputed wholesale on every parameter change; never patched in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactResult {
    /// Kinetic energy at impact (J)
    pub energy: f64,
    /// Energy in megatons of TNT
    pub tnt_equivalent: f64,
    /// Final crater diameter (km)
    pub crater_size: f64,
    /// Richter-like magnitude (dimensionless)
    pub seismic_magnitude: f64,
    /// Whether the deflection effort averts the impact.
    pub deflected: bool,
}

impl ImpactResult {
    pub fn status(&self) -> MissionStatus {
        MissionStatus::from_deflected(self.deflected)
    }

    /// Radius in meters of the map overlay circle.
    ///
    /// The overlay is drawn with the crater's full extent as its radius, so
    /// this is `crater_size` converted to meters, not halved.
    pub fn crater_radius_m(&self) -> f64 {
        self.crater_size * KM_TO_M
    }
}

impl fmt::Display for ImpactResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Energy: {:.2e} J, TNT Equivalent: {:.2} MT, Crater Size: {:.2} km, Seismic Magnitude: {:.2}, Mission: {}",
            self.energy,
            self.tnt_equivalent,
            self.crater_size,
            self.seismic_magnitude,
            self.status(),
        )
    }
}

/// Velocity remaining after deflection (km/s), floored at zero.
pub fn effective_velocity(velocity: f64, delta_v: f64) -> f64 {
    (velocity - delta_v).max(0.0)
}

/// Kinetic energy E = ½mv² (J).
///
/// # Arguments
/// * `mass` - Asteroid mass (kg)
/// * `velocity_km_s` - Impact velocity (km/s); converted to m/s before squaring
pub fn impact_energy(mass: f64, velocity_km_s: f64) -> f64 {
    let v = velocity_km_s * KM_TO_M;
    0.5 * mass * v * v
}

/// Convert joules to megatons of TNT.
pub fn energy_to_tnt(energy: f64) -> f64 {
    energy / TNT_JOULES_PER_MEGATON
}

/// Crater-size multiplier for the impact angle.
///
/// sin(θ)^(1/3): 1.0 for a vertical impact, shrinking toward grazing angles.
pub fn angle_factor(angle_deg: f64) -> f64 {
    (angle_deg * DEG_TO_RAD).sin().clamp(0.0, 1.0).cbrt()
}

/// Final crater diameter (km).
///
/// D = CRATER_SCALE_KM × W^(1/3.4) × sin(θ)^(1/3), with W the yield in megatons.
pub fn crater_size(energy: f64, angle_deg: f64) -> f64 {
    if energy <= 0.0 {
        return 0.0;
    }
    let yield_mt = energy_to_tnt(energy);
    CRATER_SCALE_KM * yield_mt.powf(CRATER_ENERGY_EXPONENT) * angle_factor(angle_deg)
}

/// Seismic magnitude of the ground shaking caused by the impact.
///
/// M = 0.67 × log10(E) − 5.87, floored at [`SEISMIC_MAGNITUDE_FLOOR`].
/// Zero energy returns the floor without evaluating the logarithm.
pub fn seismic_magnitude(energy: f64) -> f64 {
    if energy <= 0.0 {
        return SEISMIC_MAGNITUDE_FLOOR;
    }
    (SEISMIC_MAGNITUDE_PER_DECADE * energy.log10() - SEISMIC_MAGNITUDE_OFFSET)
        .max(SEISMIC_MAGNITUDE_FLOOR)
}

/// Run the full calculation for one parameter set.
pub fn compute_impact(params: &AsteroidParameters) -> ImpactResult {
    let v_eff = effective_velocity(params.velocity, params.delta_v);
    let energy = impact_energy(params.mass, v_eff);

    ImpactResult {
        energy,
        tnt_equivalent: energy_to_tnt(energy),
        crater_size: crater_size(energy, params.angle),
        seismic_magnitude: seismic_magnitude(energy),
        deflected: evaluate_mission(params).is_deflected(),
    }
}
