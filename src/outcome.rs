//! Mission outcome evaluation.
//!
//! A deflection effort succeeds when the velocity change reaches a fixed
//! fraction of the approach velocity. There are exactly two outcomes:
//! - Impact: the asteroid still hits Earth
//! - Deflected: the asteroid misses
//!
//! Evaluation is instantaneous; the outcome is recomputed from scratch on
//! every parameter change.

use std::fmt;

use crate::types::AsteroidParameters;

/// Fraction of the approach velocity that delta-v must reach to avert impact.
pub const DEFLECTION_THRESHOLD_FRACTION: f64 = 0.10;

/// Outcome of the deflection mission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    /// The asteroid reaches Earth.
    #[default]
    Impact,
    /// The deflection effort pushed the asteroid off course.
    Deflected,
}

impl MissionStatus {
    pub fn from_deflected(deflected: bool) -> Self {
        if deflected {
            MissionStatus::Deflected
        } else {
            MissionStatus::Impact
        }
    }

    /// Returns true if Earth is spared.
    pub fn is_deflected(&self) -> bool {
        matches!(self, MissionStatus::Deflected)
    }

    /// Status key used by result panels ("success" / "impact").
    pub fn label(&self) -> &'static str {
        match self {
            MissionStatus::Impact => "impact",
            MissionStatus::Deflected => "success",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionStatus::Impact => f.write_str("IMPACT"),
            MissionStatus::Deflected => f.write_str("DEFLECTED"),
        }
    }
}

/// Minimum delta-v (km/s) needed to deflect an asteroid approaching at `velocity`.
pub fn required_delta_v(velocity: f64) -> f64 {
    velocity * DEFLECTION_THRESHOLD_FRACTION
}

/// Whether `delta_v` is enough to deflect an asteroid approaching at `velocity`.
///
/// The boundary counts as a success: delta_v == 10% of velocity deflects.
pub fn is_deflected(velocity: f64, delta_v: f64) -> bool {
    delta_v >= required_delta_v(velocity)
}

/// Evaluate the mission outcome for the given parameters.
pub fn evaluate_mission(params: &AsteroidParameters) -> MissionStatus {
    MissionStatus::from_deflected(is_deflected(params.velocity, params.delta_v))
}
