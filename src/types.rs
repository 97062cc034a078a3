//! Core parameter types and constants for the impact simulation.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::catalog::CatalogRecord;

/// Physical constants (SI units)

/// Energy released by one megaton of TNT (J).
pub const TNT_JOULES_PER_MEGATON: f64 = 4.184e15;

/// Kilometers to meters
pub const KM_TO_M: f64 = 1000.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Slider ranges offered to UI collaborators. The core never enforces them.
pub const DIAMETER_RANGE_KM: RangeInclusive<f64> = 0.1..=10.0;
pub const VELOCITY_RANGE_KM_S: RangeInclusive<f64> = 5.0..=50.0;
pub const ANGLE_RANGE_DEG: RangeInclusive<f64> = 15.0..=90.0;
pub const DELTA_V_RANGE_KM_S: RangeInclusive<f64> = 0.0..=5.0;

/// Strategy used to push the asteroid off course.
///
/// Only changes how the mission is labelled; the physics ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeflectionMethod {
    #[default]
    Kinetic,
    Ion,
    Nuclear,
    Gravity,
}

impl DeflectionMethod {
    pub const ALL: [DeflectionMethod; 4] = [
        DeflectionMethod::Kinetic,
        DeflectionMethod::Ion,
        DeflectionMethod::Nuclear,
        DeflectionMethod::Gravity,
    ];

    /// Short key used by form controls ("kinetic", "ion", ...).
    pub fn key(&self) -> &'static str {
        match self {
            DeflectionMethod::Kinetic => "kinetic",
            DeflectionMethod::Ion => "ion",
            DeflectionMethod::Nuclear => "nuclear",
            DeflectionMethod::Gravity => "gravity",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            DeflectionMethod::Kinetic => "Kinetic Impactor",
            DeflectionMethod::Ion => "Ion Thruster",
            DeflectionMethod::Nuclear => "Nuclear Blast",
            DeflectionMethod::Gravity => "Gravity Tractor",
        }
    }
}

impl fmt::Display for DeflectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown deflection method {0:?}")]
pub struct ParseMethodError(pub String);

impl FromStr for DeflectionMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeflectionMethod::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}

/// Numeric fields of [`AsteroidParameters`] that can be set one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterField {
    Diameter,
    Velocity,
    Angle,
    Mass,
    DeltaV,
}

impl ParameterField {
    /// Name accepted by [`FromStr`] and used in log output.
    pub fn key(&self) -> &'static str {
        match self {
            ParameterField::Diameter => "diameter",
            ParameterField::Velocity => "velocity",
            ParameterField::Angle => "angle",
            ParameterField::Mass => "mass",
            ParameterField::DeltaV => "deltaV",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parameter field {0:?}")]
pub struct ParseFieldError(pub String);

impl FromStr for ParameterField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diameter" => Ok(ParameterField::Diameter),
            "velocity" => Ok(ParameterField::Velocity),
            "angle" => Ok(ParameterField::Angle),
            "mass" => Ok(ParameterField::Mass),
            "deltaV" | "delta_v" => Ok(ParameterField::DeltaV),
            other => Err(ParseFieldError(other.to_owned())),
        }
    }
}

/// Inputs to the impact calculation.
///
/// Mass is not derived from diameter; callers set both independently.
#[derive(Clone, Debug, PartialEq)]
pub struct AsteroidParameters {
    /// Diameter (km)
    pub diameter: f64,
    /// Approach velocity (km/s)
    pub velocity: f64,
    /// Impact angle from horizontal (degrees)
    pub angle: f64,
    /// Mass (kg)
    pub mass: f64,
    pub deflection_method: DeflectionMethod,
    /// Velocity reduction achieved by the deflection effort (km/s)
    pub delta_v: f64,
    /// Catalog record the physical fields were seeded from, if any.
    pub selected_asteroid: Option<CatalogRecord>,
}

impl Default for AsteroidParameters {
    fn default() -> Self {
        Self {
            diameter: 1.0,
            velocity: 20.0,
            angle: 45.0,
            mass: 1e12,
            deflection_method: DeflectionMethod::Kinetic,
            delta_v: 0.0,
            selected_asteroid: None,
        }
    }
}

impl AsteroidParameters {
    /// Read a numeric field by name.
    pub fn field(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Diameter => self.diameter,
            ParameterField::Velocity => self.velocity,
            ParameterField::Angle => self.angle,
            ParameterField::Mass => self.mass,
            ParameterField::DeltaV => self.delta_v,
        }
    }

    /// Overwrite a numeric field by name. No range checks.
    pub fn set(&mut self, field: ParameterField, value: f64) {
        match field {
            ParameterField::Diameter => self.diameter = value,
            ParameterField::Velocity => self.velocity = value,
            ParameterField::Angle => self.angle = value,
            ParameterField::Mass => self.mass = value,
            ParameterField::DeltaV => self.delta_v = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_slider_ranges() {
        let params = AsteroidParameters::default();
        assert!(DIAMETER_RANGE_KM.contains(&params.diameter));
        assert!(VELOCITY_RANGE_KM_S.contains(&params.velocity));
        assert!(ANGLE_RANGE_DEG.contains(&params.angle));
        assert!(DELTA_V_RANGE_KM_S.contains(&params.delta_v));
        assert!(params.mass > 0.0);
        assert!(params.selected_asteroid.is_none());
    }

    #[test]
    fn test_method_keys_round_trip() {
        for method in DeflectionMethod::ALL {
            assert_eq!(method.key().parse::<DeflectionMethod>(), Ok(method));
        }
        assert!("laser".parse::<DeflectionMethod>().is_err());
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(DeflectionMethod::Gravity.to_string(), "Gravity Tractor");
        assert_eq!(DeflectionMethod::default(), DeflectionMethod::Kinetic);
    }

    #[test]
    fn test_field_names() {
        assert_eq!("deltaV".parse::<ParameterField>(), Ok(ParameterField::DeltaV));
        assert_eq!("delta_v".parse::<ParameterField>(), Ok(ParameterField::DeltaV));
        assert_eq!("mass".parse::<ParameterField>(), Ok(ParameterField::Mass));
        assert_eq!(
            "density".parse::<ParameterField>(),
            Err(ParseFieldError("density".to_owned()))
        );
    }

    #[test]
    fn test_set_and_read_field() {
        let mut params = AsteroidParameters::default();
        params.set(ParameterField::Angle, 90.0);
        params.set(ParameterField::DeltaV, 2.5);
        assert_eq!(params.field(ParameterField::Angle), 90.0);
        assert_eq!(params.delta_v, 2.5);
        // Out-of-range values are accepted as-is.
        params.set(ParameterField::Velocity, 120.0);
        assert_eq!(params.velocity, 120.0);
    }

    #[test]
    fn test_field_keys_parse_back() {
        for field in [
            ParameterField::Diameter,
            ParameterField::Velocity,
            ParameterField::Angle,
            ParameterField::Mass,
            ParameterField::DeltaV,
        ] {
            assert_eq!(field.key().parse::<ParameterField>(), Ok(field));
        }
    }
}
