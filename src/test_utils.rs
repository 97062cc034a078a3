//! Test utilities for impact simulation tests.
//!
//! Provides parameter fixtures and proptest strategies covering the
//! documented slider ranges.

use crate::types::AsteroidParameters;

/// Fixtures for building parameter sets.
pub mod fixtures {
    use proptest::prelude::*;

    use super::*;
    use crate::types::{
        DeflectionMethod, ANGLE_RANGE_DEG, DELTA_V_RANGE_KM_S, DIAMETER_RANGE_KM,
        VELOCITY_RANGE_KM_S,
    };

    /// Default parameters with the given approach velocity and delta-v (km/s).
    pub fn with_velocity(velocity: f64, delta_v: f64) -> AsteroidParameters {
        AsteroidParameters {
            velocity,
            delta_v,
            ..Default::default()
        }
    }

    /// Default parameters with the three catalog-derived fields replaced.
    pub fn physical(diameter: f64, velocity: f64, mass: f64) -> AsteroidParameters {
        AsteroidParameters {
            diameter,
            velocity,
            mass,
            ..Default::default()
        }
    }

    pub fn arb_method() -> impl Strategy<Value = DeflectionMethod> {
        prop::sample::select(DeflectionMethod::ALL.to_vec())
    }

    /// Any parameter set within the slider ranges, mass from 1e6 to 1e16 kg.
    pub fn arb_parameters() -> impl Strategy<Value = AsteroidParameters> {
        (
            DIAMETER_RANGE_KM,
            VELOCITY_RANGE_KM_S,
            ANGLE_RANGE_DEG,
            1e6f64..1e16,
            arb_method(),
            DELTA_V_RANGE_KM_S,
        )
            .prop_map(
                |(diameter, velocity, angle, mass, deflection_method, delta_v)| {
                    AsteroidParameters {
                        diameter,
                        velocity,
                        angle,
                        mass,
                        deflection_method,
                        delta_v,
                        selected_asteroid: None,
                    }
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_velocity_keeps_other_defaults() {
        let params = fixtures::with_velocity(30.0, 1.5);
        let defaults = AsteroidParameters::default();
        assert_eq!(params.velocity, 30.0);
        assert_eq!(params.delta_v, 1.5);
        assert_eq!(params.mass, defaults.mass);
        assert_eq!(params.angle, defaults.angle);
    }

    #[test]
    fn test_physical_fixture() {
        let params = fixtures::physical(1.2, 18.0, 5e11);
        assert_eq!(params.diameter, 1.2);
        assert_eq!(params.velocity, 18.0);
        assert_eq!(params.mass, 5e11);
        assert_eq!(params.delta_v, 0.0);
    }
}
