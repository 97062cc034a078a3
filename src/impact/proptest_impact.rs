//! Property-based tests for the impact calculation using proptest.
//!
//! These tests verify the engine's invariants across the full slider ranges.

use proptest::prelude::*;

use super::*;
use crate::test_utils::fixtures;
use crate::types::DeflectionMethod;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Energy never decreases when mass grows at fixed velocity.
    #[test]
    fn prop_energy_monotonic_in_mass(
        mass in 1e6f64..1e16,
        extra in 0.0f64..1e16,
        velocity in 0.0f64..50.0,
    ) {
        prop_assert!(impact_energy(mass + extra, velocity) >= impact_energy(mass, velocity));
    }

    /// Energy never decreases when effective velocity grows at fixed mass.
    #[test]
    fn prop_energy_monotonic_in_velocity(
        mass in 1e6f64..1e16,
        v in 0.0f64..50.0,
        dv in 0.0f64..10.0,
    ) {
        prop_assert!(impact_energy(mass, v + dv) >= impact_energy(mass, v));
    }

    /// Doubling energy never shrinks the crater.
    #[test]
    fn prop_crater_monotonic_in_energy(
        energy in 0.0f64..1e24,
        angle in 15.0f64..=90.0,
    ) {
        prop_assert!(crater_size(2.0 * energy, angle) >= crater_size(energy, angle));
    }

    /// A vertical impact gives the largest crater for a given energy.
    #[test]
    fn prop_vertical_impact_largest_crater(
        energy in 1e10f64..1e24,
        angle in 15.0f64..=90.0,
    ) {
        prop_assert!(crater_size(energy, 90.0) >= crater_size(energy, angle));
    }

    /// Every metric is finite and non-negative across the documented ranges,
    /// including deflections that stop the asteroid completely.
    #[test]
    fn prop_metrics_finite_and_non_negative(
        params in fixtures::arb_parameters(),
    ) {
        let result = compute_impact(&params);
        for value in [
            result.energy,
            result.tnt_equivalent,
            result.crater_size,
            result.seismic_magnitude,
        ] {
            prop_assert!(value.is_finite(), "non-finite metric in {result:?}");
            prop_assert!(value >= 0.0, "negative metric in {result:?}");
        }
    }

    /// The TNT figure is always the energy divided by the megaton constant.
    #[test]
    fn prop_tnt_is_energy_over_constant(params in fixtures::arb_parameters()) {
        let result = compute_impact(&params);
        prop_assert_eq!(result.tnt_equivalent, result.energy / TNT_JOULES_PER_MEGATON);
    }

    /// Deflection flips exactly at ten percent of the approach velocity.
    #[test]
    fn prop_deflected_matches_threshold(params in fixtures::arb_parameters()) {
        let result = compute_impact(&params);
        prop_assert_eq!(result.deflected, params.delta_v >= params.velocity * 0.1);
    }

    /// The deflection method never changes the physics.
    #[test]
    fn prop_method_does_not_affect_result(params in fixtures::arb_parameters()) {
        let baseline = compute_impact(&params);
        for method in DeflectionMethod::ALL {
            let mut alt = params.clone();
            alt.deflection_method = method;
            prop_assert_eq!(compute_impact(&alt), baseline);
        }
    }
}
