//! Common test utilities for integration tests.

#![allow(dead_code)]

use impactsim::catalog::{CatalogError, CatalogRecord, CatalogSource};
use impactsim::types::AsteroidParameters;

/// Reference scenario: 1 km, 20 km/s, 45°, 1e12 kg.
pub fn reference_parameters(delta_v: f64) -> AsteroidParameters {
    AsteroidParameters {
        diameter: 1.0,
        velocity: 20.0,
        angle: 45.0,
        mass: 1e12,
        delta_v,
        ..Default::default()
    }
}

/// Source whose network call always fails.
pub struct UnreachableSource;

impl CatalogSource for UnreachableSource {
    fn browse_asteroids(&self, _page: u32) -> Result<Vec<CatalogRecord>, CatalogError> {
        Err(CatalogError::Unavailable("connection timed out".into()))
    }
}

/// Source serving a fixed page of records.
pub struct FixedSource(pub Vec<CatalogRecord>);

impl CatalogSource for FixedSource {
    fn browse_asteroids(&self, _page: u32) -> Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self.0.clone())
    }
}
