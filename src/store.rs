//! Parameter store for the impact simulation.
//!
//! Holds the current [`AsteroidParameters`] together with the
//! [`ImpactResult`] derived from them. Every mutation recomputes the result
//! before returning, so readers never see parameters and result out of step.

use bevy::prelude::*;

use crate::catalog::{extract_asteroid_data, fallback_asteroids, CatalogError, CatalogRecord};
use crate::impact::{compute_impact, ImpactResult};
use crate::outcome::MissionStatus;
use crate::types::{AsteroidParameters, DeflectionMethod, ParameterField, ParseFieldError};

/// Single source of truth for the simulation inputs and their result.
#[derive(Resource, Clone, Debug)]
pub struct ParameterStore {
    params: AsteroidParameters,
    result: ImpactResult,
    /// Number of committed mutations since creation.
    revision: u64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(AsteroidParameters::default())
    }
}

impl ParameterStore {
    pub fn new(params: AsteroidParameters) -> Self {
        let result = compute_impact(&params);
        Self {
            params,
            result,
            revision: 0,
        }
    }

    /// Current parameters.
    pub fn get(&self) -> &AsteroidParameters {
        &self.params
    }

    /// Result for the current parameters.
    pub fn result(&self) -> ImpactResult {
        self.result
    }

    pub fn status(&self) -> MissionStatus {
        self.result.status()
    }

    /// Incremented once per mutation; lets pollers detect fresh results.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Overwrite one numeric field and recompute. Values are not range-checked.
    pub fn set_field(&mut self, field: ParameterField, value: f64) -> ImpactResult {
        let previous = self.params.field(field);
        self.params.set(field, value);
        debug!("Set {}: {} -> {}", field.key(), previous, value);
        self.commit()
    }

    /// [`Self::set_field`] keyed by field name ("diameter", "deltaV", ...).
    ///
    /// An unknown name leaves the store untouched.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: f64,
    ) -> Result<ImpactResult, ParseFieldError> {
        let field = name.parse::<ParameterField>()?;
        Ok(self.set_field(field, value))
    }

    /// Set method and delta-v together, recomputing once.
    pub fn set_deflection(&mut self, method: DeflectionMethod, delta_v: f64) -> ImpactResult {
        self.params.deflection_method = method;
        self.params.delta_v = delta_v;
        self.commit()
    }

    /// Seed diameter, velocity and mass from a catalog record, recomputing once.
    ///
    /// A malformed record leaves the store untouched.
    pub fn select_asteroid(
        &mut self,
        record: &CatalogRecord,
    ) -> Result<ImpactResult, CatalogError> {
        let data = extract_asteroid_data(record)?;
        self.params.diameter = data.diameter;
        self.params.velocity = data.velocity;
        self.params.mass = data.mass;
        self.params.selected_asteroid = Some(record.clone());

        info!(
            "Selected {}: {:.2} km, {:.1} km/s, {:.2e} kg",
            record.name, data.diameter, data.velocity, data.mass
        );

        Ok(self.commit())
    }

    /// Select `record`, substituting the first fallback asteroid if it is malformed.
    pub fn select_or_fallback(&mut self, record: &CatalogRecord) -> ImpactResult {
        match self.select_asteroid(record) {
            Ok(result) => result,
            Err(err) => {
                warn!("Cannot use selected asteroid, substituting fallback: {err}");
                let substitute = fallback_asteroids().into_iter().find_map(|fallback| {
                    self.select_asteroid(&fallback).ok()
                });
                substitute.unwrap_or(self.result)
            }
        }
    }

    /// Restore the simulation-start defaults.
    pub fn reset(&mut self) -> ImpactResult {
        self.params = AsteroidParameters::default();
        self.commit()
    }

    /// Recompute the result for the current parameters and publish it.
    fn commit(&mut self) -> ImpactResult {
        let previous = self.result.status();
        self.result = compute_impact(&self.params);
        self.revision += 1;

        debug!("Recomputed impact (revision {}): {}", self.revision, self.result);

        let status = self.result.status();
        if status != previous {
            info!(
                "Mission status changed: {} -> {} ({} at {:.2} km/s)",
                previous, status, self.params.deflection_method, self.params.delta_v
            );
        }

        self.result
    }
}

/// Plugin exposing the parameter store as a resource.
///
/// Presentation systems read [`ParameterStore`] and use change detection to
/// redraw only when a mutation has landed.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParameterStore>()
            .add_systems(Update, report_impact);
    }
}

/// Log the result whenever the store changes.
fn report_impact(store: Res<ParameterStore>) {
    if !store.is_changed() {
        return;
    }
    info!("Impact: {}", store.result());
}
