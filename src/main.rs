//! Impactsim - Asteroid Impact Simulator
//!
//! Headless driver: loads the asteroid catalog (from a saved NeoWs browse
//! page if one is given on the command line), seeds the simulation from the
//! first listed asteroid and logs the resulting impact estimate.

use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use impactsim::catalog::{AsteroidCatalog, CatalogPlugin, CatalogSettings};
use impactsim::store::{ImpactPlugin, ParameterStore};

fn main() {
    let settings = CatalogSettings {
        neows_path: std::env::args().nth(1).map(PathBuf::from),
        ..default()
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Insert settings before the plugin that reads them
        .insert_resource(settings)
        .add_plugins((CatalogPlugin, ImpactPlugin))
        .add_systems(PostStartup, seed_from_catalog);

    // Startup loads the catalog and seeds the store; the first Update reports.
    app.update();
}

/// Seed the store from the first catalog entry.
fn seed_from_catalog(catalog: Res<AsteroidCatalog>, mut store: ResMut<ParameterStore>) {
    let Some(record) = catalog.get(0) else {
        return;
    };
    info!(
        "{} asteroids available ({:?} catalog)",
        catalog.len(),
        catalog.origin()
    );
    store.select_or_fallback(record);
}
