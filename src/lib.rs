//! Impactsim - Asteroid Impact Simulator
//!
//! A library crate mapping near-Earth-object parameters and a deflection
//! strategy to impact energy, crater size, seismic magnitude and mission
//! outcome.

pub mod catalog;
pub mod impact;
pub mod outcome;
pub mod store;
pub mod types;

#[cfg(test)]
pub mod test_utils;
