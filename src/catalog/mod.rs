//! Near-Earth-object catalog access.
//!
//! Turns raw catalog records into simulation inputs and guarantees a usable
//! catalog even when the live source fails:
//! - `extract_asteroid_data`: record → diameter, velocity, mass
//! - `CatalogSource`: anything that can browse a page of records
//! - `load_catalog`: browse once, drop malformed records, fall back if needed
//!
//! Records follow the NASA NeoWs object layout so browse responses can be
//! deserialized directly.

pub mod fallback;
pub mod neows;

use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub use fallback::{fallback_asteroids, FALLBACK_ASTEROIDS};
pub use neows::{NeoWsFileSource, OfflineSource};

use crate::types::KM_TO_M;

/// Bulk density assumed when a record carries no mass (kg/m³).
pub const ASSUMED_DENSITY_KG_M3: f64 = 2600.0;

/// Number of records offered in a selection list.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog record {id:?} is missing field `{field}`")]
    MalformedRecord { id: String, field: &'static str },

    #[error("asteroid catalog unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Diameter bounds in kilometers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilometers: Option<DiameterRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    /// Decimal string, as NeoWs reports it. Bare JSON numbers are accepted.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub kilometers_per_second: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }),
    )
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_velocity: Option<RelativeVelocity>,
}

/// One near-Earth object as delivered by the catalog.
///
/// Unknown fields are ignored; missing optional fields only matter
/// when the record is extracted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    /// Not part of NeoWs; curated records may supply a measured mass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg: Option<f64>,
}

impl CatalogRecord {
    /// Build a well-formed record with a single diameter and approach velocity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diameter_km: f64,
        velocity_km_s: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            estimated_diameter: Some(EstimatedDiameter {
                kilometers: Some(DiameterRange {
                    estimated_diameter_min: diameter_km,
                    estimated_diameter_max: diameter_km,
                }),
            }),
            close_approach_data: vec![CloseApproach {
                close_approach_date: None,
                relative_velocity: Some(RelativeVelocity {
                    kilometers_per_second: Some(velocity_km_s.to_string()),
                }),
            }],
            is_potentially_hazardous_asteroid: false,
            mass_kg: None,
        }
    }

    pub fn with_mass(mut self, mass_kg: f64) -> Self {
        self.mass_kg = Some(mass_kg);
        self
    }

    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.is_potentially_hazardous_asteroid = hazardous;
        self
    }

    fn malformed(&self, field: &'static str) -> CatalogError {
        CatalogError::MalformedRecord {
            id: self.id.clone(),
            field,
        }
    }
}

/// Physical inputs extracted from a catalog record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractedAsteroid {
    /// Diameter (km)
    pub diameter: f64,
    /// Approach velocity (km/s)
    pub velocity: f64,
    /// Mass (kg)
    pub mass: f64,
}

/// Mass of a sphere of the given diameter at [`ASSUMED_DENSITY_KG_M3`].
pub fn estimate_mass(diameter_km: f64) -> f64 {
    let radius_m = diameter_km * KM_TO_M / 2.0;
    ASSUMED_DENSITY_KG_M3 * 4.0 / 3.0 * std::f64::consts::PI * radius_m.powi(3)
}

/// Project a catalog record onto simulation inputs.
///
/// Diameter is the mean of the estimated bounds, velocity comes from the
/// first close approach. Mass falls back to [`estimate_mass`] when the record
/// has none. Missing or non-numeric diameter/velocity fail with
/// [`CatalogError::MalformedRecord`].
pub fn extract_asteroid_data(record: &CatalogRecord) -> Result<ExtractedAsteroid, CatalogError> {
    let range = record
        .estimated_diameter
        .as_ref()
        .and_then(|d| d.kilometers.as_ref())
        .ok_or_else(|| record.malformed("estimated_diameter.kilometers"))?;
    let diameter = (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0;
    if !diameter.is_finite() {
        return Err(record.malformed("estimated_diameter.kilometers"));
    }

    let velocity = record
        .close_approach_data
        .first()
        .and_then(|approach| approach.relative_velocity.as_ref())
        .and_then(|v| v.kilometers_per_second.as_deref())
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| record.malformed("close_approach_data.relative_velocity"))?;

    let mass = record
        .mass_kg
        .filter(|m| m.is_finite())
        .unwrap_or_else(|| estimate_mass(diameter));

    Ok(ExtractedAsteroid {
        diameter,
        velocity,
        mass,
    })
}

/// Anything that can hand out pages of catalog records.
///
/// Retries and transport details belong to the implementation.
pub trait CatalogSource: Send + Sync {
    fn browse_asteroids(&self, page: u32) -> Result<Vec<CatalogRecord>, CatalogError>;
}

/// Where the records of an [`AsteroidCatalog`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogOrigin {
    Live,
    Fallback,
}

/// The records available for selection.
#[derive(Resource, Clone, Debug)]
pub struct AsteroidCatalog {
    records: Vec<CatalogRecord>,
    origin: CatalogOrigin,
    display_limit: usize,
}

impl Default for AsteroidCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

impl AsteroidCatalog {
    /// Catalog backed by the built-in fallback records.
    pub fn fallback() -> Self {
        Self {
            records: fallback_asteroids(),
            origin: CatalogOrigin::Fallback,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Records shown in a selection list.
    pub fn listed(&self) -> &[CatalogRecord] {
        &self.records[..self.records.len().min(self.display_limit)]
    }

    /// Record at `index` in catalog order.
    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == CatalogOrigin::Fallback
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Browse one page and build a catalog, falling back when needed.
///
/// Malformed records are dropped. If the source fails, or nothing usable
/// remains, the fallback records are used instead. Never fails.
pub fn load_catalog(source: &dyn CatalogSource, page: u32) -> AsteroidCatalog {
    let records = match source.browse_asteroids(page) {
        Ok(records) => records,
        Err(err) => {
            warn!("Asteroid catalog unavailable, using fallback data: {err}");
            return AsteroidCatalog::fallback();
        }
    };

    let fetched = records.len();
    let usable: Vec<CatalogRecord> = records
        .into_iter()
        .filter(|record| match extract_asteroid_data(record) {
            Ok(_) => true,
            Err(err) => {
                warn!("Skipping catalog record: {err}");
                false
            }
        })
        .collect();

    if usable.is_empty() {
        warn!(
            "Catalog page {} had no usable records ({} fetched), using fallback data",
            page, fetched
        );
        return AsteroidCatalog::fallback();
    }

    info!(
        "Loaded {} asteroids from catalog page {} ({} skipped)",
        usable.len(),
        page,
        fetched - usable.len()
    );

    AsteroidCatalog {
        records: usable,
        origin: CatalogOrigin::Live,
        display_limit: DEFAULT_DISPLAY_LIMIT,
    }
}

/// Catalog loading configuration.
#[derive(Resource, Clone, Debug)]
pub struct CatalogSettings {
    /// Page requested from the source.
    pub page: u32,
    /// NeoWs browse response on disk; `None` runs offline.
    pub neows_path: Option<PathBuf>,
    /// Maximum records offered for selection.
    pub display_limit: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page: 0,
            neows_path: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl CatalogSettings {
    /// Source described by these settings.
    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.neows_path {
            Some(path) => Box::new(NeoWsFileSource::new(path.clone())),
            None => Box::new(OfflineSource),
        }
    }
}

/// Plugin loading the asteroid catalog at startup.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogSettings>()
            .add_systems(Startup, load_catalog_on_startup);
    }
}

fn load_catalog_on_startup(mut commands: Commands, settings: Res<CatalogSettings>) {
    let source = settings.source();
    let catalog =
        load_catalog(source.as_ref(), settings.page).with_display_limit(settings.display_limit);
    commands.insert_resource(catalog);
}
