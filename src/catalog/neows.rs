//! Catalog sources backed by NASA NeoWs browse responses.
//!
//! The live HTTP transport lives outside this crate; here a browse response
//! saved to disk stands in for it.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use serde::Deserialize;

use super::{CatalogError, CatalogRecord, CatalogSource};

/// Paging block of a browse response.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Body of `GET /neo/rest/v1/neo/browse`.
///
/// Objects are kept as raw JSON so one record the catalog model cannot hold
/// does not reject the whole page.
#[derive(Clone, Debug, Deserialize)]
pub struct BrowsePage {
    #[serde(default)]
    pub page: PageInfo,
    #[serde(default)]
    pub near_earth_objects: Vec<serde_json::Value>,
}

impl BrowsePage {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode each object independently, skipping (and logging) the ones
    /// that do not fit [`CatalogRecord`].
    pub fn into_records(self) -> Vec<CatalogRecord> {
        self.near_earth_objects
            .into_iter()
            .enumerate()
            .filter_map(|(index, object)| {
                let id = object
                    .get("id")
                    .and_then(|id| id.as_str())
                    .unwrap_or("<no id>")
                    .to_owned();
                match serde_json::from_value::<CatalogRecord>(object) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!("Skipping catalog object {index} ({id}): {err}");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Source that serves one saved browse page from a JSON file.
#[derive(Clone, Debug)]
pub struct NeoWsFileSource {
    path: PathBuf,
}

impl NeoWsFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for NeoWsFileSource {
    fn browse_asteroids(&self, page: u32) -> Result<Vec<CatalogRecord>, CatalogError> {
        let json = fs::read_to_string(&self.path)?;
        let browse = BrowsePage::from_json(&json)?;

        if browse.page.number != page {
            return Err(CatalogError::Unavailable(format!(
                "page {} not available in {} (holds page {})",
                page,
                self.path.display(),
                browse.page.number
            )));
        }

        let (number, total_pages) = (browse.page.number, browse.page.total_pages);
        let records = browse.into_records();
        debug!(
            "Read {} records from {} (page {}/{})",
            records.len(),
            self.path.display(),
            number,
            total_pages
        );

        Ok(records)
    }
}

/// Source used when no catalog is configured. Always unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineSource;

impl CatalogSource for OfflineSource {
    fn browse_asteroids(&self, _page: u32) -> Result<Vec<CatalogRecord>, CatalogError> {
        Err(CatalogError::Unavailable("no catalog source configured".into()))
    }
}
