//! Navigation data providers.
//!
//! The navigation database is an external collaborator; this module
//! defines the seam and a JSON file provider for headless runs.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use atcsim_core::navdata::NavRecords;
use atcsim_geo::GeoBounds;

pub type NavDataResult<T> = Result<T, NavDataError>;

/// Navigation data could not be produced. The simulation keeps running
/// without it.
#[derive(Error, Debug)]
pub enum NavDataError {
    #[error("failed to read navigation data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed navigation data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("navigation data provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of navigation records for a geographic area.
pub trait NavDataProvider {
    /// Records relevant to `bounds`. Empty collections are a valid answer.
    fn fetch(&self, bounds: &GeoBounds) -> NavDataResult<NavRecords>;
}

/// Records already in memory (tests, embedded scenarios).
impl NavDataProvider for NavRecords {
    fn fetch(&self, bounds: &GeoBounds) -> NavDataResult<NavRecords> {
        Ok(filter_to_bounds(self.clone(), bounds))
    }
}

/// Reads a JSON document shaped like `NavRecords`.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NavDataProvider for JsonFileProvider {
    fn fetch(&self, bounds: &GeoBounds) -> NavDataResult<NavRecords> {
        let text = fs::read_to_string(&self.path).map_err(|source| NavDataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: NavRecords = serde_json::from_str(&text)?;
        Ok(filter_to_bounds(records, bounds))
    }
}

/// Keep records inside `bounds`.
///
/// ILS records carry no position and follow their runway. Approach legs
/// follow their airport: initial fixes commonly lie outside the scope but
/// are still needed for localizer lengths.
pub fn filter_to_bounds(mut records: NavRecords, bounds: &GeoBounds) -> NavRecords {
    records.waypoints.retain(|w| bounds.contains(w.position()));
    records.vors.retain(|v| bounds.contains(v.position()));
    records.airports.retain(|a| bounds.contains(a.position()));
    records.runways.retain(|r| bounds.contains(r.position()));

    let runway_keys: HashSet<(String, String)> = records
        .runways
        .iter()
        .map(|r| (r.airport_id.clone(), r.id.clone()))
        .collect();
    records.ils.retain(|ils| {
        runway_keys
            .iter()
            .any(|(apt, rwy)| *apt == ils.airport_id && crate::runway::same_runway(rwy, &ils.runway_id))
    });

    let airports: HashSet<String> = records
        .airports
        .iter()
        .map(|a| a.id.clone())
        .chain(records.runways.iter().map(|r| r.airport_id.clone()))
        .collect();
    records
        .approach_legs
        .retain(|leg| airports.contains(&leg.airport_id));

    records
}
