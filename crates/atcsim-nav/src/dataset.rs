//! Owned navigation record collections with an explicit "not yet loaded"
//! state.

use tracing::{info, warn};

use atcsim_core::navdata::NavRecords;
use atcsim_geo::GeoBounds;

use crate::provider::NavDataProvider;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum NavigationDataset {
    /// Records have not arrived (or the provider failed). Nothing is derived.
    #[default]
    NotLoaded,
    Loaded(NavRecords),
}

impl NavigationDataset {
    /// Query `provider` once. A provider failure is logged and leaves the
    /// dataset unloaded; no retry.
    pub fn load(provider: &dyn NavDataProvider, bounds: &GeoBounds) -> Self {
        match provider.fetch(bounds) {
            Ok(records) => {
                info!(
                    waypoints = records.waypoints.len(),
                    airports = records.airports.len(),
                    vors = records.vors.len(),
                    runways = records.runways.len(),
                    ils = records.ils.len(),
                    approach_legs = records.approach_legs.len(),
                    "navigation data loaded"
                );
                NavigationDataset::Loaded(records)
            }
            Err(e) => {
                warn!("navigation data unavailable, continuing without it: {e}");
                NavigationDataset::NotLoaded
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, NavigationDataset::Loaded(_))
    }

    pub fn records(&self) -> Option<&NavRecords> {
        match self {
            NavigationDataset::Loaded(records) => Some(records),
            NavigationDataset::NotLoaded => None,
        }
    }
}
