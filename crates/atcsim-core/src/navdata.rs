//! Navigation records as delivered by the external navigation database.
//!
//! Records are immutable snapshots; the simulation only queries them.

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

/// Named enroute or terminal fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub type_code: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO code.
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vor {
    pub id: String,
    pub name: String,
    pub frequency_mhz: f64,
    pub lat: f64,
    pub lon: f64,
}

/// One runway end. `lat`/`lon` is the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    /// Ident such as `RW09L`.
    pub id: String,
    pub airport_id: String,
    pub lat: f64,
    pub lon: f64,
    pub length_ft: f64,
    pub true_bearing_deg: f64,
}

/// Localizer serving one runway end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ils {
    pub airport_id: String,
    pub runway_id: String,
    pub magnetic_bearing_deg: f64,
    /// Signed magnetic variation; east positive.
    pub declination_deg: f64,
}

/// One leg of a published approach procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachLeg {
    pub airport_id: String,
    /// Procedure ident such as `I28L` or `R09L-Y`.
    pub approach_id: String,
    pub waypoint_id: String,
    /// ARINC 424 waypoint description code.
    pub waypoint_type_code: String,
    pub lat: f64,
    pub lon: f64,
}

macro_rules! impl_position {
    ($($ty:ty),*) => {
        $(impl $ty {
            pub fn position(&self) -> GeoPoint {
                GeoPoint::new(self.lat, self.lon)
            }
        })*
    };
}

impl_position!(Waypoint, Airport, Vor, Runway, ApproachLeg);

/// Every record collection one provider query returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavRecords {
    pub waypoints: Vec<Waypoint>,
    pub airports: Vec<Airport>,
    pub vors: Vec<Vor>,
    pub runways: Vec<Runway>,
    pub ils: Vec<Ils>,
    pub approach_legs: Vec<ApproachLeg>,
}

impl NavRecords {
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
            && self.airports.is_empty()
            && self.vors.is_empty()
            && self.runways.is_empty()
            && self.ils.is_empty()
            && self.approach_legs.is_empty()
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.waypoints.len()
            + self.airports.len()
            + self.vors.len()
            + self.runways.len()
            + self.ils.len()
            + self.approach_legs.len()
    }
}
