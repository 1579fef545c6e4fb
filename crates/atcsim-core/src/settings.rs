//! Simulation settings, read from TOML.
//!
//! Every field has a default so a partial file (or none at all) gives a
//! runnable simulation.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::WakeCategory;
use crate::error::{BoundsError, SettingsError};
use crate::types::{CanvasSize, GeoPoint};

/// The geographic area the scope covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadarArea {
    /// Two opposite corners, in any order.
    Corners { corners: [GeoPoint; 2] },
    /// A center point and a radius in nautical miles.
    CenterRange { center: GeoPoint, range_nm: f64 },
}

impl Default for RadarArea {
    fn default() -> Self {
        RadarArea::CenterRange {
            center: GeoPoint::new(37.6189, -122.3750),
            range_nm: 40.0,
        }
    }
}

/// Seeded random traffic generated at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficSettings {
    pub seed: u64,
    pub count: usize,
}

impl Default for TrafficSettings {
    fn default() -> Self {
        Self { seed: 42, count: 6 }
    }
}

/// One explicitly placed aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpawn {
    pub callsign: String,
    #[serde(default)]
    pub wake: WakeCategory,
    #[serde(default)]
    pub destination: String,
    pub lat: f64,
    pub lon: f64,
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub speed_kt: f64,
}

/// Airport ICAO code to the runway idents in use. Empty means draw all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveRunways(pub BTreeMap<String, Vec<String>>);

impl ActiveRunways {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this runway end is in use.
    pub fn runway_active(&self, airport_id: &str, runway_id: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let wanted = comparable_ident(runway_id);
        self.0
            .get(airport_id)
            .is_some_and(|ids| ids.iter().any(|id| comparable_ident(id) == wanted))
    }
}

/// `RW09L`, `09L` and `9l` all compare equal.
fn comparable_ident(id: &str) -> String {
    let upper = id.trim().to_ascii_uppercase();
    let bare = upper.strip_prefix("RW").unwrap_or(&upper);
    bare.trim_start_matches('0').to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub area: RadarArea,
    pub canvas: CanvasSize,
    pub active_runways: ActiveRunways,
    pub sweep_interval_ms: f64,
    pub turn_rate_deg_s: f64,
    pub acceleration_kt_s: f64,
    pub vertical_rate_fpm: f64,
    pub frame_rate_hz: u32,
    /// Navigation records file for the JSON provider.
    pub nav_data: Option<PathBuf>,
    pub traffic: TrafficSettings,
    pub aircraft: Vec<AircraftSpawn>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            area: RadarArea::default(),
            canvas: CanvasSize::default(),
            active_runways: ActiveRunways::default(),
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            turn_rate_deg_s: DEFAULT_TURN_RATE_DEG_S,
            acceleration_kt_s: DEFAULT_ACCELERATION_KT_S,
            vertical_rate_fpm: DEFAULT_VERTICAL_RATE_FPM,
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            nav_data: None,
            traffic: TrafficSettings::default(),
            aircraft: Vec::new(),
        }
    }
}

impl SimSettings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: SimSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check everything that does not need the projection to be built.
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("sweep_interval_ms", self.sweep_interval_ms)?;
        positive("turn_rate_deg_s", self.turn_rate_deg_s)?;
        positive("acceleration_kt_s", self.acceleration_kt_s)?;
        positive("vertical_rate_fpm", self.vertical_rate_fpm)?;
        if self.frame_rate_hz == 0 {
            return Err(SettingsError::Invalid {
                name: "frame_rate_hz",
                reason: "must be at least 1".into(),
            });
        }
        CanvasSize::new(self.canvas.width, self.canvas.height)?;
        if let RadarArea::CenterRange { range_nm, .. } = self.area {
            if !(range_nm.is_finite() && range_nm > 0.0) {
                return Err(BoundsError::InvalidRange(range_nm).into());
            }
        }
        if self.traffic.count > MAX_TRAFFIC_COUNT {
            return Err(SettingsError::Invalid {
                name: "traffic.count",
                reason: format!("{} exceeds {MAX_TRAFFIC_COUNT}", self.traffic.count),
            });
        }
        let mut callsigns = HashSet::new();
        for spawn in &self.aircraft {
            let callsign = spawn.callsign.trim();
            if callsign.is_empty() {
                return Err(SettingsError::Invalid {
                    name: "aircraft.callsign",
                    reason: "must not be empty".into(),
                });
            }
            if !callsigns.insert(callsign) {
                return Err(SettingsError::Invalid {
                    name: "aircraft.callsign",
                    reason: format!("{callsign} is listed more than once"),
                });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            name,
            reason: format!("{value} is not a positive number"),
        })
    }
}
