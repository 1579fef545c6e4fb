//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Kinematics lives in `atcsim-kinematics`, systems live in `atcsim-sim`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TAG_ANGLE_RAD;
use crate::enums::{CaptureState, WakeCategory};

/// Who the aircraft is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    pub callsign: String,
    pub wake: WakeCategory,
    /// ICAO code of the destination airport.
    pub destination: String,
    /// Free text the controller keeps with the target.
    pub scratchpad: String,
}

/// Physically simulated state, advanced every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrueState {
    pub lat: f64,
    pub lon: f64,
    /// True heading in degrees, [0, 360).
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub speed_kt: f64,
    /// Derived from the altitude capture, never set directly.
    pub vertical_speed_fpm: f64,
}

/// Controller-assigned goals the true state seeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub heading_deg: f64,
    pub altitude_ft: f64,
    pub speed_kt: f64,
}

/// What the scope shows. Overwritten from true state only on a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    /// Frozen geographic position, kept so a resize can re-project the
    /// same return.
    pub lat: f64,
    pub lon: f64,
}

/// Operator-chosen data tag placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataTag {
    /// Screen-space angle from the target symbol (radians, 0 = right, clockwise).
    pub angle_rad: f64,
}

impl Default for DataTag {
    fn default() -> Self {
        Self {
            angle_rad: DEFAULT_TAG_ANGLE_RAD,
        }
    }
}

/// Capture state of each kinematic axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisCapture {
    pub heading: CaptureState,
    pub speed: CaptureState,
    pub altitude: CaptureState,
}

/// Marks an entity as a simulated aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft;
