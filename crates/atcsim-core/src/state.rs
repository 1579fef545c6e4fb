//! Frame snapshot: everything the outside world sees after one frame.
//!
//! The renderer consumes `draw` only; `aircraft` is for the input surface
//! (hit-testing clicks against displayed targets, filling clearance boxes).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{SimPhase, Stroke, VerticalTrend, WakeCategory};
use crate::types::{CanvasSize, SimTime};

/// Complete frame output after each `frame` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub canvas: Option<CanvasSize>,
    pub sweep: SweepView,
    /// Whether navigation records have arrived yet.
    pub nav_loaded: bool,
    pub aircraft: Vec<AircraftView>,
    pub draw: Vec<DrawCommand>,
}

/// Radar antenna status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SweepView {
    /// Fraction of the current revolution completed, [0, 1].
    pub progress: f64,
    /// True when this frame refreshed the display state.
    pub swept: bool,
}

/// One displayed target with its live label data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AircraftView {
    pub callsign: String,
    pub wake: WakeCategory,
    pub destination: String,
    pub scratchpad: String,
    /// Frozen at the last sweep.
    pub display_x: f64,
    pub display_y: f64,
    pub display_heading_deg: f64,
    /// Live from true state.
    pub altitude_ft: f64,
    pub speed_kt: f64,
    pub vertical_speed_fpm: f64,
    pub trend: VerticalTrend,
    /// Current assignments.
    pub target_heading_deg: f64,
    pub target_altitude_ft: f64,
    pub target_speed_kt: f64,
    pub tag_angle_rad: f64,
}

/// Geometric primitive handed to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DrawCommand {
    Line {
        start: DVec2,
        end: DVec2,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<DVec2>,
        stroke: Stroke,
    },
    Text {
        position: DVec2,
        text: String,
        stroke: Stroke,
    },
}

impl DrawCommand {
    pub fn stroke(&self) -> Stroke {
        match self {
            DrawCommand::Line { stroke, .. }
            | DrawCommand::Polygon { stroke, .. }
            | DrawCommand::Text { stroke, .. } => *stroke,
        }
    }
}
