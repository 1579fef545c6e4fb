//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// ICAO wake-turbulence category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WakeCategory {
    Light,
    #[default]
    Medium,
    Heavy,
    Super,
}

impl WakeCategory {
    /// Single-letter code shown in the data tag.
    pub fn code(&self) -> char {
        match self {
            WakeCategory::Light => 'L',
            WakeCategory::Medium => 'M',
            WakeCategory::Heavy => 'H',
            WakeCategory::Super => 'J',
        }
    }
}

/// Per-axis capture state of an aircraft seeking its assigned value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    /// Still moving toward the target.
    Capturing,
    /// Holding the target exactly.
    #[default]
    Captured,
}

/// Vertical trend shown next to the altitude readout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalTrend {
    Climbing,
    Descending,
    #[default]
    Level,
}

impl VerticalTrend {
    pub fn from_vertical_speed(fpm: f64) -> Self {
        if fpm > 0.0 {
            VerticalTrend::Climbing
        } else if fpm < 0.0 {
            VerticalTrend::Descending
        } else {
            VerticalTrend::Level
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            VerticalTrend::Climbing => '\u{2191}',
            VerticalTrend::Descending => '\u{2193}',
            VerticalTrend::Level => ' ',
        }
    }
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Visual style of a drawing primitive. The renderer maps these to colors
/// and line widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    Runway,
    Localizer,
    Waypoint,
    Vor,
    Airport,
    Target,
    HeadingLeader,
    TagLeader,
    DataTag,
    NavLabel,
}
