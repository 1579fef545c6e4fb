//! Fundamental geographic, screen, and timing types.

use serde::{Deserialize, Serialize};

use crate::error::BoundsError;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Build a canvas size, rejecting zero, negative, or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, BoundsError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(BoundsError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_CANVAS_WIDTH,
            height: crate::constants::DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames that advanced the simulation.
    pub frame: u64,
    /// Simulated seconds elapsed (pauses excluded).
    pub elapsed_secs: f64,
    /// Number of radar sweeps completed.
    pub sweeps: u64,
}

impl SimTime {
    /// Advance by one frame of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.frame += 1;
        self.elapsed_secs += dt_secs;
    }
}
