//! Aircraft kinematics for ATCSIM.
//!
//! State-seeking motion: each frame the true state turns, accelerates and
//! climbs toward the controller's assignments, then moves along a great
//! circle. Operates on plain components; the ECS wiring lives in
//! `atcsim-sim`.

pub mod capture;
pub mod motion;

pub use atcsim_core as core;
pub use capture::{assign_altitude, assign_heading, assign_speed, KinematicLimits};

use atcsim_core::components::{AxisCapture, TargetState, TrueState};

/// Advance one aircraft by `dt_secs`: axes first, then position with the
/// updated heading and speed. Non-positive or non-finite steps are ignored.
pub fn update(
    state: &mut TrueState,
    target: &TargetState,
    capture: &mut AxisCapture,
    limits: &KinematicLimits,
    dt_secs: f64,
) {
    if !(dt_secs.is_finite() && dt_secs > 0.0) {
        return;
    }
    capture::step_axes(state, target, capture, limits, dt_secs);
    motion::advance_position(state, dt_secs);
}
