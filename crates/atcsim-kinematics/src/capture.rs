//! Per-axis capture: heading, speed and altitude each seek their assigned
//! value at a fixed rate and snap onto it once within one step.
//!
//! Pure functions on plain data, no ECS dependency.

use atcsim_core::components::{AxisCapture, TargetState, TrueState};
use atcsim_core::constants::*;
use atcsim_core::enums::CaptureState;
use atcsim_core::settings::SimSettings;
use atcsim_geo::geodesy::{normalize_degrees, shortest_turn_degrees};

/// Rates every aircraft uses to reach its assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicLimits {
    pub turn_rate_deg_s: f64,
    pub acceleration_kt_s: f64,
    pub vertical_rate_fpm: f64,
}

impl Default for KinematicLimits {
    fn default() -> Self {
        Self {
            turn_rate_deg_s: DEFAULT_TURN_RATE_DEG_S,
            acceleration_kt_s: DEFAULT_ACCELERATION_KT_S,
            vertical_rate_fpm: DEFAULT_VERTICAL_RATE_FPM,
        }
    }
}

impl KinematicLimits {
    pub fn from_settings(settings: &SimSettings) -> Self {
        Self {
            turn_rate_deg_s: settings.turn_rate_deg_s,
            acceleration_kt_s: settings.acceleration_kt_s,
            vertical_rate_fpm: settings.vertical_rate_fpm,
        }
    }

    /// Vertical rate in feet per second.
    pub fn vertical_rate_fps(&self) -> f64 {
        self.vertical_rate_fpm / 60.0
    }
}

/// Result of stepping one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStep {
    pub value: f64,
    pub state: CaptureState,
}

/// Step a linear axis (speed, altitude) toward `target` by at most `step`.
pub fn step_linear(current: f64, target: f64, step: f64) -> AxisStep {
    let remaining = target - current;
    if remaining.abs() <= step {
        return AxisStep {
            value: target,
            state: CaptureState::Captured,
        };
    }
    AxisStep {
        value: current + step.copysign(remaining),
        state: CaptureState::Capturing,
    }
}

/// Step a heading toward `target` by at most `step` degrees, always
/// turning the shorter way.
pub fn step_heading(current: f64, target: f64, step: f64) -> AxisStep {
    let turn = shortest_turn_degrees(current, target);
    if turn.abs() <= step {
        return AxisStep {
            value: normalize_degrees(target),
            state: CaptureState::Captured,
        };
    }
    AxisStep {
        value: normalize_degrees(current + step.copysign(turn)),
        state: CaptureState::Capturing,
    }
}

fn capture_state(current: f64, target: f64) -> CaptureState {
    if current == target {
        CaptureState::Captured
    } else {
        CaptureState::Capturing
    }
}

/// Assign a heading. The true heading is untouched until the next update.
pub fn assign_heading(
    state: &TrueState,
    target: &mut TargetState,
    capture: &mut AxisCapture,
    degrees: f64,
) {
    target.heading_deg = normalize_degrees(degrees);
    capture.heading = capture_state(state.heading_deg, target.heading_deg);
}

/// Assign a speed, clamped to the minimum operational speed.
pub fn assign_speed(
    state: &TrueState,
    target: &mut TargetState,
    capture: &mut AxisCapture,
    knots: f64,
) {
    target.speed_kt = knots.max(MIN_ASSIGNED_SPEED_KT);
    capture.speed = capture_state(state.speed_kt, target.speed_kt);
}

/// Assign an altitude. Callers validate non-negativity.
pub fn assign_altitude(
    state: &TrueState,
    target: &mut TargetState,
    capture: &mut AxisCapture,
    feet: f64,
) {
    target.altitude_ft = feet;
    capture.altitude = capture_state(state.altitude_ft, target.altitude_ft);
}

/// Advance heading, speed and altitude by one frame of `dt_secs`.
/// Vertical speed is derived from the altitude capture.
pub fn step_axes(
    state: &mut TrueState,
    target: &TargetState,
    capture: &mut AxisCapture,
    limits: &KinematicLimits,
    dt_secs: f64,
) {
    let heading = step_heading(
        state.heading_deg,
        target.heading_deg,
        limits.turn_rate_deg_s * dt_secs,
    );
    state.heading_deg = heading.value;
    capture.heading = heading.state;

    let speed = step_linear(
        state.speed_kt,
        target.speed_kt,
        limits.acceleration_kt_s * dt_secs,
    );
    state.speed_kt = speed.value;
    capture.speed = speed.state;

    let remaining_ft = target.altitude_ft - state.altitude_ft;
    let altitude = step_linear(
        state.altitude_ft,
        target.altitude_ft,
        limits.vertical_rate_fps() * dt_secs,
    );
    state.altitude_ft = altitude.value;
    capture.altitude = altitude.state;
    state.vertical_speed_fpm = match altitude.state {
        CaptureState::Capturing => limits.vertical_rate_fpm.copysign(remaining_ft),
        CaptureState::Captured => 0.0,
    };
}
