//! Per-frame kinematic integration.

use hecs::World;

use atcsim_core::components::{AxisCapture, TargetState, TrueState};
use atcsim_kinematics::KinematicLimits;

/// Advance every aircraft's true state by `dt_secs`.
pub fn run(world: &mut World, limits: &KinematicLimits, dt_secs: f64) {
    for (_entity, (state, target, capture)) in
        world.query_mut::<(&mut TrueState, &TargetState, &mut AxisCapture)>()
    {
        atcsim_kinematics::update(state, target, capture, limits, dt_secs);
    }
}
