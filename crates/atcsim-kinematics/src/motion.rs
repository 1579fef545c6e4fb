//! Position integration on a spherical earth.
//!
//! Headings are true headings, so the step is a great-circle move rather
//! than a screen-space translation.

use atcsim_core::components::TrueState;
use atcsim_core::constants::{KM_PER_NM, SECS_PER_HOUR};
use atcsim_core::types::GeoPoint;
use atcsim_geo::geodesy::destination;

/// Ground speed in kilometers per second.
pub fn knots_to_km_per_sec(knots: f64) -> f64 {
    knots * KM_PER_NM / SECS_PER_HOUR
}

/// Move the aircraft along its current heading for `dt_secs` at its
/// current speed. Position is not constrained to the radar area.
pub fn advance_position(state: &mut TrueState, dt_secs: f64) {
    let distance_km = knots_to_km_per_sec(state.speed_kt) * dt_secs;
    if distance_km == 0.0 {
        return;
    }
    let next = destination(
        GeoPoint::new(state.lat, state.lon),
        state.heading_deg,
        distance_km,
    );
    state.lat = next.lat;
    state.lon = next.lon;
}
