//! Display state maintenance: the sweep refresh and re-projection of
//! frozen returns.

use hecs::World;

use atcsim_core::components::{DisplayState, TrueState};
use atcsim_geo::GeoProjection;

/// Display state showing `state` as of now.
pub fn display_from(state: &TrueState, projection: &GeoProjection) -> DisplayState {
    let pixel = projection.to_pixel(state.lat, state.lon);
    DisplayState {
        x: pixel.x,
        y: pixel.y,
        heading_deg: state.heading_deg,
        lat: state.lat,
        lon: state.lon,
    }
}

/// Sweep: overwrite every display state from true state.
pub fn refresh(world: &mut World, projection: &GeoProjection) {
    for (_entity, (state, display)) in world.query_mut::<(&TrueState, &mut DisplayState)>() {
        *display = display_from(state, projection);
    }
}

/// Projection changed: move frozen returns to their new pixels without
/// revealing newer true state.
pub fn reproject(world: &mut World, projection: &GeoProjection) {
    for (_entity, display) in world.query_mut::<&mut DisplayState>() {
        let pixel = projection.to_pixel(display.lat, display.lon);
        display.x = pixel.x;
        display.y = pixel.y;
    }
}
