//! Snapshot system: queries the ECS world and builds a complete
//! `FrameSnapshot`.
//!
//! Read-only. Target symbols and heading leaders come from display state;
//! data tag text comes from live true state.

use glam::DVec2;
use hecs::World;

use atcsim_core::components::*;
use atcsim_core::constants::*;
use atcsim_core::enums::{SimPhase, Stroke, VerticalTrend};
use atcsim_core::state::*;
use atcsim_core::types::{CanvasSize, SimTime};
use atcsim_nav::NavGeometry;

/// Engine state the snapshot reports alongside the world.
pub struct FrameContext<'a> {
    pub time: SimTime,
    pub phase: SimPhase,
    pub canvas: CanvasSize,
    pub sweep: SweepView,
    pub nav_loaded: bool,
    pub geometry: &'a NavGeometry,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(world: &World, ctx: FrameContext<'_>) -> FrameSnapshot {
    let aircraft = build_aircraft(world);

    let mut draw = ctx.geometry.draw_commands();
    for view in &aircraft {
        draw_aircraft(&mut draw, view);
    }

    FrameSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        canvas: Some(ctx.canvas),
        sweep: ctx.sweep,
        nav_loaded: ctx.nav_loaded,
        aircraft,
        draw,
    }
}

/// One view per aircraft, sorted by callsign.
fn build_aircraft(world: &World) -> Vec<AircraftView> {
    let mut views: Vec<AircraftView> = world
        .query::<(&Identity, &TrueState, &TargetState, &DisplayState, &DataTag)>()
        .iter()
        .map(|(_, (identity, state, target, display, tag))| AircraftView {
            callsign: identity.callsign.clone(),
            wake: identity.wake,
            destination: identity.destination.clone(),
            scratchpad: identity.scratchpad.clone(),
            display_x: display.x,
            display_y: display.y,
            display_heading_deg: display.heading_deg,
            altitude_ft: state.altitude_ft,
            speed_kt: state.speed_kt,
            vertical_speed_fpm: state.vertical_speed_fpm,
            trend: VerticalTrend::from_vertical_speed(state.vertical_speed_fpm),
            target_heading_deg: target.heading_deg,
            target_altitude_ft: target.altitude_ft,
            target_speed_kt: target.speed_kt,
            tag_angle_rad: tag.angle_rad,
        })
        .collect();

    views.sort_by(|a, b| a.callsign.cmp(&b.callsign));
    views
}

fn draw_aircraft(draw: &mut Vec<DrawCommand>, view: &AircraftView) {
    let center = DVec2::new(view.display_x, view.display_y);
    let r = TARGET_SYMBOL_HALF_SIZE_PX;

    draw.push(DrawCommand::Polygon {
        points: vec![
            center + DVec2::new(-r, -r),
            center + DVec2::new(r, -r),
            center + DVec2::new(r, r),
            center + DVec2::new(-r, r),
        ],
        stroke: Stroke::Target,
    });

    draw.push(DrawCommand::Line {
        start: center,
        end: heading_leader_end(center, view.display_heading_deg),
        stroke: Stroke::HeadingLeader,
    });

    let anchor = tag_anchor(center, view.tag_angle_rad);
    draw.push(DrawCommand::Line {
        start: center,
        end: anchor,
        stroke: Stroke::TagLeader,
    });

    for (i, text) in tag_lines(view).into_iter().enumerate() {
        draw.push(DrawCommand::Text {
            position: anchor + DVec2::new(0.0, i as f64 * TAG_LINE_SPACING_PX),
            text,
            stroke: Stroke::DataTag,
        });
    }
}

/// End of the heading leader; screen y grows south.
pub fn heading_leader_end(center: DVec2, heading_deg: f64) -> DVec2 {
    let theta = heading_deg.to_radians();
    center + DVec2::new(theta.sin(), -theta.cos()) * HEADING_LEADER_LENGTH_PX
}

/// Where the data tag leader ends for a screen angle (0 = right, clockwise).
pub fn tag_anchor(center: DVec2, angle_rad: f64) -> DVec2 {
    center + DVec2::new(angle_rad.cos(), angle_rad.sin()) * TAG_DISTANCE_PX
}

/// Data tag text, top to bottom.
///
/// ```text
/// UAL123
/// 080↑ 25
/// KSFO M RWY 28L
/// ```
/// Altitude in hundreds of feet, speed in tens of knots.
pub fn tag_lines(view: &AircraftView) -> Vec<String> {
    let altitude = (view.altitude_ft / 100.0).round().max(0.0) as u32;
    let speed = (view.speed_kt / 10.0).round().max(0.0) as u32;
    let mut third = format!("{} {}", view.destination, view.wake.code());
    if !view.scratchpad.is_empty() {
        third.push(' ');
        third.push_str(&view.scratchpad);
    }
    vec![
        view.callsign.clone(),
        format!("{altitude:03}{} {speed:02}", view.trend.symbol()),
        third.trim_start().to_string(),
    ]
}
