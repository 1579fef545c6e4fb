//! Turns navigation records into screen geometry for the current
//! projection.

use glam::DVec2;
use serde::Serialize;

use atcsim_core::constants::{NAV_LABEL_OFFSET_PX, NAV_SYMBOL_HALF_SIZE_PX};
use atcsim_core::enums::Stroke;
use atcsim_core::settings::ActiveRunways;
use atcsim_core::state::DrawCommand;
use atcsim_geo::GeoProjection;

use crate::dataset::NavigationDataset;
use crate::localizer::{resolve_localizers, RenderedLocalizer};
use crate::runway::{resolve_runways, RenderedRunway};

/// Labeled point symbol (waypoint, VOR, airport).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavPoint {
    pub label: String,
    pub position: DVec2,
}

/// Everything drawn underneath the traffic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavGeometry {
    pub runways: Vec<RenderedRunway>,
    pub localizers: Vec<RenderedLocalizer>,
    pub waypoints: Vec<NavPoint>,
    pub vors: Vec<NavPoint>,
    pub airports: Vec<NavPoint>,
}

impl NavGeometry {
    pub fn is_empty(&self) -> bool {
        self.runways.is_empty()
            && self.localizers.is_empty()
            && self.waypoints.is_empty()
            && self.vors.is_empty()
            && self.airports.is_empty()
    }

    /// Draw commands, back to front: localizers, runways, then point symbols.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();

        for loc in &self.localizers {
            out.push(DrawCommand::Line {
                start: loc.threshold,
                end: loc.end,
                stroke: Stroke::Localizer,
            });
        }
        for rwy in &self.runways {
            out.push(DrawCommand::Line {
                start: rwy.threshold_a,
                end: rwy.threshold_b,
                stroke: Stroke::Runway,
            });
        }
        for wp in &self.waypoints {
            push_symbol(&mut out, wp, triangle(wp.position), Stroke::Waypoint);
        }
        for vor in &self.vors {
            push_symbol(&mut out, vor, hexagon(vor.position), Stroke::Vor);
        }
        for apt in &self.airports {
            push_symbol(&mut out, apt, square(apt.position), Stroke::Airport);
        }

        out
    }
}

fn push_symbol(out: &mut Vec<DrawCommand>, point: &NavPoint, outline: Vec<DVec2>, stroke: Stroke) {
    out.push(DrawCommand::Polygon {
        points: outline,
        stroke,
    });
    out.push(DrawCommand::Text {
        position: point.position + DVec2::splat(NAV_LABEL_OFFSET_PX),
        text: point.label.clone(),
        stroke: Stroke::NavLabel,
    });
}

fn triangle(c: DVec2) -> Vec<DVec2> {
    let r = NAV_SYMBOL_HALF_SIZE_PX;
    vec![
        c + DVec2::new(0.0, -r),
        c + DVec2::new(r, r),
        c + DVec2::new(-r, r),
    ]
}

fn square(c: DVec2) -> Vec<DVec2> {
    let r = NAV_SYMBOL_HALF_SIZE_PX;
    vec![
        c + DVec2::new(-r, -r),
        c + DVec2::new(r, -r),
        c + DVec2::new(r, r),
        c + DVec2::new(-r, r),
    ]
}

fn hexagon(c: DVec2) -> Vec<DVec2> {
    let r = NAV_SYMBOL_HALF_SIZE_PX;
    (0..6)
        .map(|i| {
            let a = (i as f64 * 60.0).to_radians();
            c + DVec2::new(a.cos() * r, a.sin() * r)
        })
        .collect()
}

/// Derives `NavGeometry` from a dataset.
///
/// Stateless apart from the runway allowlist; callers cache the result and
/// re-resolve when the dataset, bounds or canvas change.
#[derive(Debug, Clone, Default)]
pub struct NavGeometryResolver {
    active: ActiveRunways,
}

impl NavGeometryResolver {
    pub fn new(active: ActiveRunways) -> Self {
        Self { active }
    }

    pub fn active_runways(&self) -> &ActiveRunways {
        &self.active
    }

    /// Empty geometry while the dataset is not loaded.
    pub fn resolve(&self, dataset: &NavigationDataset, projection: &GeoProjection) -> NavGeometry {
        let Some(records) = dataset.records() else {
            return NavGeometry::default();
        };

        NavGeometry {
            runways: resolve_runways(&records.runways, projection, &self.active),
            localizers: resolve_localizers(
                &records.ils,
                &records.runways,
                &records.approach_legs,
                projection,
                &self.active,
            ),
            waypoints: records
                .waypoints
                .iter()
                .map(|w| NavPoint {
                    label: w.name.clone(),
                    position: projection.point_to_pixel(w.position()),
                })
                .collect(),
            vors: records
                .vors
                .iter()
                .map(|v| NavPoint {
                    label: v.id.clone(),
                    position: projection.point_to_pixel(v.position()),
                })
                .collect(),
            airports: records
                .airports
                .iter()
                .map(|a| NavPoint {
                    label: a.id.clone(),
                    position: projection.point_to_pixel(a.position()),
                })
                .collect(),
        }
    }
}
