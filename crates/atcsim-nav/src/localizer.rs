//! ILS localizer course lines.
//!
//! Navigation data carries no "how long is the localizer" value. The
//! length is inferred from where published approaches to the runway
//! begin: the most frequent initial approach fix wins, named fixes are
//! preferred over coded ones on a tie, and 15 NM is used when no
//! approach data matches.

use std::collections::HashMap;

use glam::DVec2;
use serde::Serialize;
use tracing::debug;

use atcsim_core::constants::{
    DEFAULT_LOCALIZER_LENGTH_NM, INITIAL_FIX_DESCRIPTION_FLAGS, KM_PER_NM,
};
use atcsim_core::navdata::{ApproachLeg, Ils, Runway};
use atcsim_core::settings::ActiveRunways;
use atcsim_core::types::GeoPoint;
use atcsim_geo::geodesy::{haversine_km, normalize_degrees};
use atcsim_geo::GeoProjection;

use crate::runway::{same_runway, RunwayIdent};

/// Where a localizer's length came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LocalizerLengthSource {
    /// Distance from the threshold to this approach fix.
    ApproachFix(String),
    /// No matching approach leg.
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLocalizer {
    pub airport_id: String,
    pub runway_id: String,
    pub threshold: DVec2,
    pub end: DVec2,
    pub true_bearing_deg: f64,
    pub length_km: f64,
    pub length_source: LocalizerLengthSource,
}

/// Winning approach fix for one runway.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachFix {
    pub waypoint_id: String,
    pub position: GeoPoint,
    pub occurrences: usize,
}

/// Approach course in true degrees: magnetic plus signed declination.
pub fn true_bearing(ils: &Ils) -> f64 {
    normalize_degrees(ils.magnetic_bearing_deg + ils.declination_deg)
}

/// Whether an ARINC 424 waypoint description code marks an initial
/// approach fix (fourth character).
pub fn is_initial_fix(description_code: &str) -> bool {
    description_code
        .chars()
        .nth(3)
        .is_some_and(|c| INITIAL_FIX_DESCRIPTION_FLAGS.contains(&c.to_ascii_uppercase()))
}

fn has_digit(id: &str) -> bool {
    id.chars().any(|c| c.is_ascii_digit())
}

/// Suffix approach idents carry for this runway, e.g. `28L` for `RW28L`.
pub fn runway_suffix(runway_id: &str) -> String {
    match RunwayIdent::parse(runway_id) {
        Some(ident) => ident.suffix(),
        None => runway_id
            .trim()
            .strip_prefix("RW")
            .unwrap_or(runway_id.trim())
            .to_string(),
    }
}

/// Pick the approach fix that best represents where approaches to this
/// runway start.
///
/// Only the most frequent ids compete in the no-digit tie-break; a more
/// frequent coded fix beats a less frequent named one. Remaining ties keep
/// the first id seen.
pub fn select_approach_fix(
    legs: &[ApproachLeg],
    airport_id: &str,
    runway_suffix: &str,
) -> Option<ApproachFix> {
    if runway_suffix.is_empty() {
        return None;
    }

    // (waypoint id, count, first leg) in first-seen order.
    let mut tally: Vec<(&str, usize, &ApproachLeg)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let matching = legs.iter().filter(|leg| {
        leg.airport_id == airport_id
            && leg.approach_id.contains(runway_suffix)
            && is_initial_fix(&leg.waypoint_type_code)
    });
    for leg in matching {
        match index.get(leg.waypoint_id.as_str()) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(leg.waypoint_id.as_str(), tally.len());
                tally.push((leg.waypoint_id.as_str(), 1, leg));
            }
        }
    }

    let top = tally.iter().map(|(_, count, _)| *count).max()?;
    let leaders: Vec<_> = tally.iter().filter(|(_, count, _)| *count == top).collect();
    let (id, count, leg) = leaders
        .iter()
        .find(|(id, _, _)| !has_digit(id))
        .or_else(|| leaders.first())?;

    Some(ApproachFix {
        waypoint_id: id.to_string(),
        position: leg.position(),
        occurrences: *count,
    })
}

/// Resolve every ILS into a course line drawn outward from the threshold
/// against the approach direction.
pub fn resolve_localizers(
    ils_records: &[Ils],
    runways: &[Runway],
    legs: &[ApproachLeg],
    projection: &GeoProjection,
    active: &ActiveRunways,
) -> Vec<RenderedLocalizer> {
    let scale = projection.scale();
    let mut rendered = Vec::new();

    for ils in ils_records {
        if !active.runway_active(&ils.airport_id, &ils.runway_id) {
            continue;
        }
        let Some(runway) = runways
            .iter()
            .find(|r| r.airport_id == ils.airport_id && same_runway(&r.id, &ils.runway_id))
        else {
            debug!(
                airport = %ils.airport_id,
                runway = %ils.runway_id,
                "ILS without runway record, skipped"
            );
            continue;
        };

        let bearing = true_bearing(ils);
        let threshold_geo = runway.position();
        let suffix = runway_suffix(&ils.runway_id);
        let (length_km, length_source) =
            match select_approach_fix(legs, &ils.airport_id, &suffix) {
                Some(fix) => (
                    haversine_km(threshold_geo, fix.position),
                    LocalizerLengthSource::ApproachFix(fix.waypoint_id),
                ),
                None => (
                    DEFAULT_LOCALIZER_LENGTH_NM * KM_PER_NM,
                    LocalizerLengthSource::Default,
                ),
            };
        debug!(
            airport = %ils.airport_id,
            runway = %ils.runway_id,
            bearing,
            length_km,
            source = ?length_source,
            "localizer resolved"
        );

        let threshold = projection.point_to_pixel(threshold_geo);
        let end = threshold - scale.offset(bearing, length_km);
        rendered.push(RenderedLocalizer {
            airport_id: ils.airport_id.clone(),
            runway_id: ils.runway_id.clone(),
            threshold,
            end,
            true_bearing_deg: bearing,
            length_km,
            length_source,
        });
    }

    rendered
}
