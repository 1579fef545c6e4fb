//! Runway idents and pavement resolution.
//!
//! Each runway record is one end of a pavement. Where both ends are
//! loaded, the opposite threshold is the far end; otherwise the far end
//! is projected from the record's own length and bearing.

use std::collections::HashSet;
use std::fmt;

use glam::DVec2;
use serde::Serialize;
use tracing::debug;

use atcsim_core::constants::{KM_PER_FOOT, RECIPROCAL_RUNWAY_OFFSET};
use atcsim_core::navdata::Runway;
use atcsim_core::settings::ActiveRunways;
use atcsim_geo::GeoProjection;

/// Parallel runway designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunwaySide {
    Left,
    Right,
    Center,
}

impl RunwaySide {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(RunwaySide::Left),
            'R' => Some(RunwaySide::Right),
            'C' => Some(RunwaySide::Center),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            RunwaySide::Left => 'L',
            RunwaySide::Right => 'R',
            RunwaySide::Center => 'C',
        }
    }

    /// Side seen from the opposite end.
    pub fn mirrored(&self) -> Self {
        match self {
            RunwaySide::Left => RunwaySide::Right,
            RunwaySide::Right => RunwaySide::Left,
            RunwaySide::Center => RunwaySide::Center,
        }
    }
}

/// Parsed runway ident: magnetic heading in tens of degrees plus side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunwayIdent {
    pub number: u8,
    pub side: Option<RunwaySide>,
}

impl RunwayIdent {
    /// Parse `RW09L`, `09L`, `9L`, `RW36`. Anything else is `None`.
    pub fn parse(id: &str) -> Option<Self> {
        let upper = id.trim().to_ascii_uppercase();
        let rest = upper.strip_prefix("RW").unwrap_or(&upper);

        let digits_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        if digits_end == 0 || digits_end > 2 {
            return None;
        }
        let number: u8 = rest[..digits_end].parse().ok()?;
        if !(1..=36).contains(&number) {
            return None;
        }

        let mut tail = rest[digits_end..].chars();
        let side = match tail.next() {
            None => None,
            Some(c) => Some(RunwaySide::from_char(c)?),
        };
        if tail.next().is_some() {
            return None;
        }
        Some(Self { number, side })
    }

    /// Ident of the other end of the same pavement.
    pub fn reciprocal(&self) -> Self {
        let number = if self.number > RECIPROCAL_RUNWAY_OFFSET {
            self.number - RECIPROCAL_RUNWAY_OFFSET
        } else {
            self.number + RECIPROCAL_RUNWAY_OFFSET
        };
        Self {
            number,
            side: self.side.map(|s| s.mirrored()),
        }
    }

    /// Number and side without the `RW` prefix, e.g. `09L`.
    pub fn suffix(&self) -> String {
        match self.side {
            Some(side) => format!("{:02}{}", self.number, side.letter()),
            None => format!("{:02}", self.number),
        }
    }
}

impl fmt::Display for RunwayIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RW{}", self.suffix())
    }
}

/// How the far end of a rendered runway was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FarEndSource {
    /// Threshold of the reciprocal runway record.
    Reciprocal,
    /// Projected from length and true bearing.
    Projected,
}

/// One physical pavement on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRunway {
    pub airport_id: String,
    pub ident: String,
    pub reciprocal_ident: Option<String>,
    pub threshold_a: DVec2,
    pub threshold_b: DVec2,
    pub far_end: FarEndSource,
}

/// Whether two records name the same runway end.
pub fn same_runway(a: &str, b: &str) -> bool {
    match (RunwayIdent::parse(a), RunwayIdent::parse(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Find the other end of `runway` among `runways` at the same airport.
pub fn find_reciprocal<'a>(runways: &'a [Runway], runway: &Runway) -> Option<&'a Runway> {
    let wanted = RunwayIdent::parse(&runway.id)?.reciprocal();
    runways.iter().find(|other| {
        other.airport_id == runway.airport_id
            && RunwayIdent::parse(&other.id) == Some(wanted)
    })
}

/// Resolve runway records into pavements, each drawn exactly once.
pub fn resolve_runways(
    runways: &[Runway],
    projection: &GeoProjection,
    active: &ActiveRunways,
) -> Vec<RenderedRunway> {
    let scale = projection.scale();
    let mut consumed: HashSet<(&str, &str)> = HashSet::new();
    let mut rendered = Vec::new();

    for runway in runways {
        let key = (runway.airport_id.as_str(), runway.id.as_str());
        if !consumed.insert(key) {
            continue;
        }

        let reciprocal = find_reciprocal(runways, runway)
            .filter(|other| !consumed.contains(&(other.airport_id.as_str(), other.id.as_str())));

        let threshold_a = projection.to_pixel(runway.lat, runway.lon);
        let (threshold_b, far_end) = match reciprocal {
            Some(other) => {
                consumed.insert((other.airport_id.as_str(), other.id.as_str()));
                (
                    projection.to_pixel(other.lat, other.lon),
                    FarEndSource::Reciprocal,
                )
            }
            None => {
                let length_km = runway.length_ft.max(0.0) * KM_PER_FOOT;
                debug!(
                    airport = %runway.airport_id,
                    runway = %runway.id,
                    length_km,
                    "no reciprocal runway, projecting far end"
                );
                (
                    threshold_a + scale.offset(runway.true_bearing_deg, length_km),
                    FarEndSource::Projected,
                )
            }
        };

        let in_use = active.runway_active(&runway.airport_id, &runway.id)
            || reciprocal.is_some_and(|other| active.runway_active(&other.airport_id, &other.id));
        if !in_use {
            continue;
        }

        rendered.push(RenderedRunway {
            airport_id: runway.airport_id.clone(),
            ident: runway.id.clone(),
            reciprocal_ident: reciprocal.map(|other| other.id.clone()),
            threshold_a,
            threshold_b,
            far_end,
        });
    }

    rendered
}
