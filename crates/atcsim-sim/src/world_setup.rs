//! Entity spawn factories for setting up the simulation world.
//!
//! Aircraft come from explicit `[[aircraft]]` entries in the settings and
//! from a seeded traffic generator, so the same seed always produces the
//! same sky.

use std::collections::HashSet;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use atcsim_core::components::*;
use atcsim_core::enums::WakeCategory;
use atcsim_core::settings::AircraftSpawn;
use atcsim_geo::{normalize_degrees, GeoProjection};

use crate::systems::display::display_from;

const AIRLINE_PREFIXES: [&str; 8] = ["UAL", "DAL", "AAL", "SWA", "ASA", "SKW", "JBU", "FDX"];
const DESTINATIONS: [&str; 4] = ["KSFO", "KOAK", "KSJC", "KSMF"];

/// Spawn one aircraft whose true, target and display state all start equal.
pub fn spawn_aircraft(
    world: &mut World,
    projection: &GeoProjection,
    spawn: &AircraftSpawn,
) -> hecs::Entity {
    let state = TrueState {
        lat: spawn.lat,
        lon: spawn.lon,
        heading_deg: normalize_degrees(spawn.heading_deg),
        altitude_ft: spawn.altitude_ft,
        speed_kt: spawn.speed_kt,
        vertical_speed_fpm: 0.0,
    };
    let target = TargetState {
        heading_deg: state.heading_deg,
        altitude_ft: state.altitude_ft,
        speed_kt: state.speed_kt,
    };

    world.spawn((
        Aircraft,
        Identity {
            callsign: spawn.callsign.trim().to_string(),
            wake: spawn.wake,
            destination: spawn.destination.clone(),
            scratchpad: String::new(),
        },
        state,
        target,
        display_from(&state, projection),
        DataTag::default(),
        AxisCapture::default(),
    ))
}

/// Generate `count` aircraft inside the inner 80% of the scope.
/// Callsigns are unique, including against aircraft already in the world.
pub fn spawn_traffic(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    projection: &GeoProjection,
    count: usize,
) -> Vec<hecs::Entity> {
    let mut taken: HashSet<String> = world
        .query::<&Identity>()
        .iter()
        .map(|(_, identity)| identity.callsign.clone())
        .collect();

    (0..count)
        .map(|_| {
            let spawn = random_spawn(rng, projection, &mut taken);
            spawn_aircraft(world, projection, &spawn)
        })
        .collect()
}

fn random_spawn(
    rng: &mut ChaCha8Rng,
    projection: &GeoProjection,
    taken: &mut HashSet<String>,
) -> AircraftSpawn {
    let callsign = loop {
        let prefix = AIRLINE_PREFIXES[rng.gen_range(0..AIRLINE_PREFIXES.len())];
        let candidate = format!("{prefix}{}", rng.gen_range(100..10_000));
        if taken.insert(candidate.clone()) {
            break candidate;
        }
    };

    let b = projection.bounds();
    let lat_margin = (b.max_lat() - b.min_lat()) * 0.1;
    let lon_margin = (b.max_lon() - b.min_lon()) * 0.1;

    let wake = match rng.gen_range(0..20) {
        0 => WakeCategory::Light,
        1..=3 => WakeCategory::Heavy,
        4 => WakeCategory::Super,
        _ => WakeCategory::Medium,
    };

    AircraftSpawn {
        callsign,
        wake,
        destination: DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())].to_string(),
        lat: rng.gen_range(b.min_lat() + lat_margin..b.max_lat() - lat_margin),
        lon: rng.gen_range(b.min_lon() + lon_margin..b.max_lon() - lon_margin),
        heading_deg: (rng.gen_range(0..72) * 5) as f64,
        altitude_ft: (rng.gen_range(3..=24) * 1000) as f64,
        speed_kt: (rng.gen_range(18..=32) * 10) as f64,
    }
}
