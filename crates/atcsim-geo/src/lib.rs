//! Geographic foundation for ATCSIM.
//!
//! Screen projection of the radar area and the great-circle math the
//! kinematics and navigation geometry share.

pub use atcsim_core as core;

pub mod geodesy;
pub mod projection;

// Re-export key types for convenience.
pub use geodesy::{destination, haversine_km, normalize_degrees, shortest_turn_degrees};
pub use projection::{GeoBounds, GeoProjection, PixelScale};
