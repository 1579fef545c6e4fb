//! Error types shared across crates.

use thiserror::Error;

/// Geographic area or canvas that cannot be projected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// Zero-width or zero-height box, inverted box, or non-finite edge.
    #[error(
        "degenerate bounds: lat [{min_lat}, {max_lat}], lon [{min_lon}, {max_lon}]"
    )]
    Degenerate {
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    },

    /// Radar range must be a positive finite distance.
    #[error("invalid radar range: {0} NM")]
    InvalidRange(f64),

    /// Canvas must have positive finite dimensions.
    #[error("invalid canvas size: {width} x {height}")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Controller input that was rejected. State is never modified when one
/// of these is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("'{input}' is not a number")]
    NotNumeric { input: String },

    #[error("{field} value {value} is out of range")]
    OutOfDomain { field: &'static str, value: f64 },

    #[error("no aircraft with callsign '{0}'")]
    UnknownAircraft(String),

    #[error("callsign '{0}' is already in use")]
    DuplicateCallsign(String),
}

/// Settings file that cannot be turned into a running simulation.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
