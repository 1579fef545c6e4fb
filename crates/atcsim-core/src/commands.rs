//! Controller commands sent from the input surface to the simulation.
//!
//! Commands are validated before they touch any aircraft; a rejected
//! command leaves the simulation exactly as it was.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ASSIGNED_ALTITUDE_FT, MAX_ASSIGNED_SPEED_KT};
use crate::error::CommandError;

/// All operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControllerCommand {
    // --- Clearances ---
    /// Assign a heading (degrees, any finite value, normalized on apply).
    SetHeading { callsign: String, degrees: f64 },
    /// Assign a speed (knots).
    SetSpeed { callsign: String, knots: f64 },
    /// Assign an altitude (feet).
    SetAltitude { callsign: String, feet: f64 },

    // --- Scope housekeeping ---
    /// Move the data tag around the target symbol.
    SetTagAngle { callsign: String, radians: f64 },
    /// Replace the scratchpad text.
    SetScratchpad { callsign: String, text: String },
    /// The drawing surface changed size.
    Resize { width: f64, height: f64 },

    // --- Simulation control ---
    Pause,
    Resume,
}

/// Clearance field a raw text entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandField {
    Heading,
    Speed,
    Altitude,
}

impl CommandField {
    fn name(&self) -> &'static str {
        match self {
            CommandField::Heading => "heading",
            CommandField::Speed => "speed",
            CommandField::Altitude => "altitude",
        }
    }
}

impl ControllerCommand {
    /// Build a clearance from raw operator text, e.g. the contents of a
    /// heading input box.
    pub fn parse_field(
        field: CommandField,
        callsign: &str,
        input: &str,
    ) -> Result<Self, CommandError> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| CommandError::NotNumeric {
                input: input.to_string(),
            })?;

        let command = match field {
            CommandField::Heading => ControllerCommand::SetHeading {
                callsign: callsign.to_string(),
                degrees: value,
            },
            CommandField::Speed => ControllerCommand::SetSpeed {
                callsign: callsign.to_string(),
                knots: value,
            },
            CommandField::Altitude => ControllerCommand::SetAltitude {
                callsign: callsign.to_string(),
                feet: value,
            },
        };
        command.validate()?;
        Ok(command)
    }

    /// Reject values no aircraft could be cleared to.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            ControllerCommand::SetHeading { degrees, .. } => {
                check(CommandField::Heading.name(), *degrees, f64::MIN, f64::MAX)
            }
            ControllerCommand::SetSpeed { knots, .. } => {
                check(CommandField::Speed.name(), *knots, 0.0, MAX_ASSIGNED_SPEED_KT)
            }
            ControllerCommand::SetAltitude { feet, .. } => check(
                CommandField::Altitude.name(),
                *feet,
                0.0,
                MAX_ASSIGNED_ALTITUDE_FT,
            ),
            ControllerCommand::SetTagAngle { radians, .. } => {
                check("tag angle", *radians, f64::MIN, f64::MAX)
            }
            ControllerCommand::Resize { width, height } => {
                check("canvas width", *width, f64::MIN_POSITIVE, f64::MAX)?;
                check("canvas height", *height, f64::MIN_POSITIVE, f64::MAX)
            }
            ControllerCommand::SetScratchpad { .. }
            | ControllerCommand::Pause
            | ControllerCommand::Resume => Ok(()),
        }
    }

    /// Callsign the command addresses, if any.
    pub fn callsign(&self) -> Option<&str> {
        match self {
            ControllerCommand::SetHeading { callsign, .. }
            | ControllerCommand::SetSpeed { callsign, .. }
            | ControllerCommand::SetAltitude { callsign, .. }
            | ControllerCommand::SetTagAngle { callsign, .. }
            | ControllerCommand::SetScratchpad { callsign, .. } => Some(callsign),
            ControllerCommand::Resize { .. }
            | ControllerCommand::Pause
            | ControllerCommand::Resume => None,
        }
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), CommandError> {
    if !value.is_finite() || value < min || value > max {
        return Err(CommandError::OutOfDomain { field, value });
    }
    Ok(())
}
