//! Core types and definitions for the ATCSIM radar trainer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, controller commands, navigation records, frame snapshots,
//! settings, errors, and constants. It has no dependency on the ECS or
//! any runtime loop.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod navdata;
pub mod settings;
pub mod state;
pub mod types;
