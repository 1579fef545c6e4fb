//! ATCSIM headless application.
//!
//! Wires the simulation crates together: settings loading, the frame loop
//! thread, the navigation loader thread, and the stdio bridge that carries
//! controller commands in and frame snapshots out.

pub mod bridge;
pub mod config;
pub mod frame_loop;
pub mod loader;
pub mod state;

pub use atcsim_core as core;
