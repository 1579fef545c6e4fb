//! Simulation engine for ATCSIM.
//!
//! Owns the hecs ECS world, runs systems once per display frame,
//! and produces FrameSnapshots for the drawing surface.

pub mod clock;
pub mod engine;
pub mod sweep;
pub mod systems;
pub mod world_setup;

pub use atcsim_core as core;
pub use clock::SimulationClock;
pub use engine::SimulationEngine;
pub use sweep::SweepScheduler;
