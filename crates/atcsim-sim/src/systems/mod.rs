//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). They own no state; everything lives in components.

pub mod display;
pub mod kinematics;
pub mod render;
