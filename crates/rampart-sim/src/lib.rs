//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, advances it one host frame at a time, and
//! produces GameStateSnapshots for the renderer.

pub mod economy;
pub mod engine;
pub mod handles;
pub mod placement;
pub mod replay;
pub mod systems;
pub mod world_setup;

pub use engine::{ConfigError, SimConfig, SimulationEngine};
pub use rampart_core as core;
