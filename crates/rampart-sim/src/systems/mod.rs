//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whichever engine state they touch. They hold no state of their own,
//! except the wave director, which is the spawn schedule itself.

pub mod cleanup;
pub mod fire_control;
pub mod intercept;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
