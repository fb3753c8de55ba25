//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared by the engine and its hosts:
//! components, stat catalogs, commands, events, state snapshots, errors and
//! constants. It has no dependency on the ECS or on any display layer.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
