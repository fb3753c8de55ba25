//! Deterministic replay of recorded host input.
//!
//! A replay is the sequence of `(commands, elapsed)` pairs a host fed the
//! engine. Running it again through a fresh engine reproduces the same events
//! and final state exactly.

use serde::{Deserialize, Serialize};

use rampart_core::commands::PlayerCommand;
use rampart_core::events::SimEvent;
use rampart_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};

/// One host frame: commands issued before the step, then the step itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
    pub elapsed_ms: f64,
}

impl ReplayFrame {
    pub fn idle(elapsed_ms: f64) -> Self {
        Self {
            commands: Vec::new(),
            elapsed_ms,
        }
    }
}

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// Events from every step, in order.
    pub events: Vec<SimEvent>,
    /// State after the last frame.
    pub snapshot: GameStateSnapshot,
}

/// Feed `frames` through a new engine built from `config`.
pub fn run_replay(config: SimConfig, frames: &[ReplayFrame]) -> ReplayOutcome {
    let mut engine = SimulationEngine::new(config);
    let mut events = Vec::new();
    for frame in frames {
        engine.queue_commands(frame.commands.iter().cloned());
        events.extend(engine.step(frame.elapsed_ms));
    }
    ReplayOutcome {
        events,
        snapshot: engine.snapshot(),
    }
}
