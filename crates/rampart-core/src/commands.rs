//! Player commands sent from the host to the simulation.
//!
//! Commands queued on the engine are applied at the next step boundary. The
//! same intents are also available as direct engine methods for hosts that
//! want the result immediately.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Waves ---
    /// Begin spawning the current wave. Ignored while a wave is running.
    StartWave,

    // --- Shop / placement ---
    /// Enter placement mode for a tower kind.
    RequestPlacement { kind: TowerKind },
    /// Place the pending tower at a point.
    ConfirmPlacement { x: f64, y: f64 },
    /// Leave placement mode.
    CancelPlacement,
    /// Select the tower under a point (clears the selection on a miss).
    SelectTowerAt { x: f64, y: f64 },

    // --- Simulation control ---
    SetPaused { paused: bool },
    /// Throw away all state and start over with the same configuration.
    Restart,
}
