//! Events emitted by the simulation for the host's UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};
use crate::error::CommandError;
use crate::types::{EnemyId, Position, ProjectileId, TowerId};

/// Everything that happened during one step, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    WaveStarted {
        wave: u32,
        planned: u32,
    },
    EnemySpawned {
        enemy: EnemyId,
        kind: EnemyKind,
    },
    /// Enemy reached the final waypoint and was removed.
    EnemyLeaked {
        enemy: EnemyId,
        kind: EnemyKind,
        health_lost: i32,
    },
    ProjectileFired {
        projectile: ProjectileId,
        tower: TowerId,
        target: EnemyId,
    },
    EnemyKilled {
        enemy: EnemyId,
        kind: EnemyKind,
        gold_gained: u32,
    },
    /// All planned enemies spawned and the field is clear.
    WaveComplete {
        wave: u32,
        gold_gained: u32,
    },
    /// Player health dropped to zero. Emitted once.
    GameOver {
        wave: u32,
    },
    TowerPlaced {
        tower: TowerId,
        kind: TowerKind,
        position: Position,
    },
    /// A queued command was refused.
    CommandRejected {
        error: CommandError,
    },
}
