//! Game state snapshot — the complete read-only view handed to the host.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EnemyId, Position, ProjectileId, SimTime, TowerId};

/// Everything a renderer or UI needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub game_over: bool,
    pub economy: EconomyView,
    pub score: ScoreView,
    pub wave: WaveView,
    pub path: Vec<Position>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Tower kind waiting to be placed, if the player is in placement mode.
    pub pending_placement: Option<TowerKind>,
    pub selected_tower: Option<TowerId>,
    pub shop: Vec<ShopEntryView>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub health: i32,
    pub gold: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
    pub projectiles_fired: u32,
    pub towers_built: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// The wave that is running, or the next one to start.
    pub number: u32,
    pub phase: WavePhase,
    pub planned: u32,
    pub spawned: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Position,
    pub path_index: usize,
    pub health: u32,
    pub max_health: u32,
    /// health / max_health, for the health bar.
    pub health_fraction: f64,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub position: Position,
    pub range: f64,
    /// Only ever a live enemy.
    pub target: Option<EnemyId>,
    /// Whether the range ring should be drawn.
    pub selected: bool,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
    pub target: Option<EnemyId>,
    pub color: String,
}

/// One shop slot; unaffordable entries are drawn dimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopEntryView {
    pub kind: TowerKind,
    pub name: String,
    pub cost: u32,
    pub affordable: bool,
}
