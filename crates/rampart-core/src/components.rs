//! ECS components for hecs entities.
//!
//! Components are plain data. Per-tick logic lives in the simulation's
//! systems; the only behavior here is the damage rule, which every caller
//! must apply identically.

use serde::{Deserialize, Serialize};

use crate::catalog::{enemy_spec, tower_spec};
use crate::enums::{EnemyKind, TowerKind};
use crate::types::{EnemyId, ProjectileId, TowerId};

/// A path-walking, damageable enemy. Position is a separate component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    /// Index of the last waypoint reached. Never decreases.
    pub path_index: usize,
    pub health: u32,
    pub max_health: u32,
    pub speed: f64,
    pub reward: u32,
    pub radius: f64,
}

impl Enemy {
    /// A fresh enemy of `kind` standing on waypoint 0.
    pub fn new(id: EnemyId, kind: EnemyKind) -> Self {
        let spec = enemy_spec(kind);
        Self {
            id,
            kind,
            path_index: 0,
            health: spec.max_health,
            max_health: spec.max_health,
            speed: spec.speed,
            reward: spec.reward,
            radius: spec.radius,
        }
    }

    /// Subtract `amount` (saturating at zero). Returns true when this hit killed.
    ///
    /// Does not remove the enemy; the caller grants the reward and despawns.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }

    /// Player health lost if this enemy leaks.
    pub fn leak_damage(&self) -> i32 {
        enemy_spec(self.kind).leak_damage
    }
}

/// A stationary tower. Position is a separate component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    /// Simulation time of the last shot, `None` until the first one.
    pub last_fire_ms: Option<f64>,
}

impl Tower {
    pub fn new(id: TowerId, kind: TowerKind) -> Self {
        Self {
            id,
            kind,
            last_fire_ms: None,
        }
    }

    /// Whether the cooldown has elapsed at time `now_ms`.
    pub fn ready_to_fire(&self, now_ms: f64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last > tower_spec(self.kind).fire_interval_ms,
        }
    }
}

/// A homing shot. Position and target handle are separate components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub damage: u32,
    /// Distance travelled per tick.
    pub speed: f64,
    pub color: String,
}
