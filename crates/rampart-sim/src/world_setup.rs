//! Entity spawn factories.
//!
//! Creates enemy, tower and projectile entities with their component bundles,
//! and hands out the stable serials that order them.

use hecs::{Entity, World};

use rampart_core::catalog::TowerSpec;
use rampart_core::components::{Enemy, Projectile, Tower};
use rampart_core::constants::PROJECTILE_SPEED;
use rampart_core::enums::{EnemyKind, TowerKind};
use rampart_core::types::{EnemyId, Path, Position, ProjectileId, TowerId};

use crate::handles::{HomingTarget, TowerTarget};

/// Monotonic id counters. Ascending ids are creation order, which is the
/// tie-break order for targeting, selection and projectile resolution.
#[derive(Debug, Clone, Default)]
pub struct Serials {
    enemy: u32,
    tower: u32,
    projectile: u32,
}

impl Serials {
    pub fn next_enemy(&mut self) -> EnemyId {
        let id = EnemyId(self.enemy);
        self.enemy += 1;
        id
    }

    pub fn next_tower(&mut self) -> TowerId {
        let id = TowerId(self.tower);
        self.tower += 1;
        id
    }

    pub fn next_projectile(&mut self) -> ProjectileId {
        let id = ProjectileId(self.projectile);
        self.projectile += 1;
        id
    }
}

/// Spawn an enemy standing on the first waypoint.
pub fn spawn_enemy(world: &mut World, path: &Path, id: EnemyId, kind: EnemyKind) -> Entity {
    world.spawn((Enemy::new(id, kind), path.start()))
}

/// Spawn a tower with no target.
pub fn spawn_tower(world: &mut World, id: TowerId, kind: TowerKind, position: Position) -> Entity {
    world.spawn((Tower::new(id, kind), position, TowerTarget::default()))
}

/// Spawn a projectile at `origin` carrying the firing tower's damage and color.
pub fn spawn_projectile(
    world: &mut World,
    id: ProjectileId,
    origin: Position,
    target: Entity,
    spec: &TowerSpec,
) -> Entity {
    let projectile = Projectile {
        id,
        damage: spec.damage,
        speed: PROJECTILE_SPEED,
        color: spec.color.to_string(),
    };
    world.spawn((projectile, origin, HomingTarget(target)))
}
