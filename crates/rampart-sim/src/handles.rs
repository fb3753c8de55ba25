//! Non-owning entity handles between towers, projectiles and enemies.
//!
//! These hold `hecs::Entity` values, which are generational: once an enemy is
//! despawned its handle never resolves again, even if the slot is reused.
//! Always resolve through [`live_enemy`] before touching the target.

use hecs::{Entity, World};

use rampart_core::components::Enemy;
use rampart_core::types::{EnemyId, Position};

/// The enemy a tower is currently aiming at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TowerTarget(pub Option<Entity>);

/// The enemy a projectile is homing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomingTarget(pub Entity);

/// Id and current position of `entity` if it is still a live enemy.
pub fn live_enemy(world: &World, entity: Entity) -> Option<(EnemyId, Position)> {
    let enemy = world.get::<&Enemy>(entity).ok()?;
    let position = world.get::<&Position>(entity).ok()?;
    Some((enemy.id, *position))
}

pub fn is_live_enemy(world: &World, entity: Entity) -> bool {
    world.get::<&Enemy>(entity).is_ok()
}
