//! Cleanup system: drops tower target handles whose enemy no longer exists.

use hecs::{Entity, World};

use rampart_core::components::Tower;

use crate::handles::{self, TowerTarget};

/// Clear every `TowerTarget` pointing at a despawned enemy.
pub fn run(world: &mut World, stale_buffer: &mut Vec<Entity>) {
    stale_buffer.clear();

    for (entity, (_tower, target)) in world.query::<(&Tower, &TowerTarget)>().iter() {
        if let Some(enemy) = target.0 {
            if !handles::is_live_enemy(world, enemy) {
                stale_buffer.push(entity);
            }
        }
    }

    for entity in stale_buffer.drain(..) {
        if let Ok(mut target) = world.get::<&mut TowerTarget>(entity) {
            target.0 = None;
        }
    }
}
