//! Projectile resolution — homes each projectile on its target, applies damage
//! on arrival and pays out kills.

use hecs::{Entity, World};
use tracing::{debug, trace};

use rampart_core::components::{Enemy, Projectile};
use rampart_core::events::SimEvent;
use rampart_core::types::Position;

use crate::economy::{Economy, ScoreState};
use crate::handles::{self, HomingTarget};

/// Resolve every projectile for one tick, in firing order.
///
/// A projectile whose target is gone is removed without effect. Projectiles
/// later in the order see kills made by earlier ones this same tick.
pub fn run(
    world: &mut World,
    economy: &mut Economy,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut projectiles: Vec<(Entity, Projectile, Entity)> = world
        .query::<(&Projectile, &HomingTarget)>()
        .iter()
        .map(|(entity, (projectile, homing))| (entity, projectile.clone(), homing.0))
        .collect();
    projectiles.sort_by_key(|(_, projectile, _)| projectile.id);

    for (entity, projectile, target) in projectiles {
        let Some((enemy_id, target_pos)) = handles::live_enemy(world, target) else {
            trace!(projectile = projectile.id.0, "target gone, projectile discarded");
            despawn_buffer.push(entity);
            continue;
        };

        let Ok(mut position) = world.get::<&mut Position>(entity) else {
            continue;
        };
        let delta = target_pos - *position;
        let distance = delta.length();
        if distance >= projectile.speed {
            *position += delta / distance * projectile.speed;
            continue;
        }
        drop(position);
        despawn_buffer.push(entity);

        let killed = match world.get::<&mut Enemy>(target) {
            Ok(mut enemy) => enemy.take_damage(projectile.damage).then(|| enemy.clone()),
            Err(_) => None,
        };
        if let Some(enemy) = killed {
            economy.earn(enemy.reward);
            score.enemies_killed += 1;
            debug!(
                enemy = enemy_id.0,
                kind = ?enemy.kind,
                reward = enemy.reward,
                gold = economy.gold,
                "enemy killed"
            );
            events.push(SimEvent::EnemyKilled {
                enemy: enemy_id,
                kind: enemy.kind,
                gold_gained: enemy.reward,
            });
            let _ = world.despawn(target);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
