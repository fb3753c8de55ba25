//! Path-following motion and leak handling.
//!
//! Enemies cover a fixed distance per tick regardless of step length.

use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::Enemy;
use rampart_core::enums::MotionOutcome;
use rampart_core::events::SimEvent;
use rampart_core::types::{Path, Position};

use crate::economy::{Economy, ScoreState};

/// Move one enemy a single tick along `path`.
///
/// Arriving within `speed` of the next waypoint bumps `path_index` without
/// moving the enemy this tick.
pub fn advance(enemy: &mut Enemy, position: &mut Position, path: &Path) -> MotionOutcome {
    let Some(target) = path.get(enemy.path_index + 1) else {
        return MotionOutcome::Leaked;
    };

    let delta = target - *position;
    let distance = delta.length();
    if distance < enemy.speed {
        enemy.path_index += 1;
        if enemy.path_index >= path.last_index() {
            MotionOutcome::Leaked
        } else {
            MotionOutcome::ReachedWaypoint
        }
    } else {
        *position += delta / distance * enemy.speed;
        MotionOutcome::Moved
    }
}

/// Advance every enemy and remove the ones that leaked, charging the player.
pub fn run(
    world: &mut World,
    path: &Path,
    economy: &mut Economy,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    let mut leaked: Vec<(Entity, Enemy)> = Vec::new();
    for (entity, (enemy, position)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if advance(enemy, position, path) == MotionOutcome::Leaked {
            leaked.push((entity, enemy.clone()));
        }
    }
    leaked.sort_by_key(|(_, enemy)| enemy.id);

    for (entity, enemy) in leaked {
        let health_lost = enemy.leak_damage();
        economy.lose_health(health_lost);
        score.enemies_leaked += 1;
        debug!(
            enemy = enemy.id.0,
            kind = ?enemy.kind,
            health_lost,
            health = economy.health,
            "enemy leaked"
        );
        events.push(SimEvent::EnemyLeaked {
            enemy: enemy.id,
            kind: enemy.kind,
            health_lost,
        });
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::enums::EnemyKind;
    use rampart_core::types::EnemyId;

    fn straight_path() -> Path {
        Path::new(vec![
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(6.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn moves_speed_units_toward_next_waypoint() {
        let path = straight_path();
        let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Normal);
        let mut pos = path.start();

        assert_eq!(advance(&mut enemy, &mut pos, &path), MotionOutcome::Moved);
        assert!((pos.x - 1.0).abs() < 1e-9);
        assert_eq!(enemy.path_index, 0);
    }

    #[test]
    fn reaching_waypoint_does_not_move() {
        let path = straight_path();
        let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Normal);
        let mut pos = Position::new(2.5, 0.0);

        assert_eq!(
            advance(&mut enemy, &mut pos, &path),
            MotionOutcome::ReachedWaypoint
        );
        assert_eq!(enemy.path_index, 1);
        assert_eq!(pos, Position::new(2.5, 0.0));
    }

    #[test]
    fn path_index_never_decreases_and_ends_in_leak() {
        let path = straight_path();
        let mut enemy = Enemy::new(EnemyId(0), EnemyKind::Normal);
        let mut pos = path.start();
        let mut last_index = 0;

        for _ in 0..50 {
            let outcome = advance(&mut enemy, &mut pos, &path);
            assert!(enemy.path_index >= last_index);
            last_index = enemy.path_index;
            if outcome == MotionOutcome::Leaked {
                assert_eq!(enemy.path_index, path.last_index());
                return;
            }
        }
        panic!("Enemy never leaked on a six-unit path");
    }

    #[test]
    fn leaks_charge_health_without_gold() {
        let path = straight_path();
        let mut world = World::new();
        for (id, kind, x) in [(0, EnemyKind::Normal, 5.5), (1, EnemyKind::Boss, 5.8)] {
            let mut enemy = Enemy::new(EnemyId(id), kind);
            enemy.path_index = 1;
            world.spawn((enemy, Position::new(x, 0.0)));
        }

        let mut economy = Economy::new(100, 0);
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        run(&mut world, &path, &mut economy, &mut score, &mut events);

        assert_eq!(economy.health, 75);
        assert_eq!(economy.gold, 0);
        assert_eq!(score.enemies_leaked, 2);
        assert_eq!(world.query::<&Enemy>().iter().count(), 0);
        assert_eq!(
            events,
            vec![
                SimEvent::EnemyLeaked {
                    enemy: EnemyId(0),
                    kind: EnemyKind::Normal,
                    health_lost: 5,
                },
                SimEvent::EnemyLeaked {
                    enemy: EnemyId(1),
                    kind: EnemyKind::Boss,
                    health_lost: 20,
                },
            ]
        );
    }
}
