//! Fire control system — acquires the closest enemy in range for each tower
//! and launches projectiles when the cooldown has elapsed.

use hecs::{Entity, World};
use tracing::trace;

use rampart_core::catalog::tower_spec;
use rampart_core::components::{Enemy, Tower};
use rampart_core::enums::TowerKind;
use rampart_core::events::SimEvent;
use rampart_core::types::{EnemyId, Position, TowerId};

use crate::economy::ScoreState;
use crate::handles::TowerTarget;
use crate::world_setup::{self, Serials};

/// An enemy a tower could aim at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCandidate {
    pub entity: Entity,
    pub id: EnemyId,
    pub position: Position,
}

/// Closest candidate strictly inside `range` of `origin`.
///
/// `candidates` must be in ascending id order; on equal distance the earlier
/// one is kept.
pub fn select_target(
    origin: Position,
    range: f64,
    candidates: &[TargetCandidate],
) -> Option<TargetCandidate> {
    let mut best: Option<TargetCandidate> = None;
    let mut best_distance = range;
    for candidate in candidates {
        let distance = origin.distance(candidate.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(*candidate);
        }
    }
    best
}

/// Live enemies in ascending id order.
pub fn collect_candidates(world: &World) -> Vec<TargetCandidate> {
    let mut candidates: Vec<TargetCandidate> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, position))| TargetCandidate {
            entity,
            id: enemy.id,
            position: *position,
        })
        .collect();
    candidates.sort_by_key(|c| c.id);
    candidates
}

struct FireOrder {
    tower: TowerId,
    kind: TowerKind,
    origin: Position,
    target: TargetCandidate,
}

/// Run target acquisition and firing for every tower at time `now_ms`.
pub fn run(
    world: &mut World,
    serials: &mut Serials,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    now_ms: f64,
) {
    let candidates = collect_candidates(world);

    let mut orders: Vec<FireOrder> = Vec::new();
    for (_entity, (tower, position, target)) in
        world.query_mut::<(&mut Tower, &Position, &mut TowerTarget)>()
    {
        let spec = tower_spec(tower.kind);
        let selected = select_target(*position, spec.range, &candidates);
        target.0 = selected.map(|c| c.entity);

        let Some(selected) = selected else {
            continue;
        };
        if tower.ready_to_fire(now_ms) {
            tower.last_fire_ms = Some(now_ms);
            orders.push(FireOrder {
                tower: tower.id,
                kind: tower.kind,
                origin: *position,
                target: selected,
            });
        }
    }
    orders.sort_by_key(|order| order.tower);

    for order in orders {
        let id = serials.next_projectile();
        world_setup::spawn_projectile(
            world,
            id,
            order.origin,
            order.target.entity,
            tower_spec(order.kind),
        );
        score.projectiles_fired += 1;
        trace!(
            projectile = id.0,
            tower = order.tower.0,
            target = order.target.id.0,
            "projectile fired"
        );
        events.push(SimEvent::ProjectileFired {
            projectile: id,
            tower: order.tower,
            target: order.target.id,
        });
    }
}
