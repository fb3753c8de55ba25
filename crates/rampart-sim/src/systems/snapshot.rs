//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world. Entity lists are
//! sorted by id so identical runs serialize identically.

use hecs::World;

use rampart_core::catalog::{enemy_spec, tower_spec};
use rampart_core::components::{Enemy, Projectile, Tower};
use rampart_core::enums::TowerKind;
use rampart_core::state::*;
use rampart_core::types::{Path, Position, SimTime, TowerId};

use crate::economy::{Economy, ScoreState};
use crate::handles::{self, HomingTarget, TowerTarget};
use crate::systems::wave_director::WaveDirector;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    paused: bool,
    game_over: bool,
    economy: &Economy,
    score: &ScoreState,
    director: &WaveDirector,
    path: &Path,
    pending_placement: Option<TowerKind>,
    selected_tower: Option<TowerId>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        paused,
        game_over,
        economy: EconomyView {
            health: economy.health,
            gold: economy.gold,
        },
        score: ScoreView {
            enemies_killed: score.enemies_killed,
            enemies_leaked: score.enemies_leaked,
            projectiles_fired: score.projectiles_fired,
            towers_built: score.towers_built,
        },
        wave: WaveView {
            number: director.wave_number,
            phase: director.phase,
            planned: director.planned,
            spawned: director.spawned,
        },
        path: path.waypoints().to_vec(),
        enemies: build_enemies(world),
        towers: build_towers(world, selected_tower),
        projectiles: build_projectiles(world),
        pending_placement,
        selected_tower,
        shop: build_shop(economy),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: *pos,
            path_index: enemy.path_index,
            health: enemy.health,
            max_health: enemy.max_health,
            health_fraction: enemy.health_fraction(),
            radius: enemy.radius,
            color: enemy_spec(enemy.kind).color.to_string(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World, selected: Option<TowerId>) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position, &TowerTarget)>()
        .iter()
        .map(|(_, (tower, pos, target))| {
            let spec = tower_spec(tower.kind);
            TowerView {
                id: tower.id,
                kind: tower.kind,
                position: *pos,
                range: spec.range,
                target: target
                    .0
                    .and_then(|e| handles::live_enemy(world, e))
                    .map(|(id, _)| id),
                selected: selected == Some(tower.id),
                color: spec.color.to_string(),
                icon: spec.icon.to_string(),
            }
        })
        .collect();
    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &HomingTarget)>()
        .iter()
        .map(|(_, (projectile, pos, homing))| ProjectileView {
            id: projectile.id,
            position: *pos,
            target: handles::live_enemy(world, homing.0).map(|(id, _)| id),
            color: projectile.color.clone(),
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_shop(economy: &Economy) -> Vec<ShopEntryView> {
    TowerKind::ALL
        .iter()
        .map(|&kind| {
            let spec = tower_spec(kind);
            ShopEntryView {
                kind,
                name: spec.name.to_string(),
                cost: spec.cost,
                affordable: economy.can_afford(spec.cost),
            }
        })
        .collect()
}
