//! Placement validator and tower hit-testing.
//!
//! Pure queries over the path and the current towers; nothing here mutates
//! the world.

use hecs::World;

use rampart_core::components::Tower;
use rampart_core::constants::{PATH_CLEARANCE, TOWER_SELECT_RADIUS, TOWER_SPACING};
use rampart_core::error::PlacementRejection;
use rampart_core::types::{Path, Position, TowerId};

/// Positions of every tower, in placement order.
pub fn tower_positions(world: &World) -> Vec<(TowerId, Position)> {
    let mut towers: Vec<(TowerId, Position)> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, pos))| (tower.id, *pos))
        .collect();
    towers.sort_by_key(|(id, _)| *id);
    towers
}

/// First reason `at` is not a legal tower site. Non-finite points are refused
/// outright; path clearance is checked before tower spacing.
pub fn check_placement(
    path: &Path,
    towers: &[(TowerId, Position)],
    at: Position,
) -> Result<(), PlacementRejection> {
    if !at.is_finite() {
        return Err(PlacementRejection::OutOfBounds);
    }
    if let Some(waypoint) = path
        .waypoints()
        .iter()
        .position(|wp| wp.distance(at) < PATH_CLEARANCE)
    {
        return Err(PlacementRejection::NearPath { waypoint });
    }
    if let Some((tower, _)) = towers
        .iter()
        .find(|(_, pos)| pos.distance(at) < TOWER_SPACING)
    {
        return Err(PlacementRejection::NearTower { tower: *tower });
    }
    Ok(())
}

pub fn can_place(path: &Path, towers: &[(TowerId, Position)], at: Position) -> bool {
    check_placement(path, towers, at).is_ok()
}

/// The earliest-placed tower whose center is strictly within the selection radius.
pub fn tower_at(towers: &[(TowerId, Position)], at: Position) -> Option<TowerId> {
    towers
        .iter()
        .find(|(_, pos)| pos.distance(at) < TOWER_SELECT_RADIUS)
        .map(|(id, _)| *id)
}
