//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// 2D position in play-field units (x = right, y = down).
pub type Position = glam::DVec2;

/// Stable serial assigned to an enemy at spawn. Ascending order is spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Stable serial assigned to a tower at placement. Ascending order is placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TowerId(pub u32);

/// Stable serial assigned to a projectile when fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of steps that advanced the simulation.
    pub tick: u64,
    /// Accumulated simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += clamp_dt(dt_ms);
    }
}

/// A usable step length: negative and non-finite deltas count as zero.
pub fn clamp_dt(dt_ms: f64) -> f64 {
    if dt_ms.is_finite() {
        dt_ms.max(0.0)
    } else {
        0.0
    }
}

/// The fixed route enemies walk, as an ordered list of waypoints.
///
/// Always holds at least two waypoints; immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    pub fn new(waypoints: Vec<Position>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        Ok(Self { waypoints })
    }

    /// The ten-point serpentine route across a 1000x600 field.
    pub fn default_route() -> Self {
        let points = [
            (0.0, 300.0),
            (200.0, 300.0),
            (200.0, 150.0),
            (400.0, 150.0),
            (400.0, 450.0),
            (600.0, 450.0),
            (600.0, 200.0),
            (800.0, 200.0),
            (800.0, 400.0),
            (1000.0, 400.0),
        ];
        Self {
            waypoints: points.iter().map(|&(x, y)| Position::new(x, y)).collect(),
        }
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; a path has at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.waypoints.get(index).copied()
    }

    /// Where enemies appear.
    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    /// Index of the final waypoint; reaching it is a leak.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::default_route()
    }
}

impl TryFrom<Vec<Position>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.waypoints
    }
}
