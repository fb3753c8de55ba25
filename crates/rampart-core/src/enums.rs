//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy category. Stats come from [`crate::catalog::enemy_spec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    /// Slow, heavily armored; closes out every third wave.
    Boss,
}

/// The four purchasable towers. Stats come from [`crate::catalog::tower_spec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Balanced melee-range general.
    GuanYu,
    /// Cheap and fast-firing.
    ZhangFei,
    /// Hard hitter with a slow cycle.
    ZhaoYun,
    /// Longest reach, slowest cycle.
    ZhugeLiang,
}

impl TowerKind {
    /// Shop order.
    pub const ALL: [TowerKind; 4] = [
        TowerKind::GuanYu,
        TowerKind::ZhangFei,
        TowerKind::ZhaoYun,
        TowerKind::ZhugeLiang,
    ];
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Between waves; waiting for a start request.
    #[default]
    Idle,
    /// Wave started. Stays here after the last spawn until the field is clear.
    Spawning,
}

/// Result of advancing an enemy one tick along its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    Moved,
    /// Arrived at an intermediate waypoint; did not move this tick.
    ReachedWaypoint,
    /// Arrived at the final waypoint.
    Leaked,
}
