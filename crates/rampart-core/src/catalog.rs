//! Static stat tables for towers and enemies.

use serde::Serialize;

use crate::enums::{EnemyKind, TowerKind};

/// Immutable stats shared by every tower of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TowerSpec {
    pub name: &'static str,
    pub cost: u32,
    pub damage: u32,
    /// Targeting radius; enemies must be strictly closer than this.
    pub range: f64,
    /// Minimum time between shots (milliseconds).
    pub fire_interval_ms: f64,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Immutable stats shared by every enemy of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemySpec {
    pub max_health: u32,
    /// Distance travelled per tick.
    pub speed: f64,
    /// Gold granted on kill.
    pub reward: u32,
    pub radius: f64,
    /// Player health lost when this enemy reaches the end of the path.
    pub leak_damage: i32,
    pub color: &'static str,
}

static GUAN_YU: TowerSpec = TowerSpec {
    name: "Guan Yu",
    cost: 100,
    damage: 30,
    range: 120.0,
    fire_interval_ms: 1000.0,
    color: "#8B0000",
    icon: "⚔️",
};

static ZHANG_FEI: TowerSpec = TowerSpec {
    name: "Zhang Fei",
    cost: 80,
    damage: 20,
    range: 150.0,
    fire_interval_ms: 800.0,
    color: "#00008B",
    icon: "🗡️",
};

static ZHAO_YUN: TowerSpec = TowerSpec {
    name: "Zhao Yun",
    cost: 120,
    damage: 40,
    range: 140.0,
    fire_interval_ms: 1200.0,
    color: "#006400",
    icon: "🏹",
};

static ZHUGE_LIANG: TowerSpec = TowerSpec {
    name: "Zhuge Liang",
    cost: 150,
    damage: 35,
    range: 200.0,
    fire_interval_ms: 1500.0,
    color: "#4B0082",
    icon: "🔮",
};

static NORMAL: EnemySpec = EnemySpec {
    max_health: 50,
    speed: 1.0,
    reward: 10,
    radius: 15.0,
    leak_damage: 5,
    color: "#FF4500",
};

static BOSS: EnemySpec = EnemySpec {
    max_health: 200,
    speed: 0.5,
    reward: 50,
    radius: 25.0,
    leak_damage: 20,
    color: "#8B0000",
};

pub fn tower_spec(kind: TowerKind) -> &'static TowerSpec {
    match kind {
        TowerKind::GuanYu => &GUAN_YU,
        TowerKind::ZhangFei => &ZHANG_FEI,
        TowerKind::ZhaoYun => &ZHAO_YUN,
        TowerKind::ZhugeLiang => &ZHUGE_LIANG,
    }
}

pub fn enemy_spec(kind: EnemyKind) -> &'static EnemySpec {
    match kind {
        EnemyKind::Normal => &NORMAL,
        EnemyKind::Boss => &BOSS,
    }
}
