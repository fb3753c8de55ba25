//! Wave director — spawns each wave's enemies on a logical timer and decides
//! when the wave is over.
//!
//! `Idle -> Spawning` on a start request; `Spawning -> Idle` once every planned
//! enemy has spawned and none are left alive. The spawn timer is accumulated
//! step time, never a wall clock, so a run replays identically from the same
//! sequence of step deltas.

use hecs::World;
use tracing::{info, trace};

use rampart_core::components::Enemy;
use rampart_core::constants::*;
use rampart_core::enums::{EnemyKind, WavePhase};
use rampart_core::events::SimEvent;
use rampart_core::types::Path;

use crate::economy::Economy;
use crate::world_setup::{self, Serials};

/// Number of enemies in wave `wave`.
pub fn wave_size(wave: u32) -> u32 {
    WAVE_BASE_SIZE + WAVE_SIZE_GROWTH * wave
}

/// Gold granted for clearing a wave, keyed by the wave number that follows it.
pub fn wave_bonus(next_wave: u32) -> u32 {
    WAVE_BONUS_BASE + WAVE_BONUS_GROWTH * next_wave
}

/// Spawn schedule and completion state for the current wave.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    /// The wave that is running, or the next one to start. Starts at 1.
    pub wave_number: u32,
    pub phase: WavePhase,
    pub planned: u32,
    pub spawned: u32,
    spawn_timer_ms: f64,
    spawn_interval_ms: f64,
}

impl WaveDirector {
    pub fn new(spawn_interval_ms: f64) -> Self {
        Self {
            wave_number: 1,
            phase: WavePhase::Idle,
            planned: 0,
            spawned: 0,
            spawn_timer_ms: 0.0,
            spawn_interval_ms,
        }
    }

    /// Begin the current wave. Returns false (and changes nothing) if one is running.
    pub fn start(&mut self) -> bool {
        if self.phase == WavePhase::Spawning {
            return false;
        }
        self.phase = WavePhase::Spawning;
        self.planned = wave_size(self.wave_number);
        self.spawned = 0;
        self.spawn_timer_ms = 0.0;
        true
    }

    pub fn quota_exhausted(&self) -> bool {
        self.spawned >= self.planned
    }

    /// Advance the spawn timer by `dt_ms` and return the kinds due this tick.
    ///
    /// A long step can owe several spawns; each consumes one interval.
    pub fn due_spawns(&mut self, dt_ms: f64) -> Vec<EnemyKind> {
        let mut due = Vec::new();
        if self.phase != WavePhase::Spawning || self.quota_exhausted() {
            return due;
        }

        self.spawn_timer_ms += dt_ms;
        while self.spawn_timer_ms >= self.spawn_interval_ms && !self.quota_exhausted() {
            due.push(self.next_kind());
            self.spawned += 1;
            self.spawn_timer_ms -= self.spawn_interval_ms;
        }
        due
    }

    /// Kind of the next spawn: the final enemy of every third wave is a boss.
    fn next_kind(&self) -> EnemyKind {
        let is_last = self.spawned + 1 == self.planned;
        if is_last && self.wave_number % BOSS_WAVE_PERIOD == 0 {
            EnemyKind::Boss
        } else {
            EnemyKind::Normal
        }
    }

    /// Close the wave if it is finished. Returns `(finished_wave, bonus)` once.
    pub fn try_complete(&mut self, live_enemies: usize) -> Option<(u32, u32)> {
        if self.phase != WavePhase::Spawning || !self.quota_exhausted() || live_enemies > 0 {
            return None;
        }
        let finished = self.wave_number;
        self.wave_number += 1;
        self.phase = WavePhase::Idle;
        Some((finished, wave_bonus(self.wave_number)))
    }
}

/// Spawn every enemy that came due during this tick.
pub fn spawn_due(
    world: &mut World,
    director: &mut WaveDirector,
    path: &Path,
    serials: &mut Serials,
    events: &mut Vec<SimEvent>,
    dt_ms: f64,
) {
    for kind in director.due_spawns(dt_ms) {
        let id = serials.next_enemy();
        world_setup::spawn_enemy(world, path, id, kind);
        trace!(enemy = id.0, ?kind, wave = director.wave_number, "enemy spawned");
        events.push(SimEvent::EnemySpawned { enemy: id, kind });
    }
}

/// Check for wave completion and pay out the clear bonus.
pub fn check_complete(
    world: &World,
    director: &mut WaveDirector,
    economy: &mut Economy,
    events: &mut Vec<SimEvent>,
) {
    let live = world.query::<&Enemy>().iter().count();
    if let Some((wave, gold_gained)) = director.try_complete(live) {
        economy.earn(gold_gained);
        info!(wave, gold_gained, gold = economy.gold, "wave complete");
        events.push(SimEvent::WaveComplete { wave, gold_gained });
    }
}
