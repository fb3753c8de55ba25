//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use rampart_core::catalog::tower_spec;
use rampart_core::commands::PlayerCommand;
use rampart_core::components::Enemy;
use rampart_core::constants::{SPAWN_INTERVAL_MS, STARTING_GOLD, STARTING_HEALTH};
use rampart_core::enums::{TowerKind, WavePhase};
use rampart_core::error::{CommandError, PlacementRejection};
use rampart_core::events::SimEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{clamp_dt, Path, Position, SimTime, TowerId};

use crate::economy::{Economy, ScoreState};
use crate::placement;
use crate::systems;
use crate::systems::wave_director::WaveDirector;
use crate::world_setup::{self, Serials};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub starting_health: i32,
    pub starting_gold: u32,
    pub path: Path,
    /// Time between spawns within a wave (milliseconds).
    pub spawn_interval_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_health: STARTING_HEALTH,
            starting_gold: STARTING_GOLD,
            path: Path::default_route(),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spawn interval must be positive and finite, got {0}")]
    InvalidSpawnInterval(f64),
    #[error("starting health must be positive, got {0}")]
    NonPositiveHealth(i32),
}

impl SimConfig {
    /// Parse a JSON document. Fields it omits keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidSpawnInterval(self.spawn_interval_ms));
        }
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.starting_health));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    paused: bool,
    game_over: bool,
    economy: Economy,
    score: ScoreState,
    director: WaveDirector,
    serials: Serials,
    pending_placement: Option<TowerKind>,
    selected_tower: Option<TowerId>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            paused: false,
            game_over: false,
            economy: Economy::new(config.starting_health, config.starting_gold),
            score: ScoreState::default(),
            director: WaveDirector::new(config.spawn_interval_ms),
            serials: Serials::default(),
            pending_placement: None,
            selected_tower: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Throw away all state and start over from the original config.
    ///
    /// Commands still queued behind a restart are kept.
    pub fn restart(&mut self) {
        let queued = std::mem::take(&mut self.command_queue);
        *self = Self::new(self.config.clone());
        self.command_queue = queued;
        info!("simulation restarted");
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `elapsed_ms` and return everything that happened,
    /// including events from direct calls made since the last step.
    ///
    /// Queued commands are applied even while paused or after game over; nothing
    /// else moves in those states.
    pub fn step(&mut self, elapsed_ms: f64) -> Vec<SimEvent> {
        self.process_commands();

        if !self.paused && !self.game_over {
            self.run_systems(clamp_dt(elapsed_ms));
        }

        std::mem::take(&mut self.events)
    }

    /// Begin the current wave. Returns false while one is running or after game over.
    pub fn start_wave(&mut self) -> bool {
        if self.game_over || !self.director.start() {
            debug!(wave = self.director.wave_number, "wave start refused");
            return false;
        }
        let wave = self.director.wave_number;
        let planned = self.director.planned;
        info!(wave, planned, "wave started");
        self.events.push(SimEvent::WaveStarted { wave, planned });
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Enter placement mode for `kind` if the player can currently afford it.
    pub fn request_placement(&mut self, kind: TowerKind) -> Result<(), CommandError> {
        let cost = tower_spec(kind).cost;
        if !self.economy.can_afford(cost) {
            return Err(CommandError::InsufficientGold {
                cost,
                gold: self.economy.gold,
            });
        }
        self.pending_placement = Some(kind);
        self.selected_tower = None;
        Ok(())
    }

    /// Place the pending tower at `(x, y)`.
    ///
    /// On failure the pending kind stays set so the player can try elsewhere.
    pub fn confirm_placement(&mut self, x: f64, y: f64) -> Result<TowerId, CommandError> {
        let kind = self
            .pending_placement
            .ok_or(CommandError::NoPendingSelection)?;
        let at = Position::new(x, y);
        self.check_placement(x, y)
            .map_err(|reason| CommandError::InvalidPlacement { reason })?;
        self.economy.spend(tower_spec(kind).cost)?;

        let id = self.serials.next_tower();
        world_setup::spawn_tower(&mut self.world, id, kind, at);
        self.pending_placement = None;
        self.score.towers_built += 1;
        info!(tower = id.0, ?kind, x, y, gold = self.economy.gold, "tower placed");
        self.events.push(SimEvent::TowerPlaced {
            tower: id,
            kind,
            position: at,
        });
        Ok(id)
    }

    pub fn cancel_placement(&mut self) {
        self.pending_placement = None;
    }

    /// Select the tower under `(x, y)`, or clear the selection on a miss.
    pub fn select_tower_at(&mut self, x: f64, y: f64) -> Option<TowerId> {
        let towers = placement::tower_positions(&self.world);
        self.selected_tower = placement::tower_at(&towers, Position::new(x, y));
        self.selected_tower
    }

    pub fn can_place(&self, x: f64, y: f64) -> bool {
        let towers = placement::tower_positions(&self.world);
        placement::can_place(&self.config.path, &towers, Position::new(x, y))
    }

    /// Why a tower cannot go at `(x, y)`, if it cannot.
    pub fn check_placement(&self, x: f64, y: f64) -> Result<(), PlacementRejection> {
        let towers = placement::tower_positions(&self.world);
        placement::check_placement(&self.config.path, &towers, Position::new(x, y))
    }

    pub fn economy(&self) -> Economy {
        self.economy
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn wave_number(&self) -> u32 {
        self.director.wave_number
    }

    pub fn wave_phase(&self) -> WavePhase {
        self.director.phase
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pending_placement(&self) -> Option<TowerKind> {
        self.pending_placement
    }

    pub fn selected_tower(&self) -> Option<TowerId> {
        self.selected_tower
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Build the read-only view the host renders from.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.paused,
            self.game_over,
            &self.economy,
            &self.score,
            &self.director,
            &self.config.path,
            self.pending_placement,
            self.selected_tower,
        )
    }

    /// Spawn an enemy directly at a position (for tests needing a fixed layout).
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: rampart_core::enums::EnemyKind,
        at: Position,
    ) -> Entity {
        let id = self.serials.next_enemy();
        let entity = world_setup::spawn_enemy(&mut self.world, &self.config.path, id, kind);
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            *pos = at;
        }
        entity
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command, reporting refusals as events.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result = match command {
            PlayerCommand::StartWave => {
                self.start_wave();
                Ok(())
            }
            PlayerCommand::RequestPlacement { kind } => self.request_placement(kind),
            PlayerCommand::ConfirmPlacement { x, y } => self.confirm_placement(x, y).map(|_| ()),
            PlayerCommand::CancelPlacement => {
                self.cancel_placement();
                Ok(())
            }
            PlayerCommand::SelectTowerAt { x, y } => {
                self.select_tower_at(x, y);
                Ok(())
            }
            PlayerCommand::SetPaused { paused } => {
                self.set_paused(paused);
                Ok(())
            }
            PlayerCommand::Restart => {
                self.restart();
                Ok(())
            }
        };

        if let Err(error) = result {
            debug!(%error, "command rejected");
            self.events.push(SimEvent::CommandRejected { error });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        // 1. Clock
        self.time.advance(dt_ms);
        // 2. Wave spawning
        systems::wave_director::spawn_due(
            &mut self.world,
            &mut self.director,
            &self.config.path,
            &mut self.serials,
            &mut self.events,
            dt_ms,
        );
        // 3. Enemy motion and leaks
        systems::movement::run(
            &mut self.world,
            &self.config.path,
            &mut self.economy,
            &mut self.score,
            &mut self.events,
        );
        if self.economy.is_depleted() {
            self.game_over = true;
            let wave = self.director.wave_number;
            info!(wave, health = self.economy.health, "game over");
            self.events.push(SimEvent::GameOver { wave });
            return;
        }
        // 4. Fire control
        systems::fire_control::run(
            &mut self.world,
            &mut self.serials,
            &mut self.score,
            &mut self.events,
            self.time.elapsed_ms,
        );
        // 5. Projectile resolution
        systems::intercept::run(
            &mut self.world,
            &mut self.economy,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Stale target handles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Wave completion
        systems::wave_director::check_complete(
            &self.world,
            &mut self.director,
            &mut self.economy,
            &mut self.events,
        );
    }
}
