//! Simulation constants and tuning parameters.

// --- Player ---

/// Player health at the start of a game.
pub const STARTING_HEALTH: i32 = 100;

/// Gold at the start of a game.
pub const STARTING_GOLD: u32 = 500;

// --- Waves ---

/// Enemies in a wave = WAVE_BASE_SIZE + WAVE_SIZE_GROWTH * wave_number.
pub const WAVE_BASE_SIZE: u32 = 5;

pub const WAVE_SIZE_GROWTH: u32 = 3;

/// The last spawn of every wave whose number is a multiple of this is a boss.
pub const BOSS_WAVE_PERIOD: u32 = 3;

/// Delay between consecutive spawns within a wave (milliseconds).
pub const SPAWN_INTERVAL_MS: f64 = 2000.0;

/// Wave clear bonus = WAVE_BONUS_BASE + WAVE_BONUS_GROWTH * new_wave_number.
pub const WAVE_BONUS_BASE: u32 = 100;

pub const WAVE_BONUS_GROWTH: u32 = 20;

// --- Projectiles ---

/// Distance a projectile travels per tick.
pub const PROJECTILE_SPEED: f64 = 5.0;

// --- Placement ---

/// Towers may not be placed closer than this to any path waypoint.
pub const PATH_CLEARANCE: f64 = 50.0;

/// Minimum distance between two tower centers.
pub const TOWER_SPACING: f64 = 60.0;

/// Hit-test radius when selecting an existing tower.
pub const TOWER_SELECT_RADIUS: f64 = 20.0;
