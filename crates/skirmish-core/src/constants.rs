//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick. The simulation always advances by this step,
/// regardless of how long the host frame actually took.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Round ---

/// Default round length in seconds.
pub const ROUND_DURATION_SECS: f64 = 60.0;

/// Enemies spawned when a round starts.
pub const INITIAL_ENEMY_COUNT: usize = 10;

// --- Arena ---

/// Spawn area bounds on the horizontal plane (half-open ranges).
pub const ARENA_X_MIN: f32 = -10.0;
pub const ARENA_X_MAX: f32 = 10.0;
pub const ARENA_Z_MIN: f32 = -20.0;
pub const ARENA_Z_MAX: f32 = 0.0;

// --- Enemies ---

/// Pursuit speed (units/second).
pub const ENEMY_SPEED: f32 = 1.5;

/// Enemies closer than this to the player (horizontally) hold position.
pub const ENEMY_STOP_DISTANCE: f32 = 1.0;

/// Health assigned at spawn. A single hit kills regardless.
pub const ENEMY_MAX_HEALTH: f32 = 100.0;

/// Uniform scale applied to the enemy model when it is cloned.
pub const ENEMY_MODEL_SCALE: f32 = 0.5;

// --- Projectiles ---

/// Projectile speed (units/second).
pub const PROJECTILE_SPEED: f32 = 50.0;

/// Spawn point relative to the camera, in camera space.
pub const MUZZLE_OFFSET: Vec3 = Vec3::new(0.0, -0.1, -0.5);

/// Projectile-enemy hit distance (strict less-than).
pub const PROJECTILE_HIT_RADIUS: f32 = 0.7;

/// Projectiles farther than this from the world origin are dropped.
pub const PROJECTILE_MAX_RANGE: f32 = 100.0;

/// Trail length expressed as seconds of travel behind the projectile.
pub const TRAIL_LENGTH_SECS: f32 = 0.1;

// --- Player ---

/// Walk speed (units/second).
pub const PLAYER_SPEED: f32 = 5.0;

/// Velocity multiplier applied once per tick.
pub const PLAYER_FRICTION: f32 = 0.9;

/// Neutral camera height.
pub const EYE_HEIGHT: f32 = 1.6;

/// Camera position at round start.
pub const PLAYER_START: Vec3 = Vec3::new(0.0, EYE_HEIGHT, 5.0);

/// View-bob amplitude (units).
pub const BOB_AMPLITUDE: f32 = 0.02;

/// View-bob phase advance per second of movement.
pub const BOB_RATE: f32 = 10.0;

/// Pitch limit for mouse look (radians, ~89 degrees).
pub const MAX_PITCH: f32 = 1.553;
