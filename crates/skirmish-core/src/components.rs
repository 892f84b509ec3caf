//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Marks an entity as a live enemy. Existing in the world means alive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Monotonic id; higher ids were spawned later.
    pub id: u32,
    pub health: f32,
}

/// Horizontal heading of an entity (radians about +y, 0 = facing -z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f32,
}

/// Marks an entity as an in-flight projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Monotonic id; processing order within a tick.
    pub id: u32,
    /// Simulation tick at which it was fired.
    pub spawn_tick: u64,
}

/// Streak drawn behind a projectile. Purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub head: Vec3,
    pub tail: Vec3,
}

/// Loaded enemy prototype every spawn is cloned from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Model-space bounding box height.
    pub bounding_height: f32,
    /// Scale applied to each clone.
    #[serde(default = "default_model_scale")]
    pub scale: f32,
}

fn default_model_scale() -> f32 {
    crate::constants::ENEMY_MODEL_SCALE
}

impl EnemyTemplate {
    pub fn new(bounding_height: f32) -> Self {
        Self {
            bounding_height,
            scale: default_model_scale(),
        }
    }

    /// Height at which a clone's center sits so its base touches the floor.
    pub fn ground_offset(&self) -> f32 {
        self.bounding_height * self.scale / 2.0
    }
}

/// Player inertia and head-bob state, persistent across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMotion {
    /// Accumulated (strafe, forward) velocity.
    pub velocity: Vec2,
    /// View-bob phase accumulator.
    pub bob_phase: f32,
}
