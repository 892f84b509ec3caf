//! Events emitted by the simulation for the scene host and UI.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileFate;

/// Something the render host must mirror (add/remove a representation)
/// or the UI should react to. Drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RoundStarted { duration_secs: f64 },
    RoundPaused,
    RoundResumed,
    /// Countdown expired.
    RoundOver { final_score: u32 },
    RoundStopped,
    /// The world was cleared for a fresh idle round; drop every representation.
    RoundReset,
    EnemySpawned { enemy_id: u32, position: Vec3 },
    EnemyDestroyed { enemy_id: u32 },
    ProjectileFired { projectile_id: u32, position: Vec3 },
    /// A projectile consumed an enemy.
    ProjectileHit { projectile_id: u32, enemy_id: u32 },
    ProjectileRemoved { projectile_id: u32, fate: ProjectileFate },
}
