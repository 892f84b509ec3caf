//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub round: RoundView,
    pub player: PlayerView,
    /// Ordered by enemy id.
    pub enemies: Vec<EnemyView>,
    /// Ordered by projectile id.
    pub projectiles: Vec<ProjectileView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Round clock and score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub score: u32,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
    /// Clamped to zero.
    pub remaining_secs: f64,
}

/// Camera/player state for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub velocity: Vec2,
    /// Whether the pointer/camera is engaged.
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub position: Vec3,
    pub yaw: f32,
    pub health: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_id: u32,
    /// Tick the shot was fired on.
    pub spawn_tick: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub trail_head: Vec3,
    pub trail_tail: Vec3,
}

/// Scoreboard text.
pub fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}

/// Countdown text. Negative remaining time displays as zero.
pub fn format_time(remaining_secs: f64) -> String {
    format!("Time: {:.1}s", remaining_secs.max(0.0))
}
