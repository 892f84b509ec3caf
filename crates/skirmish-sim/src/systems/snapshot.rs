//! Snapshot builder: reads the world and produces a `GameStateSnapshot`.

use hecs::World;

use skirmish_core::components::{Enemy, Facing, PlayerMotion, Projectile, Trail};
use skirmish_core::events::GameEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime, Velocity};

use crate::camera::FirstPersonCamera;
use crate::host::CameraControls;
use crate::round::Round;

/// Build a complete snapshot. Entity lists are ordered by id.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    round: &Round,
    now_ms: f64,
    camera: &FirstPersonCamera,
    motion: &PlayerMotion,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        round: build_round_view(round, now_ms),
        player: PlayerView {
            position: camera.position(),
            yaw: camera.yaw,
            pitch: camera.pitch,
            velocity: motion.velocity,
            locked: camera.is_locked(),
        },
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_round_view(round: &Round, now_ms: f64) -> RoundView {
    RoundView {
        phase: round.phase(),
        score: round.score(),
        duration_secs: round.duration_secs(),
        elapsed_secs: round.elapsed_secs(now_ms),
        remaining_secs: round.remaining_secs(now_ms).max(0.0),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Facing)>()
        .iter()
        .map(|(_entity, (enemy, pos, facing))| EnemyView {
            enemy_id: enemy.id,
            position: pos.0,
            yaw: facing.yaw,
            health: enemy.health,
        })
        .collect();
    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity, &Trail)>()
        .iter()
        .map(|(_entity, (p, pos, vel, trail))| ProjectileView {
            projectile_id: p.id,
            spawn_tick: p.spawn_tick,
            position: pos.0,
            velocity: vel.0,
            trail_head: trail.head,
            trail_tail: trail.tail,
        })
        .collect();
    projectiles.sort_by_key(|p| p.projectile_id);
    projectiles
}
