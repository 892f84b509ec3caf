//! Entity spawn factories for the arena world.
//!
//! Creates enemy and projectile entities with their component bundles.

use glam::{Quat, Vec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::types::{Position, Velocity};

/// Random grounded spawn point inside the arena bounds.
pub fn random_arena_position(rng: &mut ChaCha8Rng, template: &EnemyTemplate) -> Vec3 {
    let x: f32 = rng.gen_range(ARENA_X_MIN..ARENA_X_MAX);
    let z: f32 = rng.gen_range(ARENA_Z_MIN..ARENA_Z_MAX);
    Vec3::new(x, template.ground_offset(), z)
}

/// Spawn one enemy at an explicit position with full health.
pub fn spawn_enemy_at(world: &mut World, enemy_id: u32, position: Vec3) -> hecs::Entity {
    world.spawn((
        Enemy {
            id: enemy_id,
            health: ENEMY_MAX_HEALTH,
        },
        Position(position),
        Facing::default(),
    ))
}

/// Spawn a projectile leaving the muzzle of a camera at `origin` looking
/// along `orientation`. Returns the entity and its muzzle position.
pub fn spawn_projectile(
    world: &mut World,
    projectile_id: u32,
    origin: Vec3,
    orientation: Quat,
    tick: u64,
) -> (hecs::Entity, Vec3) {
    let position = origin + orientation * MUZZLE_OFFSET;
    let velocity = (orientation * Vec3::NEG_Z) * PROJECTILE_SPEED;
    let entity = spawn_projectile_raw(world, projectile_id, position, velocity, tick);
    (entity, position)
}

/// Spawn a projectile with explicit kinematics.
pub fn spawn_projectile_raw(
    world: &mut World,
    projectile_id: u32,
    position: Vec3,
    velocity: Vec3,
    tick: u64,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            id: projectile_id,
            spawn_tick: tick,
        },
        Position(position),
        Velocity(velocity),
        Trail {
            head: position,
            tail: position,
        },
    ))
}
