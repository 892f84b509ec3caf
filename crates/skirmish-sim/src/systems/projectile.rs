//! Projectile system: flight, enemy hits, scoring, and range cleanup.
//!
//! Projectiles are processed in ascending id order. Each one is checked
//! against the live enemies newest-first and resolves against the first enemy
//! inside the hit radius, not the nearest. Spent projectiles are collected
//! into the despawn buffer and removed after the whole pass.

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::{Enemy, Projectile, Trail};
use skirmish_core::constants::{PROJECTILE_HIT_RADIUS, PROJECTILE_MAX_RANGE, TRAIL_LENGTH_SECS};
use skirmish_core::enums::ProjectileFate;
use skirmish_core::events::GameEvent;
use skirmish_core::types::{Position, Velocity};

use crate::round::ScoreSink;
use crate::systems::enemy::{self, EnemySpawner};
use crate::world_setup;

/// Outcome counts for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    pub hits: u32,
    pub out_of_range: u32,
}

/// Fire one projectile from a camera at `origin` with `orientation`.
pub fn fire(
    world: &mut World,
    projectile_id: u32,
    origin: Vec3,
    orientation: Quat,
    tick: u64,
    events: &mut Vec<GameEvent>,
) -> Entity {
    let (entity, position) =
        world_setup::spawn_projectile(world, projectile_id, origin, orientation, tick);
    events.push(GameEvent::ProjectileFired {
        projectile_id,
        position,
    });
    debug!(projectile_id, "projectile fired");
    entity
}

/// Advance all projectiles by `dt` and resolve hits.
///
/// A hit removes the enemy immediately, awards one point through `score`,
/// and asks `spawner` for one replacement, which later projectiles in the
/// same pass can already hit.
pub fn run(
    world: &mut World,
    dt: f32,
    spawner: &mut EnemySpawner,
    rng: &mut ChaCha8Rng,
    score: &mut dyn ScoreSink,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> ProjectileReport {
    despawn_buffer.clear();
    let mut report = ProjectileReport::default();

    let mut shots: Vec<(u32, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, p)| (p.id, entity))
        .collect();
    shots.sort_unstable_by_key(|&(id, _)| id);

    let mut targets: Vec<(u32, Entity, Vec3)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (e, pos))| (e.id, entity, pos.0))
        .collect();
    targets.sort_unstable_by_key(|&(id, _, _)| id);

    for (projectile_id, entity) in shots {
        let position = match world.query_one_mut::<(&mut Position, &Velocity, &mut Trail)>(entity)
        {
            Ok((pos, vel, trail)) => {
                pos.0 += vel.0 * dt;
                trail.head = pos.0;
                trail.tail = pos.0 - vel.0 * TRAIL_LENGTH_SECS;
                pos.0
            }
            Err(_) => continue,
        };

        let hit = targets
            .iter()
            .rposition(|&(_, _, enemy_pos)| position.distance(enemy_pos) < PROJECTILE_HIT_RADIUS);

        if let Some(index) = hit {
            let (enemy_id, enemy_entity, _) = targets.remove(index);
            enemy::remove(world, enemy_entity, events);
            despawn_buffer.push(entity);
            events.push(GameEvent::ProjectileHit {
                projectile_id,
                enemy_id,
            });
            events.push(GameEvent::ProjectileRemoved {
                projectile_id,
                fate: ProjectileFate::Hit,
            });
            score.award_point();
            report.hits += 1;
            debug!(projectile_id, enemy_id, "projectile hit");

            for spawned in spawner.spawn(world, rng, 1, events) {
                let fresh = world
                    .query_one_mut::<(&Enemy, &Position)>(spawned)
                    .map(|(e, pos)| (e.id, spawned, pos.0));
                if let Ok(target) = fresh {
                    targets.push(target);
                }
            }
            continue;
        }

        if Position(position).distance_from_origin() > PROJECTILE_MAX_RANGE {
            despawn_buffer.push(entity);
            events.push(GameEvent::ProjectileRemoved {
                projectile_id,
                fate: ProjectileFate::OutOfRange,
            });
            report.out_of_range += 1;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    report
}

/// Number of live projectiles.
pub fn live_count(world: &World) -> usize {
    world.query::<&Projectile>().iter().count()
}
