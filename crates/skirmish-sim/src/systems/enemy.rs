//! Enemy system: spawning, pursuit of the player, and removal.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::{Enemy, EnemyTemplate, Facing};
use skirmish_core::constants::{ENEMY_SPEED, ENEMY_STOP_DISTANCE};
use skirmish_core::events::GameEvent;
use skirmish_core::types::{yaw_toward, Position};

use crate::world_setup;

/// Hands out enemy ids and clones the loaded template.
#[derive(Debug, Clone, Default)]
pub struct EnemySpawner {
    template: Option<EnemyTemplate>,
    next_id: u32,
}

impl EnemySpawner {
    pub fn new(template: Option<EnemyTemplate>) -> Self {
        Self {
            template,
            next_id: 0,
        }
    }

    pub fn template(&self) -> Option<&EnemyTemplate> {
        self.template.as_ref()
    }

    pub fn set_template(&mut self, template: Option<EnemyTemplate>) {
        self.template = template;
    }

    pub fn is_ready(&self) -> bool {
        self.template.is_some()
    }

    /// Spawn `count` enemies at random arena positions. Spawns nothing,
    /// without error, while the template is missing.
    pub fn spawn(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        count: usize,
        events: &mut Vec<GameEvent>,
    ) -> Vec<Entity> {
        let Some(template) = self.template else {
            debug!(count, "enemy spawn skipped, template not loaded");
            return Vec::new();
        };

        let mut spawned = Vec::with_capacity(count);
        for _ in 0..count {
            let enemy_id = self.next_id;
            self.next_id += 1;
            let position = world_setup::random_arena_position(rng, &template);
            spawned.push(world_setup::spawn_enemy_at(world, enemy_id, position));
            events.push(GameEvent::EnemySpawned { enemy_id, position });
            debug!(enemy_id, x = position.x, z = position.z, "enemy spawned");
        }
        spawned
    }
}

/// Move every enemy toward the player on the horizontal plane and turn it
/// to face the player. Enemies within the stop distance hold position.
pub fn run(world: &mut World, player_position: Vec3, dt: f32) {
    for (_entity, (_enemy, pos, facing)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Facing)>()
    {
        let dir = pos.horizontal_offset_to(player_position);
        if dir.length() > ENEMY_STOP_DISTANCE {
            pos.0 += dir.normalize() * (dt * ENEMY_SPEED);
        }
        if let Some(yaw) = yaw_toward(pos.horizontal_offset_to(player_position)) {
            facing.yaw = yaw;
        }
    }
}

/// Remove an enemy. Returns false if it was already gone.
pub fn remove(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) -> bool {
    let enemy_id = match world.get::<&Enemy>(entity) {
        Ok(enemy) => enemy.id,
        Err(_) => return false,
    };
    if world.despawn(entity).is_err() {
        return false;
    }
    events.push(GameEvent::EnemyDestroyed { enemy_id });
    true
}

/// Number of live enemies.
pub fn live_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use skirmish_core::constants::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn enemy_position(world: &World, entity: Entity) -> Vec3 {
        world.get::<&Position>(entity).unwrap().0
    }

    #[test]
    fn test_spawn_five_within_bounds() {
        let mut world = World::new();
        let mut events = Vec::new();
        let template = EnemyTemplate::new(2.0);
        let mut spawner = EnemySpawner::new(Some(template));

        let spawned = spawner.spawn(&mut world, &mut rng(), 5, &mut events);

        assert_eq!(spawned.len(), 5);
        assert_eq!(live_count(&world), 5);
        assert_eq!(events.len(), 5);
        for &e in &spawned {
            let p = enemy_position(&world, e);
            assert!(p.x >= ARENA_X_MIN && p.x < ARENA_X_MAX, "x out of bounds: {}", p.x);
            assert!(p.z >= ARENA_Z_MIN && p.z < ARENA_Z_MAX, "z out of bounds: {}", p.z);
            assert!((p.y - template.ground_offset()).abs() < 1e-6);
            assert_eq!(world.get::<&Enemy>(e).unwrap().health, ENEMY_MAX_HEALTH);
        }
    }

    #[test]
    fn test_spawn_without_template_is_silent() {
        let mut world = World::new();
        let mut events = Vec::new();
        let mut spawner = EnemySpawner::default();

        let spawned = spawner.spawn(&mut world, &mut rng(), 5, &mut events);

        assert!(spawned.is_empty());
        assert_eq!(live_count(&world), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_spawn_ids_ascend_in_insertion_order() {
        let mut world = World::new();
        let mut events = Vec::new();
        let mut spawner = EnemySpawner::new(Some(EnemyTemplate::new(1.0)));
        let mut rng = rng();

        let a = spawner.spawn(&mut world, &mut rng, 3, &mut events);
        let b = spawner.spawn(&mut world, &mut rng, 2, &mut events);
        let ids: Vec<u32> = a
            .iter()
            .chain(b.iter())
            .map(|&e| world.get::<&Enemy>(e).unwrap().id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pursuit_moves_horizontally_at_speed() {
        let mut world = World::new();
        let e = world_setup::spawn_enemy_at(&mut world, 0, Vec3::new(0.0, 0.5, -10.0));
        let player = Vec3::new(0.0, 1.6, 0.0);

        run(&mut world, player, 1.0);

        let p = enemy_position(&world, e);
        assert!((p.z - (-10.0 + ENEMY_SPEED)).abs() < 1e-5);
        assert_eq!(p.y, 0.5);
        assert_eq!(p.x, 0.0);
        // Player is behind the default -z heading: half turn.
        let yaw = world.get::<&Facing>(e).unwrap().yaw;
        assert!((yaw.abs() - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_pursuit_holds_within_stop_distance() {
        let mut world = World::new();
        let start = Vec3::new(0.5, 0.5, 0.5);
        let e = world_setup::spawn_enemy_at(&mut world, 0, start);

        run(&mut world, Vec3::new(0.0, 1.6, 0.0), 1.0);

        assert_eq!(enemy_position(&world, e), start);
        // Still turns toward the player.
        let yaw = world.get::<&Facing>(e).unwrap().yaw;
        let forward = glam::Quat::from_rotation_y(yaw) * Vec3::NEG_Z;
        assert!((forward - Vec3::new(-1.0, 0.0, -1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut world = World::new();
        let mut events = Vec::new();
        let e = world_setup::spawn_enemy_at(&mut world, 4, Vec3::ZERO);

        assert!(remove(&mut world, e, &mut events));
        assert!(!remove(&mut world, e, &mut events));
        assert_eq!(live_count(&world), 0);
        assert_eq!(events, vec![GameEvent::EnemyDestroyed { enemy_id: 4 }]);
    }
}
