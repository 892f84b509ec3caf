//! Simulation engine: the round controller.
//!
//! `SimulationEngine` owns the hecs ECS world, the round clock, and the
//! player rig. It processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless: the host passes wall-clock
//! milliseconds into every time-aware call, so tests drive time directly.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::{debug, info, warn};

use skirmish_core::commands::{MoveState, PlayerCommand};
use skirmish_core::components::{EnemyTemplate, PlayerMotion};
use skirmish_core::constants::{DT, INITIAL_ENEMY_COUNT, ROUND_DURATION_SECS};
use skirmish_core::enums::RoundPhase;
use skirmish_core::events::GameEvent;
use skirmish_core::state::{format_score, format_time, GameStateSnapshot};
use skirmish_core::types::SimTime;

use crate::camera::FirstPersonCamera;
use crate::error::SimError;
use crate::host::{CameraControls, Hud};
use crate::round::{Round, ScoreSink};
use crate::systems;
use crate::systems::enemy::EnemySpawner;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub round_duration_secs: f64,
    /// Enemies spawned when the round starts.
    pub initial_enemies: usize,
    /// Seconds advanced per simulation step, independent of wall-clock jitter.
    pub fixed_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            round_duration_secs: ROUND_DURATION_SECS,
            initial_enemies: INITIAL_ENEMY_COUNT,
            fixed_dt: DT,
        }
    }
}

/// Routes points from the projectile pass into the round and the scoreboard.
struct Scorekeeper<'a> {
    round: &'a mut Round,
    hud: Option<&'a mut Box<dyn Hud + Send>>,
}

impl ScoreSink for Scorekeeper<'_> {
    fn award_point(&mut self) {
        let score = self.round.add_score();
        if let Some(hud) = self.hud.as_mut() {
            hud.show_score(&format_score(score));
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    round: Round,
    camera: FirstPersonCamera,
    motion: PlayerMotion,
    move_state: Option<MoveState>,
    spawner: EnemySpawner,
    weapon_ready: bool,
    rng: ChaCha8Rng,
    next_projectile_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    hud: Option<Box<dyn Hud + Send>>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Assets start
    /// unloaded; the host reports them through `set_enemy_template` and
    /// `set_weapon_ready`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            round: Round::new(config.round_duration_secs),
            camera: FirstPersonCamera::default(),
            motion: PlayerMotion::default(),
            move_state: Some(MoveState::default()),
            spawner: EnemySpawner::default(),
            weapon_ready: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            hud: None,
            config,
        }
    }

    // --- Host wiring ---

    /// Asset loader callback for the enemy model. `None` marks it unloaded.
    pub fn set_enemy_template(&mut self, template: Option<EnemyTemplate>) {
        debug!(loaded = template.is_some(), "enemy template updated");
        self.spawner.set_template(template);
    }

    /// Asset loader callback for the weapon model.
    pub fn set_weapon_ready(&mut self, ready: bool) {
        self.weapon_ready = ready;
    }

    pub fn set_hud(&mut self, hud: Option<Box<dyn Hud + Send>>) {
        self.hud = hud;
    }

    /// Attach or detach movement input.
    pub fn set_move_state(&mut self, move_state: Option<MoveState>) {
        self.move_state = move_state;
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    // --- Round lifecycle ---

    /// Start the round: spawn the initial wave and capture the pointer.
    /// Refused, with nothing changed, until the enemy template has loaded.
    pub fn start(&mut self, now_ms: f64) -> Result<(), SimError> {
        if let Err(err) = self.round.start(now_ms, self.spawner.is_ready()) {
            warn!(%err, "round start refused");
            return Err(err);
        }

        self.spawner.spawn(
            &mut self.world,
            &mut self.rng,
            self.config.initial_enemies,
            &mut self.events,
        );
        self.camera.lock();

        let duration_secs = self.round.duration_secs();
        if let Some(hud) = self.hud.as_mut() {
            hud.show_score(&format_score(0));
            hud.show_time(&format_time(duration_secs));
        }
        self.events.push(GameEvent::RoundStarted { duration_secs });
        info!(
            duration_secs,
            enemies = systems::enemy::live_count(&self.world),
            "round started"
        );
        Ok(())
    }

    /// Pause if running, resume if paused. Pausing releases the pointer.
    pub fn toggle_pause(&mut self, now_ms: f64) {
        let Some(paused) = self.round.toggle_pause(now_ms) else {
            debug!(phase = ?self.round.phase(), "pause ignored");
            return;
        };

        if paused {
            self.camera.unlock();
            self.events.push(GameEvent::RoundPaused);
            info!(elapsed_secs = self.round.elapsed_secs(now_ms), "round paused");
        } else {
            self.camera.lock();
            self.events.push(GameEvent::RoundResumed);
            info!(
                paused_ms = self.round.accumulated_pause_ms(),
                "round resumed"
            );
        }
        if let Some(hud) = self.hud.as_mut() {
            hud.show_paused(paused);
        }
    }

    /// Resume only. Ignored unless paused.
    pub fn resume(&mut self, now_ms: f64) {
        if self.round.is_paused() {
            self.toggle_pause(now_ms);
        }
    }

    /// Abort the round. Entities stay where they are.
    pub fn stop(&mut self) {
        if self.round.is_paused() {
            if let Some(hud) = self.hud.as_mut() {
                hud.show_paused(false);
            }
        }
        self.round.stop();
        self.camera.unlock();
        self.events.push(GameEvent::RoundStopped);
        info!("round stopped");
    }

    /// Discard everything and return to a fresh idle round. Loaded assets
    /// and the RNG stream carry over.
    pub fn restart(&mut self) {
        self.world.clear();
        self.round = Round::new(self.config.round_duration_secs);
        self.time = SimTime::default();
        self.camera = FirstPersonCamera::default();
        self.motion = PlayerMotion::default();
        self.spawner = EnemySpawner::new(self.spawner.template().copied());
        self.next_projectile_id = 0;
        self.events.push(GameEvent::RoundReset);
        if let Some(hud) = self.hud.as_mut() {
            hud.show_paused(false);
            hud.show_score(&format_score(0));
            hud.show_time(&format_time(self.config.round_duration_secs));
        }
        info!("round reset");
    }

    /// Fire one projectile from the camera. Returns its id, or `None` when
    /// the round is not live or the weapon has not loaded.
    pub fn shoot(&mut self) -> Option<u32> {
        if self.round.phase() != RoundPhase::Running {
            debug!(phase = ?self.round.phase(), "shot ignored");
            return None;
        }
        if !self.weapon_ready {
            debug!("shot ignored, weapon not loaded");
            return None;
        }

        let projectile_id = self.next_projectile_id;
        self.next_projectile_id += 1;
        systems::projectile::fire(
            &mut self.world,
            projectile_id,
            self.camera.position(),
            self.camera.orientation(),
            self.time.tick,
            &mut self.events,
        );
        Some(projectile_id)
    }

    // --- Frame ---

    /// Drain queued commands, advance one fixed step if the round is
    /// running, and return the resulting snapshot.
    pub fn tick(&mut self, now_ms: f64) -> GameStateSnapshot {
        self.process_commands(now_ms);

        if let Some(clock) = self.round.tick(now_ms) {
            if let Some(hud) = self.hud.as_mut() {
                hud.show_time(&format_time(clock.remaining_secs));
            }

            self.run_systems();
            self.time.advance(self.config.fixed_dt);

            if clock.expired {
                self.finish_round();
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.round,
            now_ms,
            &self.camera,
            &self.motion,
            events,
        )
    }

    // --- Accessors ---

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    pub fn motion(&self) -> &PlayerMotion {
        &self.motion
    }

    /// Get a mutable reference to the ECS world (for tests placing entities).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now_ms: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now_ms);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, now_ms: f64) {
        match command {
            PlayerCommand::StartRound => {
                // Refusal is logged inside `start`; the player simply retries.
                let _ = self.start(now_ms);
            }
            PlayerCommand::TogglePause => self.toggle_pause(now_ms),
            PlayerCommand::Resume => self.resume(now_ms),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::Shoot => {
                self.shoot();
            }
            PlayerCommand::SetMovement { state } => self.set_move_state(state),
            PlayerCommand::Look {
                yaw_delta,
                pitch_delta,
            } => self.camera.look(yaw_delta, pitch_delta),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.config.fixed_dt;

        // 1. Player movement
        systems::player_movement::run(
            &mut self.motion,
            &mut self.camera,
            self.move_state.as_ref(),
            dt,
        );
        // 2. Enemy pursuit
        systems::enemy::run(&mut self.world, self.camera.position(), dt);
        // 3. Projectiles (advance, collide, score, replace)
        let mut scorekeeper = Scorekeeper {
            round: &mut self.round,
            hud: self.hud.as_mut(),
        };
        let report = systems::projectile::run(
            &mut self.world,
            dt,
            &mut self.spawner,
            &mut self.rng,
            &mut scorekeeper,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if report.hits > 0 {
            debug!(
                hits = report.hits,
                score = self.round.score(),
                tick = self.time.tick,
                "enemies destroyed"
            );
        }
    }

    /// Countdown expired: release the pointer and announce the result once.
    fn finish_round(&mut self) {
        let final_score = self.round.score();
        self.camera.unlock();
        if let Some(hud) = self.hud.as_mut() {
            hud.round_over(final_score);
        }
        self.events.push(GameEvent::RoundOver { final_score });
        info!(final_score, tick = self.time.tick, "round over");
    }
}
