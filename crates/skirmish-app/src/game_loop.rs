//! Game loop thread: runs the simulation engine at a fixed rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling. Wall-clock milliseconds for the round timer come from a
//! monotonic `Instant` taken when the loop starts.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::GameStateSnapshot;
use skirmish_sim::host::Hud;
use skirmish_sim::SimulationEngine;

use crate::config::{AppConfig, AppError};
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Handle to a running game loop thread.
pub struct GameLoop {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: JoinHandle<()>,
}

impl GameLoop {
    pub fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        self.command_tx
            .send(command)
            .map_err(|_| AppError::LoopClosed)
    }

    /// Forward a player command to the simulation.
    pub fn send_player(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::Player(command))
    }

    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.latest()
    }

    /// Whether the loop thread has exited, for any reason.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Poll snapshots every `poll` until the round reaches a terminal phase,
    /// handing each live one to `on_snapshot`. Fails with `LoopClosed` if
    /// the thread exits before the round does.
    pub fn run_until_round_end(
        &self,
        poll: Duration,
        mut on_snapshot: impl FnMut(&GameStateSnapshot) -> Result<(), AppError>,
    ) -> Result<(), AppError> {
        loop {
            std::thread::sleep(poll);
            if let Some(snapshot) = self.latest_snapshot() {
                if snapshot.round.phase.is_terminal() {
                    return Ok(());
                }
                on_snapshot(&snapshot)?;
            }
            if self.is_finished() {
                return Err(AppError::LoopClosed);
            }
        }
    }

    /// Ask the loop to stop and wait for the thread to exit.
    pub fn shutdown(self) -> Result<(), AppError> {
        // A closed channel means the loop already exited; join either way.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: &AppConfig,
    hud: Option<Box<dyn Hud + Send>>,
) -> Result<GameLoop, AppError> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = SharedSnapshot::new();

    let sim_config = config.sim.clone();
    let tick_duration = config.tick_duration();
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(sim_config);
            engine.set_hud(hud);
            run_game_loop(engine, command_rx, &shared, tick_duration);
        })
        .map_err(AppError::Thread)?;

    Ok(GameLoop {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    tick_duration: Duration,
) {
    let epoch = Instant::now();
    let mut next_tick_time = epoch;
    info!(tick_ms = tick_duration.as_secs_f64() * 1000.0, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => engine.queue_command(command),
                Ok(GameLoopCommand::EnemyTemplateLoaded(template)) => {
                    engine.set_enemy_template(Some(template));
                }
                Ok(GameLoopCommand::WeaponLoaded) => engine.set_weapon_ready(true),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(ticks = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles round phases internally)
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.tick(now_ms);

        // 3. Store latest snapshot for polling
        latest_snapshot.store(snapshot);

        // 4. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset to avoid catch-up spiral
            debug!(behind_ms = (now - next_tick_time).as_millis() as u64, "tick deadline reset");
            next_tick_time = now;
        }
    }
}
