//! Demo pilot for headless runs: turns toward the nearest enemy, fires on a
//! fixed cadence, and strafes back and forth.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use skirmish_core::commands::{MoveState, PlayerCommand};
use skirmish_core::enums::RoundPhase;
use skirmish_core::state::{EnemyView, GameStateSnapshot};
use skirmish_core::types::yaw_toward;

#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_interval_ticks: u64,
    strafe_interval_ticks: u64,
    last_seen_tick: Option<u64>,
    last_shot_tick: Option<u64>,
    strafe_right: Option<bool>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(15, 120)
    }
}

impl Autopilot {
    pub fn new(fire_interval_ticks: u64, strafe_interval_ticks: u64) -> Self {
        Self {
            fire_interval_ticks,
            strafe_interval_ticks: strafe_interval_ticks.max(1),
            last_seen_tick: None,
            last_shot_tick: None,
            strafe_right: None,
        }
    }

    /// Commands for the next tick. Each snapshot tick is answered once;
    /// nothing is planned unless the round is live and the pointer captured.
    pub fn plan(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let tick = snapshot.time.tick;
        if snapshot.round.phase != RoundPhase::Running
            || !snapshot.player.locked
            || self.last_seen_tick == Some(tick)
        {
            return Vec::new();
        }
        self.last_seen_tick = Some(tick);

        let mut commands = Vec::new();

        let strafe_right = (tick / self.strafe_interval_ticks) % 2 == 0;
        if self.strafe_right != Some(strafe_right) {
            self.strafe_right = Some(strafe_right);
            commands.push(PlayerCommand::SetMovement {
                state: Some(MoveState {
                    left: !strafe_right,
                    right: strafe_right,
                    ..Default::default()
                }),
            });
        }

        let player = &snapshot.player;
        let Some(target) = nearest_enemy(snapshot) else {
            return commands;
        };
        let offset = target.position - player.position;
        let Some(yaw) = yaw_toward(offset) else {
            return commands;
        };
        let pitch = offset.y.atan2(Vec2::new(offset.x, offset.z).length());
        commands.push(PlayerCommand::Look {
            yaw_delta: wrap_angle(yaw - player.yaw),
            pitch_delta: pitch - player.pitch,
        });

        let reloaded = self
            .last_shot_tick
            .map_or(true, |last| tick >= last + self.fire_interval_ticks);
        if reloaded {
            commands.push(PlayerCommand::Shoot);
            self.last_shot_tick = Some(tick);
        }
        commands
    }
}

fn nearest_enemy(snapshot: &GameStateSnapshot) -> Option<&EnemyView> {
    let from = snapshot.player.position;
    snapshot.enemies.iter().min_by(|a, b| {
        a.position
            .distance_squared(from)
            .total_cmp(&b.position.distance_squared(from))
    })
}

/// Map an angle into `[-PI, PI)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
