//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Held movement keys, written by input capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Round control ---
    /// Start the round (requires the enemy template).
    StartRound,
    /// Pause if running, resume if paused.
    TogglePause,
    /// Resume only; ignored unless paused.
    Resume,
    /// Discard the round and return to a fresh idle round.
    Restart,

    // --- Combat ---
    /// Fire one projectile from the camera.
    Shoot,

    // --- Input ---
    /// Replace the held movement keys. `None` detaches movement input.
    SetMovement { state: Option<MoveState> },
    /// Mouse look, radians.
    Look { yaw_delta: f32, pitch_delta: f32 },
}
