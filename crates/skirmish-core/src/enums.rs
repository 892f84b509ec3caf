//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single timed round.
///
/// `Ended` (timeout) and `Stopped` (explicit reset) are terminal; a new
/// round is needed to play again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Created but not started.
    #[default]
    Idle,
    /// Clock running, simulation stepping.
    Running,
    /// Clock frozen, simulation not stepping.
    Paused,
    /// Countdown reached zero.
    Ended,
    /// Reset by the host.
    Stopped,
}

impl RoundPhase {
    /// True while a round is in progress, paused or not.
    pub fn is_running(self) -> bool {
        matches!(self, RoundPhase::Running | RoundPhase::Paused)
    }

    /// True for phases no transition leaves (other than `stop`).
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Ended | RoundPhase::Stopped)
    }
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileFate {
    /// Consumed by hitting an enemy.
    Hit,
    /// Flew past the maximum range.
    OutOfRange,
}
