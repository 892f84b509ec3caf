//! Round state machine: wall-clock to game-time mapping, pause accounting, score.
//!
//! All times are host wall-clock milliseconds passed in by the caller, so the
//! machine itself never reads a clock.

use skirmish_core::enums::RoundPhase;

use crate::error::SimError;

/// Receives a point for every enemy a projectile consumes.
pub trait ScoreSink {
    fn award_point(&mut self);
}

/// Timing for one simulated tick of a running round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundClock {
    pub elapsed_secs: f64,
    /// May be negative on the tick that ends the round.
    pub remaining_secs: f64,
    /// True when this tick moved the round to `Ended`.
    pub expired: bool,
}

/// One timed play session.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    phase: RoundPhase,
    start_ms: f64,
    accumulated_pause_ms: f64,
    pause_started_ms: f64,
    ended_ms: f64,
    duration_secs: f64,
    score: u32,
}

impl Round {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            phase: RoundPhase::Idle,
            start_ms: 0.0,
            accumulated_pause_ms: 0.0,
            pause_started_ms: 0.0,
            ended_ms: 0.0,
            duration_secs,
            score: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.phase == RoundPhase::Paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Total wall-clock milliseconds spent in completed pauses.
    pub fn accumulated_pause_ms(&self) -> f64 {
        self.accumulated_pause_ms
    }

    /// Idle -> Running. Refused while the enemy template is missing.
    pub fn start(&mut self, now_ms: f64, template_ready: bool) -> Result<(), SimError> {
        if self.phase != RoundPhase::Idle {
            return Err(SimError::InvalidTransition {
                from: self.phase,
                action: "start",
            });
        }
        if !template_ready {
            return Err(SimError::EnemyTemplateNotLoaded);
        }
        self.start_ms = now_ms;
        self.phase = RoundPhase::Running;
        Ok(())
    }

    /// Running <-> Paused. Returns the new paused state, or `None` if the
    /// round is not in progress.
    pub fn toggle_pause(&mut self, now_ms: f64) -> Option<bool> {
        match self.phase {
            RoundPhase::Running => {
                self.phase = RoundPhase::Paused;
                self.pause_started_ms = now_ms;
                Some(true)
            }
            RoundPhase::Paused => {
                self.phase = RoundPhase::Running;
                self.accumulated_pause_ms += (now_ms - self.pause_started_ms).max(0.0);
                Some(false)
            }
            _ => None,
        }
    }

    /// Game seconds since start, excluding every paused interval
    /// (including one still in progress). Frozen once ended, zero before
    /// start and after stop.
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        let now_ms = match self.phase {
            RoundPhase::Running => now_ms,
            RoundPhase::Paused => self.pause_started_ms,
            RoundPhase::Ended => self.ended_ms,
            _ => return 0.0,
        };
        ((now_ms - self.start_ms - self.accumulated_pause_ms) / 1000.0).max(0.0)
    }

    /// Seconds left on the countdown. Unclamped.
    pub fn remaining_secs(&self, now_ms: f64) -> f64 {
        self.duration_secs - self.elapsed_secs(now_ms)
    }

    /// Advance the clock for one simulation step. `None` unless Running.
    /// When the countdown is exhausted the round moves to `Ended`; the caller
    /// still runs this final step before announcing the result.
    pub fn tick(&mut self, now_ms: f64) -> Option<RoundClock> {
        if self.phase != RoundPhase::Running {
            return None;
        }
        let elapsed_secs = self.elapsed_secs(now_ms);
        let remaining_secs = self.duration_secs - elapsed_secs;
        let expired = remaining_secs <= 0.0;
        if expired {
            self.phase = RoundPhase::Ended;
            self.ended_ms = now_ms;
        }
        Some(RoundClock {
            elapsed_secs,
            remaining_secs,
            expired,
        })
    }

    /// Reset every field and move to `Stopped`. Allowed from any phase.
    pub fn stop(&mut self) {
        *self = Self {
            phase: RoundPhase::Stopped,
            ..Self::new(self.duration_secs)
        };
    }

    /// Increment the score, returning the new total.
    pub fn add_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

impl ScoreSink for Round {
    fn award_point(&mut self) {
        self.add_score();
    }
}
