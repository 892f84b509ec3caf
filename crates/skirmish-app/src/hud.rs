//! Headless HUD that writes the scoreboard through `tracing`.

use std::sync::{Arc, Mutex};

use tracing::{info, trace};

use skirmish_sim::host::Hud;

/// Logs score changes, pause overlays, and the round result. Clones share
/// the recorded final score, so the host can keep one after boxing another
/// into the engine.
#[derive(Debug, Clone, Default)]
pub struct LogHud {
    final_score: Arc<Mutex<Option<u32>>>,
    last_time: String,
}

impl LogHud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score passed to `round_over`, once the round has ended.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score.lock().ok().and_then(|score| *score)
    }
}

impl Hud for LogHud {
    fn show_score(&mut self, text: &str) {
        info!(target: "skirmish::hud", "{text}");
    }

    fn show_time(&mut self, text: &str) {
        // Called every tick; only the tenth-of-a-second changes are worth a line.
        if self.last_time != text {
            trace!(target: "skirmish::hud", "{text}");
            self.last_time = text.to_string();
        }
    }

    fn show_paused(&mut self, paused: bool) {
        info!(target: "skirmish::hud", paused, "pause overlay");
    }

    fn round_over(&mut self, final_score: u32) {
        info!(target: "skirmish::hud", final_score, "Game Over! Your score: {final_score}");
        if let Ok(mut slot) = self.final_score.lock() {
            *slot = Some(final_score);
        }
    }
}
