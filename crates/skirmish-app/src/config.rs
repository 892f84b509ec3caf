//! Application configuration and the errors the host binary can surface.
//!
//! Configuration is an optional JSON file; every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use skirmish_core::components::EnemyTemplate;
use skirmish_core::constants::TICK_RATE;
use skirmish_sim::SimConfig;

/// Host settings plus the simulation config they wrap.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Wall-clock pacing of the game loop thread.
    pub tick_rate_hz: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Let the built-in pilot aim, strafe, and fire.
    pub autopilot: bool,
    /// Stand-in for the loaded enemy model.
    pub enemy_template: EnemyTemplate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate_hz: TICK_RATE,
            log_filter: "info".to_string(),
            autopilot: true,
            enemy_template: EnemyTemplate::new(3.0),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Nominal duration of one loop iteration. A zero rate is treated as 1 Hz.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate_hz.max(1) as u64)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to spawn game loop thread: {0}")]
    Thread(#[source] std::io::Error),

    #[error("game loop is no longer running")]
    LoopClosed,

    #[error("game loop thread panicked")]
    LoopPanicked,
}
