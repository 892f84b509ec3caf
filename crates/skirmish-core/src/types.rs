//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position (y is up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity (units/second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Simulated seconds, i.e. `tick * dt`. Not wall-clock time.
    pub elapsed_secs: f64,
}

impl Position {
    /// Offset to `target` projected onto the horizontal plane.
    pub fn horizontal_offset_to(&self, target: Vec3) -> Vec3 {
        let mut d = target - self.0;
        d.y = 0.0;
        d
    }

    /// Distance from the world origin.
    pub fn distance_from_origin(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Yaw (radians, about +y) that turns a -z forward axis toward `dir`.
/// Returns `None` for a zero-length direction.
pub fn yaw_toward(dir: Vec3) -> Option<f32> {
    if dir.x == 0.0 && dir.z == 0.0 {
        return None;
    }
    Some((-dir.x).atan2(-dir.z))
}
