//! Collaborators the simulation calls into but does not implement itself:
//! the camera/pointer-lock proxy and the on-screen HUD.

use glam::{Quat, Vec3};

/// Camera rig driven by the player. Mirrors a pointer-lock first-person control.
pub trait CameraControls {
    /// Whether the pointer is captured. Movement is ignored otherwise.
    fn is_locked(&self) -> bool;
    fn lock(&mut self);
    fn unlock(&mut self);
    /// Strafe along the camera's horizontal right axis.
    fn move_right(&mut self, distance: f32);
    /// Walk along the camera's horizontal forward axis.
    fn move_forward(&mut self, distance: f32);
    fn position(&self) -> Vec3;
    fn orientation(&self) -> Quat;
    /// Set the absolute camera height (view bob).
    fn set_eye_height(&mut self, y: f32);
}

/// Scoreboard, countdown, and overlays. Implementations must not panic; the
/// engine treats a missing HUD as "skip the display update".
pub trait Hud {
    fn show_score(&mut self, text: &str);
    fn show_time(&mut self, text: &str);
    fn show_paused(&mut self, paused: bool);
    /// Called exactly once when the countdown expires.
    fn round_over(&mut self, final_score: u32);
}
