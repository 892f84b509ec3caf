//! Built-in first-person camera implementing [`CameraControls`].

use glam::{EulerRot, Quat, Vec3};

use skirmish_core::constants::{MAX_PITCH, PLAYER_START};

use crate::host::CameraControls;

/// Yaw/pitch camera with pointer-lock state.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    /// Radians about +y; 0 looks down -z.
    pub yaw: f32,
    /// Radians about the local x axis; positive looks up.
    pub pitch: f32,
    locked: bool,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            position: PLAYER_START,
            yaw: 0.0,
            pitch: 0.0,
            locked: false,
        }
    }
}

impl FirstPersonCamera {
    /// Apply mouse look. Ignored while the pointer is not captured.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        if !self.locked {
            return;
        }
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Horizontal forward axis (unit length, y = 0).
    fn forward_axis(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right axis (unit length, y = 0).
    fn right_axis(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }
}

impl CameraControls for FirstPersonCamera {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn move_right(&mut self, distance: f32) {
        self.position += self.right_axis() * distance;
    }

    fn move_forward(&mut self, distance: f32) {
        self.position += self.forward_axis() * distance;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    fn set_eye_height(&mut self, y: f32) {
        self.position.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_default_position_and_unlocked() {
        let cam = FirstPersonCamera::default();
        assert_eq!(cam.position(), PLAYER_START);
        assert!(!cam.is_locked());
    }

    #[test]
    fn test_move_axes_follow_yaw() {
        let mut cam = FirstPersonCamera::default();
        cam.move_forward(1.0);
        assert!(approx(cam.position(), PLAYER_START + Vec3::NEG_Z));

        let mut cam = FirstPersonCamera::default();
        cam.move_right(2.0);
        assert!(approx(cam.position(), PLAYER_START + Vec3::X * 2.0));

        // Quarter turn to the right: forward becomes +x.
        let mut cam = FirstPersonCamera {
            yaw: -std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        cam.move_forward(1.0);
        assert!(approx(cam.position(), PLAYER_START + Vec3::X));
    }

    #[test]
    fn test_forward_axis_matches_orientation() {
        let cam = FirstPersonCamera {
            yaw: 0.7,
            ..Default::default()
        };
        let from_quat = cam.orientation() * Vec3::NEG_Z;
        assert!(approx(from_quat, cam.forward_axis()));
        let right = cam.orientation() * Vec3::X;
        assert!(approx(right, cam.right_axis()));
    }

    #[test]
    fn test_moves_stay_horizontal_when_pitched() {
        let mut cam = FirstPersonCamera {
            pitch: 1.0,
            ..Default::default()
        };
        cam.move_forward(3.0);
        assert!((cam.position().y - PLAYER_START.y).abs() < 1e-6);
    }

    #[test]
    fn test_look_requires_lock_and_clamps_pitch() {
        let mut cam = FirstPersonCamera::default();
        cam.look(0.5, 0.5);
        assert_eq!(cam.yaw, 0.0);

        cam.lock();
        cam.look(0.5, 10.0);
        assert!((cam.yaw - 0.5).abs() < 1e-6);
        assert_eq!(cam.pitch, MAX_PITCH);
    }
}
