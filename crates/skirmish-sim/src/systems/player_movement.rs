//! Player movement: held keys to camera-relative displacement, inertia, and view bob.
//!
//! Friction is a flat multiply per tick rather than `exp(-k * dt)` decay; under
//! the fixed timestep the two only differ in how the constant is expressed.

use glam::Vec2;

use skirmish_core::commands::MoveState;
use skirmish_core::components::PlayerMotion;
use skirmish_core::constants::{BOB_AMPLITUDE, BOB_RATE, EYE_HEIGHT, PLAYER_FRICTION, PLAYER_SPEED};

use crate::host::CameraControls;

/// Normalized (strafe, forward) intent from the held keys. Opposing keys cancel.
pub fn intent(move_state: &MoveState) -> Vec2 {
    let strafe = axis(move_state.right, move_state.left);
    let forward = axis(move_state.forward, move_state.backward);
    Vec2::new(strafe, forward).normalize_or_zero()
}

fn axis(positive: bool, negative: bool) -> f32 {
    positive as u8 as f32 - negative as u8 as f32
}

/// Run one movement step. Does nothing while the pointer is not captured or
/// no movement input is attached.
pub fn run<C: CameraControls + ?Sized>(
    motion: &mut PlayerMotion,
    camera: &mut C,
    move_state: Option<&MoveState>,
    dt: f32,
) {
    if !camera.is_locked() {
        return;
    }
    let Some(move_state) = move_state else {
        return;
    };

    let step = intent(move_state) * (PLAYER_SPEED * dt);
    motion.velocity += step;

    camera.move_right(step.x);
    camera.move_forward(step.y);

    if motion.velocity.x != 0.0 || motion.velocity.y != 0.0 {
        motion.bob_phase += dt * BOB_RATE;
        camera.set_eye_height(EYE_HEIGHT + motion.bob_phase.sin() * BOB_AMPLITUDE);
    } else {
        motion.bob_phase = 0.0;
        camera.set_eye_height(EYE_HEIGHT);
    }

    motion.velocity *= PLAYER_FRICTION;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FirstPersonCamera;
    use skirmish_core::constants::{DT, PLAYER_START};

    fn locked_camera() -> FirstPersonCamera {
        let mut cam = FirstPersonCamera::default();
        cam.lock();
        cam
    }

    fn held(forward: bool, backward: bool, left: bool, right: bool) -> MoveState {
        MoveState {
            forward,
            backward,
            left,
            right,
        }
    }

    #[test]
    fn test_intent_normalizes_diagonal() {
        let v = intent(&held(true, false, false, true));
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.x > 0.0 && v.y > 0.0);
        assert_eq!(intent(&held(true, true, true, true)), Vec2::ZERO);
        assert_eq!(intent(&MoveState::default()), Vec2::ZERO);
    }

    #[test]
    fn test_noop_when_unlocked() {
        let mut cam = FirstPersonCamera::default();
        let mut motion = PlayerMotion::default();
        run(&mut motion, &mut cam, Some(&held(true, false, false, false)), DT);
        assert_eq!(cam.position, PLAYER_START);
        assert_eq!(motion, PlayerMotion::default());
    }

    #[test]
    fn test_noop_without_move_state() {
        let mut cam = locked_camera();
        let mut motion = PlayerMotion {
            velocity: Vec2::new(1.0, 0.0),
            bob_phase: 0.3,
        };
        run(&mut motion, &mut cam, None, DT);
        assert_eq!(motion.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(cam.position, PLAYER_START);
    }

    #[test]
    fn test_forward_moves_camera_by_speed_dt() {
        let mut cam = locked_camera();
        let mut motion = PlayerMotion::default();
        run(&mut motion, &mut cam, Some(&held(true, false, false, false)), DT);

        let moved = PLAYER_START.z - cam.position.z;
        assert!((moved - PLAYER_SPEED * DT).abs() < 1e-5);
        // Accumulator got the step, then friction.
        assert!((motion.velocity.y - PLAYER_SPEED * DT * PLAYER_FRICTION).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_accumulates_across_ticks() {
        let mut cam = locked_camera();
        let mut motion = PlayerMotion::default();
        let keys = held(false, false, false, true);
        run(&mut motion, &mut cam, Some(&keys), DT);
        run(&mut motion, &mut cam, Some(&keys), DT);

        let step = PLAYER_SPEED * DT;
        let expected = (step * PLAYER_FRICTION + step) * PLAYER_FRICTION;
        assert!((motion.velocity.x - expected).abs() < 1e-6);
    }

    #[test]
    fn test_friction_decays_geometrically_without_reaching_zero() {
        let mut cam = locked_camera();
        let mut motion = PlayerMotion {
            velocity: Vec2::new(0.0, 2.0),
            bob_phase: 0.0,
        };
        let idle = MoveState::default();
        let mut expected = 2.0f32;
        for _ in 0..100 {
            let before = motion.velocity.length();
            run(&mut motion, &mut cam, Some(&idle), DT);
            expected *= PLAYER_FRICTION;
            assert!((motion.velocity.length() - before * PLAYER_FRICTION).abs() < 1e-6);
            assert!(motion.velocity.length() > 0.0);
        }
        assert!((motion.velocity.length() - expected).abs() < 1e-6);
        // Idle input never displaces the camera horizontally.
        assert_eq!(cam.position.x, PLAYER_START.x);
        assert_eq!(cam.position.z, PLAYER_START.z);
    }

    #[test]
    fn test_bob_oscillates_while_moving_and_resets_at_rest() {
        let mut cam = locked_camera();
        let mut motion = PlayerMotion::default();
        run(&mut motion, &mut cam, Some(&held(true, false, false, false)), DT);

        assert!((motion.bob_phase - DT * BOB_RATE).abs() < 1e-6);
        let expected = EYE_HEIGHT + (DT * BOB_RATE).sin() * BOB_AMPLITUDE;
        assert!((cam.position.y - expected).abs() < 1e-6);

        let mut still = PlayerMotion {
            velocity: Vec2::ZERO,
            bob_phase: 1.2,
        };
        run(&mut still, &mut cam, Some(&MoveState::default()), DT);
        assert_eq!(still.bob_phase, 0.0);
        assert_eq!(cam.position.y, EYE_HEIGHT);
    }
}
