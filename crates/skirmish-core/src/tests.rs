#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::{MoveState, PlayerCommand};
    use crate::components::EnemyTemplate;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{format_score, format_time, GameStateSnapshot};
    use crate::types::{yaw_toward, Position, SimTime};

    #[test]
    fn test_player_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::StartRound).unwrap();
        assert_eq!(json, r#"{"type":"StartRound"}"#);

        let cmd: PlayerCommand = serde_json::from_str(
            r#"{"type":"SetMovement","state":{"forward":true,"backward":false,"left":false,"right":true}}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::SetMovement {
                state: Some(MoveState {
                    forward: true,
                    right: true,
                    ..Default::default()
                })
            }
        );
    }

    #[test]
    fn test_detached_movement_json() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetMovement","state":null}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::SetMovement { state: None });
    }

    #[test]
    fn test_game_event_tagged_json() {
        let ev = GameEvent::ProjectileRemoved {
            projectile_id: 3,
            fate: ProjectileFate::OutOfRange,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains(r#""type":"ProjectileRemoved""#));
        assert!(json.contains(r#""fate":"OutOfRange""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn test_round_phase_predicates() {
        assert!(!RoundPhase::Idle.is_running());
        assert!(RoundPhase::Running.is_running());
        assert!(RoundPhase::Paused.is_running());
        assert!(!RoundPhase::Ended.is_running());
        assert!(!RoundPhase::Stopped.is_running());
        assert!(RoundPhase::Ended.is_terminal());
        assert!(RoundPhase::Stopped.is_terminal());
        assert!(!RoundPhase::Paused.is_terminal());
        assert_eq!(RoundPhase::default(), RoundPhase::Idle);
    }

    #[test]
    fn test_template_ground_offset_uses_scale() {
        let t = EnemyTemplate::new(2.0);
        assert_eq!(t.scale, ENEMY_MODEL_SCALE);
        assert!((t.ground_offset() - 0.5).abs() < 1e-6);

        let unscaled = EnemyTemplate {
            bounding_height: 3.0,
            scale: 1.0,
        };
        assert!((unscaled.ground_offset() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_template_scale_defaults_when_missing() {
        let t: EnemyTemplate = serde_json::from_str(r#"{"bounding_height":4.0}"#).unwrap();
        assert_eq!(t.scale, ENEMY_MODEL_SCALE);
    }

    #[test]
    fn test_time_display_clamps_negative() {
        assert_eq!(format_time(12.345), "Time: 12.3s");
        assert_eq!(format_time(-0.4), "Time: 0.0s");
        assert_eq!(format_score(7), "Score: 7");
    }

    #[test]
    fn test_yaw_toward_faces_direction() {
        // Straight ahead (-z) is yaw 0.
        assert!(yaw_toward(Vec3::new(0.0, 0.0, -1.0)).unwrap().abs() < 1e-6);
        // +x is a quarter turn clockwise seen from above.
        let yaw = yaw_toward(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let forward = glam::Quat::from_rotation_y(yaw) * Vec3::NEG_Z;
        assert!((forward - Vec3::X).length() < 1e-5);
        assert!(yaw_toward(Vec3::new(0.0, 5.0, 0.0)).is_none());
    }

    #[test]
    fn test_horizontal_offset_drops_height() {
        let p = Position(Vec3::new(1.0, 0.5, 2.0));
        let d = p.horizontal_offset_to(Vec3::new(4.0, 1.6, 6.0));
        assert_eq!(d, Vec3::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_distance_from_origin_includes_height() {
        assert_eq!(Position(Vec3::new(0.0, 3.0, -4.0)).distance_from_origin(), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance(DT);
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_snapshot_default_is_idle_and_serializes() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.round.phase, RoundPhase::Idle);
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_arena_constants_consistent() {
        assert!(ARENA_X_MIN < ARENA_X_MAX);
        assert!(ARENA_Z_MIN < ARENA_Z_MAX);
        assert!(PROJECTILE_HIT_RADIUS < ENEMY_STOP_DISTANCE);
        assert!((DT - 1.0 / 60.0).abs() < 1e-7);
    }
}
