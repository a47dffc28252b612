use cave::camera::CameraMode;
use cave::config::{WorldConfig, DEFAULT_VERTICAL_FOV};
use cave::World;
use glam::Vec3;
use std::f32::consts::PI;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let cfg = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, WorldConfig::default());
        assert_eq!(cfg.orbit.initial_yaw, PI * 1.25);
        assert_eq!(cfg.orbit.initial_pitch, PI * 0.1);
        assert_eq!(cfg.first_person.initial_position, Vec3::new(0.0, 1.0, -5.0));
        assert_eq!(cfg.orbit.vertical_fov, DEFAULT_VERTICAL_FOV);
    }

    #[test]
    fn test_partial_table_keeps_mode_defaults() {
        let cfg = WorldConfig::from_toml_str(
            r#"
            move_rate = 4.0

            [first_person]
            initial_yaw = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(cfg.move_rate, 4.0);
        assert_eq!(cfg.first_person.initial_yaw, 1.5);
        assert_eq!(cfg.first_person.initial_position, Vec3::new(0.0, 1.0, -5.0));
        assert_eq!(cfg.orbit, WorldConfig::default().orbit);
    }

    #[test]
    fn test_vectors_parse_from_arrays() {
        let cfg = WorldConfig::from_toml_str(
            r#"
            [orbit]
            initial_target = [1.0, 2.0, 3.0]
            initial_zoom = 4.0
            vertical_fov = 60.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.orbit.initial_target, Vec3::new(1.0, 2.0, 3.0));
        let world = World::new(&cfg);
        assert_eq!(world.mode(), CameraMode::Orbit);
        assert_eq!(world.camera().target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(world.camera().vertical_fov, 60.0);
        assert!((world.camera().position.length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_non_positive_zoom() {
        let err = WorldConfig::from_toml_str("[orbit]\ninitial_zoom = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("initial_zoom"), "{err}");
    }

    #[test]
    fn test_rejects_bad_fov() {
        assert!(WorldConfig::from_toml_str("[first_person]\nvertical_fov = 180.0\n").is_err());
        assert!(WorldConfig::from_toml_str("[orbit]\nvertical_fov = -1.0\n").is_err());
    }

    #[test]
    fn test_rejects_zero_rates() {
        assert!(WorldConfig::from_toml_str("look_rate = 0.0\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(WorldConfig::from_toml_str("[orbit]\ninital_yaw = 1.0\n").is_err());
        assert!(WorldConfig::from_toml_str("speed = 1.0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(WorldConfig::from_toml_str("[orbit\n").is_err());
    }
}
