use cave::controls::{
    FrameControls, DEBUG_SCALAR_LIMIT, DEBUG_SCALAR_RATE, MAX_RENDER_SCALE, MIN_RENDER_SCALE,
};
use cave::input::{InputSnapshot, Key};
use cave::World;

#[cfg(test)]
mod controls_tests {
    use super::*;

    fn press(key: Key) -> InputSnapshot {
        InputSnapshot::idle(0.016).with_pressed(key)
    }

    #[test]
    fn test_single_halve_from_one() {
        let mut controls = FrameControls::default();
        controls.update(&press(Key::LeftBracket));
        assert_eq!(controls.render_scale, 0.5);
    }

    #[test]
    fn test_halving_clamps_at_sixteenth() {
        let mut controls = FrameControls::default();
        let mut seen = Vec::new();
        for _ in 0..8 {
            controls.update(&press(Key::LeftBracket));
            seen.push(controls.render_scale);
        }
        assert_eq!(seen[..4], [0.5, 0.25, 0.125, 0.0625]);
        assert!(seen[4..].iter().all(|&s| s == MIN_RENDER_SCALE));
    }

    #[test]
    fn test_doubling_clamps_at_one() {
        let mut controls = FrameControls::default();
        controls.update(&press(Key::LeftBracket));
        controls.update(&press(Key::LeftBracket));
        controls.update(&press(Key::RightBracket));
        assert_eq!(controls.render_scale, 0.5);
        controls.update(&press(Key::RightBracket));
        controls.update(&press(Key::RightBracket));
        assert_eq!(controls.render_scale, MAX_RENDER_SCALE);
    }

    #[test]
    fn test_both_brackets_cancel() {
        let mut controls = FrameControls::default();
        controls.update(&press(Key::LeftBracket));
        controls.update(
            &InputSnapshot::idle(0.016)
                .with_pressed(Key::LeftBracket)
                .with_pressed(Key::RightBracket),
        );
        assert_eq!(controls.render_scale, 0.5);
    }

    #[test]
    fn test_debug_scalar_follows_held_keys() {
        let mut controls = FrameControls::default();
        controls.update(&InputSnapshot::idle(0.5).with_down(Key::Equals));
        assert_eq!(controls.debug.scalar, DEBUG_SCALAR_RATE * 0.5);

        controls.update(&InputSnapshot::idle(0.25).with_down(Key::Minus));
        assert_eq!(controls.debug.scalar, DEBUG_SCALAR_RATE * 0.25);

        controls.update(&press(Key::Num0));
        assert_eq!(controls.debug.scalar, 0.0);
    }

    #[test]
    fn test_debug_scalar_clamped() {
        let mut controls = FrameControls::default();
        controls.update(&InputSnapshot::idle(1_000.0).with_down(Key::Minus));
        assert_eq!(controls.debug.scalar, -DEBUG_SCALAR_LIMIT);
    }

    #[test]
    fn test_capture_toggles_on_press_edge() {
        let mut controls = FrameControls::default();
        controls.update(&press(Key::Tab));
        assert!(controls.capture_mouse);
        controls.update(&InputSnapshot::idle(0.016).with_down(Key::Tab));
        assert!(controls.capture_mouse);
        controls.update(&press(Key::Tab));
        assert!(!controls.capture_mouse);
    }

    #[test]
    fn test_controls_do_not_touch_camera() {
        let mut world = World::default();
        let orbit = *world.rig().orbit_state();
        world.update(
            &InputSnapshot::idle(0.0)
                .with_pressed(Key::LeftBracket)
                .with_pressed(Key::Tab)
                .with_down(Key::Equals),
        );
        assert_eq!(*world.rig().orbit_state(), orbit);
        assert_eq!(world.controls().render_scale, 0.5);
        assert!(world.controls().capture_mouse);
    }
}
