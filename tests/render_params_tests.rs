use cave::camera::{ActiveCamera, CameraState};
use cave::controls::FrameControls;
use cave::frame::FrameInfo;
use cave::input::{InputSnapshot, Key};
use cave::render_params::{project, FsParams, FS_PARAMS_SIZE};
use cave::World;
use glam::{Vec2, Vec3};

#[cfg(test)]
mod render_params_tests {
    use super::*;

    fn awkward_state() -> CameraState {
        CameraState {
            position: Vec3::new(0.1, -1.0e-7, 12345.678),
            target: Vec3::new(f32::MIN_POSITIVE, 1.0 / 3.0, -0.0),
            yaw: 0.2,
            pitch: 0.3,
            zoom: 4.0,
            vertical_fov: 47.123_456,
        }
    }

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        f32::from_ne_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_projection_round_trip_is_exact() {
        let state = awkward_state();
        let camera = ActiveCamera::from_state(&state);
        let params = project(
            &camera,
            &FrameInfo::new(3, 0.0, 0.0),
            Vec2::new(1.0, 1.0),
            &FrameControls::default(),
        );

        assert_eq!(params.position, state.position.to_array());
        assert_eq!(params.target, state.target.to_array());
        assert_eq!(params.vertical_fov.to_bits(), state.vertical_fov.to_bits());
        assert_eq!(params.target[2].to_bits(), (-0.0f32).to_bits());
        assert_eq!(params.up, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_encode_decode_preserves_block() {
        let mut controls = FrameControls::default();
        controls.render_scale = 0.25;
        controls.debug.scalar = -2.5;
        let params = project(
            &ActiveCamera::from_state(&awkward_state()),
            &FrameInfo::new(u32::MAX, 9.0, 0.016),
            Vec2::new(1920.0, 1080.0),
            &controls,
        );

        let bytes = params.encode();
        assert_eq!(bytes.len(), FS_PARAMS_SIZE);
        assert_eq!(FsParams::decode(&bytes), Some(params));
    }

    #[test]
    fn test_field_offsets_in_bytes() {
        let mut controls = FrameControls::default();
        controls.render_scale = 0.125;
        controls.debug.scalar = 7.0;
        let params = project(
            &ActiveCamera::from_state(&awkward_state()),
            &FrameInfo::new(42, 1.0, 0.016),
            Vec2::new(800.0, 600.0),
            &controls,
        );
        let bytes = params.encode();

        assert_eq!(f32_at(&bytes, 0), 0.1);
        assert_eq!(f32_at(&bytes, 8), 12345.678);
        assert_eq!(f32_at(&bytes, 12), 47.123_456);
        assert_eq!(f32_at(&bytes, 20), 1.0 / 3.0);
        assert_eq!(u32::from_ne_bytes(bytes[28..32].try_into().unwrap()), 42);
        assert_eq!(f32_at(&bytes, 36), 1.0);
        assert_eq!(f32_at(&bytes, 48), 800.0);
        assert_eq!(f32_at(&bytes, 52), 600.0);
        assert_eq!(f32_at(&bytes, 64), 7.0);
        assert_eq!(f32_at(&bytes, 68), 0.125);
    }

    #[test]
    fn test_padding_is_zero() {
        let params = project(
            &ActiveCamera::from_state(&awkward_state()),
            &FrameInfo::new(1, 0.0, 0.0),
            Vec2::new(2.0, 2.0),
            &FrameControls::default(),
        );
        let bytes = params.encode();
        for range in [44..48, 56..64, 72..80] {
            assert!(bytes[range.clone()].iter().all(|&b| b == 0), "{range:?}");
        }
    }

    #[test]
    fn test_world_step_matches_manual_projection() {
        let mut a = World::default();
        let mut b = World::default();
        let input = InputSnapshot::idle(0.2).with_down(Key::Left).with_down(Key::S);
        let frame = FrameInfo::new(10, 2.0, 0.2);
        let viewport = Vec2::new(1024.0, 768.0);

        let stepped = a.step(&input, &frame, viewport);
        let camera = b.update(&input);
        let manual = project(&camera, &frame, viewport, b.controls());

        assert_eq!(stepped, manual);
    }
}
