use glam::Vec3;

use super::motion::Motion;
use super::state::CameraState;
use crate::config::CameraConfig;
use crate::math::rot3xy;
use crate::traits::CameraModel;

/// Orbit radius never drops below this
pub const MIN_ORBIT_ZOOM: f32 = 0.1;

/// Camera circling a fixed target at a variable radius.
///
/// Forward/back input changes the radius. Strafe input has no effect in this
/// mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    state: CameraState,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            state: CameraState {
                position: config.initial_position,
                target: config.initial_target,
                yaw: config.initial_yaw,
                pitch: config.initial_pitch,
                zoom: config.initial_zoom.max(MIN_ORBIT_ZOOM),
                vertical_fov: config.vertical_fov,
            },
        };
        camera.place_eye();
        camera
    }

    /// Eye position for the current angles and radius
    pub fn eye_for(yaw: f32, pitch: f32, zoom: f32) -> Vec3 {
        rot3xy(-pitch, -yaw) * Vec3::new(0.0, 0.0, zoom)
    }

    fn place_eye(&mut self) {
        let s = &mut self.state;
        s.position = Self::eye_for(s.yaw, s.pitch, s.zoom);
    }
}

impl CameraModel for OrbitCamera {
    fn step(&mut self, motion: &Motion) {
        self.state.turn(motion.d_yaw, motion.d_pitch);
        self.state.zoom = (self.state.zoom - motion.translate.z).max(MIN_ORBIT_ZOOM);
        self.place_eye();
    }

    fn state(&self) -> &CameraState {
        &self.state
    }
}
