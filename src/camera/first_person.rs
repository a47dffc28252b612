use glam::Vec3;

use super::motion::Motion;
use super::state::CameraState;
use crate::config::CameraConfig;
use crate::math::rot3xy;
use crate::traits::CameraModel;

/// Free-flying camera. Position moves with input; target is always one unit
/// ahead along the view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonCamera {
    state: CameraState,
}

impl FirstPersonCamera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            state: CameraState {
                position: config.initial_position,
                target: config.initial_target,
                yaw: config.initial_yaw,
                pitch: config.initial_pitch,
                zoom: config.initial_zoom,
                vertical_fov: config.vertical_fov,
            },
        };
        camera.fly(Vec3::ZERO);
        camera
    }

    fn fly(&mut self, local: Vec3) {
        let s = &mut self.state;
        let rotation = rot3xy(-s.pitch, s.yaw);
        s.position += rotation * local;
        s.target = s.position + rotation * Vec3::Z;
    }
}

impl CameraModel for FirstPersonCamera {
    fn step(&mut self, motion: &Motion) {
        self.state.turn(motion.d_yaw, motion.d_pitch);
        self.fly(motion.translate);
    }

    fn state(&self) -> &CameraState {
        &self.state
    }
}
