use glam::Vec3;
use serde::Serialize;

use crate::math::wrap_angle;

/// World up, shared by every camera
pub const CAMERA_UP: Vec3 = Vec3::Y;

/// Persistent state of one camera mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    /// Radians, accumulated
    pub yaw: f32,
    /// Radians, accumulated
    pub pitch: f32,
    /// Orbit radius. Unused by the first-person camera.
    pub zoom: f32,
    /// Degrees
    pub vertical_fov: f32,
}

impl CameraState {
    /// Accumulate this frame's rotation
    pub fn turn(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_angle(self.yaw + d_yaw);
        self.pitch = wrap_angle(self.pitch + d_pitch);
    }
}

/// Camera as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub vertical_fov: f32,
}

impl ActiveCamera {
    pub fn from_state(state: &CameraState) -> Self {
        Self {
            position: state.position,
            target: state.target,
            up: CAMERA_UP,
            vertical_fov: state.vertical_fov,
        }
    }

    /// Unit view direction, zero if position and target coincide
    pub fn forward(&self) -> Vec3 {
        crate::math::noz(self.target - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CameraState {
        CameraState {
            position: Vec3::new(1.0, 2.0, 3.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            yaw: 0.5,
            pitch: -0.25,
            zoom: 10.0,
            vertical_fov: 45.0,
        }
    }

    #[test]
    fn projection_copies_fields() {
        let s = state();
        let view = ActiveCamera::from_state(&s);
        assert_eq!(view.position, s.position);
        assert_eq!(view.target, s.target);
        assert_eq!(view.vertical_fov, s.vertical_fov);
        assert_eq!(view.up, Vec3::Y);
    }

    #[test]
    fn zero_turn_is_exact() {
        let mut s = state();
        s.turn(0.0, 0.0);
        assert_eq!(s, state());
    }

    #[test]
    fn turn_accumulates() {
        let mut s = state();
        s.turn(0.25, 0.5);
        assert_eq!(s.yaw, 0.75);
        assert_eq!(s.pitch, 0.25);
    }

    #[test]
    fn forward_of_degenerate_camera_is_zero() {
        let mut s = state();
        s.target = s.position;
        assert_eq!(ActiveCamera::from_state(&s).forward(), Vec3::ZERO);
    }
}
