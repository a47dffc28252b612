use glam::Vec3;

use crate::input::{InputSnapshot, Key};
use crate::traits::Controller;

pub const DEFAULT_LOOK_RATE: f32 = 2.0;
pub const DEFAULT_MOVE_RATE: f32 = 2.0;

/// Per-second speeds applied to held keys and mouse motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRates {
    /// Radians per second for the arrow keys
    pub look: f32,
    /// Units per second for WASD
    pub translate: f32,
    /// Multiplier on captured mouse delta
    pub mouse_sensitivity: f32,
}

impl Default for MotionRates {
    fn default() -> Self {
        Self {
            look: DEFAULT_LOOK_RATE,
            translate: DEFAULT_MOVE_RATE,
            mouse_sensitivity: 1.0,
        }
    }
}

/// Camera deltas for one frame, derived from the input snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub d_yaw: f32,
    pub d_pitch: f32,
    /// Camera-local translation: x strafes, z moves forward
    pub translate: Vec3,
}

impl Motion {
    pub fn from_input(input: &InputSnapshot, rates: &MotionRates) -> Self {
        let dt = input.delta_secs;
        let look = rates.look * dt;
        let step = rates.translate * dt;

        let mut d_yaw = input.axis(Key::Left, Key::Right) * look;
        let mut d_pitch = input.axis(Key::Down, Key::Up) * look;

        let mouse = &input.mouse;
        if mouse.capture && mouse.moved {
            let scale = dt * rates.mouse_sensitivity;
            d_yaw += mouse.delta_position.x * scale;
            // screen y grows downwards
            d_pitch -= mouse.delta_position.y * scale;
        }

        let translate = Vec3::new(
            input.axis(Key::A, Key::D) * step,
            0.0,
            input.axis(Key::S, Key::W) * step,
        );

        Self {
            d_yaw,
            d_pitch,
            translate,
        }
    }

    pub fn is_still(&self) -> bool {
        self.d_yaw == 0.0 && self.d_pitch == 0.0 && self.translate == Vec3::ZERO
    }
}
