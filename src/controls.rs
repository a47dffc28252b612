//! Frame-scoped tweakables driven by the same snapshot as the camera.

use serde::Serialize;

use crate::input::{InputSnapshot, Key};
use crate::math::clamp;
use crate::traits::Controller;

pub const MIN_RENDER_SCALE: f32 = 1.0 / 16.0;
pub const MAX_RENDER_SCALE: f32 = 1.0;
/// Debug scalar change per second while `=` or `-` is held
pub const DEBUG_SCALAR_RATE: f32 = 1.0;
pub const DEBUG_SCALAR_LIMIT: f32 = 100.0;

/// Free-form values forwarded to the shader for debugging
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DebugParams {
    pub scalar: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameControls {
    pub render_scale: f32,
    pub debug: DebugParams,
    /// Requested cursor capture; the platform applies it to the window
    pub capture_mouse: bool,
}

impl Default for FrameControls {
    fn default() -> Self {
        Self {
            render_scale: MAX_RENDER_SCALE,
            debug: DebugParams::default(),
            capture_mouse: false,
        }
    }
}

impl FrameControls {
    pub fn update(&mut self, input: &InputSnapshot) {
        self.update_render_scale(input);
        self.update_debug(input);

        if input.was_pressed(Key::Tab) {
            self.capture_mouse = !self.capture_mouse;
            log::info!(
                "mouse capture {}",
                if self.capture_mouse { "on" } else { "off" }
            );
        }
    }

    fn update_render_scale(&mut self, input: &InputSnapshot) {
        let mut scale = self.render_scale;
        if input.was_pressed(Key::RightBracket) {
            scale *= 2.0;
        }
        if input.was_pressed(Key::LeftBracket) {
            scale *= 0.5;
        }
        let scale = clamp(MIN_RENDER_SCALE, scale, MAX_RENDER_SCALE);

        if scale != self.render_scale {
            log::info!("render scale {} -> {}", self.render_scale, scale);
            self.render_scale = scale;
        }
    }

    fn update_debug(&mut self, input: &InputSnapshot) {
        if input.was_pressed(Key::Num0) {
            self.debug.scalar = 0.0;
            log::info!("debug scalar reset");
            return;
        }

        let delta = input.axis(Key::Minus, Key::Equals) * DEBUG_SCALAR_RATE * input.delta_secs;
        if delta != 0.0 {
            self.debug.scalar = clamp(
                -DEBUG_SCALAR_LIMIT,
                self.debug.scalar + delta,
                DEBUG_SCALAR_LIMIT,
            );
        }
    }
}
