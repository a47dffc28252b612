use glam::Vec2;

use super::keys::Key;
use crate::traits::Controller;

/// Level and edge state of one button for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub down: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Mouse motion for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub moved: bool,
    pub delta_position: Vec2,
    /// Whether the platform currently has the cursor captured
    pub capture: bool,
}

/// Immutable per-frame input handed to the simulation.
///
/// Built once per frame by the platform layer (see `InputRecorder`). The
/// `pressed` and `released` flags are only ever set on the frame the
/// transition happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub keys: [ButtonState; Key::COUNT],
    pub mouse: MouseState,
    pub delta_secs: f32,
}

impl InputSnapshot {
    /// No keys, no mouse movement
    pub fn idle(delta_secs: f32) -> Self {
        Self {
            keys: [ButtonState::default(); Key::COUNT],
            mouse: MouseState::default(),
            delta_secs,
        }
    }

    pub fn key(&self, key: Key) -> ButtonState {
        self.keys[key.index()]
    }

    /// Mark `key` as held (without an edge)
    pub fn with_down(mut self, key: Key) -> Self {
        self.keys[key.index()].down = true;
        self
    }

    /// Mark `key` as pressed this frame
    pub fn with_pressed(mut self, key: Key) -> Self {
        let button = &mut self.keys[key.index()];
        button.down = true;
        button.pressed = true;
        self
    }

    /// Mark `key` as released this frame
    pub fn with_released(mut self, key: Key) -> Self {
        let button = &mut self.keys[key.index()];
        button.down = false;
        button.released = true;
        self
    }

    /// Captured mouse movement of `delta` pixels
    pub fn with_mouse_delta(mut self, delta: Vec2) -> Self {
        self.mouse = MouseState {
            moved: true,
            delta_position: delta,
            capture: true,
        };
        self
    }

    /// True when nothing is held, nothing changed and the mouse is still
    pub fn is_quiet(&self) -> bool {
        !self.mouse.moved
            && self
                .keys
                .iter()
                .all(|b| !b.down && !b.pressed && !b.released)
    }
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::idle(0.0)
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, key: Key) -> bool {
        self.key(key).down
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.key(key).pressed
    }

    fn was_released(&self, key: Key) -> bool {
        self.key(key).released
    }
}
