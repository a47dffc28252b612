use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::keys::Key;
use super::snapshot::{ButtonState, InputSnapshot, MouseState};

/// Adapter that folds winit events into one `InputSnapshot` per frame
#[derive(Debug, Clone)]
pub struct InputRecorder {
    /// Button state accumulated since the last snapshot
    keys: [ButtonState; Key::COUNT],
    /// Last known cursor position (relative to window)
    cursor_position: Option<Vec2>,
    /// Mouse movement since the last snapshot
    mouse_delta: Vec2,
    mouse_moved: bool,
    /// Cursor capture as currently applied to the window
    capture: bool,
}

impl InputRecorder {
    /// Create a recorder with nothing held
    pub fn new() -> Self {
        Self {
            keys: [ButtonState::default(); Key::COUNT],
            cursor_position: None,
            mouse_delta: Vec2::ZERO,
            mouse_moved: false,
            capture: false,
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = Key::from_keycode(code) {
                        match event.state {
                            ElementState::Pressed => self.press(key),
                            ElementState::Released => self.release(key),
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = Vec2::new(position.x as f32, position.y as f32);
                if let Some(old_pos) = self.cursor_position {
                    if !self.capture {
                        self.add_mouse_delta(new_pos - old_pos);
                    }
                }
                self.cursor_position = Some(new_pos);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Process a raw device event. Relative motion only counts while captured.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.capture {
                self.add_mouse_delta(Vec2::new(delta.0 as f32, delta.1 as f32));
            }
        }
    }

    pub fn press(&mut self, key: Key) {
        let button = &mut self.keys[key.index()];
        if !button.down {
            button.down = true;
            button.pressed = true;
        }
    }

    pub fn release(&mut self, key: Key) {
        let button = &mut self.keys[key.index()];
        if button.down {
            button.down = false;
            button.released = true;
        }
    }

    /// Release everything that is held, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for key in Key::ALL {
            self.release(key);
        }
    }

    pub fn add_mouse_delta(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
        self.mouse_moved = true;
    }

    /// Record whether the window cursor is currently captured
    pub fn set_capture(&mut self, capture: bool) {
        self.capture = capture;
    }

    pub fn capture(&self) -> bool {
        self.capture
    }

    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_position
    }

    /// Hand out this frame's snapshot and start the next frame.
    /// Edges and mouse delta are cleared; held keys stay held.
    pub fn take_snapshot(&mut self, delta_secs: f32) -> InputSnapshot {
        let snapshot = InputSnapshot {
            keys: self.keys,
            mouse: MouseState {
                moved: self.mouse_moved,
                delta_position: self.mouse_delta,
                capture: self.capture,
            },
            delta_secs,
        };

        for button in &mut self.keys {
            button.pressed = false;
            button.released = false;
        }
        self.mouse_delta = Vec2::ZERO;
        self.mouse_moved = false;

        snapshot
    }
}

impl Default for InputRecorder {
    fn default() -> Self {
        Self::new()
    }
}
