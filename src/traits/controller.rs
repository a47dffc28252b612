use crate::input::Key;

/// Controller - read-only view of one frame's button state
pub trait Controller {
    /// Check if key is currently held
    fn is_down(&self, key: Key) -> bool;

    /// Check if key went down this frame
    fn was_pressed(&self, key: Key) -> bool;

    /// Check if key went up this frame
    fn was_released(&self, key: Key) -> bool;

    /// +1.0 when only `positive` is held, -1.0 when only `negative` is
    fn axis(&self, negative: Key, positive: Key) -> f32 {
        match (self.is_down(positive), self.is_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
