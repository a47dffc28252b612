//! Per-frame input: the fixed key set, the immutable snapshot the
//! simulation reads, and the winit recorder that produces it.

mod keys;
mod recorder;
mod snapshot;

pub use keys::Key;
pub use recorder::InputRecorder;
pub use snapshot::{ButtonState, InputSnapshot, MouseState};
