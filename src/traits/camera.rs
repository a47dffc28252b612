use crate::camera::{ActiveCamera, CameraState, Motion};

/// Per-mode camera behaviour driven by the rig
pub trait CameraModel {
    /// Advance this camera by one frame of motion
    fn step(&mut self, motion: &Motion);

    /// Current persistent state
    fn state(&self) -> &CameraState;

    /// Renderer-facing projection of the current state
    fn view(&self) -> ActiveCamera {
        ActiveCamera::from_state(self.state())
    }
}
