use glam::Vec2;

use crate::camera::{ActiveCamera, CameraMode, CameraRig, Motion, MotionRates};
use crate::config::WorldConfig;
use crate::controls::FrameControls;
use crate::frame::FrameInfo;
use crate::input::{InputSnapshot, Key};
use crate::render_params::{project, FsParams};
use crate::traits::Controller;

/// Everything the simulation keeps between frames
#[derive(Debug, Clone)]
pub struct World {
    rig: CameraRig,
    controls: FrameControls,
    rates: MotionRates,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            rig: CameraRig::new(config),
            controls: FrameControls::default(),
            rates: config.rates(),
        }
    }

    /// Apply one frame of input. Call once per frame, after the snapshot is
    /// final and before projecting render parameters.
    pub fn update(&mut self, input: &InputSnapshot) -> ActiveCamera {
        if input.was_pressed(Key::F) {
            let mode = self.rig.toggle();
            log::info!("camera mode: {}", mode.label());
        }

        self.controls.update(input);

        let motion = Motion::from_input(input, &self.rates);
        let camera = self.rig.update(&motion);
        log::trace!(
            "camera {} pos={:?} target={:?}",
            self.rig.mode().label(),
            camera.position,
            camera.target
        );
        camera
    }

    /// Update and project in the required order
    pub fn step(&mut self, input: &InputSnapshot, frame: &FrameInfo, viewport: Vec2) -> FsParams {
        let camera = self.update(input);
        project(&camera, frame, viewport, &self.controls)
    }

    pub fn mode(&self) -> CameraMode {
        self.rig.mode()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn controls(&self) -> &FrameControls {
        &self.controls
    }

    /// Current view without advancing the simulation
    pub fn camera(&self) -> ActiveCamera {
        self.rig.view()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(&WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_happens_before_motion() {
        let mut world = World::default();
        let orbit_before = *world.rig().orbit_state();

        world.update(
            &InputSnapshot::idle(0.5)
                .with_pressed(Key::F)
                .with_down(Key::W),
        );

        assert_eq!(world.mode(), CameraMode::FirstPerson);
        assert_eq!(*world.rig().orbit_state(), orbit_before);
        assert_eq!(world.rig().first_person_state().position.z, -4.0);
    }

    #[test]
    fn step_projects_updated_camera() {
        let mut world = World::default();
        let frame = FrameInfo::new(7, 0.5, 0.5);
        let params = world.step(
            &InputSnapshot::idle(0.5).with_down(Key::Right),
            &frame,
            Vec2::new(640.0, 480.0),
        );
        assert_eq!(params.position, world.camera().position.to_array());
        assert_eq!(params.frame_count, 7);
        assert_eq!(params.viewport_size, [640.0, 480.0]);
    }
}
