use super::first_person::FirstPersonCamera;
use super::motion::Motion;
use super::orbit::OrbitCamera;
use super::state::{ActiveCamera, CameraState};
use crate::config::WorldConfig;
use crate::traits::CameraModel;

/// Which camera drives the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Orbit,
    FirstPerson,
}

impl CameraMode {
    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Orbit => "orbit",
            CameraMode::FirstPerson => "first person",
        }
    }
}

/// Both cameras, tagged by which one is active. The parked camera is carried
/// along untouched so switching back resumes its last pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRig {
    Orbit {
        orbit: OrbitCamera,
        parked: FirstPersonCamera,
    },
    FirstPerson {
        first_person: FirstPersonCamera,
        parked: OrbitCamera,
    },
}

impl CameraRig {
    /// Both cameras at their configured poses, orbit active
    pub fn new(config: &WorldConfig) -> Self {
        CameraRig::Orbit {
            orbit: OrbitCamera::new(&config.orbit),
            parked: FirstPersonCamera::new(&config.first_person),
        }
    }

    pub fn mode(&self) -> CameraMode {
        match self {
            CameraRig::Orbit { .. } => CameraMode::Orbit,
            CameraRig::FirstPerson { .. } => CameraMode::FirstPerson,
        }
    }

    /// Swap the active camera. Neither camera's state changes.
    pub fn toggle(&mut self) -> CameraMode {
        *self = match *self {
            CameraRig::Orbit { orbit, parked } => CameraRig::FirstPerson {
                first_person: parked,
                parked: orbit,
            },
            CameraRig::FirstPerson {
                first_person,
                parked,
            } => CameraRig::Orbit {
                orbit: parked,
                parked: first_person,
            },
        };
        self.mode()
    }

    /// Advance the active camera and return the renderer-facing view
    pub fn update(&mut self, motion: &Motion) -> ActiveCamera {
        let active: &mut dyn CameraModel = match self {
            CameraRig::Orbit { orbit, .. } => orbit,
            CameraRig::FirstPerson { first_person, .. } => first_person,
        };
        active.step(motion);
        active.view()
    }

    /// View of the active camera without advancing it
    pub fn view(&self) -> ActiveCamera {
        self.active().view()
    }

    pub fn active(&self) -> &dyn CameraModel {
        match self {
            CameraRig::Orbit { orbit, .. } => orbit,
            CameraRig::FirstPerson { first_person, .. } => first_person,
        }
    }

    pub fn orbit_state(&self) -> &CameraState {
        match self {
            CameraRig::Orbit { orbit, .. } => orbit.state(),
            CameraRig::FirstPerson { parked, .. } => parked.state(),
        }
    }

    pub fn first_person_state(&self) -> &CameraState {
        match self {
            CameraRig::Orbit { parked, .. } => parked.state(),
            CameraRig::FirstPerson { first_person, .. } => first_person.state(),
        }
    }
}
