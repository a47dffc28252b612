//! Dual-mode camera: orbit around a fixed target or fly in first person.
//!
//! Each frame the input snapshot is reduced to a [`Motion`], applied to the
//! active camera held by the [`CameraRig`], and projected to an
//! [`ActiveCamera`] for rendering.

mod first_person;
mod motion;
mod orbit;
mod rig;
mod state;

pub use first_person::FirstPersonCamera;
pub use motion::{Motion, MotionRates, DEFAULT_LOOK_RATE, DEFAULT_MOVE_RATE};
pub use orbit::{OrbitCamera, MIN_ORBIT_ZOOM};
pub use rig::{CameraMode, CameraRig};
pub use state::{ActiveCamera, CameraState, CAMERA_UP};
