mod camera;
mod controller;

pub use camera::CameraModel;
pub use controller::Controller;
