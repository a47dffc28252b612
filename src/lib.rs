pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod frame;
pub mod input;
pub mod math;
pub mod render_params;
pub mod traits;
pub mod world;

pub use camera::{ActiveCamera, CameraMode, CameraRig, CameraState};
pub use config::WorldConfig;
pub use input::{InputSnapshot, Key};
pub use render_params::{project, FsParams};
pub use world::World;
