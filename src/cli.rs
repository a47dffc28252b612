// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::input::Key;

#[derive(Parser, Debug, Clone)]
#[command(name = "cave")]
#[command(about = "Orbit / first-person camera demo", long_about = None)]
pub struct Cli {
    /// World config TOML (defaults are used if the file is missing)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a scripted sequence without a window and print the result as JSON
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Fixed frame time in seconds for headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Key held for the whole headless run (repeatable), e.g. --hold right
    #[arg(long = "hold", value_name = "KEY")]
    pub hold: Vec<Key>,

    /// Headless frame on which the camera mode toggle is pressed
    #[arg(long, value_name = "FRAME")]
    pub toggle_at: Option<u32>,

    /// Viewport size reported in headless mode
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [800.0, 600.0])]
    pub viewport: Vec<f32>,
}
