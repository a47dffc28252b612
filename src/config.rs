//! World configuration loaded from TOML, with environment overrides.
//!
//! Every field has a default matching the stock demo scene, so an empty or
//! missing file is valid. Orbit reads target, yaw, pitch and zoom; first
//! person reads position, yaw and pitch. The remaining field of each mode is
//! derived at world init.

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::f32::consts::PI;
use std::path::Path;

use crate::camera::{MotionRates, DEFAULT_LOOK_RATE, DEFAULT_MOVE_RATE};

pub const DEFAULT_VERTICAL_FOV: f32 = 45.0;

/// Initial pose of one camera mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub initial_position: Vec3,
    pub initial_target: Vec3,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub initial_zoom: f32,
    /// Degrees
    pub vertical_fov: f32,
}

impl CameraConfig {
    pub fn orbit() -> Self {
        Self {
            initial_position: Vec3::new(5.0, 3.0, -5.0),
            initial_target: Vec3::new(0.0, 1.0, 0.0),
            initial_yaw: PI * 1.25,
            initial_pitch: PI * 0.1,
            initial_zoom: 10.0,
            vertical_fov: DEFAULT_VERTICAL_FOV,
        }
    }

    pub fn first_person() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 1.0, -5.0),
            initial_target: Vec3::new(0.0, 1.0, 0.0),
            initial_yaw: 0.0,
            initial_pitch: 0.0,
            initial_zoom: 10.0,
            vertical_fov: DEFAULT_VERTICAL_FOV,
        }
    }

    fn validate(&self, section: &str) -> Result<()> {
        let vectors = [self.initial_position, self.initial_target];
        if !vectors.iter().all(|v| v.is_finite())
            || !self.initial_yaw.is_finite()
            || !self.initial_pitch.is_finite()
        {
            bail!("[{section}] pose values must be finite");
        }
        if !(self.initial_zoom.is_finite() && self.initial_zoom > 0.0) {
            bail!("[{section}] initial_zoom must be positive, got {}", self.initial_zoom);
        }
        if !(self.vertical_fov > 0.0 && self.vertical_fov < 180.0) {
            bail!(
                "[{section}] vertical_fov must be within (0, 180) degrees, got {}",
                self.vertical_fov
            );
        }
        Ok(())
    }
}

/// `[orbit]` / `[first_person]` table as written in the file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CameraFile {
    initial_position: Option<Vec3>,
    initial_target: Option<Vec3>,
    initial_yaw: Option<f32>,
    initial_pitch: Option<f32>,
    initial_zoom: Option<f32>,
    vertical_fov: Option<f32>,
}

impl CameraFile {
    fn merge_onto(self, base: CameraConfig) -> CameraConfig {
        CameraConfig {
            initial_position: self.initial_position.unwrap_or(base.initial_position),
            initial_target: self.initial_target.unwrap_or(base.initial_target),
            initial_yaw: self.initial_yaw.unwrap_or(base.initial_yaw),
            initial_pitch: self.initial_pitch.unwrap_or(base.initial_pitch),
            initial_zoom: self.initial_zoom.unwrap_or(base.initial_zoom),
            vertical_fov: self.vertical_fov.unwrap_or(base.vertical_fov),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WorldFile {
    look_rate: Option<f32>,
    move_rate: Option<f32>,
    mouse_sensitivity: Option<f32>,
    orbit: CameraFile,
    first_person: CameraFile,
}

impl From<WorldFile> for WorldConfig {
    fn from(file: WorldFile) -> Self {
        let base = WorldConfig::default();
        Self {
            look_rate: file.look_rate.unwrap_or(base.look_rate),
            move_rate: file.move_rate.unwrap_or(base.move_rate),
            mouse_sensitivity: file.mouse_sensitivity.unwrap_or(base.mouse_sensitivity),
            orbit: file.orbit.merge_onto(base.orbit),
            first_person: file.first_person.merge_onto(base.first_person),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Radians per second for arrow-key look
    pub look_rate: f32,
    /// Units per second for WASD
    pub move_rate: f32,
    pub mouse_sensitivity: f32,
    pub orbit: CameraConfig,
    pub first_person: CameraConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            look_rate: DEFAULT_LOOK_RATE,
            move_rate: DEFAULT_MOVE_RATE,
            mouse_sensitivity: 1.0,
            orbit: CameraConfig::orbit(),
            first_person: CameraConfig::first_person(),
        }
    }
}

impl WorldConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: WorldFile = toml::from_str(text).context("parse world config TOML")?;
        let cfg = WorldConfig::from(file);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `path` if given and present, otherwise start from defaults.
    /// Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) if path.is_file() => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read {}", path.display()))?;
                log::info!("loading world config from {}", path.display());
                let file: WorldFile = toml::from_str(&text)
                    .with_context(|| format!("parse {}", path.display()))?;
                WorldConfig::from(file)
            }
            Some(path) => {
                log::warn!("config {} not found, using defaults", path.display());
                WorldConfig::default()
            }
            None => WorldConfig::default(),
        };
        cfg.apply_env_overrides(|name| std::env::var(name).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `CAVE_*` overrides read through `lookup`. Values that do not
    /// parse are skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| -> Option<f32> {
            let raw = lookup(name)?;
            match raw.trim().parse::<f32>() {
                Ok(v) => Some(v),
                Err(_) => {
                    log::warn!("ignoring {name}={raw:?}: not a number");
                    None
                }
            }
        };

        if let Some(v) = read("CAVE_VFOV") {
            self.orbit.vertical_fov = v;
            self.first_person.vertical_fov = v;
        }
        if let Some(v) = read("CAVE_LOOK_RATE") {
            self.look_rate = v;
        }
        if let Some(v) = read("CAVE_MOVE_RATE") {
            self.move_rate = v;
        }
        if let Some(v) = read("CAVE_ORBIT_ZOOM") {
            self.orbit.initial_zoom = v;
        }
        if let Some(v) = read("CAVE_MOUSE_SENS") {
            self.mouse_sensitivity = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("look_rate", self.look_rate),
            ("move_rate", self.move_rate),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ] {
            if !(rate.is_finite() && rate > 0.0) {
                bail!("{name} must be positive, got {rate}");
            }
        }
        self.orbit.validate("orbit")?;
        self.first_person.validate("first_person")?;
        Ok(())
    }

    pub fn rates(&self) -> MotionRates {
        MotionRates {
            look: self.look_rate,
            translate: self.move_rate,
            mouse_sensitivity: self.mouse_sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        WorldConfig::default().validate().unwrap();
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = WorldConfig::default();
        cfg.apply_env_overrides(|name| match name {
            "CAVE_VFOV" => Some("60".to_string()),
            "CAVE_ORBIT_ZOOM" => Some(" 4.5 ".to_string()),
            "CAVE_LOOK_RATE" => Some("fast".to_string()),
            _ => None,
        });
        assert_eq!(cfg.orbit.vertical_fov, 60.0);
        assert_eq!(cfg.first_person.vertical_fov, 60.0);
        assert_eq!(cfg.orbit.initial_zoom, 4.5);
        assert_eq!(cfg.look_rate, DEFAULT_LOOK_RATE);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = WorldConfig::load(Some(Path::new("/nonexistent/cave.toml"))).unwrap();
        assert_eq!(cfg.orbit.initial_target, Vec3::new(0.0, 1.0, 0.0));
    }
}
