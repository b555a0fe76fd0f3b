// config.rs - JSON settings for the window, camera and planet scene
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::ClipDepth;
use crate::error::{Error, Result};
use crate::geometry::MAX_SPHERE_RESOLUTION;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub planet: PlanetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Blue Planet".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub up: [f32; 3],
    pub speed: f32,
    pub sensitivity: f32,
    pub field_of_view_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub clip_depth: ClipDepth,
    /// Re-orthonormalise the camera basis after every frame of input
    pub renormalize: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            direction: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            speed: 5.0,
            sensitivity: 0.1,
            field_of_view_degrees: 45.0,
            near: 0.01,
            far: 1000.0,
            clip_depth: ClipDepth::ZeroToOne,
            renormalize: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    pub resolution: u32,
    /// Diffuse texture; a procedural checkerboard is used when absent
    pub texture: Option<PathBuf>,
    pub light_direction: [f32; 3],
    pub light_intensity: f32,
    pub ambient: f32,
    pub spin_degrees_per_second: f32,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            resolution: 50,
            texture: None,
            light_direction: [0.0, 0.0, -1.0],
            light_intensity: 1.0,
            ambient: 0.05,
            spin_degrees_per_second: 10.0,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reject settings that would produce degenerate matrices or meshes
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidConfig(msg));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            ));
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return invalid(format!(
                "clip planes need 0 < near < far, got near={} far={}",
                camera.near, camera.far
            ));
        }
        if !(camera.field_of_view_degrees > 0.0 && camera.field_of_view_degrees < 180.0) {
            return invalid(format!(
                "field of view must be in (0, 180) degrees, got {}",
                camera.field_of_view_degrees
            ));
        }
        if !camera.speed.is_finite() || !camera.sensitivity.is_finite() {
            return invalid("camera speed and sensitivity must be finite".to_string());
        }
        if is_zero(camera.direction) {
            return invalid("camera direction must be non-zero".to_string());
        }
        if is_zero(camera.up) {
            return invalid("camera up vector must be non-zero".to_string());
        }

        if !(2..=MAX_SPHERE_RESOLUTION).contains(&self.planet.resolution) {
            return Err(Error::InvalidResolution(self.planet.resolution));
        }
        if is_zero(self.planet.light_direction) {
            return invalid("light direction must be non-zero".to_string());
        }

        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }
}

fn is_zero(v: [f32; 3]) -> bool {
    v.iter().all(|c| *c == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "planet": { "resolution": 12 } }"#).unwrap();
        assert_eq!(config.planet.resolution, 12);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.camera.speed, 5.0);
    }

    #[test]
    fn test_clip_depth_parses_snake_case() {
        let config =
            AppConfig::from_json(r#"{ "camera": { "clip_depth": "negative_one_to_one" } }"#)
                .unwrap();
        assert_eq!(config.camera.clip_depth, ClipDepth::NegativeOneToOne);
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_resolution_upper_bound() {
        let mut config = AppConfig::default();
        config.planet.resolution = MAX_SPHERE_RESOLUTION;
        assert!(config.validate().is_ok());

        config.planet.resolution = MAX_SPHERE_RESOLUTION + 1;
        assert!(matches!(config.validate(), Err(Error::InvalidResolution(_))));
    }

    #[test]
    fn test_aspect_ratio() {
        let config = AppConfig::default();
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}
