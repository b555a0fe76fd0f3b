// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "blue-planet")]
#[command(about = "Fly-camera demos around a textured planet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub demo: Option<Demo>,

    /// JSON settings file; flags below override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub width: Option<u32>,

    #[arg(long, global = true)]
    pub height: Option<u32>,

    /// Sphere subdivisions along each axis
    #[arg(long, global = true)]
    pub resolution: Option<u32>,

    /// Image used by the quad and planet demos
    #[arg(long, global = true)]
    pub texture: Option<PathBuf>,

    /// Re-orthonormalise the camera after every frame
    #[arg(long, global = true, default_value = "false")]
    pub renormalize: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Print matrix construction and translation
    Matrices,
    /// Print vector constructors, swizzles and operations
    Vectors,
    /// Open an empty window
    Window,
    /// Draw a vertex-coloured triangle
    Triangle,
    /// Draw a textured quad
    Quad,
    /// Fly around a lit, spinning planet
    Planet,
}

impl Demo {
    /// Scene to open, or `None` for the text-only demos
    pub fn scene(self) -> Option<SceneKind> {
        match self {
            Demo::Matrices | Demo::Vectors => None,
            Demo::Window => Some(SceneKind::Blank),
            Demo::Triangle => Some(SceneKind::Triangle),
            Demo::Quad => Some(SceneKind::Quad),
            Demo::Planet => Some(SceneKind::Planet),
        }
    }
}

impl Cli {
    pub fn demo(&self) -> Demo {
        self.demo.unwrap_or(Demo::Planet)
    }

    /// Apply flag overrides on top of a loaded or default config
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(resolution) = self.resolution {
            config.planet.resolution = resolution;
        }
        if let Some(texture) = &self.texture {
            config.planet.texture = Some(texture.clone());
        }
        if self.renormalize {
            config.camera.renormalize = true;
        }
    }
}
