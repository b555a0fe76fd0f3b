mod blank;
mod planet;
mod quad;
mod triangle;

pub use blank::BlankScene;
pub use planet::{apply_fly_input, check_sphere_fits, PlanetScene};
pub use quad::QuadScene;
pub use triangle::TriangleScene;

use crate::config::AppConfig;
use crate::core::{GpuContext, InputState};
use crate::error::Result;
use crate::frame::FrameInfo;

/// One demo drawn into the window every frame
///
/// The app shell calls `update`, then `prepare`, then `render` inside the
/// frame's render pass.
pub trait Scene {
    fn name(&self) -> &str;

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color::BLACK
    }

    /// Advance simulation state from this frame's input
    fn update(&mut self, _frame: &FrameInfo, _input: &InputState) {}

    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Upload per-frame data before the render pass begins
    fn prepare(&mut self, _gpu: &GpuContext) {}

    fn render(&self, _pass: &mut wgpu::RenderPass<'_>) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Empty window, cleared every frame
    Blank,
    Triangle,
    Quad,
    Planet,
}

impl SceneKind {
    pub fn build(
        self,
        gpu: &GpuContext,
        format: wgpu::TextureFormat,
        config: &AppConfig,
        aspect_ratio: f32,
    ) -> Result<Box<dyn Scene>> {
        let scene: Box<dyn Scene> = match self {
            SceneKind::Blank => Box::new(BlankScene),
            SceneKind::Triangle => Box::new(TriangleScene::new(gpu, format)),
            SceneKind::Quad => Box::new(QuadScene::new(gpu, format, config)?),
            SceneKind::Planet => Box::new(PlanetScene::new(gpu, format, config, aspect_ratio)?),
        };
        log::info!("Started scene '{}'", scene.name());
        Ok(scene)
    }
}
