use super::Scene;

/// Window with nothing but a clear colour
pub struct BlankScene;

impl Scene for BlankScene {
    fn name(&self) -> &str {
        "blank"
    }

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: 0.2,
            g: 0.3,
            b: 0.3,
            a: 1.0,
        }
    }
}
