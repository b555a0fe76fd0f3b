use crate::config::AppConfig;
use crate::core::GpuContext;
use crate::error::Result;
use crate::geometry::textured_quad;
use crate::render::{create_mesh_pipeline, GpuMesh, MeshPipelineDescriptor, Texture};

use super::Scene;

const CHECKER_LIGHT: [u8; 4] = [230, 230, 230, 255];
const CHECKER_DARK: [u8; 4] = [40, 90, 160, 255];

/// Texture to draw: the configured file, or a checkerboard when none is set
pub(crate) fn load_texture(gpu: &GpuContext, config: &AppConfig) -> Result<Texture> {
    match &config.planet.texture {
        Some(path) => Texture::from_path(gpu, path),
        None => Ok(Texture::checkerboard(gpu, 256, 16, CHECKER_LIGHT, CHECKER_DARK)),
    }
}

/// Textured square covering the middle of the window
pub struct QuadScene {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    mesh: GpuMesh,
    // Sampled by the bind group
    _texture: Texture,
}

impl QuadScene {
    pub fn new(gpu: &GpuContext, format: wgpu::TextureFormat, config: &AppConfig) -> Result<Self> {
        let device = gpu.device();
        let texture = load_texture(gpu, config)?;

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Quad Bind Group Layout"),
            entries: &Texture::bind_group_layout_entries(0),
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Quad Bind Group"),
            layout: &layout,
            entries: &texture.bind_group_entries(0),
        });

        let pipeline = create_mesh_pipeline(
            device,
            &MeshPipelineDescriptor {
                label: "Quad Pipeline",
                shader_source: include_str!("../shaders/textured.wgsl"),
                bind_group_layouts: &[&layout],
                color_format: format,
                cull_mode: None,
            },
        );
        let mesh = GpuMesh::upload(device, "Quad", &textured_quad(0.5));

        Ok(Self {
            pipeline,
            bind_group,
            mesh,
            _texture: texture,
        })
    }
}

impl Scene for QuadScene {
    fn name(&self) -> &str {
        "quad"
    }

    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: 0.2,
            g: 0.3,
            b: 0.3,
            a: 1.0,
        }
    }

    fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}
