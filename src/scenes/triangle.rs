use crate::core::GpuContext;
use crate::geometry::colored_triangle;
use crate::render::{create_mesh_pipeline, GpuMesh, MeshPipelineDescriptor};

use super::Scene;

/// One triangle with per-vertex colours interpolated across it
pub struct TriangleScene {
    pipeline: wgpu::RenderPipeline,
    mesh: GpuMesh,
}

impl TriangleScene {
    pub fn new(gpu: &GpuContext, format: wgpu::TextureFormat) -> Self {
        let pipeline = create_mesh_pipeline(
            gpu.device(),
            &MeshPipelineDescriptor {
                label: "Triangle Pipeline",
                shader_source: include_str!("../shaders/triangle.wgsl"),
                bind_group_layouts: &[],
                color_format: format,
                cull_mode: None,
            },
        );
        let mesh = GpuMesh::upload(gpu.device(), "Triangle", &colored_triangle());

        Self { pipeline, mesh }
    }
}

impl Scene for TriangleScene {
    fn name(&self) -> &str {
        "triangle"
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
        self.mesh.draw(pass);
    }
}
