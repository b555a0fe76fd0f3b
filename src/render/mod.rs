mod mesh_buffer;
mod pipeline;
mod surface;
mod texture;

pub use mesh_buffer::GpuMesh;
pub use pipeline::{create_mesh_pipeline, MeshPipelineDescriptor};
pub use surface::SurfaceTarget;
pub use texture::{checkerboard_pixels, Texture};

/// Depth buffer format shared by the surface target and every pipeline
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
