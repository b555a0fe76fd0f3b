use wgpu::{Surface, SurfaceConfiguration, TextureView};

use crate::core::{GpuContext, WindowDimensions};
use crate::error::Result;

use super::DEPTH_FORMAT;

/// Window surface plus a matching depth buffer
///
/// Every frame is drawn through [`SurfaceTarget::draw`], which clears colour
/// and depth, hands the pass to the caller, then submits and presents.
pub struct SurfaceTarget {
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    depth_view: TextureView,
}

impl SurfaceTarget {
    pub fn new(gpu: &GpuContext, surface: Surface<'static>, size: WindowDimensions) -> Self {
        let caps = surface.get_capabilities(gpu.adapter());
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);
        log::info!(
            "Configured surface {}x{} as {:?}",
            config.width,
            config.height,
            format
        );

        let depth_view = Self::create_depth_view(gpu.device(), config.width, config.height);

        Self {
            surface,
            config,
            depth_view,
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.config.width, self.config.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.dimensions().aspect_ratio()
    }

    /// Resize the surface and depth buffer; a zero-sized window is ignored
    pub fn resize(&mut self, gpu: &GpuContext, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.reconfigure(gpu);
        self.depth_view = Self::create_depth_view(gpu.device(), width, height);
    }

    /// Reapply the current configuration after the surface was lost
    pub fn reconfigure(&self, gpu: &GpuContext) {
        self.surface.configure(gpu.device(), &self.config);
    }

    /// Record one frame into the window
    pub fn draw<F>(&self, gpu: &GpuContext, clear: wgpu::Color, record: F) -> Result<()>
    where
        F: FnOnce(&mut wgpu::RenderPass<'_>),
    {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            record(&mut pass);
        }

        gpu.queue().submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
