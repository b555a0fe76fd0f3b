use std::path::Path;

use crate::core::GpuContext;
use crate::error::{Error, Result};

/// Sampled 2D colour texture with its view and sampler
pub struct Texture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl Texture {
    /// Decode an image file (PNG or JPEG) into an sRGB texture
    pub fn from_path(gpu: &GpuContext, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("texture file not found: {}", path.display()),
            )));
        }

        let image = image::open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        log::info!("Loaded texture {} ({}x{})", path.display(), width, height);

        let label = path.display().to_string();
        Ok(Self::from_rgba(gpu, &label, width, height, image.as_raw()))
    }

    /// Procedural two-colour checkerboard
    pub fn checkerboard(gpu: &GpuContext, size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let pixels = checkerboard_pixels(size, cells, a, b);
        log::info!("Using procedural {}x{} checkerboard texture", size, size);
        Self::from_rgba(gpu, "Checkerboard", size, size, &pixels)
    }

    /// Upload tightly packed RGBA8 pixels
    pub fn from_rgba(gpu: &GpuContext, label: &str, width: u32, height: u32, pixels: &[u8]) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        gpu.queue().write_texture(
            texture.as_image_copy(),
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = gpu.device().create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Fragment-stage layout: texture at `binding`, sampler at `binding + 1`
    pub fn bind_group_layout_entries(binding: u32) -> [wgpu::BindGroupLayoutEntry; 2] {
        [
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: binding + 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ]
    }

    pub fn bind_group_entries(&self, binding: u32) -> [wgpu::BindGroupEntry<'_>; 2] {
        [
            wgpu::BindGroupEntry {
                binding,
                resource: wgpu::BindingResource::TextureView(&self.view),
            },
            wgpu::BindGroupEntry {
                binding: binding + 1,
                resource: wgpu::BindingResource::Sampler(&self.sampler),
            },
        ]
    }
}

/// RGBA8 pixels of a `size` x `size` board with `cells` squares per side
pub fn checkerboard_pixels(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    let cell = (size / cells.max(1)).max(1);

    (0..size)
        .flat_map(|y| {
            (0..size).flat_map(move |x| {
                if (x / cell + y / cell) % 2 == 0 {
                    a
                } else {
                    b
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn pixel(pixels: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn test_checkerboard_size() {
        let pixels = checkerboard_pixels(16, 4, WHITE, BLACK);
        assert_eq!(pixels.len(), 16 * 16 * 4);
    }

    #[test]
    fn test_checkerboard_alternates_cells() {
        let pixels = checkerboard_pixels(8, 2, WHITE, BLACK);
        assert_eq!(pixel(&pixels, 8, 0, 0), WHITE);
        assert_eq!(pixel(&pixels, 8, 3, 3), WHITE);
        assert_eq!(pixel(&pixels, 8, 4, 0), BLACK);
        assert_eq!(pixel(&pixels, 8, 0, 4), BLACK);
        assert_eq!(pixel(&pixels, 8, 7, 7), WHITE);
    }

    #[test]
    fn test_checkerboard_zero_cells_is_single_colour() {
        let pixels = checkerboard_pixels(4, 0, WHITE, BLACK);
        assert!(pixels.chunks(4).all(|p| p == WHITE));
    }

    #[test]
    fn test_layout_entries_bindings() {
        let entries = Texture::bind_group_layout_entries(1);
        assert_eq!(entries[0].binding, 1);
        assert_eq!(entries[1].binding, 2);
    }
}
