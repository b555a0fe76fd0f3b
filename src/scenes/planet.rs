use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::FlyCamera;
use crate::config::AppConfig;
use crate::core::{Button, Controller, GpuContext, InputState};
use crate::error::{Error, Result};
use crate::frame::FrameInfo;
use crate::geometry::{generate_sphere, sphere_buffer_size};
use crate::render::{create_mesh_pipeline, GpuMesh, MeshPipelineDescriptor, Texture};
use crate::types::{Light, SceneUniform};

use super::quad::load_texture;
use super::Scene;

/// Drive a fly camera from one frame of input.
///
/// W/S move along the view direction, D/A strafe, and dragging with the
/// right mouse button held turns the view. `delta` is the frame time in
/// seconds, so movement is `speed` units per second.
pub fn apply_fly_input(camera: &mut FlyCamera, input: &InputState, delta: f32, renormalize: bool) {
    let forward = input.axis(Button::KeyW, Button::KeyS);
    if forward != 0.0 {
        camera.move_forward(forward * delta);
    }

    let right = input.axis(Button::KeyD, Button::KeyA);
    if right != 0.0 {
        camera.move_right(right * delta);
    }

    if input.is_down(Button::MouseRight) {
        let (dx, dy) = input.cursor_delta();
        if dx != 0.0 || dy != 0.0 {
            camera.look(-dx, -dy);
        }
    }

    if renormalize {
        camera.orthonormalize();
    }
}

/// Fail early when the sphere's vertex buffer would exceed the device limit
pub fn check_sphere_fits(resolution: u32, max_buffer_size: u64) -> Result<()> {
    let needed = sphere_buffer_size(resolution);
    if needed > max_buffer_size {
        return Err(Error::InvalidConfig(format!(
            "sphere resolution {} needs a {} byte buffer, device allows {}",
            resolution, needed, max_buffer_size
        )));
    }
    Ok(())
}

/// Spinning, lit, textured unit sphere
pub struct PlanetScene {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    mesh: GpuMesh,
    _texture: Texture,
    camera: FlyCamera,
    light: Light,
    renormalize: bool,
    spin: f32,
    time: f32,
}

impl PlanetScene {
    pub fn new(
        gpu: &GpuContext,
        format: wgpu::TextureFormat,
        config: &AppConfig,
        aspect_ratio: f32,
    ) -> Result<Self> {
        let device = gpu.device();
        check_sphere_fits(config.planet.resolution, device.limits().max_buffer_size)?;
        let sphere = generate_sphere(config.planet.resolution)?;
        let texture = load_texture(gpu, config)?;

        let camera = FlyCamera::from_config(&config.camera, aspect_ratio);
        let light = Light {
            direction: Vec3::from_array(config.planet.light_direction),
            intensity: config.planet.light_intensity,
            ambient: config.planet.ambient,
        };

        let uniform = SceneUniform::new(&camera, Self::model_matrix(0.0), &light, 0.0);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Planet Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let mut layout_entries = vec![wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }];
        layout_entries.extend(Texture::bind_group_layout_entries(1));

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Planet Bind Group Layout"),
            entries: &layout_entries,
        });

        let mut entries = vec![wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }];
        entries.extend(texture.bind_group_entries(1));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Planet Bind Group"),
            layout: &layout,
            entries: &entries,
        });

        let pipeline = create_mesh_pipeline(
            device,
            &MeshPipelineDescriptor {
                label: "Planet Pipeline",
                shader_source: include_str!("../shaders/planet.wgsl"),
                bind_group_layouts: &[&layout],
                color_format: format,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let mesh = GpuMesh::upload(device, "Planet", &sphere);

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
            mesh,
            _texture: texture,
            camera,
            light,
            renormalize: config.camera.renormalize,
            spin: config.planet.spin_degrees_per_second.to_radians(),
            time: 0.0,
        })
    }

    /// The generated sphere has its poles on Z; turn them onto world Y
    fn model_matrix(spin_angle: f32) -> Mat4 {
        Mat4::from_rotation_y(spin_angle) * Mat4::from_rotation_x(-FRAC_PI_2)
    }
}

impl Scene for PlanetScene {
    fn name(&self) -> &str {
        "planet"
    }

    fn update(&mut self, frame: &FrameInfo, input: &InputState) {
        self.time = frame.time;
        apply_fly_input(&mut self.camera, input, frame.delta, self.renormalize);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect_ratio(width, height);
    }

    fn prepare(&mut self, gpu: &GpuContext) {
        let model = Self::model_matrix(self.spin * self.time);
        let uniform = SceneUniform::new(&self.camera, model, &self.light, self.time);
        gpu.queue()
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        self.mesh.draw(pass);
    }
}
