use glam::{Mat4, Vec3};

use crate::camera::FlyCamera;

/// Directional light with a flat ambient term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Direction the light travels in, world space
    pub direction: Vec3,
    pub intensity: f32,
    pub ambient: f32,
}

/// Per-frame uniform buffer data for the lit scene
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_projection: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub light_direction: [f32; 3],
    pub light_intensity: f32,
    pub ambient: f32,
    pub time: f32,
    pub _pad: [f32; 2],
}

impl SceneUniform {
    pub fn new(camera: &FlyCamera, model: Mat4, light: &Light, time: f32) -> Self {
        Self {
            view_projection: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            light_direction: light.direction.normalize().to_array(),
            light_intensity: light.intensity,
            ambient: light.ambient,
            time,
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_uniform_matches_wgsl_layout() {
        // three mat4x4 + vec3 + four scalars, padded to 16 bytes
        assert_eq!(std::mem::size_of::<SceneUniform>(), 224);
        assert_eq!(std::mem::size_of::<SceneUniform>() % 16, 0);
    }

    #[test]
    fn test_light_direction_is_normalised() {
        let light = Light {
            direction: Vec3::new(0.0, 0.0, -4.0),
            intensity: 1.0,
            ambient: 0.1,
        };
        let uniform = SceneUniform::new(&FlyCamera::default(), Mat4::IDENTITY, &light, 0.0);
        assert_eq!(uniform.light_direction, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_normal_matrix_of_rotation_is_rotation() {
        let light = Light {
            direction: Vec3::Y,
            intensity: 1.0,
            ambient: 0.0,
        };
        let model = Mat4::from_rotation_x(0.7);
        let uniform = SceneUniform::new(&FlyCamera::default(), model, &light, 0.0);
        let normal = Mat4::from_cols_array_2d(&uniform.normal_matrix);
        assert!(normal.abs_diff_eq(model, 1e-5));
    }
}
