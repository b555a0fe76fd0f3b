use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

/// Depth range of the clip space the projection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipDepth {
    /// wgpu, Vulkan, Metal and D3D: z in [0, 1]
    #[default]
    ZeroToOne,
    /// OpenGL: z in [-1, 1]
    NegativeOneToOne,
}

/// Free-flying perspective camera.
///
/// `direction` and `up` are never renormalised by the camera itself, so
/// repeated calls to [`FlyCamera::look`] accumulate drift away from an
/// orthonormal basis. Call [`FlyCamera::orthonormalize`] to correct it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    pub speed: f32,
    pub sensitivity: f32,
    /// Vertical field of view in radians
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub clip_depth: ClipDepth,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            speed: 5.0,
            sensitivity: 0.1,
            field_of_view: 45.0_f32.to_radians(),
            aspect_ratio: 800.0 / 600.0,
            near: 0.01,
            far: 1000.0,
            clip_depth: ClipDepth::ZeroToOne,
        }
    }
}

impl FlyCamera {
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            direction: Vec3::from_array(config.direction),
            up: Vec3::from_array(config.up),
            speed: config.speed,
            sensitivity: config.sensitivity,
            field_of_view: config.field_of_view_degrees.to_radians(),
            aspect_ratio,
            near: config.near,
            far: config.far,
            clip_depth: config.clip_depth,
        }
    }

    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// Move along the view direction. A zero direction produces NaN.
    pub fn move_forward(&mut self, amount: f32) {
        self.position += self.direction.normalize() * amount * self.speed;
    }

    /// Strafe along `direction × up`. Parallel direction and up produce NaN.
    pub fn move_right(&mut self, amount: f32) {
        let right = self.direction.cross(self.up).normalize();
        self.position += right * amount * self.speed;
    }

    /// Rotate the view by yaw and pitch deltas, in degrees before sensitivity.
    ///
    /// Yaw turns about the current up axis and pitch about the current right
    /// axis, both taken from the state before the call. `up` only receives
    /// the pitch; `direction` receives yaw after pitch.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let yaw = (yaw_delta * self.sensitivity).to_radians();
        let pitch = (pitch_delta * self.sensitivity).to_radians();

        let right = self.direction.cross(self.up).normalize();
        let yaw_rotation = Mat3::from_axis_angle(self.up.normalize(), yaw);
        let pitch_rotation = Mat3::from_axis_angle(right, pitch);

        self.up = pitch_rotation * self.up;
        self.direction = yaw_rotation * pitch_rotation * self.direction;
    }

    /// Renormalise `direction` and rebuild `up` perpendicular to it.
    pub fn orthonormalize(&mut self) {
        let direction = self.direction.normalize();
        let right = direction.cross(self.up).normalize();
        self.direction = direction;
        self.up = right.cross(direction);
    }

    /// Right-handed look-at view matrix
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        match self.clip_depth {
            ClipDepth::ZeroToOne => {
                Mat4::perspective_rh(self.field_of_view, self.aspect_ratio, self.near, self.far)
            }
            ClipDepth::NegativeOneToOne => {
                Mat4::perspective_rh_gl(self.field_of_view, self.aspect_ratio, self.near, self.far)
            }
        }
    }

    /// World space straight to clip space: `projection * view`
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
