//! Interactive pinhole camera.
//!
//! The camera stores its position plus accumulated yaw and pitch; the
//! orthonormal basis is derived from those angles on demand rather
//! than integrated incrementally, so it can never drift or skew.

use glint_math::{Mat4, Mat4Ext, Vec2, Vec3};

const MOVEMENT_SPEED: f32 = 6.0;

/// Per-frame input state consumed by [`Camera::update`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraInput {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Relative mouse motion this frame, in pixels
    pub mouse_delta: Vec2,
    pub left_button: bool,
    pub right_button: bool,
}

/// A pinhole camera with a vertical field of view in degrees.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    pub fov_angle: f32,
    total_yaw: f32,
    total_pitch: f32,
}

impl Camera {
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            total_yaw: 0.0,
            total_pitch: 0.0,
        }
    }

    /// Half-angle tangent used to scale screen-space coordinates.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    /// Unit view direction derived from the accumulated angles.
    ///
    /// Pitch is applied to the vertex first, then yaw, matching the
    /// camera-to-world basis.
    pub fn forward(&self) -> Vec3 {
        let rotation = Mat4::from_rotation_y(self.total_yaw) * Mat4::from_rotation_x(self.total_pitch);
        rotation.transform_vector3(Vec3::Z).normalize()
    }

    /// Camera-to-world matrix: columns are right, up, forward, origin.
    ///
    /// The basis is re-derived from yaw and pitch against the world up
    /// axis every call.
    pub fn camera_to_world(&self) -> Mat4 {
        let forward = self.forward();
        let right = Vec3::Y.cross(forward).normalize();
        let up = forward.cross(right).normalize();

        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            self.origin.extend(1.0),
        )
    }

    /// Advance the camera one frame.
    ///
    /// WASD translates along the current forward/right axes. With only
    /// the left button held, vertical mouse motion dollies and
    /// horizontal motion yaws at half rate; with only the right button
    /// held, the mouse orbits (pitch and yaw).
    pub fn update(&mut self, delta_time: f32, input: &CameraInput) {
        let forward = self.forward();
        let right = Vec3::Y.cross(forward).normalize();

        if input.move_forward {
            self.origin += forward * delta_time * MOVEMENT_SPEED;
        }
        if input.move_backward {
            self.origin -= forward * delta_time * MOVEMENT_SPEED;
        }
        if input.move_left {
            self.origin -= right * delta_time * MOVEMENT_SPEED;
        }
        if input.move_right {
            self.origin += right * delta_time * MOVEMENT_SPEED;
        }

        if input.left_button && !input.right_button {
            self.origin -= forward * input.mouse_delta.y * delta_time * 2.0;
            self.total_yaw += input.mouse_delta.x * delta_time / 2.0;
        }
        if input.right_button && !input.left_button {
            self.total_pitch += input.mouse_delta.y * delta_time;
            self.total_yaw += input.mouse_delta.x * delta_time;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}
