/// Per-draw model transform.
///
/// The model matrix is always composed as
/// `Translation * RotationX * RotationY * RotationZ * Scale`.
/// Every literal coordinate in the scene layout was authored against this
/// exact order; changing it moves every object.

use glam::{Mat4, Vec3};

/// Scale, Euler rotation (degrees, applied Z then Y then X to the scaled
/// mesh) and position of one draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation_degrees: Vec3,
    pub position: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: Vec3::ONE,
        rotation_degrees: Vec3::ZERO,
        position: Vec3::ZERO,
    };

    pub const fn new(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self { scale, rotation_degrees, position }
    }

    /// Unrotated transform
    pub const fn scaled_at(scale: Vec3, position: Vec3) -> Self {
        Self::new(scale, Vec3::ZERO, position)
    }

    /// Transform rotated about the Y axis only
    pub const fn yawed(scale: Vec3, y_degrees: f32, position: Vec3) -> Self {
        Self::new(scale, Vec3::new(0.0, y_degrees, 0.0), position)
    }

    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.scale, self.rotation_degrees.x, self.rotation_degrees.y, self.rotation_degrees.z, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `T(position) * Rx * Ry * Rz * S(scale)`, angles in degrees
pub fn model_matrix(scale: Vec3, x_degrees: f32, y_degrees: f32, z_degrees: f32, position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_x(x_degrees.to_radians())
        * Mat4::from_rotation_y(y_degrees.to_radians())
        * Mat4::from_rotation_z(z_degrees.to_radians())
        * Mat4::from_scale(scale)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
