use crate::{Quaternion, Vector3};
use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    pub position: Vector3,
    pub scale: Vector3,
    pub rotation: Quaternion,
}

impl Transform3D {
    pub const IDENTITY: Self = Self {
        position: Vector3::ZERO,
        scale: Vector3::ONE,
        rotation: Quaternion::IDENTITY,
    };

    #[inline]
    pub const fn new(pos: Vector3, rot: Quaternion, scale: Vector3) -> Self {
        Self {
            position: pos,
            scale,
            rotation: rot,
        }
    }

    #[inline]
    pub const fn from_position(pos: Vector3) -> Self {
        Self {
            position: pos,
            scale: Vector3::ONE,
            rotation: Quaternion::IDENTITY,
        }
    }

    /// Position plus XYZ Euler rotation, unit scale.
    #[inline]
    pub fn from_euler(pos: Vector3, euler: Vector3) -> Self {
        Self {
            position: pos,
            scale: Vector3::ONE,
            rotation: Quaternion::from_euler_xyz(euler.x, euler.y, euler.z),
        }
    }

    #[inline]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::splat(scale);
        self
    }

    #[inline]
    pub fn set_euler(&mut self, euler: Vector3) {
        self.rotation = Quaternion::from_euler_xyz(euler.x, euler.y, euler.z);
    }

    /// Convert to a Mat4 for transformations (TRS order)
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale.into(),
            self.rotation.into(),
            self.position.into(),
        )
    }

    /// Create from a Mat4 (extracts TRS components)
    #[inline]
    pub fn from_mat4(mat: Mat4) -> Self {
        let (scale, rotation, position) = mat.to_scale_rotation_translation();

        Self {
            position: position.into(),
            scale: scale.into(),
            rotation: rotation.into(),
        }
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.to_mat4().transform_point3(point.into()).into()
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
