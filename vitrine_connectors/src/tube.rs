use vitrine_structs::{Quaternion, Transform3D, Vector3};

/// A cylinder spanning two positions.
///
/// The unit primitive is a cylinder of height 1 and diameter 1 centred on the
/// origin with its long axis on +Y. [`Tube::to_transform`] rotates it onto the
/// segment and scales the long axis in local space, so the cross-section stays
/// round at any orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    pub start: Vector3,
    pub end: Vector3,
    pub midpoint: Vector3,
    pub length: f32,
    pub rotation: Quaternion,
    pub radius: f32,
}

impl Tube {
    pub fn between(start: Vector3, end: Vector3, radius: f32) -> Self {
        let direction = end - start;
        Self {
            start,
            end,
            midpoint: Vector3::midpoint(start, end),
            length: direction.length(),
            rotation: Quaternion::from_rotation_arc(Vector3::UP, direction),
            radius,
        }
    }

    pub fn to_transform(&self) -> Transform3D {
        Transform3D::new(
            self.midpoint,
            self.rotation,
            Vector3::new(self.radius * 2.0, self.length, self.radius * 2.0),
        )
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length <= f32::EPSILON
    }
}
