use rand::Rng;
use std::f32::consts::PI;
use vitrine_structs::Vector3;

/// Standard spherical-to-Cartesian mapping, `phi` measured from +Z.
#[inline]
pub fn spherical_to_cartesian(radius: f32, phi: f32, theta: f32) -> Vector3 {
    Vector3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Even distribution of `total` points on a sphere (Fibonacci-style spiral).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalLayout {
    pub radius: f32,
}

impl SphericalLayout {
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// `(phi, theta)` for `index`; the acos argument is clamped so indices past `total` stay finite.
    pub fn angles(&self, index: usize, total: usize) -> Option<(f32, f32)> {
        if total == 0 {
            return None;
        }
        let phi = (-1.0 + 2.0 * index as f32 / total as f32)
            .clamp(-1.0, 1.0)
            .acos();
        let theta = (total as f32 * PI).sqrt() * phi;
        Some((phi, theta))
    }

    pub fn position(&self, index: usize, total: usize) -> Option<Vector3> {
        let (phi, theta) = self.angles(index, total)?;
        Some(spherical_to_cartesian(self.radius, phi, theta))
    }

    pub fn positions(&self, total: usize) -> Vec<Vector3> {
        (0..total).filter_map(|i| self.position(i, total)).collect()
    }
}

/// An item pinned to a shell at a fixed azimuth whose polar angle is drawn once from `rng`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellPlacement {
    pub radius: f32,
    pub theta: f32,
}

impl ShellPlacement {
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        let phi = rng.gen_range(0.0..PI);
        spherical_to_cartesian(self.radius, phi, self.theta)
    }
}
