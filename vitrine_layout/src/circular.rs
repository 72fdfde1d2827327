use std::f32::consts::{PI, TAU};
use vitrine_structs::Vector3;

/// Vertical perturbation `y = amplitude * sin(angle * frequency + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalWave {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl VerticalWave {
    pub const FLAT: Self = Self {
        amplitude: 0.0,
        frequency: 0.0,
        phase: 0.0,
    };

    #[inline]
    pub fn sample(&self, angle: f32) -> f32 {
        self.amplitude * (angle * self.frequency + self.phase).sin()
    }
}

/// Items evenly spaced on a horizontal circle, first item on +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    pub radius: f32,
    pub start_angle: f32,
    pub wave: VerticalWave,
}

impl CircularLayout {
    pub const fn new(radius: f32) -> Self {
        Self {
            radius,
            start_angle: 0.0,
            wave: VerticalWave::FLAT,
        }
    }

    pub const fn with_wave(mut self, wave: VerticalWave) -> Self {
        self.wave = wave;
        self
    }

    pub const fn with_start_angle(mut self, start_angle: f32) -> Self {
        self.start_angle = start_angle;
        self
    }

    /// Angle of `index` around the ring, or `None` for an empty ring.
    #[inline]
    pub fn angle(&self, index: usize, total: usize) -> Option<f32> {
        if total == 0 {
            return None;
        }
        Some(TAU * index as f32 / total as f32 + self.start_angle)
    }

    pub fn position(&self, index: usize, total: usize) -> Option<Vector3> {
        let angle = self.angle(index, total)?;
        Some(Vector3::new(
            self.radius * angle.sin(),
            self.wave.sample(angle),
            self.radius * angle.cos(),
        ))
    }

    pub fn positions(&self, total: usize) -> Vec<Vector3> {
        (0..total).filter_map(|i| self.position(i, total)).collect()
    }

    /// Yaw turning an item's +Z face away from the ring center.
    pub fn facing_yaw(&self, index: usize, total: usize) -> Option<f32> {
        let p = self.position(index, total)?;
        Some(p.x.atan2(p.z))
    }

    /// Yaw turning an item's +Z face toward the ring center.
    pub fn inward_yaw(&self, index: usize, total: usize) -> Option<f32> {
        Some(self.angle(index, total)? + PI)
    }
}
