use std::f32::consts::{PI, TAU};
use vitrine_structs::Vector3;

/// Phase offset of the second strand of a double helix.
pub const OPPOSITE_STRAND: f32 = PI;

/// Vertical helix centred on the origin, spanning `-length/2 ..= length/2` along Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixLayout {
    pub radius: f32,
    /// Vertical distance per full turn.
    pub pitch: f32,
    pub length: f32,
    /// Number of steps between the two ends; a strand has `samples + 1` points.
    pub samples: usize,
}

/// One base pair: its height and the matching point on each strand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub height: f32,
    pub first: Vector3,
    pub second: Vector3,
}

impl HelixLayout {
    /// Full turns over the whole length. A non-positive pitch collapses to a straight line.
    #[inline]
    pub fn turns(&self) -> f32 {
        if self.pitch > 0.0 {
            self.length / self.pitch
        } else {
            0.0
        }
    }

    /// Point at normalized height `t ∈ [0, 1]` on the strand with phase `offset`.
    pub fn point_at(&self, t: f32, offset: f32) -> Vector3 {
        let angle = t * TAU * self.turns();
        Vector3::new(
            self.radius * (angle + offset).cos(),
            -self.length / 2.0 + t * self.length,
            self.radius * (angle + offset).sin(),
        )
    }

    pub fn strand(&self, offset: f32) -> Vec<Vector3> {
        if self.samples == 0 {
            return Vec::new();
        }
        (0..=self.samples)
            .map(|i| self.point_at(i as f32 / self.samples as f32, offset))
            .collect()
    }

    /// Base pairs centred in `count` equal segments of the length.
    pub fn rungs(&self, count: usize) -> Vec<Rung> {
        if count == 0 {
            return Vec::new();
        }
        let segment = self.length / count as f32;
        (0..count)
            .map(|i| {
                let height = -self.length / 2.0 + i as f32 * segment + segment / 2.0;
                let t = (height + self.length / 2.0) / self.length;
                Rung {
                    height,
                    first: self.point_at(t, 0.0),
                    second: self.point_at(t, OPPOSITE_STRAND),
                }
            })
            .collect()
    }
}
