use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::ops::Range;
use vitrine_structs::Vector3;

use crate::spherical::spherical_to_cartesian;

/// Where particles are scattered.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Uniform over the surface of a sphere.
    UniformShell { radius: f32 },
    /// Thick shell restricted to a polar band (fractions of π), flattened along Y.
    BandedShell {
        min_radius: f32,
        max_radius: f32,
        polar_band: Range<f32>,
        y_squash: f32,
    },
    /// Uniform inside an axis-aligned box.
    Box { half_extents: Vector3, center: Vector3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStyle {
    pub size: Range<f32>,
    pub opacity: Range<f32>,
    /// Probability that a particle uses the accent color.
    pub accent_ratio: f32,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            size: 0.02..0.07,
            opacity: 0.3..0.8,
            accent_ratio: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector3,
    pub size: f32,
    pub opacity: f32,
    pub accent: bool,
}

/// A decorative point cloud, generated once from a seeded RNG and frozen afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

/// `gen_range` panics on empty ranges; a collapsed range yields its start.
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl Distribution {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        match self {
            Distribution::UniformShell { radius } => {
                let theta = rng.gen_range(0.0..TAU);
                let phi = (2.0 * rng.gen_range(0.0f32..1.0) - 1.0).clamp(-1.0, 1.0).acos();
                spherical_to_cartesian(*radius, phi, theta)
            }
            Distribution::BandedShell {
                min_radius,
                max_radius,
                polar_band,
                y_squash,
            } => {
                let radius = sample(rng, &(*min_radius..*max_radius));
                let theta = rng.gen_range(0.0..TAU);
                let phi = sample(rng, polar_band) * PI;
                let p = spherical_to_cartesian(radius, phi, theta);
                Vector3::new(p.x, p.y * y_squash, p.z)
            }
            Distribution::Box {
                half_extents,
                center,
            } => {
                let h = *half_extents;
                *center
                    + Vector3::new(
                        sample(rng, &(-h.x..h.x)),
                        sample(rng, &(-h.y..h.y)),
                        sample(rng, &(-h.z..h.z)),
                    )
            }
        }
    }
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, distribution: &Distribution, rng: &mut R) -> Self {
        Self::generate_styled(count, distribution, &ParticleStyle::default(), rng)
    }

    pub fn generate_styled<R: Rng + ?Sized>(
        count: usize,
        distribution: &Distribution,
        style: &ParticleStyle,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: distribution.sample(rng),
                size: sample(rng, &style.size),
                opacity: sample(rng, &style.opacity),
                accent: rng.gen_bool(style.accent_ratio.clamp(0.0, 1.0) as f64),
            })
            .collect();
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
