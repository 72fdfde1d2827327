use std::ops::{Add, Mul, Sub};
use vitrine_structs::Vector3;

/// How far a damped value moves toward its target in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Damping {
    /// Constant fraction per frame. Result depends on frame rate.
    Fixed(f32),
    /// Fraction `1 - exp(-rate * delta)`, frame-rate independent.
    Exponential { rate: f32 },
}

impl Damping {
    /// Blend factor for this frame, clamped to `[0, 1]` so a step can never overshoot.
    pub fn factor(&self, delta: f32) -> f32 {
        let k = match *self {
            Damping::Fixed(k) => k,
            Damping::Exponential { rate } => 1.0 - (-rate * delta.max(0.0)).exp(),
        };
        k.clamp(0.0, 1.0)
    }
}

/// Value types that can be blended toward a target.
pub trait Blend: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {}

impl Blend for f32 {}
impl Blend for Vector3 {}

/// A smoothed value chasing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped<T> {
    pub current: T,
    pub target: T,
    pub damping: Damping,
}

impl<T: Blend> Damped<T> {
    pub const fn new(initial: T, damping: Damping) -> Self {
        Self {
            current: initial,
            target: initial,
            damping,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Advances one frame and returns the new value.
    pub fn step(&mut self, delta: f32) -> T {
        let k = self.damping.factor(delta);
        self.current = self.current + (self.target - self.current) * k;
        self.current
    }

    #[inline]
    pub fn value(&self) -> T {
        self.current
    }
}
