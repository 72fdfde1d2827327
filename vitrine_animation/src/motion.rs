use std::f32::consts::{PI, TAU};

/// Time handed to every per-frame updater. Seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameTime {
    pub const fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Same frame seen through a slower or faster clock.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            elapsed: self.elapsed * factor,
            delta: self.delta * factor,
        }
    }
}

/// Constant angular velocity in radians per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub speed: f32,
}

impl Spin {
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Angle as a pure function of elapsed time.
    #[inline]
    pub fn absolute(&self, elapsed: f32) -> f32 {
        elapsed * self.speed
    }

    /// Angle advanced from `current` by one frame.
    #[inline]
    pub fn incremental(&self, current: f32, delta: f32) -> f32 {
        current + self.speed * delta
    }
}

/// `base + amplitude * sin(t * frequency + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl Oscillator {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            base: 0.0,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub const fn with_base(mut self, base: f32) -> Self {
        self.base = base;
        self
    }

    pub const fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.base + self.amplitude * (t * self.frequency + self.phase).sin()
    }

    /// `None` for a zero frequency (constant output).
    pub fn period(&self) -> Option<f32> {
        (self.frequency != 0.0).then(|| TAU / self.frequency.abs())
    }
}

/// Wraps an angle into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Turns `current` toward `target` along the shorter way round, at most `max_step` radians.
pub fn approach_angle(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    let step = max_step.max(0.0);
    if diff.abs() <= step {
        current + diff
    } else {
        current + step * diff.signum()
    }
}
