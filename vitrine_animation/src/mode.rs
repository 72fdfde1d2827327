/// Discrete animation regime of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationMode {
    #[default]
    Idle,
    Active,
}

/// One parameter set per mode. Switching is instantaneous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams<T> {
    pub idle: T,
    pub active: T,
}

impl<T> ModeParams<T> {
    pub const fn new(idle: T, active: T) -> Self {
        Self { idle, active }
    }

    #[inline]
    pub fn get(&self, mode: AnimationMode) -> &T {
        match mode {
            AnimationMode::Idle => &self.idle,
            AnimationMode::Active => &self.active,
        }
    }
}
