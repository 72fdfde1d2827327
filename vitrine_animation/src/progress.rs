use rand::Rng;

/// Simulated loading percentage, advanced by random steps that slow down as it fills.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadProgress {
    value: f32,
}

impl LoadProgress {
    pub const COMPLETE: f32 = 100.0;

    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.value >= Self::COMPLETE
    }

    /// `(scale, floor)` of the next step: `rng * scale + floor`.
    pub fn step_range(value: f32) -> (f32, f32) {
        if value < 15.0 {
            (0.8, 0.2)
        } else if value < 60.0 {
            (1.2, 0.3)
        } else if value < 85.0 {
            (0.7, 0.2)
        } else {
            (0.3, 0.1)
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        if self.is_complete() {
            return self.value;
        }
        let (scale, floor) = Self::step_range(self.value);
        let step = rng.gen_range(0.0f32..1.0) * scale + floor;
        self.value = (self.value + step).min(Self::COMPLETE);
        self.value
    }

    pub fn phase(&self) -> LoadPhase {
        LoadPhase::for_progress(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    Initializing,
    LoadingProjects,
    PreparingAssets,
    Finalizing,
    Ready,
}

impl LoadPhase {
    pub fn for_progress(value: f32) -> Self {
        if value < 20.0 {
            LoadPhase::Initializing
        } else if value < 50.0 {
            LoadPhase::LoadingProjects
        } else if value < 80.0 {
            LoadPhase::PreparingAssets
        } else if value < 95.0 {
            LoadPhase::Finalizing
        } else {
            LoadPhase::Ready
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LoadPhase::Initializing => "Initializing",
            LoadPhase::LoadingProjects => "Loading Projects",
            LoadPhase::PreparingAssets => "Preparing Assets",
            LoadPhase::Finalizing => "Finalizing",
            LoadPhase::Ready => "Ready",
        }
    }
}

/// Reveals a title one character per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReveal {
    text: String,
    shown: usize,
}

impl TypeReveal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Shows one more character; returns false once the whole text is visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }
}
