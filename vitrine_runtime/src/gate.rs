#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Fires the first time the section crosses the threshold, never again.
    Once,
    /// Reports every crossing in either direction.
    Repeat,
}

/// Scroll-driven entrance trigger for one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceGate {
    pub threshold: f32,
    pub policy: RevealPolicy,
    revealed: bool,
    fired: bool,
}

impl EntranceGate {
    pub fn new(threshold: f32, policy: RevealPolicy) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            policy,
            revealed: false,
            fired: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds the visible fraction of the section. Returns the new reveal
    /// state when it changes.
    pub fn observe(&mut self, visible_ratio: f32) -> Option<bool> {
        let inside = visible_ratio > 0.0 && visible_ratio >= self.threshold;
        match self.policy {
            RevealPolicy::Once => {
                if self.fired || !inside {
                    return None;
                }
                self.fired = true;
                self.revealed = true;
                Some(true)
            }
            RevealPolicy::Repeat => {
                if inside == self.revealed {
                    return None;
                }
                self.revealed = inside;
                Some(inside)
            }
        }
    }
}

/// Fraction of a section `[top, top + height)` inside the window
/// `[scroll, scroll + viewport_height)`.
pub fn visible_ratio(scroll: f32, viewport_height: f32, top: f32, height: f32) -> f32 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let start = scroll.max(top);
    let end = (scroll + viewport_height).min(top + height);
    ((end - start) / height).clamp(0.0, 1.0)
}
