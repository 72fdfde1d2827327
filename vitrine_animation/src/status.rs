use std::fmt;

use crate::mode::AnimationMode;

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub const fn mode(self) -> AnimationMode {
        match self {
            SubmissionStatus::Sending => AnimationMode::Active,
            SubmissionStatus::Idle | SubmissionStatus::Success | SubmissionStatus::Error => {
                AnimationMode::Idle
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// Terminal states wait for a reset back to idle.
    pub const fn is_settled(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEvent {
    Submit,
    Delivered,
    DeliveryFailed,
    ResetElapsed,
}

/// `idle -> sending -> {success, error} -> idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusMachine {
    status: SubmissionStatus,
}

impl StatusMachine {
    pub const fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
        }
    }

    #[inline]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Next status for `event`, or `None` when the event does not apply to the current one.
    pub const fn transition(from: SubmissionStatus, event: StatusEvent) -> Option<SubmissionStatus> {
        use StatusEvent as E;
        use SubmissionStatus as S;
        match (from, event) {
            (S::Idle, E::Submit) => Some(S::Sending),
            (S::Sending, E::Delivered) => Some(S::Success),
            (S::Sending, E::DeliveryFailed) => Some(S::Error),
            (S::Success | S::Error, E::ResetElapsed) => Some(S::Idle),
            _ => None,
        }
    }

    /// Applies `event`; rejected events leave the status untouched.
    pub fn apply(&mut self, event: StatusEvent) -> Option<SubmissionStatus> {
        match Self::transition(self.status, event) {
            Some(next) => {
                log::debug!("submission {} -> {} on {:?}", self.status, next, event);
                self.status = next;
                Some(next)
            }
            None => {
                log::debug!("submission ignored {:?} while {}", event, self.status);
                None
            }
        }
    }
}
