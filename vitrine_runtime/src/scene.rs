use crate::context::SceneContext;
use std::any::Any;
use thiserror::Error;
use vitrine_animation::{FrameTime, SubmissionStatus};
use vitrine_ids::{SceneID, TimerID};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("`{name}` is invalid: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SceneError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SceneError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Bitflags for the lifecycle hooks a scene wants called.
/// Scenes without `HAS_UPDATE` never join the frame schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneFlags(u8);

impl SceneFlags {
    pub const NONE: u8 = 0;
    pub const HAS_UPDATE: u8 = 1 << 0;
    pub const HAS_EVENTS: u8 = 1 << 1;

    #[inline(always)]
    pub const fn new(flags: u8) -> Self {
        SceneFlags(flags)
    }

    #[inline(always)]
    pub const fn has_update(self) -> bool {
        self.0 & Self::HAS_UPDATE != 0
    }

    #[inline(always)]
    pub const fn has_events(self) -> bool {
        self.0 & Self::HAS_EVENTS != 0
    }
}

impl Default for SceneFlags {
    fn default() -> Self {
        SceneFlags(Self::HAS_UPDATE | Self::HAS_EVENTS)
    }
}

/// Input delivered to a mounted scene outside the frame tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    TimerFired(TimerID),
    Submit {
        name: String,
        email: String,
        message: String,
    },
    /// Current contents of the message field while the visitor types.
    Draft(String),
    /// Name of the element under the pointer, if any.
    Hover(Option<String>),
    StatusChanged(SubmissionStatus),
    Reveal { section: String, revealed: bool },
}

/// Outgoing notifications for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    StatusChanged {
        scene: SceneID,
        status: SubmissionStatus,
    },
    OpenMail {
        link: String,
    },
}

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One mounted visualization. Geometry is built in `mount`, animated in
/// `update` and released by the runtime after `unmount`.
pub trait Scene: AsAny {
    fn name(&self) -> &str;

    fn flags(&self) -> SceneFlags {
        SceneFlags::default()
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError>;

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _time: FrameTime) {}

    fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, _event: &SceneEvent) {}

    fn unmount(&mut self, _ctx: &mut SceneContext<'_>) {}
}
