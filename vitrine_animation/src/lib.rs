pub mod damping;
pub mod mode;
pub mod motion;
pub mod progress;
pub mod status;

pub use damping::{Blend, Damped, Damping};
pub use mode::{AnimationMode, ModeParams};
pub use motion::{FrameTime, Oscillator, Spin, approach_angle, wrap_angle};
pub use progress::{LoadPhase, LoadProgress, TypeReveal};
pub use status::{StatusEvent, StatusMachine, SubmissionStatus};
