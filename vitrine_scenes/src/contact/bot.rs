use crate::common::{solid, sphere};
use vitrine_animation::{
    AnimationMode, FrameTime, ModeParams, Oscillator, SubmissionStatus, TypeReveal,
};
use vitrine_ids::{TimerID, TransformID};
use vitrine_project::ContactConfig;
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

pub const GREETING: &str = "Hello! How can I help you?";
pub const SENDING: &str = "Sending your message...";
pub const DELIVERED: &str = "Message delivered! Thank you!";
pub const READY: &str = "Ready for another message?";
pub const FAILED: &str = "Something went wrong. Try again?";

const SHELL_COLOR: Color = Color::rgb(0x8A, 0x2B, 0xE2);
const SCREEN_COLOR: Color = Color::rgb(0x00, 0xBF, 0xFF);
const METAL: Color = Color::rgb(0x44, 0x44, 0x44);
const PANEL_COLOR: Color = Color::rgb(0x11, 0x11, 0x22);

const HEAD_REST: Vector3 = Vector3::new(0.0, 1.5, 0.0);
const BOB: Oscillator = Oscillator::new(0.05, 1.5).with_base(1.5);
const SCREEN_GLOW: Oscillator = Oscillator::new(0.1, 2.0).with_base(0.5);

#[derive(Debug, Clone, Copy)]
struct Pose {
    head_pitch: Oscillator,
    head_roll: Oscillator,
    arms: Oscillator,
}

const POSES: ModeParams<Pose> = ModeParams::new(
    Pose {
        head_pitch: Oscillator::new(0.01, 1.5),
        head_roll: Oscillator::new(0.02, 2.0),
        arms: Oscillator::new(0.05, 2.0).with_base(-0.1),
    },
    Pose {
        head_pitch: Oscillator::new(0.02, 5.0).with_base(-0.1),
        head_roll: Oscillator::new(0.03, 10.0),
        arms: Oscillator::new(0.1, 15.0).with_base(-0.2),
    },
);

fn mouth_color(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Success => Color::rgb(0x4A, 0xDE, 0x80),
        SubmissionStatus::Sending => Color::rgb(0xFF, 0xA5, 0x00),
        SubmissionStatus::Idle | SubmissionStatus::Error => Color::rgb(0xFF, 0x00, 0xFF),
    }
}

/// A small robot at a keyboard that types out the visitor's draft and
/// narrates the submission status on a speech panel.
pub struct TypingBot {
    typing_interval_ms: u64,
    ready_delay_ms: u64,
    status: SubmissionStatus,
    draft: TypeReveal,
    typing: bool,
    display: &'static str,
    typing_timer: Option<TimerID>,
    ready_timer: Option<TimerID>,
    head: TransformID,
    screen: TransformID,
    mouth: TransformID,
    arms: TransformID,
    speech_anchor: TransformID,
}

impl TypingBot {
    pub const NAME: &'static str = "typing_bot";

    pub fn new(config: &ContactConfig) -> Self {
        Self {
            typing_interval_ms: config.typing_interval_ms,
            ready_delay_ms: config.reset_delay_ms,
            status: SubmissionStatus::Idle,
            draft: TypeReveal::new(""),
            typing: false,
            display: GREETING,
            typing_timer: None,
            ready_timer: None,
            head: TransformID::nil(),
            screen: TransformID::nil(),
            mouth: TransformID::nil(),
            arms: TransformID::nil(),
            speech_anchor: TransformID::nil(),
        }
    }

    pub fn mode(&self) -> AnimationMode {
        if self.typing {
            AnimationMode::Active
        } else {
            self.status.mode()
        }
    }

    /// What the speech panel shows: the typed draft, else the status line.
    pub fn speech(&self) -> &str {
        match self.draft.visible() {
            "" => self.display,
            typed => typed,
        }
    }

    pub fn head(&self) -> TransformID {
        self.head
    }

    pub fn arms(&self) -> TransformID {
        self.arms
    }

    pub fn speech_anchor(&self) -> TransformID {
        self.speech_anchor
    }

    fn refresh_speech(&self, ctx: &mut SceneContext<'_>) {
        ctx.set_label(self.speech_anchor, self.speech());
    }

    fn stop_typing(&mut self, ctx: &mut SceneContext<'_>) {
        if let Some(id) = self.typing_timer.take() {
            ctx.cancel_timer(id);
        }
    }

    fn start_draft(&mut self, ctx: &mut SceneContext<'_>, text: &str) {
        self.stop_typing(ctx);
        self.draft = TypeReveal::new(text);
        self.typing = !text.is_empty();
        if self.typing {
            self.typing_timer = Some(ctx.set_interval(self.typing_interval_ms));
        }
    }

    fn type_next(&mut self, ctx: &mut SceneContext<'_>) {
        self.draft.tick();
        if self.draft.is_done() {
            self.stop_typing(ctx);
        }
    }

    fn on_status(&mut self, ctx: &mut SceneContext<'_>, status: SubmissionStatus) {
        let previous = std::mem::replace(&mut self.status, status);
        if let Some(id) = self.ready_timer.take() {
            ctx.cancel_timer(id);
        }
        self.display = match status {
            SubmissionStatus::Sending => SENDING,
            SubmissionStatus::Success => {
                // The form clears once the message is out.
                self.start_draft(ctx, "");
                self.ready_timer = Some(ctx.set_timeout(self.ready_delay_ms));
                DELIVERED
            }
            SubmissionStatus::Error => FAILED,
            SubmissionStatus::Idle if previous == SubmissionStatus::Success => READY,
            SubmissionStatus::Idle => GREETING,
        };
        ctx.set_tint(self.mouth, mouth_color(status));
    }
}

impl Scene for TypingBot {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        if self.typing_interval_ms == 0 {
            return Err(SceneError::invalid("typing_interval_ms", "must be positive"));
        }
        let root = ctx.spawn(Transform3D::from_position(Vector3::new(0.0, -0.5, 0.0)));

        self.head = ctx.spawn_child(root, Transform3D::from_position(HEAD_REST));
        let head = Some(self.head);
        let shell = Transform3D::IDENTITY.with_uniform_scale(0.7);
        solid(ctx, head, shell, MeshSource::CUBE, SHELL_COLOR);
        let screen = Transform3D::new(
            Vector3::new(0.0, 0.0, 0.36),
            Quaternion::IDENTITY,
            Vector3::new(0.5, 0.3, 1.0),
        );
        self.screen = solid(ctx, head, screen, MeshSource::PLANE, SCREEN_COLOR);
        for x in [-0.15, 0.15] {
            sphere(ctx, head, Vector3::new(x, 0.05, 0.37), 0.06, Color::WHITE);
        }
        let mouth = Transform3D::new(
            Vector3::new(0.0, -0.1, 0.37),
            Quaternion::IDENTITY,
            Vector3::new(0.3, 0.05, 1.0),
        );
        self.mouth = solid(ctx, head, mouth, MeshSource::PLANE, mouth_color(self.status));
        for x in [-0.2, 0.2] {
            let antenna = Transform3D::new(
                Vector3::new(x, 0.45, 0.0),
                Quaternion::IDENTITY,
                Vector3::new(0.04, 0.3, 0.04),
            );
            solid(ctx, head, antenna, MeshSource::CYLINDER, METAL);
            sphere(ctx, head, Vector3::new(x, 0.6, 0.0), 0.04, Color::rgb(0xFF, 0x00, 0xFF));
        }

        let body = Transform3D::new(
            Vector3::new(0.0, 0.6, 0.0),
            Quaternion::IDENTITY,
            Vector3::new(0.7, 0.8, 0.7),
        );
        solid(ctx, Some(root), body, MeshSource::CYLINDER, Color::rgb(0x0A, 0x0E, 0x24));

        let shoulders = Transform3D::from_position(Vector3::new(0.0, 0.7, 0.0));
        self.arms = ctx.spawn_child(root, shoulders);
        for x in [-0.5, 0.5] {
            let arm = Transform3D::new(
                Vector3::new(x, 0.0, 0.0),
                Quaternion::IDENTITY,
                Vector3::new(0.16, 0.6, 0.16),
            );
            solid(ctx, Some(self.arms), arm, MeshSource::CYLINDER, METAL);
            sphere(ctx, Some(self.arms), Vector3::new(x, -0.35, 0.0), 0.12, SHELL_COLOR);
        }

        let keyboard = Transform3D::new(
            Vector3::new(0.0, -0.02, 0.6),
            Quaternion::from_euler_xyz(-std::f32::consts::PI * 0.1, 0.0, 0.0),
            Vector3::new(1.2, 0.05, 0.6),
        );
        solid(ctx, Some(root), keyboard, MeshSource::CUBE, Color::rgb(0x22, 0x22, 0x22));

        let panel = Transform3D::new(
            Vector3::new(0.0, 2.5, 0.0),
            Quaternion::IDENTITY,
            Vector3::new(2.4, 0.8, 1.0),
        );
        let panel = solid(ctx, Some(root), panel, MeshSource::PLANE, PANEL_COLOR);
        ctx.set_opacity(panel, 0.7);
        let text = Transform3D::from_position(Vector3::new(0.0, 2.5, 0.01));
        self.speech_anchor = ctx.spawn_child(root, text);
        self.refresh_speech(ctx);
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        let pose = POSES.get(self.mode());
        if let Some(head) = ctx.transform_mut(self.head) {
            head.position = Vector3::new(HEAD_REST.x, BOB.sample(t), HEAD_REST.z);
            head.rotation =
                Quaternion::from_euler_xyz(pose.head_pitch.sample(t), 0.0, pose.head_roll.sample(t));
        }
        let arms = pose.arms.sample(t);
        if let Some(group) = ctx.transform_mut(self.arms) {
            group.rotation = Quaternion::from_euler_xyz(arms, 0.0, 0.0);
        }
        ctx.set_opacity(self.screen, SCREEN_GLOW.sample(t));
    }

    fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        match event {
            SceneEvent::Draft(text) => self.start_draft(ctx, text),
            SceneEvent::TimerFired(id) if self.typing_timer == Some(*id) => self.type_next(ctx),
            SceneEvent::TimerFired(id) if self.ready_timer == Some(*id) => {
                self.ready_timer = None;
                self.display = READY;
            }
            SceneEvent::StatusChanged(status) => self.on_status(ctx, *status),
            _ => return,
        }
        self.refresh_speech(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_same_rotation;
    use vitrine_ids::SceneID;
    use vitrine_runtime::Runtime;

    fn mounted() -> (Runtime, SceneID) {
        let mut runtime = Runtime::new();
        let id = runtime.mount(TypingBot::new(&ContactConfig::default())).unwrap();
        (runtime, id)
    }

    fn speech(runtime: &Runtime, id: SceneID) -> String {
        let anchor = runtime
            .with_scene::<TypingBot, _, _>(id, |s| s.speech_anchor())
            .unwrap();
        runtime.element(anchor).unwrap().label.clone().unwrap_or_default()
    }

    #[test]
    fn greets_until_something_happens() {
        let (mut runtime, id) = mounted();
        runtime.update(1.0);
        assert_eq!(speech(&runtime, id), GREETING);
        assert_eq!(
            runtime.with_scene::<TypingBot, _, _>(id, |s| s.mode()),
            Some(AnimationMode::Idle)
        );
    }

    #[test]
    fn draft_is_typed_one_character_per_tick() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::Draft("Hi there".to_string()));
        assert_eq!(runtime.pending_timers(id), 1);

        runtime.update(0.35);
        assert_eq!(speech(&runtime, id), "Hi ");
        runtime.update(1.0);
        assert_eq!(speech(&runtime, id), "Hi there");
        assert_eq!(runtime.pending_timers(id), 0);
    }

    #[test]
    fn new_draft_restarts_the_reveal() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::Draft("Hello".to_string()));
        runtime.update(0.25);
        runtime.dispatch(id, SceneEvent::Draft("Hello!".to_string()));
        assert_eq!(runtime.pending_timers(id), 1);
        runtime.update(0.15);
        assert_eq!(speech(&runtime, id), "H");

        runtime.dispatch(id, SceneEvent::Draft(String::new()));
        assert_eq!(runtime.pending_timers(id), 0);
        assert_eq!(speech(&runtime, id), GREETING);
    }

    #[test]
    fn typing_switches_the_pose() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::Draft("Hi".to_string()));
        runtime.update(0.35);
        assert_eq!(
            runtime.with_scene::<TypingBot, _, _>(id, |s| s.mode()),
            Some(AnimationMode::Active)
        );
        let (head, arms) = runtime
            .with_scene::<TypingBot, _, _>(id, |s| (s.head(), s.arms()))
            .unwrap();
        let t = 0.35f32;
        let head = runtime.element(head).unwrap().transform;
        let expected =
            Quaternion::from_euler_xyz((5.0 * t).sin() * 0.02 - 0.1, 0.0, (10.0 * t).sin() * 0.03);
        assert_same_rotation(head.rotation, expected);
        assert!((head.position.y - (1.5 + 0.05 * (1.5 * t).sin())).abs() < 1e-5);

        let arms = runtime.element(arms).unwrap().transform.rotation;
        let expected = Quaternion::from_euler_xyz(-0.2 + (15.0 * t).sin() * 0.1, 0.0, 0.0);
        assert_same_rotation(arms, expected);
    }

    #[test]
    fn narrates_a_submission() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::Draft("Hi".to_string()));
        runtime.update(0.5);
        assert_eq!(speech(&runtime, id), "Hi");

        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Sending));
        assert_eq!(speech(&runtime, id), "Hi");
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Success));
        assert_eq!(speech(&runtime, id), DELIVERED);
        assert_eq!(
            runtime.with_scene::<TypingBot, _, _>(id, |s| s.mode()),
            Some(AnimationMode::Idle)
        );

        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Idle));
        assert_eq!(speech(&runtime, id), READY);
        assert_eq!(runtime.pending_timers(id), 0);
    }

    #[test]
    fn lingering_success_turns_ready() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Sending));
        assert_eq!(speech(&runtime, id), SENDING);
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Success));
        runtime.update(3.1);
        assert_eq!(speech(&runtime, id), READY);
    }

    #[test]
    fn failure_is_reported() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Sending));
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Error));
        assert_eq!(speech(&runtime, id), FAILED);
        runtime.dispatch(id, SceneEvent::StatusChanged(SubmissionStatus::Idle));
        assert_eq!(speech(&runtime, id), GREETING);
    }
}
