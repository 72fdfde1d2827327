use crate::common::solid;
use vitrine_animation::{FrameTime, StatusEvent, StatusMachine, SubmissionStatus};
use vitrine_ids::{TimerID, TransformID};
use vitrine_project::ContactConfig;
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent, Signal};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

const PANEL_COLOR: Color = Color::rgb(0x8A, 0x2B, 0xE2);
const ROCKET_COLOR: Color = Color::rgb(0x00, 0xBF, 0xFF);
const ROCKET_START: Vector3 = Vector3::new(0.0, -2.0, 1.0);
const ROCKET_SIZE: Vector3 = Vector3::new(0.4, 0.5, 0.4);

/// `mailto:` link carrying the visitor's message to `recipient`.
pub fn mailto_link(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("Contact from {name}");
    let body = format!("Name: {name}\nEmail: {email}\n\n{message}");
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// A draft can go out once every field is filled and the address looks like one.
pub fn is_deliverable(name: &str, email: &str, message: &str) -> bool {
    let address = email
        .trim()
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
    address && !name.trim().is_empty() && !message.trim().is_empty()
}

/// Drives a submission through `idle -> sending -> success/error -> idle`
/// on timers and flies a rocket while it is sending.
pub struct ContactForm {
    config: ContactConfig,
    machine: StatusMachine,
    outcome: StatusEvent,
    pending: Option<TimerID>,
    group: TransformID,
    rocket: TransformID,
    climb: f32,
}

impl ContactForm {
    pub const NAME: &'static str = "contact_form";

    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            machine: StatusMachine::new(),
            outcome: StatusEvent::Delivered,
            pending: None,
            group: TransformID::nil(),
            rocket: TransformID::nil(),
            climb: 0.0,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.machine.status()
    }

    pub fn rocket(&self) -> TransformID {
        self.rocket
    }

    fn advance(&mut self, ctx: &mut SceneContext<'_>, event: StatusEvent) -> bool {
        let Some(status) = self.machine.apply(event) else {
            return false;
        };
        let scene = ctx.scene();
        ctx.emit(Signal::StatusChanged { scene, status });
        self.pending = match status {
            SubmissionStatus::Sending => Some(ctx.set_timeout(self.config.delivery_delay_ms)),
            SubmissionStatus::Success | SubmissionStatus::Error => {
                Some(ctx.set_timeout(self.config.reset_delay_ms))
            }
            SubmissionStatus::Idle => None,
        };
        true
    }

    fn submit(&mut self, ctx: &mut SceneContext<'_>, name: &str, email: &str, message: &str) {
        let deliverable = is_deliverable(name, email, message);
        self.outcome = if deliverable {
            StatusEvent::Delivered
        } else {
            StatusEvent::DeliveryFailed
        };
        if !self.advance(ctx, StatusEvent::Submit) {
            return;
        }
        if deliverable {
            let link = mailto_link(&self.config.recipient, name, email, message);
            log::info!("opening mail client for {}", self.config.recipient);
            ctx.emit(Signal::OpenMail { link });
        } else {
            log::warn!("contact form submitted with missing or malformed fields");
        }
    }
}

impl Scene for ContactForm {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        if self.config.recipient.trim().is_empty() {
            return Err(SceneError::invalid("recipient", "no address to deliver to"));
        }
        self.group = ctx.spawn(Transform3D::from_position(Vector3::new(0.0, 0.0, -2.0)));

        let panel = Transform3D::new(
            Vector3::ZERO,
            Quaternion::IDENTITY,
            Vector3::new(5.0, 3.0, 0.1),
        );
        let panel = solid(ctx, Some(self.group), panel, MeshSource::CUBE, PANEL_COLOR);
        ctx.set_opacity(panel, 0.3);

        let rocket = Transform3D::new(ROCKET_START, Quaternion::IDENTITY, ROCKET_SIZE);
        self.rocket = solid(ctx, Some(self.group), rocket, MeshSource::CONE, ROCKET_COLOR);
        ctx.set_visible(self.rocket, false);
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let sending = self.machine.status() == SubmissionStatus::Sending;
        self.climb = if sending {
            self.climb + self.config.rocket_climb * time.delta
        } else {
            0.0
        };
        ctx.set_visible(self.rocket, sending);
        if let Some(rocket) = ctx.transform_mut(self.rocket) {
            rocket.position = ROCKET_START + Vector3::new(0.0, self.climb, 0.0);
        }
    }

    fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        match event {
            SceneEvent::Submit {
                name,
                email,
                message,
            } => self.submit(ctx, name, email, message),
            SceneEvent::TimerFired(id) if self.pending == Some(*id) => {
                self.pending = None;
                let next = match self.machine.status() {
                    SubmissionStatus::Sending => self.outcome,
                    _ => StatusEvent::ResetElapsed,
                };
                self.advance(ctx, next);
            }
            _ => {}
        }
    }

    fn unmount(&mut self, ctx: &mut SceneContext<'_>) {
        if let Some(id) = self.pending.take() {
            ctx.cancel_timer(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_ids::SceneID;
    use vitrine_runtime::Runtime;

    fn submit(name: &str, email: &str, message: &str) -> SceneEvent {
        SceneEvent::Submit {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn mounted() -> (Runtime, SceneID) {
        let mut runtime = Runtime::new();
        let id = runtime.mount(ContactForm::new(ContactConfig::default())).unwrap();
        (runtime, id)
    }

    fn statuses(runtime: &mut Runtime) -> Vec<SubmissionStatus> {
        let mut signals = Vec::new();
        runtime.drain_signals(&mut signals);
        signals
            .into_iter()
            .filter_map(|signal| match signal {
                Signal::StatusChanged { status, .. } => Some(status),
                Signal::OpenMail { .. } => None,
            })
            .collect()
    }

    #[test]
    fn link_encodes_subject_and_body() {
        let link = mailto_link("me@site.dev", "Ada", "ada@x.io", "Hi & bye");
        assert_eq!(
            link,
            "mailto:me@site.dev?subject=Contact%20from%20Ada\
             &body=Name%3A%20Ada%0AEmail%3A%20ada%40x.io%0A%0AHi%20%26%20bye"
        );
    }

    #[test]
    fn deliverable_needs_every_field() {
        assert!(is_deliverable("Ada", "ada@x.io", "hello"));
        assert!(!is_deliverable("", "ada@x.io", "hello"));
        assert!(!is_deliverable("Ada", "ada.x.io", "hello"));
        assert!(!is_deliverable("Ada", "@x.io", "hello"));
        assert!(!is_deliverable("Ada", "ada@x.io", "   "));
    }

    #[test]
    fn submission_runs_through_its_timers() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, submit("Ada", "ada@x.io", "hello"));

        let mut signals = Vec::new();
        runtime.drain_signals(&mut signals);
        assert_eq!(signals.len(), 2);
        assert!(matches!(
            signals[0],
            Signal::StatusChanged { status: SubmissionStatus::Sending, .. }
        ));
        assert!(matches!(&signals[1], Signal::OpenMail { link } if link.starts_with("mailto:")));

        runtime.update(1.0);
        assert!(statuses(&mut runtime).is_empty());
        runtime.update(0.5);
        assert_eq!(statuses(&mut runtime), vec![SubmissionStatus::Success]);
        runtime.update(2.9);
        assert!(statuses(&mut runtime).is_empty());
        runtime.update(0.1);
        assert_eq!(statuses(&mut runtime), vec![SubmissionStatus::Idle]);
        assert_eq!(runtime.pending_timers(id), 0);
    }

    #[test]
    fn malformed_draft_ends_in_error_without_mail() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, submit("Ada", "not-an-address", "hello"));
        runtime.update(1.6);
        let mut signals = Vec::new();
        runtime.drain_signals(&mut signals);
        assert!(!signals.iter().any(|s| matches!(s, Signal::OpenMail { .. })));
        assert_eq!(
            runtime.with_scene::<ContactForm, _, _>(id, |s| s.status()),
            Some(SubmissionStatus::Error)
        );
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, submit("Ada", "ada@x.io", "hello"));
        runtime.dispatch(id, submit("Bob", "bob@x.io", "again"));
        assert_eq!(statuses(&mut runtime), vec![SubmissionStatus::Sending]);
        assert_eq!(runtime.pending_timers(id), 1);
    }

    #[test]
    fn rocket_climbs_only_while_sending() {
        let (mut runtime, id) = mounted();
        let rocket = runtime.with_scene::<ContactForm, _, _>(id, |s| s.rocket()).unwrap();
        runtime.update(0.5);
        assert!(!runtime.element(rocket).unwrap().visible);

        runtime.dispatch(id, submit("Ada", "ada@x.io", "hello"));
        runtime.update(1.0);
        let record = runtime.element(rocket).unwrap();
        assert!(record.visible);
        assert!((record.transform.position.y + 0.5).abs() < 1e-5);

        runtime.update(1.0);
        let record = runtime.element(rocket).unwrap();
        assert!(!record.visible);
        assert_eq!(record.transform.position, ROCKET_START);
    }

    #[test]
    fn unmount_drops_the_pending_timer() {
        let (mut runtime, id) = mounted();
        runtime.dispatch(id, submit("Ada", "ada@x.io", "hello"));
        assert_eq!(runtime.pending_timers(id), 1);
        let released = runtime.unmount(id).unwrap();
        assert_eq!(released.timers, 0);
        assert_eq!(runtime.pending_timers(id), 0);
    }
}
