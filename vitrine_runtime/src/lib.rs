pub mod assets;
pub mod context;
pub mod gate;
pub mod runtime;
pub mod scene;
pub mod scene_collection;
pub mod timers;
pub mod transform_arena;

pub use assets::{AssetHandle, AssetState, AssetTable};
pub use context::{Released, SceneContext, SceneWorld, Viewport};
pub use gate::{EntranceGate, RevealPolicy, visible_ratio};
pub use runtime::{LabelAnchor, Runtime, RuntimeError, Timing};
pub use scene::{AsAny, Scene, SceneError, SceneEvent, SceneFlags, Signal};
pub use scene_collection::{SceneCollection, SceneInstance};
pub use timers::TimerQueue;
pub use transform_arena::{TransformArena, TransformRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use vitrine_animation::{FrameTime, StatusEvent, StatusMachine, SubmissionStatus};
    use vitrine_graphics::{FailureRule, GraphicsBackend, HeadlessGraphics};
    use vitrine_ids::{SceneID, TransformID};
    use vitrine_render_bridge::{
        Command3D, MeshSource, RenderBridge, RenderCommand, TextureData,
    };
    use vitrine_structs::{Transform3D, Vector3};

    type MountHook = Box<dyn FnMut(&mut SceneContext<'_>) -> Result<(), SceneError>>;

    struct Probe {
        on_mount: MountHook,
        ticks: Rc<Cell<u32>>,
        fired: Rc<Cell<u32>>,
        last_elapsed: Rc<Cell<f32>>,
    }

    impl Probe {
        fn new(on_mount: impl FnMut(&mut SceneContext<'_>) -> Result<(), SceneError> + 'static) -> Self {
            Self {
                on_mount: Box::new(on_mount),
                ticks: Rc::default(),
                fired: Rc::default(),
                last_elapsed: Rc::default(),
            }
        }
    }

    impl Scene for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
            (self.on_mount)(ctx)
        }

        fn update(&mut self, _ctx: &mut SceneContext<'_>, time: FrameTime) {
            self.ticks.set(self.ticks.get() + 1);
            self.last_elapsed.set(time.elapsed);
        }

        fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
            if let SceneEvent::TimerFired(_) = event {
                self.fired.set(self.fired.get() + 1);
            }
        }
    }

    /// Minimal submit form: delivery after 1500 ms, reset 3000 ms later.
    struct Form {
        machine: StatusMachine,
        history: Rc<RefCell<Vec<SubmissionStatus>>>,
    }

    impl Form {
        fn step(&mut self, ctx: &mut SceneContext<'_>, event: StatusEvent) {
            if let Some(status) = self.machine.apply(event) {
                self.history.borrow_mut().push(status);
                ctx.emit(Signal::StatusChanged {
                    scene: ctx.scene(),
                    status,
                });
                match status {
                    SubmissionStatus::Sending => {
                        ctx.set_timeout(1500);
                    }
                    SubmissionStatus::Success | SubmissionStatus::Error => {
                        ctx.set_timeout(3000);
                    }
                    SubmissionStatus::Idle => {}
                }
            }
        }
    }

    impl Scene for Form {
        fn name(&self) -> &str {
            "form"
        }

        fn flags(&self) -> SceneFlags {
            SceneFlags::new(SceneFlags::HAS_EVENTS)
        }

        fn mount(&mut self, _ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
            Ok(())
        }

        fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
            match event {
                SceneEvent::Submit { .. } => self.step(ctx, StatusEvent::Submit),
                SceneEvent::TimerFired(_) => match self.machine.status() {
                    SubmissionStatus::Sending => self.step(ctx, StatusEvent::Delivered),
                    SubmissionStatus::Success | SubmissionStatus::Error => {
                        self.step(ctx, StatusEvent::ResetElapsed)
                    }
                    SubmissionStatus::Idle => {}
                },
                _ => {}
            }
        }
    }

    fn frame(runtime: &mut Runtime, gfx: &mut HeadlessGraphics, delta: f32) {
        runtime.update(delta);
        runtime.extract_render_commands();
        let mut commands = Vec::new();
        runtime.drain_render_commands(&mut commands);
        gfx.submit_many(commands);
        gfx.draw_frame();
        let mut events = Vec::new();
        gfx.drain_events(&mut events);
        runtime.apply_render_events(events);
    }

    fn collect_commands(runtime: &mut Runtime) -> Vec<RenderCommand> {
        let mut out = Vec::new();
        runtime.drain_render_commands(&mut out);
        out
    }

    #[test]
    fn arena_rejects_stale_ids() {
        let mut arena = TransformArena::new();
        let owner = SceneID::from_parts(1, 0);
        let a = arena.insert(TransformRecord::new(owner, Transform3D::default()));
        assert_eq!(a.index(), 1);
        assert!(arena.remove(a).is_some());
        let b = arena.insert(TransformRecord::new(owner, Transform3D::default()));
        assert_eq!(b.index(), a.index());
        assert_ne!(b.generation(), a.generation());
        assert!(arena.get(a).is_none());
        assert!(arena.get(b).is_some());
        assert!(arena.get(TransformID::nil()).is_none());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn subtree_lists_parents_first() {
        let mut arena = TransformArena::new();
        let owner = SceneID::from_parts(1, 0);
        let root = arena.insert(TransformRecord::new(owner, Transform3D::default()));
        let mut child = TransformRecord::new(owner, Transform3D::default());
        child.parent = root;
        let child = arena.insert(child);
        let mut leaf = TransformRecord::new(owner, Transform3D::default());
        leaf.parent = child;
        let leaf = arena.insert(leaf);
        arena.insert(TransformRecord::new(owner, Transform3D::default()));
        assert_eq!(arena.subtree(root), vec![root, child, leaf]);
    }

    #[test]
    fn scene_elapsed_starts_at_mount() {
        let mut runtime = Runtime::new();
        runtime.update(1.0);
        let probe = Probe::new(|_| Ok(()));
        let ticks = probe.ticks.clone();
        let elapsed = probe.last_elapsed.clone();
        runtime.mount(probe).unwrap();

        runtime.update(0.25);
        runtime.update(0.25);
        assert_eq!(ticks.get(), 2);
        assert!((elapsed.get() - 0.5).abs() < 1e-6);
        assert_eq!(runtime.scheduled_count(), 1);
    }

    #[test]
    fn scenes_without_update_flag_are_not_scheduled() {
        let mut runtime = Runtime::new();
        let history = Rc::new(RefCell::new(Vec::new()));
        runtime
            .mount(Form {
                machine: StatusMachine::new(),
                history,
            })
            .unwrap();
        assert_eq!(runtime.scene_count(), 1);
        assert_eq!(runtime.scheduled_count(), 0);
    }

    #[test]
    fn form_status_follows_submit_then_timers() {
        let mut runtime = Runtime::new();
        let history = Rc::new(RefCell::new(Vec::new()));
        let id = runtime
            .mount(Form {
                machine: StatusMachine::new(),
                history: history.clone(),
            })
            .unwrap();

        runtime.dispatch(
            id,
            SceneEvent::Submit {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hello".to_string(),
            },
        );
        assert_eq!(*history.borrow(), vec![SubmissionStatus::Sending]);

        runtime.update(1.0);
        assert_eq!(history.borrow().len(), 1);
        runtime.update(0.5);
        assert_eq!(
            *history.borrow(),
            vec![SubmissionStatus::Sending, SubmissionStatus::Success]
        );
        runtime.update(2.5);
        assert_eq!(history.borrow().len(), 2);
        runtime.update(0.6);
        assert_eq!(
            *history.borrow(),
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Success,
                SubmissionStatus::Idle
            ]
        );

        let mut signals = Vec::new();
        runtime.drain_signals(&mut signals);
        assert_eq!(signals.len(), 3);
        assert_eq!(
            signals[2],
            Signal::StatusChanged {
                scene: id,
                status: SubmissionStatus::Idle
            }
        );
    }

    #[test]
    fn timers_of_unmounted_scene_never_fire() {
        let mut runtime = Runtime::new();
        let probe = Probe::new(|ctx| {
            ctx.set_timeout(100);
            ctx.set_interval(50);
            Ok(())
        });
        let fired = probe.fired.clone();
        let id = runtime.mount(probe).unwrap();
        assert_eq!(runtime.pending_timers(id), 2);

        let released = runtime.unmount(id).unwrap();
        assert_eq!(released.timers, 2);
        for _ in 0..20 {
            runtime.update(0.1);
        }
        assert_eq!(fired.get(), 0);
        assert!(matches!(runtime.unmount(id), Err(RuntimeError::UnknownScene(_))));
    }

    #[test]
    fn interval_catches_up_within_one_update() {
        let mut runtime = Runtime::new();
        let probe = Probe::new(|ctx| {
            ctx.set_interval(100);
            Ok(())
        });
        let fired = probe.fired.clone();
        runtime.mount(probe).unwrap();
        runtime.update(0.35);
        assert_eq!(fired.get(), 3);
        runtime.update(0.1);
        assert_eq!(fired.get(), 4);
    }

    #[test]
    fn failed_mount_releases_everything() {
        let mut runtime = Runtime::new();
        let probe = Probe::new(|ctx| {
            let root = ctx.spawn(Transform3D::default());
            ctx.spawn_child(root, Transform3D::default());
            ctx.attach_mesh(root, MeshSource::CUBE);
            ctx.set_interval(10);
            Err(SceneError::invalid("radius", "must be positive"))
        });
        let ticks = probe.ticks.clone();
        let err = runtime.mount(probe).unwrap_err();
        assert!(matches!(err, RuntimeError::Mount { .. }));
        assert_eq!(runtime.transform_count(), 0);
        assert_eq!(runtime.scene_count(), 0);
        assert_eq!(runtime.pending_assets(), 0);

        let commands = collect_commands(&mut runtime);
        let removed = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::ThreeD(Command3D::RemoveNode { .. })))
            .count();
        assert_eq!(removed, 2);

        runtime.update(1.0);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn draws_compose_parent_transforms() {
        let mut runtime = Runtime::new();
        let mut gfx = HeadlessGraphics::new();
        let spawned = Rc::new(RefCell::new(Vec::new()));
        let out = spawned.clone();
        runtime
            .mount(Probe::new(move |ctx| {
                let parent = ctx.spawn(Transform3D::from_position(Vector3::new(1.0, 0.0, 0.0)));
                let child =
                    ctx.spawn_child(parent, Transform3D::from_position(Vector3::new(0.0, 2.0, 0.0)));
                ctx.attach_mesh(child, MeshSource::CUBE);
                out.borrow_mut().extend([parent, child]);
                Ok(())
            }))
            .unwrap();
        let child = spawned.borrow()[1];

        frame(&mut runtime, &mut gfx, 1.0 / 60.0);
        assert!(gfx.retained(child).is_none());
        frame(&mut runtime, &mut gfx, 1.0 / 60.0);
        let drawn = gfx.retained(child).unwrap();
        assert_eq!(drawn.model[3], [1.0, 2.0, 0.0, 1.0]);
        assert_eq!(gfx.retained_count(), 1);
    }

    #[test]
    fn hiding_a_drawn_element_removes_it_once() {
        let mut runtime = Runtime::new();
        let mut gfx = HeadlessGraphics::new();
        let spawned = Rc::new(Cell::new(TransformID::nil()));
        let out = spawned.clone();
        let id = runtime
            .mount(Probe::new(move |ctx| {
                let node = ctx.spawn(Transform3D::default());
                ctx.attach_mesh(node, MeshSource::SPHERE);
                out.set(node);
                Ok(())
            }))
            .unwrap();
        let node = spawned.get();
        frame(&mut runtime, &mut gfx, 0.016);
        frame(&mut runtime, &mut gfx, 0.016);
        assert!(gfx.retained(node).is_some());

        assert!(runtime.with_scene_mut::<Probe, _, _>(id, |_| ()).is_some());
        runtime.world.transforms.get_mut(node).unwrap().visible = false;
        runtime.extract_render_commands();
        let first = collect_commands(&mut runtime);
        assert!(matches!(
            first.as_slice(),
            [RenderCommand::ThreeD(Command3D::RemoveNode { .. })]
        ));
        runtime.extract_render_commands();
        assert!(collect_commands(&mut runtime).is_empty());
    }

    #[test]
    fn failed_texture_keeps_scene_ticking() {
        let mut runtime = Runtime::new();
        let mut gfx = HeadlessGraphics::new().with_failure(FailureRule::AllTextures);
        let spawned = Rc::new(Cell::new(TransformID::nil()));
        let out = spawned.clone();
        let probe = Probe::new(move |ctx| {
            let node = ctx.spawn(Transform3D::default());
            ctx.attach_mesh(node, MeshSource::PLANE);
            ctx.attach_texture(
                node,
                TextureData {
                    width: 1,
                    height: 1,
                    rgba: vec![255; 4],
                },
            );
            out.set(node);
            Ok(())
        });
        let ticks = probe.ticks.clone();
        runtime.mount(probe).unwrap();

        for _ in 0..5 {
            frame(&mut runtime, &mut gfx, 0.016);
        }
        assert_eq!(ticks.get(), 5);
        assert_eq!(runtime.failed_assets(), 1);
        assert_eq!(runtime.pending_assets(), 0);
        assert!(gfx.retained(spawned.get()).is_none());
    }

    #[test]
    fn scenes_cannot_touch_foreign_elements() {
        let mut runtime = Runtime::new();
        let first = Rc::new(Cell::new(TransformID::nil()));
        let out = first.clone();
        runtime
            .mount(Probe::new(move |ctx| {
                out.set(ctx.spawn(Transform3D::default()));
                Ok(())
            }))
            .unwrap();
        let foreign = first.get();
        let seen = Rc::new(Cell::new(true));
        let probe_seen = seen.clone();
        runtime
            .mount(Probe::new(move |ctx| {
                probe_seen.set(ctx.element(foreign).is_some());
                ctx.set_visible(foreign, false);
                Ok(())
            }))
            .unwrap();
        assert!(!seen.get());
        assert!(runtime.world.transforms.get(foreign).unwrap().visible);
    }

    #[test]
    fn labels_follow_world_position() {
        let mut runtime = Runtime::new();
        runtime
            .mount(Probe::new(|ctx| {
                let group = ctx.spawn(Transform3D::from_position(Vector3::new(0.0, 1.0, 0.0)));
                let label = ctx.spawn_child(group, Transform3D::from_position(Vector3::new(2.0, 0.0, 0.0)));
                ctx.set_label(label, "React");
                let hidden = ctx.spawn(Transform3D::default());
                ctx.set_label(hidden, "Hidden");
                ctx.set_visible(hidden, false);
                Ok(())
            }))
            .unwrap();
        let anchors = runtime.label_anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].text, "React");
        assert_eq!(anchors[0].position, [2.0, 1.0, 0.0]);
    }

    #[test]
    fn once_gate_fires_a_single_time() {
        let mut gate = EntranceGate::new(0.25, RevealPolicy::Once);
        assert_eq!(gate.observe(0.1), None);
        assert_eq!(gate.observe(0.3), Some(true));
        assert_eq!(gate.observe(0.0), None);
        assert_eq!(gate.observe(0.9), None);
        assert!(gate.is_revealed());

        let mut repeat = EntranceGate::new(0.25, RevealPolicy::Repeat);
        assert_eq!(repeat.observe(0.5), Some(true));
        assert_eq!(repeat.observe(0.6), None);
        assert_eq!(repeat.observe(0.0), Some(false));
        assert_eq!(repeat.observe(0.3), Some(true));
    }

    #[test]
    fn visibility_reports_reach_scenes_once() {
        struct Watcher(Rc<RefCell<Vec<(String, bool)>>>);
        impl Scene for Watcher {
            fn name(&self) -> &str {
                "watcher"
            }
            fn mount(&mut self, _ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
                Ok(())
            }
            fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
                if let SceneEvent::Reveal { section, revealed } = event {
                    self.0.borrow_mut().push((section.clone(), *revealed));
                }
            }
        }

        let mut runtime = Runtime::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        runtime.mount(Watcher(seen.clone())).unwrap();
        runtime.register_gate("skills", EntranceGate::new(0.25, RevealPolicy::Once));

        for scroll in [0.0, 600.0, 900.0, 1200.0, 0.0, 1000.0] {
            let ratio = visible_ratio(scroll, 1080.0, 1080.0, 1080.0);
            runtime.report_visibility("skills", ratio);
        }
        assert_eq!(*seen.borrow(), vec![("skills".to_string(), true)]);
        assert_eq!(runtime.report_visibility("unknown", 1.0), None);
    }

    #[test]
    fn visible_ratio_bounds() {
        assert_eq!(visible_ratio(0.0, 100.0, 200.0, 100.0), 0.0);
        assert_eq!(visible_ratio(150.0, 100.0, 200.0, 100.0), 0.5);
        assert_eq!(visible_ratio(200.0, 100.0, 200.0, 100.0), 1.0);
        assert_eq!(visible_ratio(0.0, 100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn scene_lookup_by_name_and_type() {
        let mut runtime = Runtime::new();
        let a = runtime.mount(Probe::new(|_| Ok(()))).unwrap();
        let b = runtime
            .mount(Form {
                machine: StatusMachine::new(),
                history: Rc::default(),
            })
            .unwrap();
        assert_eq!(runtime.find_scene("form"), Some(b));
        assert_eq!(
            runtime.with_scene::<Form, _, _>(b, |form| form.machine.status()),
            Some(SubmissionStatus::Idle)
        );
        assert!(runtime.with_scene::<Form, _, _>(a, |_| ()).is_none());

        runtime.unmount(a).unwrap();
        assert_eq!(runtime.find_scene("form"), Some(b));
        assert!(runtime.is_mounted(b));
        runtime.unmount_all();
        assert_eq!(runtime.scene_count(), 0);
    }
}
