use crate::context::{Released, SceneContext, SceneWorld, Viewport};
use crate::gate::EntranceGate;
use crate::scene::{Scene, SceneError, SceneEvent, Signal};
use crate::scene_collection::{SceneCollection, SceneInstance};
use crate::transform_arena::TransformRecord;
use thiserror::Error;
use vitrine_animation::FrameTime;
use vitrine_ids::{SceneID, TransformID};
use vitrine_render_bridge::{RenderCommand, RenderEvent};

mod render_3d;

pub use render_3d::LabelAnchor;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to mount `{scene}`: {source}")]
    Mount {
        scene: String,
        #[source]
        source: SceneError,
    },
    #[error("no mounted scene {0:?}")]
    UnknownScene(SceneID),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timing {
    pub delta: f32,
    pub elapsed: f64,
}

struct SceneSchedule {
    update_ids: Vec<SceneID>,
    event_ids: Vec<SceneID>,
}

impl SceneSchedule {
    fn new() -> Self {
        Self {
            update_ids: Vec::new(),
            event_ids: Vec::new(),
        }
    }

    fn snapshot_update(&mut self, scenes: &SceneCollection) {
        self.update_ids.clear();
        scenes.append_update_ids(&mut self.update_ids);
    }

    fn snapshot_all(&mut self, scenes: &SceneCollection) {
        self.event_ids.clear();
        scenes.append_ids(&mut self.event_ids);
    }
}

/// Owns every mounted scene and the world they share, and advances both once per frame.
pub struct Runtime {
    pub time: Timing,
    pub(crate) world: SceneWorld,
    scenes: SceneCollection,
    schedule: SceneSchedule,
    gates: Vec<(String, EntranceGate)>,
    next_scene: u32,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            time: Timing::default(),
            world: SceneWorld::default(),
            scenes: SceneCollection::new(),
            schedule: SceneSchedule::new(),
            gates: Vec::new(),
            next_scene: 0,
        }
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        let mut runtime = Self::new();
        runtime.world.viewport = viewport;
        runtime
    }

    fn allocate_scene_id(&mut self) -> SceneID {
        self.next_scene = self.next_scene.wrapping_add(1).max(1);
        SceneID::from_parts(self.next_scene, 0)
    }

    pub fn mount<S: Scene + 'static>(&mut self, scene: S) -> Result<SceneID, RuntimeError> {
        self.mount_boxed(Box::new(scene))
    }

    /// Runs the scene's `mount` hook and joins it to the frame schedule.
    /// When the hook fails, whatever it had acquired is released before the error returns.
    pub fn mount_boxed(&mut self, mut scene: Box<dyn Scene>) -> Result<SceneID, RuntimeError> {
        let id = self.allocate_scene_id();
        let mounted_at_ms = self.world.now_ms;
        let result = {
            let mut ctx = SceneContext::new(&mut self.world, id);
            scene.mount(&mut ctx)
        };

        if let Err(source) = result {
            let released = self.world.release_scene(id);
            log::warn!(
                "mount of `{}` failed, released {} transforms and {} timers: {}",
                scene.name(),
                released.transforms,
                released.timers,
                source
            );
            return Err(RuntimeError::Mount {
                scene: scene.name().to_string(),
                source,
            });
        }

        let flags = scene.flags();
        log::info!("mounted `{}` as {:?}", scene.name(), id);
        self.scenes.insert(
            id,
            SceneInstance {
                scene,
                flags,
                mounted_at_ms,
            },
        );
        Ok(id)
    }

    /// Tears a scene down unconditionally: its hook runs, then its timers,
    /// transforms and frame registration go away.
    pub fn unmount(&mut self, id: SceneID) -> Result<Released, RuntimeError> {
        let mut instance = self
            .scenes
            .remove(id)
            .ok_or(RuntimeError::UnknownScene(id))?;
        {
            let mut ctx = SceneContext::new(&mut self.world, id);
            instance.scene.unmount(&mut ctx);
        }
        let released = self.world.release_scene(id);
        log::info!(
            "unmounted `{}`: {} transforms freed, {} pending timers cancelled",
            instance.scene.name(),
            released.transforms,
            released.timers
        );
        Ok(released)
    }

    pub fn unmount_all(&mut self) {
        self.schedule.snapshot_all(&self.scenes);
        let ids = std::mem::take(&mut self.schedule.event_ids);
        for id in ids.iter().copied() {
            let _ = self.unmount(id);
        }
        self.schedule.event_ids = ids;
    }

    /// One frame: advance the clock, fire due timers, then tick every scheduled scene.
    pub fn update(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.time.delta = delta;
        self.time.elapsed += delta as f64;
        self.world.now_ms = self.time.elapsed * 1000.0;

        let now = self.world.now_ms;
        while let Some((timer, owner)) = self.world.timers.pop_due(now) {
            self.deliver(owner, &SceneEvent::TimerFired(timer));
        }

        self.schedule.snapshot_update(&self.scenes);
        let ids = std::mem::take(&mut self.schedule.update_ids);
        for &id in &ids {
            let Some(instance) = self.scenes.get_mut(id) else {
                continue;
            };
            let elapsed = ((now - instance.mounted_at_ms) / 1000.0) as f32;
            let mut ctx = SceneContext::new(&mut self.world, id);
            instance.scene.update(&mut ctx, FrameTime::new(elapsed, delta));
        }
        self.schedule.update_ids = ids;
    }

    fn deliver(&mut self, id: SceneID, event: &SceneEvent) -> bool {
        let Some(instance) = self.scenes.get_mut(id) else {
            return false;
        };
        if !instance.flags.has_events() {
            return false;
        }
        let mut ctx = SceneContext::new(&mut self.world, id);
        instance.scene.handle_event(&mut ctx, event);
        true
    }

    pub fn dispatch(&mut self, id: SceneID, event: SceneEvent) -> bool {
        self.deliver(id, &event)
    }

    /// Delivers `event` to every mounted scene that takes events.
    pub fn broadcast(&mut self, event: SceneEvent) -> usize {
        self.schedule.snapshot_all(&self.scenes);
        let ids = std::mem::take(&mut self.schedule.event_ids);
        let delivered = ids.iter().filter(|&&id| self.deliver(id, &event)).count();
        self.schedule.event_ids = ids;
        delivered
    }

    pub fn register_gate(&mut self, section: impl Into<String>, gate: EntranceGate) {
        let section = section.into();
        match self.gates.iter_mut().find(|(name, _)| *name == section) {
            Some((_, existing)) => *existing = gate,
            None => self.gates.push((section, gate)),
        }
    }

    pub fn gate(&self, section: &str) -> Option<&EntranceGate> {
        self.gates
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, gate)| gate)
    }

    /// Feeds a section's visible fraction to its gate and broadcasts a
    /// `Reveal` when the gate changes state.
    pub fn report_visibility(&mut self, section: &str, ratio: f32) -> Option<bool> {
        let (_, gate) = self.gates.iter_mut().find(|(name, _)| name == section)?;
        let revealed = gate.observe(ratio)?;
        log::debug!("section `{}` revealed = {}", section, revealed);
        self.broadcast(SceneEvent::Reveal {
            section: section.to_string(),
            revealed,
        });
        Some(revealed)
    }

    pub fn viewport(&self) -> Viewport {
        self.world.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.world.viewport = viewport;
    }

    pub fn set_scroll(&mut self, scroll: f32) {
        self.world.viewport.scroll = scroll.max(0.0);
    }

    pub fn find_scene(&self, name: &str) -> Option<SceneID> {
        self.scenes.find(name)
    }

    pub fn is_mounted(&self, id: SceneID) -> bool {
        self.scenes.contains(id)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scheduled_count(&self) -> usize {
        self.scenes.update_schedule_len()
    }

    pub fn transform_count(&self) -> usize {
        self.world.transforms.len()
    }

    pub fn element(&self, id: TransformID) -> Option<&TransformRecord> {
        self.world.transforms.get(id)
    }

    /// Every element `scene` owns, in arena order.
    pub fn elements_of(&self, scene: SceneID) -> Vec<TransformID> {
        self.world.transforms.owned_by(scene)
    }

    pub fn pending_timers(&self, id: SceneID) -> usize {
        self.world.timers.pending_for(id)
    }

    pub fn pending_assets(&self) -> usize {
        self.world.assets.pending_count()
    }

    pub fn failed_assets(&self) -> usize {
        self.world.assets.failed_count()
    }

    /// Borrows a mounted scene as its concrete type.
    pub fn with_scene<T: 'static, V, F>(&self, id: SceneID, f: F) -> Option<V>
    where
        F: FnOnce(&T) -> V,
    {
        let instance = self.scenes.get(id)?;
        let scene: &dyn Scene = instance.scene.as_ref();
        scene.as_any().downcast_ref::<T>().map(f)
    }

    pub fn with_scene_mut<T: 'static, V, F>(&mut self, id: SceneID, f: F) -> Option<V>
    where
        F: FnOnce(&mut T) -> V,
    {
        let instance = self.scenes.get_mut(id)?;
        let scene: &mut dyn Scene = instance.scene.as_mut();
        scene.as_any_mut().downcast_mut::<T>().map(f)
    }

    #[inline]
    pub fn queue_render_command(&mut self, command: RenderCommand) {
        self.world.render.queue_command(command);
    }

    pub fn drain_render_commands(&mut self, out: &mut Vec<RenderCommand>) {
        self.world.render.drain_commands(out);
    }

    pub fn pending_render_commands(&self) -> usize {
        self.world.render.pending_len()
    }

    pub fn apply_render_event(&mut self, event: RenderEvent) {
        self.world.assets.apply_event(event);
    }

    pub fn apply_render_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = RenderEvent>,
    {
        for event in events {
            self.apply_render_event(event);
        }
    }

    pub fn drain_signals(&mut self, out: &mut Vec<Signal>) {
        out.append(&mut self.world.signals);
    }
}
