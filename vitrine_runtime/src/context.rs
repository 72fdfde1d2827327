use crate::assets::{AssetState, AssetTable};
use crate::scene::Signal;
use crate::timers::TimerQueue;
use crate::transform_arena::{TransformArena, TransformRecord};
use vitrine_ids::{AssetRequestID, SceneID, TimerID, TransformID};
use vitrine_render_bridge::{
    Camera3DState, Command3D, MeshSource, RenderCommand, ResourceCommand, TextureData,
};
use vitrine_structs::{Color, Transform3D};

/// Process-wide page metrics. Scenes read them, only the host writes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scroll: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            scroll: 0.0,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Outgoing render commands queued until the host drains them.
#[derive(Default)]
pub(crate) struct RenderState {
    pending_commands: Vec<RenderCommand>,
}

impl RenderState {
    pub(crate) fn queue_command(&mut self, command: RenderCommand) {
        self.pending_commands.push(command);
    }

    pub(crate) fn drain_commands(&mut self, out: &mut Vec<RenderCommand>) {
        out.append(&mut self.pending_commands);
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending_commands.len()
    }
}

/// Everything scenes share through the runtime. Each piece is partitioned by
/// owner, so a scene only ever touches its own records and timers.
#[derive(Default)]
pub struct SceneWorld {
    pub(crate) transforms: TransformArena,
    pub(crate) timers: TimerQueue,
    pub(crate) assets: AssetTable,
    pub(crate) render: RenderState,
    pub(crate) signals: Vec<Signal>,
    pub(crate) viewport: Viewport,
    pub(crate) now_ms: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Released {
    pub transforms: usize,
    pub timers: usize,
}

impl SceneWorld {
    pub(crate) fn remove_transform(&mut self, id: TransformID) -> bool {
        let Some(record) = self.transforms.remove(id) else {
            return false;
        };
        for request in [record.mesh, record.texture].into_iter().flatten() {
            self.assets.forget(request);
        }
        self.render
            .queue_command(RenderCommand::ThreeD(Command3D::RemoveNode { node: id }));
        true
    }

    /// Drops every transform and timer owned by `scene`.
    pub(crate) fn release_scene(&mut self, scene: SceneID) -> Released {
        let timers = self.timers.cancel_owned(scene);
        let owned = self.transforms.owned_by(scene);
        let transforms = owned
            .into_iter()
            .filter(|&id| self.remove_transform(id))
            .count();
        Released { transforms, timers }
    }
}

/// A scene's handle on the world for the duration of one hook call.
pub struct SceneContext<'a> {
    world: &'a mut SceneWorld,
    scene: SceneID,
}

impl<'a> SceneContext<'a> {
    pub(crate) fn new(world: &'a mut SceneWorld, scene: SceneID) -> Self {
        Self { world, scene }
    }

    #[inline]
    pub fn scene(&self) -> SceneID {
        self.scene
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.world.viewport
    }

    pub fn spawn(&mut self, transform: Transform3D) -> TransformID {
        self.world
            .transforms
            .insert(TransformRecord::new(self.scene, transform))
    }

    /// Spawns under `parent`. A parent this scene does not own is ignored and
    /// the element lands at the root.
    pub fn spawn_child(&mut self, parent: TransformID, transform: Transform3D) -> TransformID {
        let mut record = TransformRecord::new(self.scene, transform);
        if self.element(parent).is_some() {
            record.parent = parent;
        } else {
            log::warn!("{:?} cannot parent under foreign transform {:?}", self.scene, parent);
        }
        self.world.transforms.insert(record)
    }

    pub fn element(&self, id: TransformID) -> Option<&TransformRecord> {
        self.world
            .transforms
            .get(id)
            .filter(|record| record.owner == self.scene)
    }

    pub fn element_mut(&mut self, id: TransformID) -> Option<&mut TransformRecord> {
        let scene = self.scene;
        self.world
            .transforms
            .get_mut(id)
            .filter(|record| record.owner == scene)
    }

    pub fn transform_mut(&mut self, id: TransformID) -> Option<&mut Transform3D> {
        self.element_mut(id).map(|record| &mut record.transform)
    }

    pub fn set_visible(&mut self, id: TransformID, visible: bool) {
        if let Some(record) = self.element_mut(id) {
            record.visible = visible;
        }
    }

    pub fn set_opacity(&mut self, id: TransformID, opacity: f32) {
        if let Some(record) = self.element_mut(id) {
            record.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn set_tint(&mut self, id: TransformID, tint: Color) {
        if let Some(record) = self.element_mut(id) {
            record.tint = tint;
        }
    }

    pub fn set_label(&mut self, id: TransformID, text: impl Into<String>) {
        if let Some(record) = self.element_mut(id) {
            record.label = Some(text.into());
        }
    }

    /// Asks the renderer for geometry. The element is drawn once the request resolves.
    pub fn attach_mesh(&mut self, id: TransformID, source: MeshSource) -> Option<AssetRequestID> {
        let request = AssetTable::mesh_request(id);
        self.element_mut(id)?.mesh = Some(request);
        self.world.assets.track(request);
        self.world
            .render
            .queue_command(RenderCommand::Resource(ResourceCommand::CreateMesh {
                request,
                owner: id,
                source,
            }));
        Some(request)
    }

    pub fn attach_texture(&mut self, id: TransformID, data: TextureData) -> Option<AssetRequestID> {
        let request = AssetTable::texture_request(id);
        self.element_mut(id)?.texture = Some(request);
        self.world.assets.track(request);
        self.world
            .render
            .queue_command(RenderCommand::Resource(ResourceCommand::CreateTexture {
                request,
                owner: id,
                data,
            }));
        Some(request)
    }

    pub fn asset_state(&self, request: AssetRequestID) -> Option<&AssetState> {
        self.world.assets.state(request)
    }

    /// Frees `id` and everything under it. Returns how many elements went away.
    pub fn despawn(&mut self, id: TransformID) -> usize {
        if self.element(id).is_none() {
            return 0;
        }
        let subtree = self.world.transforms.subtree(id);
        subtree
            .into_iter()
            .filter(|&node| self.world.remove_transform(node))
            .count()
    }

    pub fn set_timeout(&mut self, delay_ms: u64) -> TimerID {
        let now = self.world.now_ms;
        self.world.timers.once(self.scene, now, delay_ms as f64)
    }

    pub fn set_interval(&mut self, interval_ms: u64) -> TimerID {
        let now = self.world.now_ms;
        self.world.timers.interval(self.scene, now, interval_ms as f64)
    }

    pub fn cancel_timer(&mut self, id: TimerID) -> bool {
        self.world.timers.cancel(self.scene, id)
    }

    pub fn set_camera(&mut self, camera: Camera3DState) {
        self.world
            .render
            .queue_command(RenderCommand::ThreeD(Command3D::SetCamera { camera }));
    }

    pub fn emit(&mut self, signal: Signal) {
        self.world.signals.push(signal);
    }
}
