use crate::mesh_presets::build_mesh;
use crate::resources::{ResourceStore, TextureInfo};
use ahash::AHashMap;
use vitrine_ids::{MeshID, TextureID, TransformID};
use vitrine_render_bridge::{
    Camera3DState, Command3D, MeshSource, RenderBridge, RenderCommand, RenderEvent,
    ResourceCommand,
};

pub trait GraphicsBackend: RenderBridge {
    fn draw_frame(&mut self);

    /// Counters of the last drawn frame.
    fn stats(&self) -> FrameStats;
}

/// Sources a [`HeadlessGraphics`] should refuse, to exercise asset-failure handling.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureRule {
    AllTextures,
    Preset(&'static str),
    Tubes,
}

impl FailureRule {
    fn matches_mesh(&self, source: &MeshSource) -> bool {
        match (self, source) {
            (FailureRule::Preset(name), MeshSource::Preset(other)) => name == other,
            (FailureRule::Tubes, MeshSource::Tube { .. }) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRecord {
    pub mesh: MeshID,
    pub texture: Option<TextureID>,
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub draws: usize,
    pub textured_draws: usize,
    pub skipped_draws: usize,
    pub removed_nodes: usize,
    pub failed_requests: usize,
}

#[derive(Default)]
struct FrameState {
    pending_commands: Vec<RenderCommand>,
}

impl FrameState {
    fn queue(&mut self, command: RenderCommand) {
        self.pending_commands.push(command);
    }

    fn take_pending(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.pending_commands)
    }
}

/// Backend that builds geometry on the CPU and keeps the latest draw of every node,
/// without a window or GPU.
#[derive(Default)]
pub struct HeadlessGraphics {
    frame: FrameState,
    resources: ResourceStore,
    events: Vec<RenderEvent>,
    failures: Vec<FailureRule>,
    camera: Camera3DState,
    retained: AHashMap<TransformID, DrawRecord>,
    stats: FrameStats,
}

impl HeadlessGraphics {
    pub fn new() -> Self {
        Self {
            resources: ResourceStore::new(),
            ..Self::default()
        }
    }

    pub fn with_failure(mut self, rule: FailureRule) -> Self {
        self.failures.push(rule);
        self
    }

    #[inline]
    pub fn camera(&self) -> Camera3DState {
        self.camera
    }

    #[inline]
    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    #[inline]
    pub fn retained(&self, node: TransformID) -> Option<&DrawRecord> {
        self.retained.get(&node)
    }

    pub fn retained_count(&self) -> usize {
        self.retained.len()
    }

    fn fail(&mut self, request: vitrine_ids::AssetRequestID, reason: String) {
        log::warn!("asset request {:?} failed: {}", request, reason);
        self.stats.failed_requests += 1;
        self.events.push(RenderEvent::Failed { request, reason });
    }

    fn process_resource(&mut self, command: ResourceCommand) {
        match command {
            ResourceCommand::CreateMesh {
                request, source, ..
            } => {
                if self.failures.iter().any(|rule| rule.matches_mesh(&source)) {
                    self.fail(request, "mesh source rejected by backend".to_string());
                    return;
                }
                match build_mesh(&source) {
                    Ok(buffer) => {
                        let id = self.resources.create_mesh(buffer);
                        self.events.push(RenderEvent::MeshCreated { request, id });
                    }
                    Err(err) => self.fail(request, err.to_string()),
                }
            }
            ResourceCommand::CreateTexture { request, data, .. } => {
                if self.failures.contains(&FailureRule::AllTextures) {
                    self.fail(request, "texture upload rejected by backend".to_string());
                } else if !data.is_well_formed() {
                    self.fail(
                        request,
                        format!(
                            "{} bytes do not match a {}x{} RGBA8 image",
                            data.rgba.len(),
                            data.width,
                            data.height
                        ),
                    );
                } else {
                    let id = self.resources.create_texture(TextureInfo {
                        width: data.width,
                        height: data.height,
                    });
                    self.events.push(RenderEvent::TextureCreated { request, id });
                }
            }
        }
    }

    fn process_commands(&mut self, commands: Vec<RenderCommand>) {
        for command in commands {
            match command {
                RenderCommand::Resource(resource_cmd) => self.process_resource(resource_cmd),
                RenderCommand::ThreeD(cmd_3d) => match cmd_3d {
                    Command3D::Draw {
                        node,
                        mesh,
                        texture,
                        model,
                        tint,
                    } => {
                        let texture_ok = texture.is_none_or(|t| self.resources.has_texture(t));
                        if self.resources.mesh(mesh).is_none() || !texture_ok {
                            self.stats.skipped_draws += 1;
                            continue;
                        }
                        self.stats.draws += 1;
                        if texture.is_some() {
                            self.stats.textured_draws += 1;
                        }
                        self.retained.insert(
                            node,
                            DrawRecord {
                                mesh,
                                texture,
                                model,
                                tint,
                            },
                        );
                    }
                    Command3D::SetCamera { camera } => {
                        self.camera = camera;
                    }
                    Command3D::RemoveNode { node } => {
                        if self.retained.remove(&node).is_some() {
                            self.stats.removed_nodes += 1;
                        }
                    }
                },
            }
        }
    }
}

impl RenderBridge for HeadlessGraphics {
    fn submit(&mut self, command: RenderCommand) {
        match command {
            // Resource requests resolve immediately so their events are ready before the next frame.
            RenderCommand::Resource(resource_cmd) => self.process_resource(resource_cmd),
            other => self.frame.queue(other),
        }
    }

    fn drain_events(&mut self, out: &mut Vec<RenderEvent>) {
        out.append(&mut self.events);
    }
}

impl GraphicsBackend for HeadlessGraphics {
    #[inline]
    fn stats(&self) -> FrameStats {
        self.stats
    }

    fn draw_frame(&mut self) {
        let commands = self.frame.take_pending();
        self.stats.draws = 0;
        self.stats.textured_draws = 0;
        self.stats.skipped_draws = 0;
        self.process_commands(commands);
        self.stats.frames += 1;
    }
}
