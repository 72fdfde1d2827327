use ahash::AHashMap;
use vitrine_ids::{AssetRequestID, MeshID, TextureID, TransformID};
use vitrine_render_bridge::RenderEvent;

pub(crate) const MESH_SLOT: u8 = 0x3E;
pub(crate) const TEXTURE_SLOT: u8 = 0x7E;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetHandle {
    Mesh(MeshID),
    Texture(TextureID),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Ready(AssetHandle),
    /// Terminal. The element that asked for it is never drawn.
    Failed(String),
}

impl AssetState {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetState::Ready(_))
    }

    pub fn mesh(&self) -> Option<MeshID> {
        match self {
            AssetState::Ready(AssetHandle::Mesh(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn texture(&self) -> Option<TextureID> {
        match self {
            AssetState::Ready(AssetHandle::Texture(id)) => Some(*id),
            _ => None,
        }
    }
}

/// Outstanding and resolved resource requests, keyed by request ID.
#[derive(Default)]
pub struct AssetTable {
    states: AHashMap<AssetRequestID, AssetState>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_request(owner: TransformID) -> AssetRequestID {
        AssetRequestID::for_owner(owner, MESH_SLOT)
    }

    pub fn texture_request(owner: TransformID) -> AssetRequestID {
        AssetRequestID::for_owner(owner, TEXTURE_SLOT)
    }

    pub fn track(&mut self, request: AssetRequestID) {
        self.states.insert(request, AssetState::Pending);
    }

    pub fn forget(&mut self, request: AssetRequestID) {
        self.states.remove(&request);
    }

    pub fn state(&self, request: AssetRequestID) -> Option<&AssetState> {
        self.states.get(&request)
    }

    /// Resolves a tracked request. Events for requests nobody tracks any more
    /// (their owner was freed meanwhile) are dropped and reported as `false`.
    pub fn apply_event(&mut self, event: RenderEvent) -> bool {
        let Some(state) = self.states.get_mut(&event.request()) else {
            log::debug!("dropping render event for untracked request {:?}", event.request());
            return false;
        };
        *state = match event {
            RenderEvent::MeshCreated { id, .. } => AssetState::Ready(AssetHandle::Mesh(id)),
            RenderEvent::TextureCreated { id, .. } => AssetState::Ready(AssetHandle::Texture(id)),
            RenderEvent::Failed { request, reason } => {
                log::warn!("asset {:?} failed, element will stay hidden: {}", request, reason);
                AssetState::Failed(reason)
            }
        };
        true
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, AssetState::Pending))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, AssetState::Failed(_)))
            .count()
    }
}
