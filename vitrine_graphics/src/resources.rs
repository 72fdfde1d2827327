use crate::mesh::MeshBuffer;
use ahash::AHashMap;
use vitrine_ids::{MeshID, TextureID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Default)]
pub struct ResourceStore {
    next_mesh_index: u32,
    next_texture_index: u32,
    meshes: AHashMap<MeshID, MeshBuffer>,
    textures: AHashMap<TextureID, TextureInfo>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self {
            next_mesh_index: 1,
            next_texture_index: 1,
            meshes: AHashMap::new(),
            textures: AHashMap::new(),
        }
    }

    pub fn create_mesh(&mut self, buffer: MeshBuffer) -> MeshID {
        let id = MeshID::from_parts(self.next_mesh_index, 0);
        self.next_mesh_index = self.next_mesh_index.saturating_add(1);
        self.meshes.insert(id, buffer);
        id
    }

    pub fn create_texture(&mut self, info: TextureInfo) -> TextureID {
        let id = TextureID::from_parts(self.next_texture_index, 0);
        self.next_texture_index = self.next_texture_index.saturating_add(1);
        self.textures.insert(id, info);
        id
    }

    #[inline]
    pub fn mesh(&self, id: MeshID) -> Option<&MeshBuffer> {
        self.meshes.get(&id)
    }

    #[inline]
    pub fn has_texture(&self, id: TextureID) -> bool {
        self.textures.contains_key(&id)
    }

    #[inline]
    pub fn texture(&self, id: TextureID) -> Option<TextureInfo> {
        self.textures.get(&id).copied()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}
