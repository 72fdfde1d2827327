use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshTopology {
    Triangles,
    Lines,
}

/// CPU-side geometry ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    pub topology: MeshTopology,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    pub fn from_parts(topology: MeshTopology, (vertices, indices): (Vec<MeshVertex>, Vec<u32>)) -> Self {
        Self {
            topology,
            vertices,
            indices,
        }
    }

    /// Raw vertex bytes as a GPU upload would consume them.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn primitive_count(&self) -> usize {
        match self.topology {
            MeshTopology::Triangles => self.indices.len() / 3,
            MeshTopology::Lines => self.indices.len() / 2,
        }
    }
}
