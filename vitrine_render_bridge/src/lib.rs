use vitrine_ids::{AssetRequestID, MeshID, TextureID, TransformID};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3DState {
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub fov_y_radians: f32,
}

impl Default for Camera3DState {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            fov_y_radians: 75f32.to_radians(),
        }
    }
}

/// Geometry the backend should build.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshSource {
    /// One of the built-in unit primitives (`"__cube__"`, `"__sphere__"`, ...).
    Preset(&'static str),
    /// Open line strip through the points.
    Polyline(Vec<[f32; 3]>),
    /// Round tube swept along a smooth curve through the points.
    Tube {
        points: Vec<[f32; 3]>,
        radius: f32,
        radial_segments: u32,
    },
}

impl MeshSource {
    pub const CUBE: Self = Self::Preset("__cube__");
    pub const SPHERE: Self = Self::Preset("__sphere__");
    pub const CYLINDER: Self = Self::Preset("__cylinder__");
    pub const CONE: Self = Self::Preset("__cone__");
    pub const PLANE: Self = Self::Preset("__plane__");
}

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.rgba.len() as u64 == self.width as u64 * self.height as u64 * 4
    }
}

#[derive(Debug, Clone)]
pub enum ResourceCommand {
    CreateMesh {
        request: AssetRequestID,
        owner: TransformID,
        source: MeshSource,
    },
    CreateTexture {
        request: AssetRequestID,
        owner: TransformID,
        data: TextureData,
    },
}

#[derive(Debug, Clone)]
pub enum Command3D {
    Draw {
        node: TransformID,
        mesh: MeshID,
        texture: Option<TextureID>,
        model: [[f32; 4]; 4],
        tint: [f32; 4],
    },
    SetCamera {
        camera: Camera3DState,
    },
    RemoveNode {
        node: TransformID,
    },
}

#[derive(Debug, Clone)]
pub enum RenderCommand {
    Resource(ResourceCommand),
    ThreeD(Command3D),
}

#[derive(Debug, Clone)]
pub enum RenderEvent {
    MeshCreated {
        request: AssetRequestID,
        id: MeshID,
    },
    TextureCreated {
        request: AssetRequestID,
        id: TextureID,
    },
    Failed {
        request: AssetRequestID,
        reason: String,
    },
}

impl RenderEvent {
    pub fn request(&self) -> AssetRequestID {
        match self {
            RenderEvent::MeshCreated { request, .. }
            | RenderEvent::TextureCreated { request, .. }
            | RenderEvent::Failed { request, .. } => *request,
        }
    }
}

pub trait RenderBridge {
    fn submit(&mut self, command: RenderCommand);

    fn submit_many<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = RenderCommand>,
    {
        for command in commands {
            self.submit(command);
        }
    }

    fn drain_events(&mut self, out: &mut Vec<RenderEvent>);
}
