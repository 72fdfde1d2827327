use super::Runtime;
use crate::assets::AssetTable;
use crate::transform_arena::{TransformArena, TransformRecord};
use ahash::AHashMap;
use glam::{Mat4, Vec3};
use vitrine_ids::{SceneID, TransformID};
use vitrine_render_bridge::{Command3D, RenderCommand};

/// Where the host should draw a text label this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub owner: SceneID,
    pub text: String,
    pub position: [f32; 3],
    pub color: [u8; 4],
}

#[derive(Clone, Copy)]
struct WorldState {
    matrix: Mat4,
    opacity: f32,
    visible: bool,
}

impl WorldState {
    const ROOT: Self = Self {
        matrix: Mat4::IDENTITY,
        opacity: 1.0,
        visible: true,
    };
}

type WorldCache = AHashMap<TransformID, WorldState>;

/// Composes `id`'s local transform with its ancestors'. `None` when the chain
/// hits a freed parent.
fn resolve_world(arena: &TransformArena, id: TransformID, cache: &mut WorldCache) -> Option<WorldState> {
    if let Some(state) = cache.get(&id) {
        return Some(*state);
    }

    let limit = arena.len();
    let mut chain = Vec::new();
    let mut cursor = id;
    while !cursor.is_nil() && !cache.contains_key(&cursor) {
        if chain.len() > limit {
            log::warn!("parent cycle through {:?}", id);
            return None;
        }
        let record = arena.get(cursor)?;
        chain.push(cursor);
        cursor = record.parent;
    }

    let mut state = if cursor.is_nil() {
        WorldState::ROOT
    } else {
        *cache.get(&cursor)?
    };
    for &node in chain.iter().rev() {
        let record = arena.get(node)?;
        state = WorldState {
            matrix: state.matrix * record.transform.to_mat4(),
            opacity: state.opacity * record.opacity,
            visible: state.visible && record.visible,
        };
        cache.insert(node, state);
    }
    Some(state)
}

fn draw_command(
    node: TransformID,
    record: &TransformRecord,
    world: WorldState,
    assets: &AssetTable,
) -> Option<Command3D> {
    if !world.visible || world.opacity <= 0.0 {
        return None;
    }
    let mesh = assets.state(record.mesh?)?.mesh()?;
    let texture = match record.texture {
        Some(request) => Some(assets.state(request)?.texture()?),
        None => None,
    };
    let mut tint = record.tint.to_rgba_f32();
    tint[3] *= world.opacity;
    Some(Command3D::Draw {
        node,
        mesh,
        texture,
        model: world.matrix.to_cols_array_2d(),
        tint,
    })
}

impl Runtime {
    /// Queues a `Draw` for every visible element whose assets are ready, and a
    /// `RemoveNode` for elements that were drawn before but no longer qualify.
    pub fn extract_render_commands(&mut self) {
        let world = &mut self.world;
        let mut cache = WorldCache::default();
        let ids: Vec<TransformID> = world.transforms.iter().map(|(id, _)| id).collect();

        for id in ids {
            let Some(state) = resolve_world(&world.transforms, id, &mut cache) else {
                continue;
            };
            let Some(record) = world.transforms.get(id) else {
                continue;
            };
            let command = draw_command(id, record, state, &world.assets);
            let was_drawn = record.drawn;

            match command {
                Some(command) => {
                    world.render.queue_command(RenderCommand::ThreeD(command));
                    if let Some(record) = world.transforms.get_mut(id) {
                        record.drawn = true;
                    }
                }
                None if was_drawn => {
                    world
                        .render
                        .queue_command(RenderCommand::ThreeD(Command3D::RemoveNode { node: id }));
                    if let Some(record) = world.transforms.get_mut(id) {
                        record.drawn = false;
                    }
                }
                None => {}
            }
        }
    }

    /// World-space positions of every visible labelled element.
    pub fn label_anchors(&self) -> Vec<LabelAnchor> {
        let mut cache = WorldCache::default();
        let mut out = Vec::new();
        for (id, record) in self.world.transforms.iter() {
            let Some(text) = record.label.as_ref() else {
                continue;
            };
            let Some(state) = resolve_world(&self.world.transforms, id, &mut cache) else {
                continue;
            };
            if !state.visible {
                continue;
            }
            out.push(LabelAnchor {
                owner: record.owner,
                text: text.clone(),
                position: state.matrix.transform_point3(Vec3::ZERO).to_array(),
                color: record.tint.to_rgba8(),
            });
        }
        out
    }
}
