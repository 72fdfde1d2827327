use crate::mesh::{MeshBuffer, MeshTopology, MeshVertex};
use ahash::AHashMap;
use glam::Vec3;
use thiserror::Error;
use vitrine_render_bridge::MeshSource;

mod common;
pub(crate) mod curves;
mod solids;

const ROUND_SEGMENTS: u32 = 36;
const SPHERE_LATITUDE_BANDS: u32 = 24;
const TUBE_SEGMENTS_PER_SPAN: u32 = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshBuildError {
    #[error("unknown mesh preset `{0}`")]
    UnknownPreset(String),
    #[error("{kind} needs at least two distinct points, got {count}")]
    TooFewPoints { kind: &'static str, count: usize },
    #[error("tube radius must be positive, got {0}")]
    Radius(f32),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct MeshVertexKey {
    pos: [u32; 3],
    normal: [u32; 3],
}

impl From<MeshVertex> for MeshVertexKey {
    fn from(vertex: MeshVertex) -> Self {
        Self {
            pos: vertex.pos.map(f32::to_bits),
            normal: vertex.normal.map(f32::to_bits),
        }
    }
}

pub fn preset_names() -> [&'static str; 5] {
    ["__cube__", "__plane__", "__sphere__", "__cylinder__", "__cone__"]
}

fn preset(name: &str) -> Option<(Vec<MeshVertex>, Vec<u32>)> {
    match name {
        "__cube__" => Some(solids::cube()),
        "__plane__" => Some(solids::plane()),
        "__sphere__" => Some(solids::sphere(ROUND_SEGMENTS, SPHERE_LATITUDE_BANDS)),
        "__cylinder__" => Some(solids::cylinder(ROUND_SEGMENTS)),
        "__cone__" => Some(solids::cone(ROUND_SEGMENTS)),
        _ => None,
    }
}

pub fn build_mesh(source: &MeshSource) -> Result<MeshBuffer, MeshBuildError> {
    match source {
        MeshSource::Preset(name) => {
            let geometry =
                preset(name).ok_or_else(|| MeshBuildError::UnknownPreset((*name).to_string()))?;
            Ok(MeshBuffer::from_parts(
                MeshTopology::Triangles,
                deduplicate_mesh(geometry),
            ))
        }
        MeshSource::Polyline(points) => {
            if points.len() < 2 {
                return Err(MeshBuildError::TooFewPoints {
                    kind: "polyline",
                    count: points.len(),
                });
            }
            let points: Vec<Vec3> = points.iter().copied().map(Vec3::from).collect();
            Ok(MeshBuffer::from_parts(
                MeshTopology::Lines,
                curves::polyline(&points),
            ))
        }
        MeshSource::Tube {
            points,
            radius,
            radial_segments,
        } => {
            if !(*radius > 0.0) {
                return Err(MeshBuildError::Radius(*radius));
            }
            let points: Vec<Vec3> = points.iter().copied().map(Vec3::from).collect();
            let spans = (points.len().saturating_sub(1) as u32).max(1);
            let geometry = curves::tube(
                &points,
                *radius,
                *radial_segments,
                spans * TUBE_SEGMENTS_PER_SPAN,
            )
            .ok_or(MeshBuildError::TooFewPoints {
                kind: "tube",
                count: points.len(),
            })?;
            Ok(MeshBuffer::from_parts(MeshTopology::Triangles, geometry))
        }
    }
}

fn deduplicate_mesh((vertices, indices): (Vec<MeshVertex>, Vec<u32>)) -> (Vec<MeshVertex>, Vec<u32>) {
    let mut unique_vertices = Vec::with_capacity(vertices.len());
    let mut remap = vec![0u32; vertices.len()];
    let mut vertex_to_index = AHashMap::with_capacity(vertices.len());

    for (old_index, vertex) in vertices.into_iter().enumerate() {
        let key = MeshVertexKey::from(vertex);
        let new_index = *vertex_to_index.entry(key).or_insert_with(|| {
            unique_vertices.push(vertex);
            (unique_vertices.len() - 1) as u32
        });
        remap[old_index] = new_index;
    }

    let remapped_indices = indices
        .into_iter()
        .map(|index| remap[index as usize])
        .collect();
    (unique_vertices, remapped_indices)
}
