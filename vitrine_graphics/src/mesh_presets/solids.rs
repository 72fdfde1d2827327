use super::common::{push_index_triangle_outward, push_quad, push_triangle};
use crate::mesh::MeshVertex;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub(super) fn cube() -> (Vec<MeshVertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let faces = [
        [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
        [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]],
        [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
        [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]],
        [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
        [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
    ];
    for [a, b, c, d] in faces {
        push_quad(&mut vertices, &mut indices, a, b, c, d);
    }
    (vertices, indices)
}

/// Unit square in the XY plane facing +Z. Used for textured tiles and backdrops.
pub(super) fn plane() -> (Vec<MeshVertex>, Vec<u32>) {
    let normal = [0.0, 0.0, 1.0];
    let vertices = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]]
        .map(|[x, y]| MeshVertex {
            pos: [x, y, 0.0],
            normal,
        })
        .to_vec();
    (vertices, vec![0, 1, 2, 0, 2, 3])
}

pub(super) fn sphere(longitude_segments: u32, latitude_segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let lon = longitude_segments.max(3);
    let lat = latitude_segments.max(2);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for y in 0..=lat {
        let phi = y as f32 / lat as f32 * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for x in 0..=lon {
            let theta = x as f32 / lon as f32 * TAU;
            let n = Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin());
            vertices.push(MeshVertex {
                pos: (n * 0.5).to_array(),
                normal: n.to_array(),
            });
        }
    }

    let row = lon + 1;
    for y in 0..lat {
        for x in 0..lon {
            let i0 = y * row + x;
            let i1 = i0 + 1;
            let i2 = i0 + row;
            let i3 = i2 + 1;
            push_index_triangle_outward(&vertices, &mut indices, i0, i2, i1);
            push_index_triangle_outward(&vertices, &mut indices, i1, i2, i3);
        }
    }
    (vertices, indices)
}

pub(super) fn cylinder(segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let seg = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let (top_y, bot_y, r) = (0.5, -0.5, 0.5);

    for i in 0..seg {
        let a0 = i as f32 / seg as f32 * TAU;
        let a1 = (i + 1) as f32 / seg as f32 * TAU;
        let p0 = [r * a0.cos(), bot_y, r * a0.sin()];
        let p1 = [r * a1.cos(), bot_y, r * a1.sin()];
        let p2 = [r * a1.cos(), top_y, r * a1.sin()];
        let p3 = [r * a0.cos(), top_y, r * a0.sin()];
        push_quad(&mut vertices, &mut indices, p0, p1, p2, p3);
        push_triangle(&mut vertices, &mut indices, [0.0, top_y, 0.0], p2, p3);
        push_triangle(&mut vertices, &mut indices, [0.0, bot_y, 0.0], p0, p1);
    }
    (vertices, indices)
}

pub(super) fn cone(segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let seg = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let apex = [0.0, 0.5, 0.0];
    let (by, r) = (-0.5, 0.5);
    for i in 0..seg {
        let a0 = i as f32 / seg as f32 * TAU;
        let a1 = (i + 1) as f32 / seg as f32 * TAU;
        let p0 = [r * a0.cos(), by, r * a0.sin()];
        let p1 = [r * a1.cos(), by, r * a1.sin()];
        push_triangle(&mut vertices, &mut indices, apex, p0, p1);
        push_triangle(&mut vertices, &mut indices, [0.0, by, 0.0], p1, p0);
    }
    (vertices, indices)
}
