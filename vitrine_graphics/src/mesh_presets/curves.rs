use crate::mesh::MeshVertex;
use glam::Vec3;
use std::f32::consts::TAU;

/// Uniform Catmull-Rom spline through `points`, sampled at `samples + 1` evenly spaced parameters.
/// End tangents reuse the end points as phantom neighbours.
pub(crate) fn catmull_rom(points: &[Vec3], samples: u32) -> Vec<Vec3> {
    match points.len() {
        0 => return Vec::new(),
        1 => return vec![points[0]],
        _ => {}
    }
    let spans = (points.len() - 1) as f32;
    let last = points.len() - 1;
    (0..=samples.max(1))
        .map(|k| {
            let u = k as f32 / samples.max(1) as f32 * spans;
            let seg = (u.floor() as usize).min(last - 1);
            let t = u - seg as f32;
            let p0 = points[seg.saturating_sub(1)];
            let p1 = points[seg];
            let p2 = points[seg + 1];
            let p3 = points[(seg + 2).min(last)];
            let t2 = t * t;
            let t3 = t2 * t;
            0.5 * (2.0 * p1
                + (p2 - p0) * t
                + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
                + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
        })
        .collect()
}

fn any_perpendicular(v: Vec3) -> Vec3 {
    let axis = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(axis).normalize_or_zero()
}

/// Round tube of `radius` around the curve through `points`. `None` for fewer than two distinct points.
pub(super) fn tube(
    points: &[Vec3],
    radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> Option<(Vec<MeshVertex>, Vec<u32>)> {
    if points.len() < 2 || points.windows(2).all(|w| w[0] == w[1]) {
        return None;
    }
    let path = catmull_rom(points, tubular_segments);
    let radial = radial_segments.max(3);
    let n = path.len();

    let tangents: Vec<Vec3> = (0..n)
        .map(|i| {
            let prev = path[i.saturating_sub(1)];
            let next = path[(i + 1).min(n - 1)];
            (next - prev).normalize_or_zero()
        })
        .collect();

    let mut normal = any_perpendicular(tangents[0]);
    let mut vertices = Vec::with_capacity(n * (radial as usize + 1));
    for (centre, tangent) in path.iter().zip(&tangents) {
        let transported = (normal - *tangent * normal.dot(*tangent)).normalize_or_zero();
        normal = if transported == Vec3::ZERO {
            any_perpendicular(*tangent)
        } else {
            transported
        };
        let binormal = tangent.cross(normal);
        for j in 0..=radial {
            let (sin, cos) = (j as f32 / radial as f32 * TAU).sin_cos();
            let dir = (normal * cos + binormal * sin).normalize_or_zero();
            vertices.push(MeshVertex {
                pos: (*centre + dir * radius).to_array(),
                normal: dir.to_array(),
            });
        }
    }

    let row = radial + 1;
    let mut indices = Vec::with_capacity((n - 1) * radial as usize * 6);
    for i in 0..(n as u32 - 1) {
        for j in 0..radial {
            let a = i * row + j;
            let b = (i + 1) * row + j;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }
    Some((vertices, indices))
}

/// Line list joining consecutive points.
pub(super) fn polyline(points: &[Vec3]) -> (Vec<MeshVertex>, Vec<u32>) {
    let vertices = points
        .iter()
        .map(|p| MeshVertex {
            pos: p.to_array(),
            normal: [0.0; 3],
        })
        .collect();
    let indices = (1..points.len() as u32).flat_map(|i| [i - 1, i]).collect();
    (vertices, indices)
}
