use std::f32::consts::{FRAC_PI_2, PI};
use vitrine_structs::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
    ];

    /// Outward unit axis of the face.
    pub const fn axis(self) -> Vector3 {
        match self {
            Face::Front => Vector3::new(0.0, 0.0, 1.0),
            Face::Back => Vector3::new(0.0, 0.0, -1.0),
            Face::Top => Vector3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vector3::new(0.0, -1.0, 0.0),
            Face::Right => Vector3::new(1.0, 0.0, 0.0),
            Face::Left => Vector3::new(-1.0, 0.0, 0.0),
        }
    }

    /// Euler XYZ angles turning a +Z facing plane onto this face.
    pub const fn euler(self) -> Vector3 {
        match self {
            Face::Front => Vector3::new(0.0, 0.0, 0.0),
            Face::Back => Vector3::new(0.0, PI, 0.0),
            Face::Top => Vector3::new(FRAC_PI_2, 0.0, 0.0),
            Face::Bottom => Vector3::new(-FRAC_PI_2, 0.0, 0.0),
            Face::Right => Vector3::new(0.0, FRAC_PI_2, 0.0),
            Face::Left => Vector3::new(0.0, -FRAC_PI_2, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlacement {
    pub face: Face,
    pub position: Vector3,
    pub euler: Vector3,
}

/// Cube of `half_extent` with each face split into `n x n` tiles of `tile_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFaces {
    pub half_extent: f32,
    pub tile_size: f32,
    pub tiles_per_side: usize,
}

impl Default for GridFaces {
    fn default() -> Self {
        Self {
            half_extent: 2.0,
            tile_size: 0.65,
            tiles_per_side: 3,
        }
    }
}

impl GridFaces {
    pub fn faces(&self) -> [FacePlacement; 6] {
        Face::ALL.map(|face| FacePlacement {
            face,
            position: face.axis() * self.half_extent,
            euler: face.euler(),
        })
    }

    /// Tile offsets in face-local space, row-major from the top-left.
    pub fn tile_offsets(&self) -> Vec<Vector3> {
        let n = self.tiles_per_side;
        if n == 0 {
            return Vec::new();
        }
        let centre = (n - 1) as f32 / 2.0;
        let mut out = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                out.push(Vector3::new(
                    (col as f32 - centre) * self.tile_size,
                    (centre - row as f32) * self.tile_size,
                    0.0,
                ));
            }
        }
        out
    }
}
