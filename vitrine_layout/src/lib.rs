pub mod circular;
pub mod columns;
pub mod grid;
pub mod helix;
pub mod particles;
pub mod spherical;

pub use circular::{CircularLayout, VerticalWave};
pub use columns::LayeredColumns;
pub use grid::{Face, FacePlacement, GridFaces};
pub use helix::{HelixLayout, OPPOSITE_STRAND, Rung};
pub use particles::{Distribution, Particle, ParticleField, ParticleStyle};
pub use spherical::{ShellPlacement, SphericalLayout, spherical_to_cartesian};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vitrine_structs::Vector3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn circular_first_item_sits_on_positive_z() {
        let layout = CircularLayout::new(5.0);
        let p = layout.position(0, 4).unwrap();
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.z, 5.0));
    }

    #[test]
    fn circular_half_way_item_sits_on_negative_z() {
        let layout = CircularLayout::new(5.0);
        assert!(approx_eq(layout.angle(2, 4).unwrap(), std::f32::consts::PI));
        let p = layout.position(2, 4).unwrap();
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.z, -5.0));
    }

    #[test]
    fn circular_wave_lifts_items() {
        let layout = CircularLayout::new(2.5).with_wave(VerticalWave {
            amplitude: 0.4,
            frequency: 1.0,
            phase: std::f32::consts::FRAC_PI_4,
        });
        let p = layout.position(0, 6).unwrap();
        assert!(approx_eq(p.y, 0.4 * std::f32::consts::FRAC_PI_4.sin()));
    }

    #[test]
    fn empty_totals_yield_nothing() {
        assert!(CircularLayout::new(5.0).position(0, 0).is_none());
        assert!(CircularLayout::new(5.0).positions(0).is_empty());
        assert!(SphericalLayout::new(2.5).positions(0).is_empty());
        assert!(LayeredColumns::default().node(0, 0, 0, 1).is_none());
        let helix = HelixLayout {
            radius: 1.2,
            pitch: 1.5,
            length: 12.0,
            samples: 0,
        };
        assert!(helix.strand(0.0).is_empty());
        assert!(helix.rungs(0).is_empty());
    }

    #[test]
    fn layouts_are_deterministic() {
        let sphere = SphericalLayout::new(2.5);
        assert_eq!(sphere.positions(7), sphere.positions(7));
        for p in sphere.positions(7) {
            assert!(p.is_finite());
            assert!(approx_eq(p.length(), 2.5));
        }
        let ring = CircularLayout::new(3.0);
        assert_eq!(ring.positions(5), ring.positions(5));
    }

    #[test]
    fn spherical_index_past_total_stays_finite() {
        let p = SphericalLayout::new(1.0).position(9, 4).unwrap();
        assert!(p.is_finite());
    }

    #[test]
    fn helix_strands_are_opposite() {
        let helix = HelixLayout {
            radius: 1.2,
            pitch: 1.5,
            length: 12.0,
            samples: 100,
        };
        let a = helix.strand(0.0);
        let b = helix.strand(OPPOSITE_STRAND);
        assert_eq!(a.len(), 101);
        assert!(approx_eq(a[0].y, -6.0));
        assert!(approx_eq(a[100].y, 6.0));
        for (p, q) in a.iter().zip(&b) {
            assert!(approx_eq(p.x, -q.x));
            assert!(approx_eq(p.z, -q.z));
            assert!(approx_eq(p.y, q.y));
        }
    }

    #[test]
    fn helix_rungs_are_centred_in_segments() {
        let helix = HelixLayout {
            radius: 1.2,
            pitch: 1.5,
            length: 12.0,
            samples: 100,
        };
        let rungs = helix.rungs(6);
        assert_eq!(rungs.len(), 6);
        assert!(approx_eq(rungs[0].height, -5.0));
        assert!(approx_eq(rungs[5].height, 5.0));
        for r in &rungs {
            assert!(approx_eq(r.first.y, r.height));
            assert!(approx_eq(Vector3::distance(r.first, r.second), 2.4));
        }
    }

    #[test]
    fn columns_are_centred() {
        let cols = LayeredColumns::default();
        let arranged = cols.arrange(&[4, 5, 5, 3]);
        assert_eq!(arranged.len(), 4);
        assert!(approx_eq(arranged[0][0].x, -6.0));
        assert!(approx_eq(arranged[3][0].x, 6.0));
        assert!(approx_eq(arranged[2][2].y, 0.0));
        assert!(approx_eq(arranged[0][0].y, -1.8));
    }

    #[test]
    fn grid_faces_cover_the_cube() {
        let grid = GridFaces::default();
        let faces = grid.faces();
        assert_eq!(faces[0].position, Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(faces[5].position, Vector3::new(-2.0, 0.0, 0.0));
        let tiles = grid.tile_offsets();
        assert_eq!(tiles.len(), 9);
        assert!(approx_eq(tiles[0].x, -0.65));
        assert!(approx_eq(tiles[0].y, 0.65));
        assert_eq!(tiles[4], Vector3::ZERO);
    }

    #[test]
    fn seeded_particle_fields_repeat() {
        let dist = Distribution::UniformShell { radius: 5.0 };
        let a = ParticleField::generate(50, &dist, &mut StdRng::seed_from_u64(7));
        let b = ParticleField::generate(50, &dist, &mut StdRng::seed_from_u64(7));
        let c = ParticleField::generate(50, &dist, &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
        for p in &a.particles {
            assert!(approx_eq(p.position.length(), 5.0));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn banded_shell_respects_band_and_squash() {
        let dist = Distribution::BandedShell {
            min_radius: 5.0,
            max_radius: 10.0,
            polar_band: 0.1..0.9,
            y_squash: 0.5,
        };
        let field = ParticleField::generate(100, &dist, &mut StdRng::seed_from_u64(1));
        assert_eq!(field.len(), 100);
        for p in &field.particles {
            assert!(p.position.y.abs() <= 5.0 + 1e-4);
            let planar = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            assert!(planar <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn shell_placement_keeps_radius() {
        let placement = ShellPlacement {
            radius: 3.0,
            theta: 1.0,
        };
        let p = placement.place(&mut StdRng::seed_from_u64(3));
        assert!(approx_eq(p.length(), 3.0));
    }
}
