pub mod bipartite;
pub mod line;
pub mod tube;

pub use bipartite::{BIPARTITE_OPACITY, Connector, ConnectorStyle, bipartite};
pub use line::{LineSegment, hub_and_spoke, proximity_links};
pub use tube::Tube;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vitrine_structs::Vector3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn approx_vec(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn tube_spans_its_endpoints() {
        let a = Vector3::new(1.0, 2.0, -1.0);
        let b = Vector3::new(-2.0, 0.5, 3.0);
        let tube = Tube::between(a, b, 0.03);
        assert!(approx_eq(tube.length, Vector3::distance(a, b)));
        assert!(approx_vec(tube.midpoint, Vector3::midpoint(a, b)));

        let t = tube.to_transform();
        assert!(approx_vec(t.transform_point(Vector3::new(0.0, 0.5, 0.0)), b));
        assert!(approx_vec(t.transform_point(Vector3::new(0.0, -0.5, 0.0)), a));
    }

    #[test]
    fn tube_cross_section_stays_round() {
        let tube = Tube::between(Vector3::ZERO, Vector3::new(3.0, 4.0, 0.0), 0.5);
        let t = tube.to_transform();
        let centre = t.transform_point(Vector3::ZERO);
        let side_x = t.transform_point(Vector3::new(0.5, 0.0, 0.0));
        let side_z = t.transform_point(Vector3::new(0.0, 0.0, 0.5));
        assert!(approx_eq(Vector3::distance(centre, side_x), 0.5));
        assert!(approx_eq(Vector3::distance(centre, side_z), 0.5));
    }

    #[test]
    fn coincident_endpoints_collapse() {
        let p = Vector3::new(1.0, 1.0, 1.0);
        let tube = Tube::between(p, p, 0.1);
        assert!(tube.is_degenerate());
        assert!(tube.to_transform().to_mat4().is_finite());
    }

    #[test]
    fn hub_and_spoke_anchors_at_hub() {
        let points = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0)];
        let spokes = hub_and_spoke(Vector3::ZERO, &points);
        assert_eq!(spokes.len(), 2);
        assert!(spokes.iter().all(|s| s.start == Vector3::ZERO));
        assert!(approx_eq(spokes[1].length(), 2.0));
    }

    #[test]
    fn bipartite_links_adjacent_layers_only() {
        let layers: Vec<Vec<(u32, Vector3)>> = vec![
            (0..4).map(|i| (i, Vector3::new(0.0, i as f32, 0.0))).collect(),
            (10..15).map(|i| (i, Vector3::new(4.0, i as f32, 0.0))).collect(),
            (20..25).map(|i| (i, Vector3::new(8.0, i as f32, 0.0))).collect(),
            (30..33).map(|i| (i, Vector3::new(12.0, i as f32, 0.0))).collect(),
        ];
        let links = bipartite(&layers, &mut StdRng::seed_from_u64(42));
        assert_eq!(links.len(), 4 * 5 + 5 * 5 + 5 * 3);
        assert!(!links.iter().any(|c| c.from < 10 && c.to >= 20));
        assert!(links.iter().all(|c| BIPARTITE_OPACITY.contains(&c.segment.opacity)));
    }

    #[test]
    fn bipartite_single_layer_has_no_links() {
        let layers = vec![vec![(0u8, Vector3::ZERO), (1, Vector3::ONE)]];
        assert!(bipartite(&layers, &mut StdRng::seed_from_u64(0)).is_empty());
    }

    #[test]
    fn hover_highlights_touching_connectors() {
        let style = ConnectorStyle::default();
        let c = Connector {
            from: "React",
            to: "Git",
            segment: LineSegment::new(Vector3::ZERO, Vector3::ONE).with_opacity(0.25),
        };
        assert_eq!(style.resolve(&c, Some(&"Git")), (0.9, 3.0));
        assert_eq!(style.resolve(&c, Some(&"AWS")), (0.25, 1.0));
        assert_eq!(style.resolve(&c, None), (0.25, 1.0));
    }

    #[test]
    fn proximity_links_respect_threshold() {
        let points = [
            Vector3::ZERO,
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(12.0, 0.0, 0.0),
        ];
        assert_eq!(proximity_links(&points, 6.0), vec![(0, 1)]);
    }
}
