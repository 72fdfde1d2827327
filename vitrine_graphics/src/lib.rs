pub mod backend;
pub mod mesh;
pub mod mesh_presets;
pub mod resources;

pub use backend::{DrawRecord, FailureRule, FrameStats, GraphicsBackend, HeadlessGraphics};
pub use mesh::{MeshBuffer, MeshTopology, MeshVertex};
pub use mesh_presets::{MeshBuildError, build_mesh, preset_names};
pub use resources::{ResourceStore, TextureInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_ids::{AssetRequestID, TransformID};
    use vitrine_render_bridge::{
        Command3D, MeshSource, RenderBridge, RenderCommand, RenderEvent, ResourceCommand,
        TextureData,
    };

    fn create_mesh(request: u128, source: MeshSource) -> RenderCommand {
        RenderCommand::Resource(ResourceCommand::CreateMesh {
            request: AssetRequestID::new(request),
            owner: TransformID::from_parts(1, 0),
            source,
        })
    }

    fn drain(gfx: &mut HeadlessGraphics) -> Vec<RenderEvent> {
        let mut out = Vec::new();
        gfx.drain_events(&mut out);
        out
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        let buffer = build_mesh(&MeshSource::CUBE).unwrap();
        assert_eq!(buffer.vertex_bytes().len(), buffer.vertices.len() * 24);
    }

    #[test]
    fn every_preset_builds() {
        for name in preset_names() {
            let buffer = build_mesh(&MeshSource::Preset(name)).unwrap();
            assert_eq!(buffer.topology, MeshTopology::Triangles);
            assert!(buffer.primitive_count() > 0);
            assert!(buffer.indices.iter().all(|&i| (i as usize) < buffer.vertices.len()));
        }
        assert_eq!(build_mesh(&MeshSource::CUBE).unwrap().primitive_count(), 12);
        assert!(matches!(
            build_mesh(&MeshSource::Preset("__teapot__")),
            Err(MeshBuildError::UnknownPreset(_))
        ));
    }

    #[test]
    fn tube_follows_its_points() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [2.0, 0.0, 1.0], [3.0, 1.0, 1.0]];
        let buffer = build_mesh(&MeshSource::Tube {
            points: points.clone(),
            radius: 0.05,
            radial_segments: 8,
        })
        .unwrap();
        let rings = 3 * 4 + 1;
        assert_eq!(buffer.vertices.len(), rings * 9);
        assert_eq!(buffer.primitive_count(), (rings - 1) * 8 * 2);

        let first = glam::Vec3::from(buffer.vertices[0].pos);
        assert!((first.length() - 0.05).abs() < 1e-4);
        let last = glam::Vec3::from(buffer.vertices[buffer.vertices.len() - 1].pos);
        assert!((last - glam::Vec3::from(points[3])).length() < 0.05 + 1e-4);
    }

    #[test]
    fn tube_rejects_degenerate_input() {
        let single = MeshSource::Tube {
            points: vec![[1.0, 1.0, 1.0]],
            radius: 0.1,
            radial_segments: 8,
        };
        assert!(matches!(
            build_mesh(&single),
            Err(MeshBuildError::TooFewPoints { kind: "tube", count: 1 })
        ));
        let flat = MeshSource::Tube {
            points: vec![[0.0; 3], [1.0, 0.0, 0.0]],
            radius: 0.0,
            radial_segments: 8,
        };
        assert_eq!(build_mesh(&flat), Err(MeshBuildError::Radius(0.0)));
    }

    #[test]
    fn catmull_rom_passes_through_control_points() {
        let points = [
            glam::Vec3::ZERO,
            glam::Vec3::new(1.0, 2.0, 0.0),
            glam::Vec3::new(3.0, 2.0, 1.0),
        ];
        let path = mesh_presets::curves::catmull_rom(&points, 4);
        assert_eq!(path.len(), 5);
        assert!((path[0] - points[0]).length() < 1e-5);
        assert!((path[2] - points[1]).length() < 1e-5);
        assert!((path[4] - points[2]).length() < 1e-5);
    }

    #[test]
    fn resources_resolve_to_events() {
        let mut gfx = HeadlessGraphics::new();
        gfx.submit(create_mesh(7, MeshSource::SPHERE));
        gfx.submit(RenderCommand::Resource(ResourceCommand::CreateTexture {
            request: AssetRequestID::new(8),
            owner: TransformID::from_parts(1, 0),
            data: TextureData {
                width: 2,
                height: 2,
                rgba: vec![255; 16],
            },
        }));
        gfx.submit(RenderCommand::Resource(ResourceCommand::CreateTexture {
            request: AssetRequestID::new(9),
            owner: TransformID::from_parts(1, 0),
            data: TextureData {
                width: 4,
                height: 4,
                rgba: vec![0; 3],
            },
        }));
        let events = drain(&mut gfx);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RenderEvent::MeshCreated { .. }));
        assert!(matches!(events[1], RenderEvent::TextureCreated { .. }));
        assert!(matches!(events[2], RenderEvent::Failed { .. }));
        assert_eq!(events[2].request(), AssetRequestID::new(9));
        assert_eq!(gfx.resources().mesh_count(), 1);
        assert_eq!(gfx.stats().failed_requests, 1);
    }

    #[test]
    fn failure_rules_reject_matching_sources() {
        let mut gfx = HeadlessGraphics::new()
            .with_failure(FailureRule::Preset("__cone__"))
            .with_failure(FailureRule::AllTextures);
        gfx.submit(create_mesh(1, MeshSource::CONE));
        gfx.submit(create_mesh(2, MeshSource::CUBE));
        let events = drain(&mut gfx);
        assert!(matches!(events[0], RenderEvent::Failed { .. }));
        assert!(matches!(events[1], RenderEvent::MeshCreated { .. }));
    }

    #[test]
    fn draws_are_retained_until_removed() {
        let mut gfx = HeadlessGraphics::new();
        gfx.submit(create_mesh(1, MeshSource::CUBE));
        let mesh = match drain(&mut gfx).pop() {
            Some(RenderEvent::MeshCreated { id, .. }) => id,
            other => panic!("unexpected event {other:?}"),
        };
        let node = TransformID::from_parts(3, 0);
        let model = glam::Mat4::IDENTITY.to_cols_array_2d();
        gfx.submit(RenderCommand::ThreeD(Command3D::Draw {
            node,
            mesh,
            texture: None,
            model,
            tint: [1.0; 4],
        }));
        gfx.submit(RenderCommand::ThreeD(Command3D::Draw {
            node: TransformID::from_parts(4, 0),
            mesh: vitrine_ids::MeshID::from_parts(99, 0),
            texture: None,
            model,
            tint: [1.0; 4],
        }));
        gfx.draw_frame();
        assert_eq!(gfx.stats().draws, 1);
        assert_eq!(gfx.stats().skipped_draws, 1);
        assert_eq!(gfx.retained(node).map(|d| d.mesh), Some(mesh));

        gfx.submit(RenderCommand::ThreeD(Command3D::RemoveNode { node }));
        gfx.draw_frame();
        assert!(gfx.retained(node).is_none());
        assert_eq!(gfx.stats().removed_nodes, 1);
        assert_eq!(gfx.stats().frames, 2);
    }

    fn frames_drawn<B: GraphicsBackend>(backend: &mut B) -> u64 {
        backend.draw_frame();
        backend.stats().frames
    }

    #[test]
    fn stats_are_reachable_through_the_backend_trait() {
        let mut gfx = HeadlessGraphics::new();
        assert_eq!(frames_drawn(&mut gfx), 1);
        assert_eq!(frames_drawn(&mut gfx), 2);
        assert_eq!(gfx.stats().draws, 0);
    }
}
