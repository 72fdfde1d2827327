use crate::common::{Entrance, solid, texture_data};
use vitrine_animation::{FrameTime, Oscillator, Spin};
use vitrine_ids::TransformID;
use vitrine_layout::GridFaces;
use vitrine_project::CubeConfig;
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};
use vitrine_texture::tile_face;

const TILES_PER_SIDE: usize = 3;
const WOBBLE: Oscillator = Oscillator::new(0.05, 0.2);

/// A Rubik-style cube: six faces of textured skill tiles turning slowly around Y.
pub struct SkillsCube {
    config: CubeConfig,
    entrance: Entrance,
    group: TransformID,
    tiles: Vec<TransformID>,
}

impl SkillsCube {
    pub const NAME: &'static str = "skills_cube";

    pub fn new(config: CubeConfig) -> Self {
        Self {
            config,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            tiles: Vec::new(),
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn tiles(&self) -> &[TransformID] {
        &self.tiles
    }

    fn grid(&self) -> GridFaces {
        GridFaces {
            half_extent: self.config.half_extent,
            tile_size: self.config.tile_size,
            tiles_per_side: TILES_PER_SIDE,
        }
    }

    fn orientation(&self, elapsed: f32) -> Quaternion {
        let [_, yaw] = self.config.initial_tilt;
        Quaternion::from_euler_xyz(
            WOBBLE.sample(elapsed),
            yaw + Spin::new(self.config.spin).absolute(elapsed),
            0.0,
        )
    }
}

impl Scene for SkillsCube {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        if self.config.texture_size == 0 {
            return Err(SceneError::invalid("texture_size", "tile textures need at least one pixel"));
        }

        let [pitch, yaw] = self.config.initial_tilt;
        let mut root = Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale());
        root.set_euler(Vector3::new(pitch, yaw, 0.0));
        self.group = ctx.spawn(root);

        let grid = self.grid();
        let offsets = grid.tile_offsets();
        let tile_scale = self.config.tile_size;
        for (placement, face) in grid.faces().iter().zip(&self.config.faces) {
            if face.skills.len() > offsets.len() {
                log::warn!(
                    "{:?} face lists {} skills, only {} fit",
                    placement.face,
                    face.skills.len(),
                    offsets.len()
                );
            }
            let anchor = ctx.spawn_child(
                self.group,
                Transform3D::from_euler(placement.position, placement.euler),
            );
            let texture = texture_data(tile_face(face.bg, face.accent, self.config.texture_size));
            for (skill, &offset) in face.skills.iter().zip(&offsets) {
                let transform = Transform3D::from_position(offset).with_uniform_scale(tile_scale);
                let tile = solid(ctx, Some(anchor), transform, MeshSource::CUBE, Color::WHITE);
                ctx.attach_texture(tile, texture.clone());
                ctx.set_label(tile, skill.as_str());
                self.tiles.push(tile);
            }
        }
        log::debug!("cube: {} tiles", self.tiles.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let rotation = self.orientation(time.elapsed);
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = rotation;
            group.scale = Vector3::splat(scale);
        }
    }

    fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        self.entrance.observe(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same_rotation, frame, label_position};
    use vitrine_graphics::{GraphicsBackend, HeadlessGraphics};
    use vitrine_runtime::Runtime;

    fn small() -> CubeConfig {
        CubeConfig {
            texture_size: 8,
            ..CubeConfig::default()
        }
    }

    fn length(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn nine_tiles_per_face() {
        let mut runtime = Runtime::new();
        let id = runtime.mount(SkillsCube::new(small())).unwrap();
        let tiles = runtime.with_scene::<SkillsCube, _, _>(id, |s| s.tiles().len()).unwrap();
        assert_eq!(tiles, 54);
    }

    #[test]
    fn tiles_sit_on_the_cube_surface() {
        let mut runtime = Runtime::new();
        runtime.mount(SkillsCube::new(small())).unwrap();
        runtime.update(0.0);
        // Centre tile of the front face and a corner tile of the back face.
        assert!((length(label_position(&runtime, "CSS3").unwrap()) - 2.0).abs() < 1e-4);
        let corner = (2.0f32 * 0.65 * 0.65 + 4.0).sqrt();
        assert!((length(label_position(&runtime, "Node.js").unwrap()) - corner).abs() < 1e-4);
    }

    #[test]
    fn spin_is_absolute_in_time() {
        let mut runtime = Runtime::new();
        let id = runtime.mount(SkillsCube::new(small())).unwrap();
        runtime.update(10.0);
        let group = runtime.with_scene::<SkillsCube, _, _>(id, |s| s.group()).unwrap();
        let rotation = runtime.element(group).unwrap().transform.rotation;
        let expected = Quaternion::from_euler_xyz(0.05 * 2.0f32.sin(), 0.5 + 0.6, 0.0);
        assert_same_rotation(rotation, expected);
    }

    #[test]
    fn extra_skills_are_dropped() {
        let mut config = small();
        config.faces.truncate(1);
        config.faces[0].skills.extend(["Rust".to_string(), "Zig".to_string()]);
        let mut runtime = Runtime::new();
        let id = runtime.mount(SkillsCube::new(config)).unwrap();
        let tiles = runtime.with_scene::<SkillsCube, _, _>(id, |s| s.tiles().len()).unwrap();
        assert_eq!(tiles, 9);
        assert!(label_position(&runtime, "Rust").is_none());
    }

    #[test]
    fn tiles_draw_with_their_face_texture() {
        let mut runtime = Runtime::new();
        let mut gfx = HeadlessGraphics::new();
        let id = runtime.mount(SkillsCube::new(small())).unwrap();
        frame(&mut runtime, &mut gfx, 0.016);
        frame(&mut runtime, &mut gfx, 0.016);
        assert_eq!(gfx.stats().textured_draws, 54);
        let first = runtime.with_scene::<SkillsCube, _, _>(id, |s| s.tiles()[0]).unwrap();
        assert!(gfx.retained(first).unwrap().texture.is_some());
    }
}
