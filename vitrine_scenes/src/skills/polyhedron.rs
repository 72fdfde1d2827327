use crate::common::{Entrance, line, solid, sphere};
use std::f32::consts::TAU;
use vitrine_animation::{FrameTime, Oscillator, Spin};
use vitrine_connectors::hub_and_spoke;
use vitrine_ids::TransformID;
use vitrine_layout::SphericalLayout;
use vitrine_project::PolyhedronConfig;
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

const CORE_COLOR: Color = Color::rgb(0x8A, 0x2B, 0xE2);
const SKILL_RADIUS: f32 = 0.15;
const SPOKE_OPACITY: f32 = 0.6;
const RING_BASE: f32 = 0.8;
const RING_GROWTH: f32 = 0.05;
const RING_WAVE: f32 = 0.3;

const SPIN: Spin = Spin::new(0.08);
const NOD: Oscillator = Oscillator::new(0.03, 0.3);

/// Offset of skill `index` of `total` around its category center.
pub fn ring_offset(index: usize, total: usize) -> Option<Vector3> {
    if total == 0 {
        return None;
    }
    let angle = TAU * index as f32 / total as f32;
    let radius = RING_BASE + RING_GROWTH * total as f32;
    Some(Vector3::new(
        angle.cos() * radius,
        (angle * 2.0).sin() * RING_WAVE,
        angle.sin() * radius,
    ))
}

/// Categories spread over a sphere around a layered core, each with its
/// skills in a ring and a spoke from every skill back to the center.
pub struct SkillsPolyhedron {
    config: PolyhedronConfig,
    entrance: Entrance,
    group: TransformID,
    skill_positions: Vec<Vector3>,
}

impl SkillsPolyhedron {
    pub const NAME: &'static str = "skills_polyhedron";

    pub fn new(config: PolyhedronConfig) -> Self {
        Self {
            config,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            skill_positions: Vec::new(),
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    /// Skill positions in the group's space, in category order.
    pub fn skill_positions(&self) -> &[Vector3] {
        &self.skill_positions
    }

    fn spawn_core(&self, ctx: &mut SceneContext<'_>) {
        let shell = Transform3D::IDENTITY.with_uniform_scale(1.3 * 2.0);
        let shell = solid(ctx, Some(self.group), shell, MeshSource::SPHERE, CORE_COLOR);
        ctx.set_opacity(shell, 0.15);

        let mut inner = Transform3D::IDENTITY.with_uniform_scale(1.1);
        inner.set_euler(Vector3::new(0.6, 0.6, 0.0));
        let inner = solid(ctx, Some(self.group), inner, MeshSource::CUBE, CORE_COLOR.shade(20));
        ctx.set_opacity(inner, 0.3);

        let glow = sphere(ctx, Some(self.group), Vector3::ZERO, 0.9, CORE_COLOR);
        ctx.set_opacity(glow, 0.08);
    }
}

impl Scene for SkillsPolyhedron {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));
        self.spawn_core(ctx);

        let layout = SphericalLayout::new(self.config.radius);
        let categories = self.config.categories.len();
        for (i, category) in self.config.categories.iter().enumerate() {
            let Some(center) = layout.position(i, categories) else {
                continue;
            };
            let title = ctx.spawn_child(
                self.group,
                Transform3D::from_position(center * self.config.label_scale),
            );
            ctx.set_label(title, category.name.as_str());
            ctx.set_tint(title, category.color);

            let count = category.skills.len();
            let ring: Vec<Vector3> = (0..count)
                .filter_map(|j| ring_offset(j, count))
                .map(|offset| center + offset)
                .collect();
            for (skill, &at) in category.skills.iter().zip(&ring) {
                let node = sphere(ctx, Some(self.group), at, SKILL_RADIUS, category.color);
                ctx.set_label(node, skill.as_str());
            }
            for spoke in hub_and_spoke(Vector3::ZERO, &ring) {
                line(
                    ctx,
                    Some(self.group),
                    &spoke.with_opacity(SPOKE_OPACITY),
                    category.color,
                );
            }
            self.skill_positions.extend(ring);
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_euler_xyz(NOD.sample(t), SPIN.absolute(t), 0.0);
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
    use crate::testing::{assert_close, assert_same_rotation, frame, label_position};
    use vitrine_graphics::HeadlessGraphics;
    use vitrine_runtime::Runtime;

    #[test]
    fn ring_widens_with_skill_count() {
        let three = ring_offset(0, 3).unwrap();
        let six = ring_offset(0, 6).unwrap();
        assert!((three.x - 0.95).abs() < 1e-6);
        assert!((six.x - 1.1).abs() < 1e-6);
        assert_eq!(three.y, 0.0);
        assert!(ring_offset(0, 0).is_none());
    }

    #[test]
    fn first_category_title_sits_at_the_pole() {
        let mut runtime = Runtime::new();
        runtime
            .mount(SkillsPolyhedron::new(PolyhedronConfig::default()))
            .unwrap();
        runtime.update(0.0);
        // Index 0 of the Fibonacci spread has phi = π, i.e. -Z.
        assert_close(label_position(&runtime, "Frontend").unwrap(), [0.0, 0.0, -2.0]);
    }

    #[test]
    fn one_skill_and_one_spoke_per_entry() {
        let mut runtime = Runtime::new();
        let mut gfx = HeadlessGraphics::new();
        let id = runtime
            .mount(SkillsPolyhedron::new(PolyhedronConfig::default()))
            .unwrap();
        let skills = runtime
            .with_scene::<SkillsPolyhedron, _, _>(id, |s| s.skill_positions().len())
            .unwrap();
        assert_eq!(skills, 5 + 5 + 4 + 4 + 4 + 3);

        frame(&mut runtime, &mut gfx, 0.016);
        frame(&mut runtime, &mut gfx, 0.016);
        // Three core shells, then a sphere and a spoke per skill.
        assert_eq!(gfx.retained_count(), 3 + 2 * skills);
    }

    #[test]
    fn skills_stay_on_their_ring() {
        let mut runtime = Runtime::new();
        let config = PolyhedronConfig::default();
        let id = runtime.mount(SkillsPolyhedron::new(config.clone())).unwrap();
        let positions = runtime
            .with_scene::<SkillsPolyhedron, _, _>(id, |s| s.skill_positions().to_vec())
            .unwrap();
        let center = SphericalLayout::new(config.radius).position(0, 6).unwrap();
        for p in &positions[..5] {
            let d = *p - center;
            let flat = (d.x * d.x + d.z * d.z).sqrt();
            assert!((flat - (0.8 + 0.05 * 5.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn group_spins_and_nods() {
        let mut runtime = Runtime::new();
        let id = runtime
            .mount(SkillsPolyhedron::new(PolyhedronConfig::default()))
            .unwrap();
        runtime.update(5.0);
        let group = runtime.with_scene::<SkillsPolyhedron, _, _>(id, |s| s.group()).unwrap();
        let rotation = runtime.element(group).unwrap().transform.rotation;
        let expected = Quaternion::from_euler_xyz(0.03 * 1.5f32.sin(), 0.4, 0.0);
        assert_same_rotation(rotation, expected);
    }

    #[test]
    fn no_categories_leaves_only_the_core() {
        let config = PolyhedronConfig {
            categories: Vec::new(),
            ..PolyhedronConfig::default()
        };
        let mut runtime = Runtime::new();
        let id = runtime.mount(SkillsPolyhedron::new(config)).unwrap();
        assert_eq!(runtime.elements_of(id).len(), 4);
        assert!(runtime.label_anchors().is_empty());
    }
}
