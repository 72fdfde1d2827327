use crate::common::{Entrance, scene_rng, sphere, texture_data};
use std::f32::consts::PI;
use vitrine_animation::{FrameTime, Oscillator, Spin};
use vitrine_ids::TransformID;
use vitrine_layout::{CircularLayout, ShellPlacement};
use vitrine_project::OrbitConfig;
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};
use vitrine_texture::{generate, planet};

const CORE_RADIUS: f32 = 1.2;
const MARKER_RADIUS: f32 = 0.1;
const RING_POINTS: usize = 64;
const BREATH: Oscillator = Oscillator::new(0.03, 0.4).with_base(1.0);

/// Guide rings as `(radius, tilt from the XZ plane, color, opacity)`.
const RINGS: [(f32, f32, Color, f32); 3] = [
    (2.0, 0.0, Color::rgb(0x8A, 0x2B, 0xE2), 0.2),
    (3.2, PI / 2.5 - PI / 2.0, Color::rgb(0x00, 0xBF, 0xFF), 0.15),
    (4.1, PI / 3.0 - PI / 2.0, Color::rgb(0xFF, 0x00, 0xFF), 0.1),
];

/// Badge scale for a skill of the given importance.
#[inline]
pub fn skill_size(importance: f32) -> f32 {
    0.3 + 0.2 * importance
}

/// Skills scattered on shells around a textured, breathing planet.
pub struct SkillsOrbit {
    config: OrbitConfig,
    seed: u64,
    entrance: Entrance,
    group: TransformID,
    core: TransformID,
    skills: Vec<(TransformID, Vector3)>,
}

impl SkillsOrbit {
    pub const NAME: &'static str = "skills_orbit";

    pub fn new(config: OrbitConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            core: TransformID::nil(),
            skills: Vec::new(),
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn core(&self) -> TransformID {
        self.core
    }

    /// Anchor element and placed position of every skill, in config order.
    pub fn skills(&self) -> &[(TransformID, Vector3)] {
        &self.skills
    }
}

impl Scene for SkillsOrbit {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        let mut rng = scene_rng(self.seed, Self::NAME);
        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));

        let texture = generate(&planet(), &mut rng);
        self.core = sphere(ctx, Some(self.group), Vector3::ZERO, CORE_RADIUS, Color::WHITE);
        ctx.attach_texture(self.core, texture_data(texture.image));

        for skill in &self.config.skills {
            let placement = ShellPlacement {
                radius: skill.radius,
                theta: skill.theta,
            };
            let at = placement.place(&mut rng);
            let anchor = ctx.spawn_child(
                self.group,
                Transform3D::from_position(at).with_uniform_scale(skill_size(skill.importance)),
            );
            ctx.set_label(anchor, skill.name.as_str());
            ctx.set_tint(anchor, skill.color);
            sphere(ctx, Some(anchor), Vector3::ZERO, MARKER_RADIUS, skill.color);
            self.skills.push((anchor, at));
        }

        for (radius, tilt, color, opacity) in RINGS {
            let mut points: Vec<[f32; 3]> = CircularLayout::new(radius)
                .positions(RING_POINTS)
                .into_iter()
                .map(Vector3::to_array)
                .collect();
            if let Some(&first) = points.first() {
                points.push(first);
            }
            let mut transform = Transform3D::IDENTITY;
            transform.set_euler(Vector3::new(tilt, 0.0, 0.0));
            let ring = ctx.spawn(transform);
            ctx.attach_mesh(ring, MeshSource::Polyline(points));
            ctx.set_tint(ring, color);
            ctx.set_opacity(ring, opacity);
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_rotation_y(Spin::new(self.config.spin).absolute(t));
            group.scale = Vector3::splat(scale);
        }
        if let Some(core) = ctx.transform_mut(self.core) {
            core.scale = Vector3::splat(CORE_RADIUS * 2.0 * BREATH.sample(t));
        }
    }

    fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        self.entrance.observe(event);
    }
}
