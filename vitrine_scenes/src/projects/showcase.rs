use crate::common::{Entrance, cylinder, scene_rng, solid, sphere};
use rand::Rng;
use std::f32::consts::FRAC_PI_4;
use vitrine_animation::{FrameTime, Oscillator, Spin};
use vitrine_connectors::Tube;
use vitrine_ids::TransformID;
use vitrine_layout::{CircularLayout, Distribution, ParticleField, ParticleStyle, VerticalWave};
use vitrine_project::{ProjectEntry, ShowcaseConfig};
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

const CARD_SIZE: Vector3 = Vector3::new(1.0, 0.1, 1.5);
const CORE_RADIUS: f32 = 0.5;
const INNER_SCALE: f32 = 0.7;
const PARTICLE_RADIUS: f32 = 0.02;
const RING_POINTS: usize = 100;

/// Cards run on a clock at half speed.
const CARD_CLOCK: f32 = 0.5;

const GROUP_SPIN: Spin = Spin::new(0.1);
const INNER_SPIN: Spin = Spin::new(-0.3);
const CORE_PULSE: Oscillator = Oscillator::new(0.05, 2.0).with_base(1.0);
const INNER_NOD: Oscillator = Oscillator::new(0.2, 0.5);
const RING_NOD: Oscillator = Oscillator::new(0.05, 0.3);

struct ShowcaseCard {
    body: TransformID,
    connector: Option<TransformID>,
}

/// Per-card motion: small tilt, bob and a pulsing connector, each phased by the card's index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub tilt: Vector3,
    pub bob: f32,
    pub connector_opacity: f32,
}

impl CardPose {
    /// `t` is the scene's elapsed time; cards see it at half speed.
    pub fn at(t: f32, index: usize) -> Self {
        let t = t * CARD_CLOCK;
        let i = index as f32;
        Self {
            tilt: Vector3::new((t + i).sin() * 0.1, (t * 0.5 + i).sin() * 0.1, 0.0),
            bob: (t + i * 0.5).sin() * 0.05,
            connector_opacity: 0.2 + (t * 0.8 + i).sin() * 0.1,
        }
    }
}

/// Projects floating on a wavy ring around a pulsing core, each tied to the
/// center by a thin tube, inside a seeded shell of particles.
pub struct ProjectShowcase {
    config: ShowcaseConfig,
    projects: Vec<ProjectEntry>,
    seed: u64,
    entrance: Entrance,
    group: TransformID,
    core: TransformID,
    inner: TransformID,
    ring: TransformID,
    cards: Vec<ShowcaseCard>,
    particles: ParticleField,
}

impl ProjectShowcase {
    pub const NAME: &'static str = "project_showcase";

    pub fn new(config: ShowcaseConfig, projects: Vec<ProjectEntry>, seed: u64) -> Self {
        Self {
            config,
            projects,
            seed,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            core: TransformID::nil(),
            inner: TransformID::nil(),
            ring: TransformID::nil(),
            cards: Vec::new(),
            particles: ParticleField::default(),
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn layout(&self) -> CircularLayout {
        CircularLayout::new(self.config.radius).with_wave(VerticalWave {
            amplitude: self.config.wave_amplitude,
            frequency: 1.0,
            phase: FRAC_PI_4,
        })
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn core(&self) -> TransformID {
        self.core
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn connectors(&self) -> Vec<TransformID> {
        self.cards.iter().filter_map(|card| card.connector).collect()
    }

    fn color(&self, index: usize) -> Color {
        let colors = &self.config.colors;
        colors
            .get(index % colors.len().max(1))
            .copied()
            .unwrap_or(Color::WHITE)
    }

    fn spawn_center(&mut self, ctx: &mut SceneContext<'_>) {
        let accent = self.color(0);
        self.core = sphere(ctx, Some(self.group), Vector3::ZERO, CORE_RADIUS, accent);

        let inner = Transform3D::IDENTITY.with_uniform_scale(CORE_RADIUS * 2.0 * INNER_SCALE);
        self.inner = solid(ctx, Some(self.group), inner, MeshSource::SPHERE, Color::WHITE);
        ctx.set_opacity(self.inner, 0.2);

        let mut points: Vec<[f32; 3]> = CircularLayout::new(self.config.radius)
            .positions(RING_POINTS)
            .into_iter()
            .map(Vector3::to_array)
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        self.ring = ctx.spawn_child(self.group, Transform3D::IDENTITY);
        ctx.attach_mesh(self.ring, MeshSource::Polyline(points));
        ctx.set_tint(self.ring, accent);
        ctx.set_opacity(self.ring, 0.2);
    }
}

impl Scene for ProjectShowcase {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));
        self.spawn_center(ctx);

        let layout = self.layout();
        let total = self.projects.len();
        for i in 0..total {
            let (Some(at), Some(yaw)) = (layout.position(i, total), layout.facing_yaw(i, total)) else {
                continue;
            };
            let color = self.color(i);
            let anchor = ctx.spawn_child(
                self.group,
                Transform3D::new(at, Quaternion::from_rotation_y(yaw), Vector3::ONE),
            );
            ctx.set_label(anchor, self.projects[i].name.as_str());
            let body = Transform3D::new(Vector3::ZERO, Quaternion::IDENTITY, CARD_SIZE);
            let body = solid(ctx, Some(anchor), body, MeshSource::CUBE, color);

            let tube = Tube::between(at, Vector3::ZERO, self.config.connector_radius);
            let connector = cylinder(ctx, Some(self.group), &tube, color);
            self.cards.push(ShowcaseCard { body, connector });
        }

        let mut rng = scene_rng(self.seed, Self::NAME);
        let style = ParticleStyle {
            size: PARTICLE_RADIUS..PARTICLE_RADIUS,
            opacity: 0.3..0.8,
            accent_ratio: 0.2,
        };
        let shell = Distribution::UniformShell {
            radius: self.config.particle_radius,
        };
        self.particles = ParticleField::generate_styled(self.config.particles, &shell, &style, &mut rng);
        for particle in &self.particles.particles {
            let tint = if particle.accent {
                let pick = rng.gen_range(0..self.config.colors.len().max(1));
                self.color(pick)
            } else {
                Color::WHITE
            };
            let id = sphere(ctx, Some(self.group), particle.position, particle.size, tint);
            ctx.set_opacity(id, particle.opacity);
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_rotation_y(GROUP_SPIN.absolute(t));
            group.scale = Vector3::splat(scale);
        }
        if let Some(core) = ctx.transform_mut(self.core) {
            core.scale = Vector3::splat(CORE_RADIUS * 2.0 * CORE_PULSE.sample(t));
        }
        if let Some(inner) = ctx.transform_mut(self.inner) {
            inner.rotation = Quaternion::from_euler_xyz(INNER_NOD.sample(t), INNER_SPIN.absolute(t), 0.0);
        }
        if let Some(ring) = ctx.transform_mut(self.ring) {
            ring.rotation = Quaternion::from_euler_xyz(RING_NOD.sample(t), 0.0, 0.0);
        }

        for (i, card) in self.cards.iter().enumerate() {
            let pose = CardPose::at(t, i);
            if let Some(body) = ctx.transform_mut(card.body) {
                body.set_euler(pose.tilt);
                body.position.y = pose.bob;
            }
            if let Some(connector) = card.connector {
                ctx.set_opacity(connector, pose.connector_opacity);
            }
        }
    }

    fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        self.entrance.observe(event);
    }
}
