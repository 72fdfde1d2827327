use crate::common::{scene_rng, solid, sphere, texture_data};
use rand::Rng;
use rand::rngs::StdRng;
use std::f32::consts::PI;
use vitrine_animation::{Damped, Damping, FrameTime, LoadPhase, LoadProgress, TypeReveal};
use vitrine_connectors::{Tube, proximity_links};
use vitrine_ids::{TimerID, TransformID};
use vitrine_layout::{Distribution, ParticleField, ParticleStyle};
use vitrine_project::PreloaderConfig;
use vitrine_render_bridge::{Camera3DState, MeshSource};
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};
use vitrine_texture::{generate, preloader_backdrop};

const CAMERA_START: Vector3 = Vector3::new(0.0, 0.0, 10.0);
const CAMERA_CLOCK_STEP: f32 = 0.002;
const CAMERA_FOV_DEGREES: f32 = 50.0;

const BACKDROP_SIZE: f32 = 40.0;
const BACKDROP_TURN: f32 = 0.02;
const SHAPE_TURN: f32 = 0.2;
const SHAPE_FLOAT: f32 = 0.09;
const SHELL_TURN: f32 = 0.03;
const LINK_COLOR: Color = Color::rgb(0x40, 0x80, 0xFF);

/// Drift clock runs at half speed; points travel up to `DRIFT` from home.
const DRIFT_CLOCK: f32 = 0.5;
const DRIFT: f32 = 1.2;

const SHAPE_MESHES: [MeshSource; 4] = [
    MeshSource::CUBE,
    MeshSource::CYLINDER,
    MeshSource::SPHERE,
    MeshSource::CONE,
];

/// Offset of drifting point `index` from its home after `t` seconds.
pub fn drift(index: usize, t: f32) -> Vector3 {
    let phase = index as f32 * 0.5;
    let s = DRIFT_CLOCK * t + phase;
    Vector3::new(
        DRIFT * (s.sin() - phase.sin()),
        DRIFT * (phase.cos() - s.cos()),
        0.0,
    )
}

/// Where the camera wants to be after `clock` ticks of drift.
pub fn camera_target(clock: f32) -> Vector3 {
    Vector3::new(clock.sin() * 0.2, (clock * 0.5).cos() * 0.1, CAMERA_START.z)
}

struct Shape {
    id: TransformID,
    home: Vector3,
    euler: Vector3,
    speed: f32,
}

struct Link {
    pair: (usize, usize),
    id: TransformID,
}

/// The loading screen: a slowly turning backdrop, floating shapes, a web of
/// drifting points and a particle shell, with a progress readout and a typed title.
pub struct PreloaderBackdrop {
    config: PreloaderConfig,
    rng: StdRng,
    progress: LoadProgress,
    title: TypeReveal,
    progress_timer: Option<TimerID>,
    title_timer: Option<TimerID>,
    camera: Damped<Vector3>,
    camera_clock: f32,
    backdrop: TransformID,
    shell: TransformID,
    shapes: Vec<Shape>,
    homes: Vec<Vector3>,
    links: Vec<Link>,
    title_anchor: TransformID,
    progress_anchor: TransformID,
}

impl PreloaderBackdrop {
    pub const NAME: &'static str = "preloader";

    pub fn new(config: PreloaderConfig, title: impl Into<String>, seed: u64) -> Self {
        let damping = Damping::Fixed(config.camera_damping);
        Self {
            config,
            rng: scene_rng(seed, Self::NAME),
            progress: LoadProgress::new(),
            title: TypeReveal::new(title),
            progress_timer: None,
            title_timer: None,
            camera: Damped::new(CAMERA_START, damping),
            camera_clock: 0.0,
            backdrop: TransformID::nil(),
            shell: TransformID::nil(),
            shapes: Vec::new(),
            homes: Vec::new(),
            links: Vec::new(),
            title_anchor: TransformID::nil(),
            progress_anchor: TransformID::nil(),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn phase(&self) -> LoadPhase {
        self.progress.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    pub fn title(&self) -> &str {
        self.title.visible()
    }

    pub fn camera_position(&self) -> Vector3 {
        self.camera.value()
    }

    pub fn backdrop(&self) -> TransformID {
        self.backdrop
    }

    /// Point pairs currently close enough to be linked.
    pub fn visible_links(&self, t: f32) -> Vec<(usize, usize)> {
        let points = self.points_at(t);
        proximity_links(&points, self.config.link_distance)
    }

    fn points_at(&self, t: f32) -> Vec<Vector3> {
        self.homes
            .iter()
            .enumerate()
            .map(|(i, &home)| home + drift(i, t))
            .collect()
    }

    fn progress_text(&self) -> String {
        format!("{} {:.0}%", self.phase().label(), self.progress().floor())
    }

    fn spawn_shapes(&mut self, ctx: &mut SceneContext<'_>) {
        for i in 0..self.config.shapes {
            let rng = &mut self.rng;
            let home = Vector3::new(
                (rng.gen_range(0.0f32..1.0) - 0.5) * 15.0,
                (rng.gen_range(0.0f32..1.0) - 0.5) * 10.0,
                (rng.gen_range(0.0f32..1.0) - 0.5) * 5.0 - 3.0,
            );
            let euler = Vector3::new(
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
            );
            let scale = rng.gen_range(0.2f32..0.7);
            let color = Color::rgb(
                (rng.gen_range(0.1f32..0.2) * 255.0) as u8,
                (rng.gen_range(0.3f32..0.5) * 255.0) as u8,
                (rng.gen_range(0.6f32..0.9) * 255.0) as u8,
            );
            let speed = rng.gen_range(0.2f32..0.7);

            let mut transform = Transform3D::from_position(home).with_uniform_scale(scale);
            transform.set_euler(euler);
            let mesh = SHAPE_MESHES[i % SHAPE_MESHES.len()].clone();
            let id = solid(ctx, None, transform, mesh, color);
            ctx.set_opacity(id, 0.8);
            self.shapes.push(Shape {
                id,
                home,
                euler,
                speed,
            });
        }
    }

    fn spawn_web(&mut self, ctx: &mut SceneContext<'_>) {
        let rng = &mut self.rng;
        self.homes = (0..self.config.points)
            .map(|_| {
                Vector3::new(
                    (rng.gen_range(0.0f32..1.0) - 0.5) * 12.0,
                    (rng.gen_range(0.0f32..1.0) - 0.5) * 6.0,
                    (rng.gen_range(0.0f32..1.0) - 0.5) * 3.0 - 2.0,
                )
            })
            .collect();

        // One unit segment per pair, stretched between its points each frame.
        for i in 0..self.homes.len() {
            for j in i + 1..self.homes.len() {
                let id = ctx.spawn(Transform3D::IDENTITY);
                ctx.attach_mesh(
                    id,
                    MeshSource::Polyline(vec![[0.0, -0.5, 0.0], [0.0, 0.5, 0.0]]),
                );
                ctx.set_tint(id, LINK_COLOR);
                ctx.set_opacity(id, 0.2);
                ctx.set_visible(id, false);
                self.links.push(Link { pair: (i, j), id });
            }
        }
    }

    fn spawn_shell(&mut self, ctx: &mut SceneContext<'_>) {
        let distribution = Distribution::BandedShell {
            min_radius: 5.0,
            max_radius: 10.0,
            polar_band: 0.1..0.9,
            y_squash: 0.5,
        };
        let style = ParticleStyle {
            size: 0.02..0.07,
            opacity: 0.6..0.6,
            accent_ratio: 0.0,
        };
        let count = self.config.particles;
        let field = ParticleField::generate_styled(count, &distribution, &style, &mut self.rng);
        self.shell = ctx.spawn(Transform3D::IDENTITY);
        for particle in &field.particles {
            let dot = sphere(ctx, Some(self.shell), particle.position, particle.size, Color::WHITE);
            ctx.set_opacity(dot, particle.opacity);
        }
    }

    fn stretch_links(&self, ctx: &mut SceneContext<'_>, t: f32) {
        let points = self.points_at(t);
        let mut near = proximity_links(&points, self.config.link_distance)
            .into_iter()
            .peekable();
        for link in &self.links {
            let linked = near.next_if_eq(&link.pair).is_some();
            ctx.set_visible(link.id, linked);
            if !linked {
                continue;
            }
            let (i, j) = link.pair;
            let span = Tube::between(points[i], points[j], 0.0);
            if let Some(transform) = ctx.transform_mut(link.id) {
                *transform = Transform3D::new(
                    span.midpoint,
                    span.rotation,
                    Vector3::new(1.0, span.length, 1.0),
                );
            }
        }
    }

    fn drift_camera(&mut self, ctx: &mut SceneContext<'_>, delta: f32) {
        self.camera_clock += CAMERA_CLOCK_STEP;
        self.camera.set_target(camera_target(self.camera_clock));
        let position = self.camera.step(delta);
        let look = Quaternion::from_rotation_arc(
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::ZERO - position,
        );
        ctx.set_camera(Camera3DState {
            position: position.to_array(),
            rotation: [look.x, look.y, look.z, look.w],
            fov_y_radians: CAMERA_FOV_DEGREES.to_radians(),
        });
    }

    fn on_progress_tick(&mut self, ctx: &mut SceneContext<'_>) {
        self.progress.advance(&mut self.rng);
        ctx.set_label(self.progress_anchor, self.progress_text());
        if self.progress.is_complete() {
            log::info!("preloader finished");
            if let Some(id) = self.progress_timer.take() {
                ctx.cancel_timer(id);
            }
        }
    }

    fn on_title_tick(&mut self, ctx: &mut SceneContext<'_>) {
        self.title.tick();
        ctx.set_label(self.title_anchor, self.title.visible());
        if self.title.is_done() {
            if let Some(id) = self.title_timer.take() {
                ctx.cancel_timer(id);
            }
        }
    }
}

impl Scene for PreloaderBackdrop {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        if self.config.progress_interval_ms == 0 || self.config.type_interval_ms == 0 {
            return Err(SceneError::invalid("intervals", "timer intervals must be positive"));
        }

        let texture = generate(&preloader_backdrop(), &mut self.rng);
        let backdrop = Transform3D::from_position(Vector3::new(0.0, 0.0, -10.0))
            .with_uniform_scale(BACKDROP_SIZE);
        self.backdrop = solid(ctx, None, backdrop, MeshSource::PLANE, Color::WHITE);
        ctx.attach_texture(self.backdrop, texture_data(texture.image));

        self.spawn_shapes(ctx);
        self.spawn_web(ctx);
        self.spawn_shell(ctx);

        self.title_anchor = ctx.spawn(Transform3D::from_position(Vector3::new(0.0, 0.8, 0.0)));
        let readout = Transform3D::from_position(Vector3::new(0.0, -0.8, 0.0));
        self.progress_anchor = ctx.spawn(readout);
        ctx.set_label(self.progress_anchor, self.progress_text());

        self.progress_timer = Some(ctx.set_interval(self.config.progress_interval_ms));
        self.title_timer = Some(ctx.set_interval(self.config.type_interval_ms));
        log::debug!(
            "preloader: {} shapes, {} links, {} particles",
            self.shapes.len(),
            self.links.len(),
            self.config.particles
        );
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        self.drift_camera(ctx, time.delta);

        if let Some(backdrop) = ctx.transform_mut(self.backdrop) {
            backdrop.rotation = Quaternion::from_euler_xyz(0.0, 0.0, BACKDROP_TURN * t);
        }
        for shape in &self.shapes {
            let turn = SHAPE_TURN * shape.speed * t;
            let lift = SHAPE_FLOAT * (1.0 - (shape.speed * t).cos()) / shape.speed;
            if let Some(transform) = ctx.transform_mut(shape.id) {
                let Vector3 { x, y, z } = shape.euler;
                transform.rotation = Quaternion::from_euler_xyz(x + turn, y + turn, z);
                transform.position = shape.home + Vector3::new(0.0, lift, 0.0);
            }
        }
        self.stretch_links(ctx, t);
        if let Some(shell) = ctx.transform_mut(self.shell) {
            shell.rotation = Quaternion::from_rotation_y(SHELL_TURN * t);
        }
    }

    fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        match event {
            SceneEvent::TimerFired(id) if self.progress_timer == Some(*id) => {
                self.on_progress_tick(ctx)
            }
            SceneEvent::TimerFired(id) if self.title_timer == Some(*id) => self.on_title_tick(ctx),
            _ => {}
        }
    }
}
