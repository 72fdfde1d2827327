use crate::common::{Entrance, cylinder, sphere, swept_tube};
use vitrine_animation::{FrameTime, Spin};
use vitrine_connectors::Tube;
use vitrine_ids::TransformID;
use vitrine_layout::{HelixLayout, OPPOSITE_STRAND};
use vitrine_project::HelixConfig;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

const RUNG_OPACITY: f32 = 0.5;
const MARKER_RADIUS: f32 = 0.12;

/// Double helix of skills: one strand per skill list, a rung per pair and a
/// label anchor just outside each end of the rung.
pub struct SkillsHelix {
    config: HelixConfig,
    entrance: Entrance,
    group: TransformID,
    labels: Vec<TransformID>,
}

impl SkillsHelix {
    pub const NAME: &'static str = "skills_helix";

    pub fn new(config: HelixConfig) -> Self {
        Self {
            config,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            labels: Vec::new(),
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn labels(&self) -> &[TransformID] {
        &self.labels
    }

    fn layout(&self) -> HelixLayout {
        HelixLayout {
            radius: self.config.radius,
            pitch: self.config.pitch,
            length: self.config.length,
            samples: self.config.samples,
        }
    }

    fn label(
        &mut self,
        ctx: &mut SceneContext<'_>,
        text: &str,
        strand_point: Vector3,
        color: Color,
    ) {
        let scale = self.config.label_scale;
        let at = Vector3::new(strand_point.x * scale, strand_point.y, strand_point.z * scale);
        let anchor = ctx.spawn_child(self.group, Transform3D::from_position(at));
        ctx.set_label(anchor, text);
        ctx.set_tint(anchor, color);
        sphere(ctx, Some(anchor), Vector3::ZERO, MARKER_RADIUS, color);
        self.labels.push(anchor);
    }
}

impl Scene for SkillsHelix {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        if !(self.config.length > 0.0) {
            return Err(SceneError::invalid(
                "length",
                format!("helix length must be positive, got {}", self.config.length),
            ));
        }

        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));
        let layout = self.layout();
        let strand_radius = self.config.strand_radius;
        swept_tube(
            ctx,
            Some(self.group),
            &layout.strand(0.0),
            strand_radius,
            self.config.primary_color,
        );
        swept_tube(
            ctx,
            Some(self.group),
            &layout.strand(OPPOSITE_STRAND),
            strand_radius,
            self.config.secondary_color,
        );

        let pairs = self.config.primary.len().max(self.config.secondary.len());
        let rungs = layout.rungs(pairs);
        for (i, rung) in rungs.iter().enumerate() {
            let tube = Tube::between(rung.first, rung.second, self.config.rung_radius);
            if let Some(id) = cylinder(ctx, Some(self.group), &tube, Color::WHITE) {
                ctx.set_opacity(id, RUNG_OPACITY);
            }

            if let Some(text) = self.config.primary.get(i).cloned() {
                let color = self.config.primary_color;
                self.label(ctx, &text, rung.first, color);
            }
            if let Some(text) = self.config.secondary.get(i).cloned() {
                let color = self.config.secondary_color;
                self.label(ctx, &text, rung.second, color);
            }
        }
        log::debug!("helix: {} rungs, {} labels", rungs.len(), self.labels.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let scale = self.entrance.step(time.delta);
        let angle = Spin::new(self.config.spin).absolute(time.elapsed);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_rotation_y(angle);
            group.scale = Vector3::splat(scale);
        }
    }

    fn handle_event(&mut self, _ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        self.entrance.observe(event);
    }
}
