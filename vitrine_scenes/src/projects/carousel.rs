use crate::common::{Entrance, solid};
use vitrine_animation::{FrameTime, Spin, wrap_angle};
use vitrine_ids::TransformID;
use vitrine_layout::CircularLayout;
use vitrine_project::{CarouselConfig, ProjectEntry};
use vitrine_render_bridge::MeshSource;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

/// Viewport widths below this get the compact ring.
pub const COMPACT_BELOW: u32 = 768;

const CARD_COLOR: Color = Color::rgb(0x4B, 0x00, 0x82);
const CARD_SIZE: Vector3 = Vector3::new(2.0, 2.5, 0.1);
const HOVER_GROW: f32 = 1.2;

struct Card {
    id: String,
    name: String,
    anchor: TransformID,
    body: TransformID,
}

/// Project cards on a ring facing its center. The ring turns until a card is hovered.
pub struct ProjectCarousel {
    config: CarouselConfig,
    projects: Vec<ProjectEntry>,
    breakpoint: u32,
    entrance: Entrance,
    group: TransformID,
    cards: Vec<Card>,
    angle: f32,
    hovered: Option<usize>,
}

impl ProjectCarousel {
    pub const NAME: &'static str = "project_carousel";

    pub fn new(config: CarouselConfig, projects: Vec<ProjectEntry>) -> Self {
        Self {
            config,
            projects,
            breakpoint: COMPACT_BELOW,
            entrance: Entrance::always(),
            group: TransformID::nil(),
            cards: Vec::new(),
            angle: 0.0,
            hovered: None,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn card_anchors(&self) -> Vec<TransformID> {
        self.cards.iter().map(|card| card.anchor).collect()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Id of the hovered project, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered
            .and_then(|i| self.cards.get(i))
            .map(|card| card.id.as_str())
    }

    fn set_hovered(&mut self, ctx: &mut SceneContext<'_>, hovered: Option<usize>) {
        self.hovered = hovered;
        for (i, card) in self.cards.iter().enumerate() {
            let grow = if Some(i) == hovered { HOVER_GROW } else { 1.0 };
            if let Some(body) = ctx.transform_mut(card.body) {
                body.scale = CARD_SIZE * grow;
            }
        }
    }
}

impl Scene for ProjectCarousel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        let radius = if ctx.viewport().width < self.breakpoint {
            self.config.compact_radius
        } else {
            self.config.radius
        };
        log::debug!("carousel radius {} for width {}", radius, ctx.viewport().width);

        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));
        let layout = CircularLayout::new(radius);
        let total = self.projects.len();
        for (i, project) in self.projects.iter().enumerate() {
            let (Some(at), Some(yaw)) = (layout.position(i, total), layout.inward_yaw(i, total))
            else {
                continue;
            };
            let anchor = ctx.spawn_child(
                self.group,
                Transform3D::new(at, Quaternion::from_rotation_y(yaw), Vector3::ONE),
            );
            ctx.set_label(anchor, project.name.as_str());

            let body = Transform3D::new(Vector3::ZERO, Quaternion::IDENTITY, CARD_SIZE);
            let body = solid(ctx, Some(anchor), body, MeshSource::CUBE, CARD_COLOR);
            let screen = Transform3D::new(
                Vector3::new(0.0, 0.6, 0.055),
                Quaternion::IDENTITY,
                Vector3::new(1.8, 1.0, 1.0),
            );
            solid(ctx, Some(anchor), screen, MeshSource::PLANE, CARD_COLOR.shade(40));

            self.cards.push(Card {
                id: project.id.clone(),
                name: project.name.clone(),
                anchor,
                body,
            });
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        if self.hovered.is_none() {
            self.angle = wrap_angle(Spin::new(self.config.spin).incremental(self.angle, time.delta));
        }
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_rotation_y(self.angle);
            group.scale = Vector3::splat(scale);
        }
    }

    fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        if self.entrance.observe(event) {
            return;
        }
        if let SceneEvent::Hover(target) = event {
            let hovered = target.as_deref().and_then(|key| {
                self.cards
                    .iter()
                    .position(|card| card.id == key || card.name == key)
            });
            if hovered != self.hovered {
                self.set_hovered(ctx, hovered);
            }
        }
    }
}
