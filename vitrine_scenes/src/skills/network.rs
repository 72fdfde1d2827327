use crate::common::{Entrance, line, scene_rng, sphere};
use vitrine_animation::{FrameTime, Oscillator};
use vitrine_connectors::{Connector, ConnectorStyle, bipartite};
use vitrine_ids::TransformID;
use vitrine_layout::LayeredColumns;
use vitrine_project::NetworkConfig;
use vitrine_runtime::{Scene, SceneContext, SceneError, SceneEvent};
use vitrine_structs::{Color, Quaternion, Transform3D, Vector3};

const LINK_COLOR: Color = Color::rgb(0x8A, 0x2B, 0xE2);
const NODE_RADIUS: f32 = 0.25;
const HOVER_RADIUS: f32 = 0.35;
const LABEL_DROP: f32 = 0.5;

const SWAY: Oscillator = Oscillator::new(0.1, 0.1);
const FLOAT: Oscillator = Oscillator::new(0.1, 0.3);

struct NetworkNode {
    name: String,
    sphere: TransformID,
}

struct NetworkLink {
    connector: Connector<String>,
    line: TransformID,
}

/// Skills as a layered network: one column per layer, every node linked to
/// every node of the next layer. Hovering a node lights up its links.
pub struct SkillsNetwork {
    config: NetworkConfig,
    seed: u64,
    style: ConnectorStyle,
    entrance: Entrance,
    group: TransformID,
    nodes: Vec<NetworkNode>,
    links: Vec<NetworkLink>,
    hovered: Option<String>,
}

impl SkillsNetwork {
    pub const NAME: &'static str = "skills_network";

    pub fn new(config: NetworkConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            style: ConnectorStyle::default(),
            entrance: Entrance::always(),
            group: TransformID::nil(),
            nodes: Vec::new(),
            links: Vec::new(),
            hovered: None,
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    pub fn group(&self) -> TransformID {
        self.group
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Line elements touching `node`.
    pub fn links_of(&self, node: &str) -> Vec<TransformID> {
        let key = node.to_string();
        self.links
            .iter()
            .filter(|link| link.connector.touches(&key))
            .map(|link| link.line)
            .collect()
    }

    fn columns(&self) -> LayeredColumns {
        LayeredColumns {
            spacing: self.config.layer_spacing,
            node_spacing: self.config.node_spacing,
            title_height: self.config.title_height,
        }
    }

    fn restyle(&self, ctx: &mut SceneContext<'_>) {
        let hovered = self.hovered.as_ref();
        for link in &self.links {
            let (opacity, _width) = self.style.resolve(&link.connector, hovered);
            let lit = hovered.is_some_and(|key| link.connector.touches(key));
            ctx.set_opacity(link.line, opacity);
            ctx.set_tint(link.line, if lit { Color::WHITE } else { LINK_COLOR });
        }
        for node in &self.nodes {
            let radius = if hovered == Some(&node.name) {
                HOVER_RADIUS
            } else {
                NODE_RADIUS
            };
            if let Some(transform) = ctx.transform_mut(node.sphere) {
                transform.scale = Vector3::splat(radius * 2.0);
            }
        }
    }
}

impl Scene for SkillsNetwork {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn mount(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), SceneError> {
        let layers = &self.config.layers;
        self.group = ctx.spawn(Transform3D::IDENTITY.with_uniform_scale(self.entrance.scale()));
        let columns = self.columns();
        let sizes: Vec<usize> = layers.iter().map(|layer| layer.nodes.len()).collect();
        let positions = columns.arrange(&sizes);

        let mut keyed = Vec::with_capacity(layers.len());
        for (l, layer) in layers.iter().enumerate() {
            if let Some(title) = columns.title(l, layers.len()) {
                let anchor = ctx.spawn_child(self.group, Transform3D::from_position(title));
                ctx.set_label(anchor, layer.name.as_str());
                ctx.set_tint(anchor, layer.color);
            }

            let mut column = Vec::with_capacity(layer.nodes.len());
            for (name, &at) in layer.nodes.iter().zip(&positions[l]) {
                let anchor = ctx.spawn_child(self.group, Transform3D::from_position(at));
                let sphere = sphere(ctx, Some(anchor), Vector3::ZERO, NODE_RADIUS, layer.color);
                let label = ctx.spawn_child(
                    anchor,
                    Transform3D::from_position(Vector3::new(0.0, -LABEL_DROP, 0.0)),
                );
                ctx.set_label(label, name.as_str());
                ctx.set_tint(label, layer.color);

                self.nodes.push(NetworkNode {
                    name: name.clone(),
                    sphere,
                });
                column.push((name.clone(), at));
            }
            keyed.push(column);
        }

        let mut rng = scene_rng(self.seed, Self::NAME);
        for connector in bipartite(&keyed, &mut rng) {
            let line = line(ctx, Some(self.group), &connector.segment, LINK_COLOR);
            self.links.push(NetworkLink { connector, line });
        }
        log::debug!("network: {} nodes, {} links", self.nodes.len(), self.links.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, time: FrameTime) {
        let t = time.elapsed;
        let scale = self.entrance.step(time.delta);
        if let Some(group) = ctx.transform_mut(self.group) {
            group.rotation = Quaternion::from_rotation_y(SWAY.sample(t));
            group.position.y = FLOAT.sample(t);
            group.scale = Vector3::splat(scale);
        }
    }

    fn handle_event(&mut self, ctx: &mut SceneContext<'_>, event: &SceneEvent) {
        if self.entrance.observe(event) {
            return;
        }
        let SceneEvent::Hover(target) = event else {
            return;
        };
        let next = target
            .as_ref()
            .filter(|name| self.nodes.iter().any(|node| &node.name == *name))
            .cloned();
        if next != self.hovered {
            self.hovered = next;
            self.restyle(ctx);
        }
    }
}
