use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vitrine_animation::{Damped, Damping};
use vitrine_connectors::{LineSegment, Tube};
use vitrine_ids::{SeedKey, TransformID};
use vitrine_render_bridge::{MeshSource, TextureData};
use vitrine_runtime::{SceneContext, SceneEvent};
use vitrine_structs::{Color, Transform3D, Vector3};

/// Seeded generator for one scene's decorative randomness. Same base and name, same stream.
pub fn scene_rng(base: u64, scene: &str) -> StdRng {
    StdRng::seed_from_u64(SeedKey::derive(base, scene).0)
}

pub fn texture_data(image: RgbaImage) -> TextureData {
    let (width, height) = image.dimensions();
    TextureData {
        width,
        height,
        rgba: image.into_raw(),
    }
}

pub(crate) fn spawn_under(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    transform: Transform3D,
) -> TransformID {
    match parent {
        Some(parent) => ctx.spawn_child(parent, transform),
        None => ctx.spawn(transform),
    }
}

/// A tinted preset mesh. Preset primitives are unit sized, so a sphere of
/// radius `r` is scaled by `2r`.
pub(crate) fn solid(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    transform: Transform3D,
    mesh: MeshSource,
    tint: Color,
) -> TransformID {
    let id = spawn_under(ctx, parent, transform);
    ctx.attach_mesh(id, mesh);
    ctx.set_tint(id, tint);
    id
}

pub(crate) fn sphere(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    center: Vector3,
    radius: f32,
    tint: Color,
) -> TransformID {
    let transform = Transform3D::from_position(center).with_uniform_scale(radius * 2.0);
    solid(ctx, parent, transform, MeshSource::SPHERE, tint)
}

/// A straight line drawn in its parent's space, carrying the segment's opacity.
pub(crate) fn line(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    segment: &LineSegment,
    tint: Color,
) -> TransformID {
    let id = spawn_under(ctx, parent, Transform3D::IDENTITY);
    let [a, b] = segment.points();
    ctx.attach_mesh(id, MeshSource::Polyline(vec![a.to_array(), b.to_array()]));
    ctx.set_tint(id, tint);
    ctx.set_opacity(id, segment.opacity);
    id
}

/// A cylinder spanning the tube's endpoints. Coincident endpoints spawn nothing.
pub(crate) fn cylinder(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    tube: &Tube,
    tint: Color,
) -> Option<TransformID> {
    if tube.is_degenerate() {
        return None;
    }
    Some(solid(ctx, parent, tube.to_transform(), MeshSource::CYLINDER, tint))
}

pub(crate) fn swept_tube(
    ctx: &mut SceneContext<'_>,
    parent: Option<TransformID>,
    points: &[Vector3],
    radius: f32,
    tint: Color,
) -> Option<TransformID> {
    if points.len() < 2 {
        return None;
    }
    let id = spawn_under(ctx, parent, Transform3D::IDENTITY);
    ctx.attach_mesh(
        id,
        MeshSource::Tube {
            points: points.iter().map(|p| p.to_array()).collect(),
            radius,
            radial_segments: 8,
        },
    );
    ctx.set_tint(id, tint);
    Some(id)
}

const ENTRANCE_RATE: f32 = 6.0;

/// Scale that grows in when the scene's page section scrolls into view.
/// Without a section the scene is shown from the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Entrance {
    section: Option<String>,
    scale: Damped<f32>,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::always()
    }
}

impl Entrance {
    pub fn always() -> Self {
        Self {
            section: None,
            scale: Damped::new(1.0, Damping::Exponential { rate: ENTRANCE_RATE }),
        }
    }

    pub fn on_section(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            scale: Damped::new(0.0, Damping::Exponential { rate: ENTRANCE_RATE }),
        }
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Picks up `Reveal` events for this section. Returns whether the event was consumed.
    pub fn observe(&mut self, event: &SceneEvent) -> bool {
        let SceneEvent::Reveal { section, revealed } = event else {
            return false;
        };
        if self.section.as_deref() != Some(section.as_str()) {
            return false;
        }
        self.scale.set_target(if *revealed { 1.0 } else { 0.0 });
        true
    }

    pub fn step(&mut self, delta: f32) -> f32 {
        self.scale.step(delta)
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn scene_rng_is_stable_per_name() {
        let a: Vec<u32> = scene_rng(7, "orbit").sample_iter(rand::distributions::Standard).take(4).collect();
        let b: Vec<u32> = scene_rng(7, "orbit").sample_iter(rand::distributions::Standard).take(4).collect();
        let c: Vec<u32> = scene_rng(7, "helix").sample_iter(rand::distributions::Standard).take(4).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn entrance_grows_only_for_its_section() {
        let mut entrance = Entrance::on_section("skills");
        assert_eq!(entrance.step(0.1), 0.0);

        let other = SceneEvent::Reveal {
            section: "projects".to_string(),
            revealed: true,
        };
        assert!(!entrance.observe(&other));
        assert_eq!(entrance.step(0.1), 0.0);

        let mine = SceneEvent::Reveal {
            section: "skills".to_string(),
            revealed: true,
        };
        assert!(entrance.observe(&mine));
        let mut last = 0.0;
        for _ in 0..120 {
            let scale = entrance.step(1.0 / 60.0);
            assert!(scale >= last && scale <= 1.0);
            last = scale;
        }
        assert!(last > 0.99);
    }

    #[test]
    fn texture_data_is_packed_rgba() {
        let data = texture_data(RgbaImage::new(3, 2));
        assert_eq!((data.width, data.height), (3, 2));
        assert!(data.is_well_formed());
    }
}
