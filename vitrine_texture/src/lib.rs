//! Procedural RGBA textures: a deterministic gradient base with randomized
//! speckles and swirls painted on top.

pub mod gradient;
pub mod presets;
pub mod speckle;

pub use gradient::{GradientStop, LinearGradient};
pub use presets::{planet, preloader_backdrop, tile_face};
pub use speckle::{Speckle, SpeckleSpec, SwirlSpec, blend_over, paint_disc};

use image::{Rgba, RgbaImage};
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct TextureSpec {
    pub width: u32,
    pub height: u32,
    pub gradient: LinearGradient,
    pub speckles: SpeckleSpec,
    pub swirls: Option<SwirlSpec>,
}

#[derive(Debug, Clone)]
pub struct ProceduralTexture {
    pub image: RgbaImage,
    /// Every disc painted over the gradient, speckles first, then swirl dots.
    pub speckles: Vec<Speckle>,
}

impl ProceduralTexture {
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }
}

/// Gradient layer alone. Identical for identical specs.
pub fn render_gradient(spec: &TextureSpec) -> RgbaImage {
    let (w, h) = (spec.width, spec.height);
    RgbaImage::from_fn(w, h, |x, y| Rgba(spec.gradient.pixel(x, y, w, h).to_rgba8()))
}

/// Gradient, then speckles, then swirls, all drawn from `rng`.
pub fn generate<R: Rng + ?Sized>(spec: &TextureSpec, rng: &mut R) -> ProceduralTexture {
    let mut image = render_gradient(spec);
    let (w, h) = (spec.width, spec.height);

    let mut speckles = spec.speckles.scatter(w, h, rng);
    for s in &speckles {
        paint_disc(&mut image, s, spec.speckles.color);
    }

    if let Some(swirls) = &spec.swirls {
        let dots = swirls.scatter(w, h, rng);
        for d in &dots {
            paint_disc(&mut image, d, swirls.color);
        }
        speckles.extend(dots);
    }

    log::debug!(
        "generated {}x{} texture with {} discs",
        w,
        h,
        speckles.len()
    );
    ProceduralTexture { image, speckles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vitrine_structs::Color;

    fn small_spec() -> TextureSpec {
        TextureSpec {
            width: 64,
            height: 64,
            gradient: LinearGradient::vertical(vec![
                GradientStop::new(0.0, Color::rgb(5, 12, 32)),
                GradientStop::new(0.5, Color::rgb(11, 26, 59)),
                GradientStop::new(1.0, Color::rgb(5, 12, 32)),
            ]),
            speckles: SpeckleSpec {
                count: 20,
                radius: 0.5..1.5,
                opacity: 0.4..0.5,
                color: Color::WHITE,
            },
            swirls: None,
        }
    }

    fn near_a_speckle(x: u32, y: u32, speckles: &[Speckle]) -> bool {
        speckles.iter().any(|s| {
            let dx = x as f32 + 0.5 - s.x;
            let dy = y as f32 + 0.5 - s.y;
            (dx * dx + dy * dy).sqrt() <= s.radius + 1.5
        })
    }

    #[test]
    fn gradient_is_deterministic_speckles_are_not() {
        let spec = small_spec();
        let base = render_gradient(&spec);
        assert_eq!(base, render_gradient(&spec));

        let a = generate(&spec, &mut StdRng::seed_from_u64(1));
        let b = generate(&spec, &mut StdRng::seed_from_u64(2));
        assert_eq!(a.speckles.len(), 20);
        assert_ne!(a.speckles, b.speckles);

        for texture in [&a, &b] {
            for (x, y, pixel) in texture.image.enumerate_pixels() {
                if !near_a_speckle(x, y, &texture.speckles) {
                    assert_eq!(pixel, base.get_pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_texture() {
        let spec = small_spec();
        let a = generate(&spec, &mut StdRng::seed_from_u64(9));
        let b = generate(&spec, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.image, b.image);
    }

    #[test]
    fn gradient_hits_its_stops() {
        let g = LinearGradient::vertical(vec![
            GradientStop::new(0.0, Color::rgb(0, 0, 0)),
            GradientStop::new(1.0, Color::rgb(200, 100, 0)),
        ]);
        assert_eq!(g.color_at(0.0), Color::rgb(0, 0, 0));
        assert_eq!(g.color_at(1.0), Color::rgb(200, 100, 0));
        assert_eq!(g.color_at(0.5), Color::rgb(100, 50, 0));
        assert_eq!(g.color_at(-3.0), Color::rgb(0, 0, 0));
        assert!(approx(g.project(0.3, 0.25), 0.25));
        assert_eq!(LinearGradient::vertical(Vec::new()).color_at(0.5).a, 0);
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn zero_sized_texture_is_empty() {
        let mut spec = small_spec();
        spec.width = 0;
        let t = generate(&spec, &mut StdRng::seed_from_u64(0));
        assert_eq!(t.dimensions(), (0, 64));
        assert!(t.speckles.is_empty());
    }

    #[test]
    fn tiny_disc_tints_its_pixel() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let s = Speckle {
            x: 1.1,
            y: 1.1,
            radius: 0.2,
            opacity: 1.0,
        };
        paint_disc(&mut image, &s, Color::WHITE);
        let p = image.get_pixel(1, 1);
        assert!(p.0[0] > 0 && p.0[0] < 255);
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn tile_face_has_border_and_gradient() {
        let bg = Color::rgb(0x8A, 0x2B, 0xE2);
        let accent = Color::rgb(0x00, 0xBF, 0xFF);
        let tile = tile_face(bg, accent, 256);
        assert_eq!(tile.get_pixel(10, 128), &Rgba(accent.to_rgba8()));
        assert_eq!(tile.get_pixel(0, 0), &Rgba(bg.to_rgba8()));
        assert_eq!(tile.get_pixel(255, 255), &Rgba(bg.shade(-20).to_rgba8()));
        assert_ne!(tile.get_pixel(128, 128), &Rgba(accent.to_rgba8()));
    }

    #[test]
    fn planet_preset_paints_swirls() {
        let mut spec = planet();
        spec.width = 128;
        spec.height = 128;
        spec.speckles.count = 10;
        let t = generate(&spec, &mut StdRng::seed_from_u64(5));
        let dots_per_swirl = (4.0 * std::f32::consts::TAU / 0.1).ceil() as usize;
        assert!(t.speckles.len() >= 10 + 8 * (dots_per_swirl - 1));
    }
}
