use image::{Rgba, RgbaImage};
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::ops::Range;
use vitrine_structs::Color;

/// Scattered translucent discs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeckleSpec {
    pub count: usize,
    pub radius: Range<f32>,
    pub opacity: Range<f32>,
    pub color: Color,
}

impl SpeckleSpec {
    pub const NONE: Self = Self {
        count: 0,
        radius: 0.0..0.0,
        opacity: 0.0..0.0,
        color: Color::WHITE,
    };
}

/// Spiral trails of small dots around random centres.
#[derive(Debug, Clone, PartialEq)]
pub struct SwirlSpec {
    pub count: usize,
    pub radius: Range<f32>,
    /// Full turns of each spiral.
    pub turns: f32,
    pub angle_step: f32,
    pub dot_radius: f32,
    pub opacity: Range<f32>,
    pub color: Color,
}

/// One disc as placed on the image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speckle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl SpeckleSpec {
    pub fn scatter<R: Rng + ?Sized>(&self, width: u32, height: u32, rng: &mut R) -> Vec<Speckle> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        (0..self.count)
            .map(|_| Speckle {
                x: rng.gen_range(0.0..width as f32),
                y: rng.gen_range(0.0..height as f32),
                radius: sample(rng, &self.radius),
                opacity: sample(rng, &self.opacity),
            })
            .collect()
    }
}

impl SwirlSpec {
    pub fn scatter<R: Rng + ?Sized>(&self, width: u32, height: u32, rng: &mut R) -> Vec<Speckle> {
        if width == 0 || height == 0 || self.angle_step <= 0.0 {
            return Vec::new();
        }
        let sweep = self.turns * TAU;
        let mut dots = Vec::new();
        for _ in 0..self.count {
            let cx = rng.gen_range(0.0..width as f32);
            let cy = rng.gen_range(0.0..height as f32);
            let radius = sample(rng, &self.radius);
            let mut angle = 0.0f32;
            while angle < sweep {
                let reach = radius * angle / TAU;
                dots.push(Speckle {
                    x: cx + reach * angle.cos(),
                    y: cy + reach * angle.sin(),
                    radius: self.dot_radius,
                    opacity: sample(rng, &self.opacity),
                });
                angle += self.angle_step;
            }
        }
        dots
    }
}

/// Source-over blend of `color` at `alpha` onto `dst`.
pub fn blend_over(dst: &mut Rgba<u8>, color: Color, alpha: f32) {
    let a = alpha.clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let src = [color.r, color.g, color.b];
    for (channel, s) in dst.0.iter_mut().take(3).zip(src) {
        *channel = (s as f32 * a + *channel as f32 * (1.0 - a)).round() as u8;
    }
    let da = dst.0[3] as f32 / 255.0;
    dst.0[3] = ((a + da * (1.0 - a)) * 255.0).round() as u8;
}

/// Fills a disc. Pixels whose centre lies inside are blended at full speckle opacity; a disc
/// too small to cover any centre tints its containing pixel by its area instead.
pub fn paint_disc(image: &mut RgbaImage, speckle: &Speckle, color: Color) {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || speckle.radius <= 0.0 || speckle.opacity <= 0.0 {
        return;
    }
    let alpha = speckle.opacity * color.a as f32 / 255.0;
    let r = speckle.radius;
    let x0 = (speckle.x - r).floor().max(0.0) as u32;
    let y0 = (speckle.y - r).floor().max(0.0) as u32;
    let x1 = ((speckle.x + r).ceil().max(0.0) as u32).min(w);
    let y1 = ((speckle.y + r).ceil().max(0.0) as u32).min(h);

    let mut covered = false;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - speckle.x;
            let dy = y as f32 + 0.5 - speckle.y;
            if dx * dx + dy * dy <= r * r {
                blend_over(image.get_pixel_mut(x, y), color, alpha);
                covered = true;
            }
        }
    }

    if !covered {
        let (px, py) = (speckle.x.floor(), speckle.y.floor());
        if px >= 0.0 && py >= 0.0 && (px as u32) < w && (py as u32) < h {
            let coverage = (PI * r * r).min(1.0);
            blend_over(image.get_pixel_mut(px as u32, py as u32), color, alpha * coverage);
        }
    }
}
