use image::{Rgba, RgbaImage};
use vitrine_structs::Color;

use crate::gradient::{GradientStop, LinearGradient};
use crate::speckle::{SpeckleSpec, SwirlSpec};
use crate::{TextureSpec, render_gradient};

const INDIGO: Color = Color::rgb(0x4B, 0x00, 0x82);
const BLUE_VIOLET: Color = Color::rgb(0x8A, 0x2B, 0xE2);
const MEDIUM_PURPLE: Color = Color::rgb(0x93, 0x70, 0xDB);
const NIGHT: Color = Color::rgb(0x05, 0x0C, 0x20);
const NAVY: Color = Color::rgb(0x0B, 0x1A, 0x3B);
const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);

/// Purple planet surface with faint white noise and light-blue swirls.
pub fn planet() -> TextureSpec {
    TextureSpec {
        width: 512,
        height: 512,
        gradient: LinearGradient::diagonal(vec![
            GradientStop::new(0.0, INDIGO),
            GradientStop::new(0.5, BLUE_VIOLET),
            GradientStop::new(1.0, MEDIUM_PURPLE),
        ]),
        speckles: SpeckleSpec {
            count: 2000,
            radius: 0.0..1.5,
            opacity: 0.0..0.5,
            color: Color::WHITE,
        },
        swirls: Some(SwirlSpec {
            count: 8,
            radius: 40.0..120.0,
            turns: 4.0,
            angle_step: 0.1,
            dot_radius: 1.0,
            opacity: 0.0..0.3,
            color: LIGHT_BLUE,
        }),
    }
}

/// Dark navy backdrop behind the loading screen.
pub fn preloader_backdrop() -> TextureSpec {
    TextureSpec {
        width: 1024,
        height: 1024,
        gradient: LinearGradient::vertical(vec![
            GradientStop::new(0.0, NIGHT),
            GradientStop::new(0.5, NAVY),
            GradientStop::new(1.0, NIGHT),
        ]),
        speckles: SpeckleSpec {
            count: 5000,
            radius: 0.0..1.5,
            opacity: 0.0..0.03,
            color: Color::WHITE,
        },
        swirls: None,
    }
}

/// Reference size the border metrics are expressed in.
const TILE_REFERENCE: f32 = 256.0;
const TILE_BORDER_INSET: f32 = 10.0;
const TILE_BORDER_WIDTH: f32 = 10.0;

/// Cube tile: diagonal `bg -> bg.shade(-20)` with an accent border stroked around an inset square.
pub fn tile_face(bg: Color, accent: Color, size: u32) -> RgbaImage {
    let spec = TextureSpec {
        width: size,
        height: size,
        gradient: LinearGradient::diagonal(vec![
            GradientStop::new(0.0, bg),
            GradientStop::new(1.0, bg.shade(-20)),
        ]),
        speckles: SpeckleSpec::NONE,
        swirls: None,
    };
    let mut image = render_gradient(&spec);

    let scale = size as f32 / TILE_REFERENCE;
    let inset = TILE_BORDER_INSET * scale;
    let half = TILE_BORDER_WIDTH * scale / 2.0;
    let outer = (inset - half, size as f32 - inset + half);
    let inner = (inset + half, size as f32 - inset - half);
    let stroke = Rgba(accent.to_rgba8());

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
        let in_outer = cx >= outer.0 && cx <= outer.1 && cy >= outer.0 && cy <= outer.1;
        let in_inner = cx > inner.0 && cx < inner.1 && cy > inner.0 && cy < inner.1;
        if in_outer && !in_inner {
            *pixel = stroke;
        }
    }
    image
}
