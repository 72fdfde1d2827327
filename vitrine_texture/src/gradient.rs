use vitrine_structs::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points given in normalized image coordinates
/// (`(0, 0)` top-left, `(1, 1)` bottom-right).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn vertical(stops: Vec<GradientStop>) -> Self {
        Self {
            start: [0.0, 0.0],
            end: [0.0, 1.0],
            stops,
        }
    }

    pub fn diagonal(stops: Vec<GradientStop>) -> Self {
        Self {
            start: [0.0, 0.0],
            end: [1.0, 1.0],
            stops,
        }
    }

    /// Position of `(u, v)` along the gradient axis, clamped to `[0, 1]`.
    pub fn project(&self, u: f32, v: f32) -> f32 {
        let dx = self.end[0] - self.start[0];
        let dy = self.end[1] - self.start[1];
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        (((u - self.start[0]) * dx + (v - self.start[1]) * dy) / len_sq).clamp(0.0, 1.0)
    }

    /// Color at `t`, piecewise-linear between stops. Stops are expected in ascending offset order.
    pub fn color_at(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::new(0, 0, 0, 0),
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return Color::lerp(a.color, b.color, (t - a.offset) / span);
            }
        }
        last.color
    }

    /// Color of pixel `(x, y)` in a `width x height` image, sampled at the pixel centre.
    pub fn pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        let u = (x as f32 + 0.5) / width.max(1) as f32;
        let v = (y as f32 + 0.5) / height.max(1) as f32;
        self.color_at(self.project(u, v))
    }
}
