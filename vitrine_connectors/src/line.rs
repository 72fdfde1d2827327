use vitrine_structs::Vector3;

/// A straight line between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vector3,
    pub end: Vector3,
    pub opacity: f32,
    pub width: f32,
}

impl LineSegment {
    pub const fn new(start: Vector3, end: Vector3) -> Self {
        Self {
            start,
            end,
            opacity: 1.0,
            width: 1.0,
        }
    }

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn length(&self) -> f32 {
        Vector3::distance(self.start, self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector3 {
        Vector3::midpoint(self.start, self.end)
    }

    pub fn points(&self) -> [Vector3; 2] {
        [self.start, self.end]
    }
}

/// One segment from `hub` to each point.
pub fn hub_and_spoke(hub: Vector3, points: &[Vector3]) -> Vec<LineSegment> {
    points.iter().map(|&p| LineSegment::new(hub, p)).collect()
}

/// Index pairs `(i, j)`, `i < j`, whose points lie closer than `max_distance`.
pub fn proximity_links(points: &[Vector3], max_distance: f32) -> Vec<(usize, usize)> {
    let max_sq = max_distance * max_distance;
    let mut links = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if (*b - *a).length_squared() < max_sq {
                links.push((i, j));
            }
        }
    }
    links
}
