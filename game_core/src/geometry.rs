use glam::Vec2;

/// Axis-aligned bounding box in surface coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size, the way paddles are stored
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }
}

/// Separating-axis test between a circle's bounding square and a rectangle.
///
/// Edges that merely touch do not count as overlapping.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    center.x - radius < rect.max.x
        && center.x + radius > rect.min.x
        && center.y - radius < rect.max.y
        && center.y + radius > rect.min.y
}
