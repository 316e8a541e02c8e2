//! Collision tests between the ball and the maze
//!
//! Walls are measured with a signed distance (negative inside the rect), the
//! same way an SDF scene is queried. A ball overlaps a wall when the nearest
//! point of the wall is within one radius of its center; touching counts as
//! overlap.

use glam::Vec2;

use super::shapes::{Circle, Rect};

/// Signed distance from `p` to an axis-aligned rectangle
///
/// Positive outside (Euclidean distance to the nearest point), negative
/// inside (minus the distance to the nearest edge), zero on the boundary.
pub fn sd_rect(p: Vec2, rect: &Rect) -> f32 {
    if rect.contains_point(p) {
        let max = rect.max();
        let to_edge = (p.x - rect.min.x)
            .min(max.x - p.x)
            .min(p.y - rect.min.y)
            .min(max.y - p.y);
        -to_edge
    } else {
        (p - rect.closest_point(p)).length()
    }
}

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// True if a ball of `radius` centered at `center` overlaps the rectangle
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    sd_rect(center, rect) <= radius
}

/// True if the circles strictly overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    sd_circle(a.center, b.center, b.radius) < a.radius
}

/// How far the ball reaches into the rectangle
///
/// Zero when touching, positive when overlapping, negative when clear.
#[inline]
pub fn penetration(center: Vec2, radius: f32, rect: &Rect) -> f32 {
    radius - sd_rect(center, rect)
}
