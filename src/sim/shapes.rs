//! Axis-aligned geometry for walls, the ball and the goal
//!
//! Screen coordinates: origin at the top-left, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (never negative)
    pub size: Vec2,
}

impl Rect {
    /// Build from a top-left corner and a size. Negative extents collapse to zero.
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            size: size.max(Vec2::ZERO),
        }
    }

    /// Build from left/top/right/bottom edges
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(Vec2::new(left, top), Vec2::new(right - left, bottom - top))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Check if a point is inside the rectangle (edges included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Nearest point on (or in) the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max())
    }
}

/// A circle: the ball or the goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}
