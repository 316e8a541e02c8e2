//! Level layout: playfield bounds, wall rectangles and the goal
//!
//! A layout is immutable for a playthrough. It is rebuilt from scratch when
//! the container size changes, so every coordinate is derived from the
//! current bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::{Circle, Rect};
use crate::consts::*;

/// Static level geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Playfield width and height
    pub bounds: Vec2,
    /// Walls in insertion order
    pub obstacles: Vec<Rect>,
    pub goal: Circle,
}

impl LevelLayout {
    /// A layout from explicit parts
    pub fn new(bounds: Vec2, obstacles: Vec<Rect>, goal: Circle) -> Self {
        Self {
            bounds,
            obstacles,
            goal,
        }
    }

    /// Layout for a container that has not been measured yet
    pub fn uninitialized() -> Self {
        Self::new(Vec2::ZERO, Vec::new(), Circle::new(Vec2::ZERO, GOAL_RADIUS))
    }

    /// The standard maze for a `width` x `height` container
    ///
    /// Four walls alternate sides so the ball has to zig-zag from the
    /// top-left start down to the goal in the bottom-right corner.
    pub fn maze(width: f32, height: f32, goal_radius: f32, goal_inset: f32) -> Self {
        let bounds = Vec2::new(width, height);
        let t = WALL_THICKNESS;
        let obstacles = vec![
            // Top horizontal, attached to the left edge
            Rect::new(Vec2::new(0.0, 300.0), Vec2::new(600.0, t)),
            // Middle horizontal, attached to the right edge
            Rect::new(Vec2::new(width - 600.0, 800.0), Vec2::new(600.0, t)),
            // Vertical barrier
            Rect::new(Vec2::new(300.0, 1200.0), Vec2::new(t, 400.0)),
            // Bottom horizontal, attached to the left edge
            Rect::new(Vec2::new(0.0, 1800.0), Vec2::new(500.0, t)),
        ];
        let goal = Circle::new(bounds - Vec2::splat(goal_inset), goal_radius);

        log::debug!(
            "Built maze for {}x{}: {} walls, goal at {:?}",
            width,
            height,
            obstacles.len(),
            goal.center
        );

        Self::new(bounds, obstacles, goal)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.y
    }

    /// Zero (or negative/NaN) dimensions mean the container is not measured yet
    pub fn is_degenerate(&self) -> bool {
        !(self.bounds.x > 0.0 && self.bounds.y > 0.0)
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::uninitialized()
    }
}
