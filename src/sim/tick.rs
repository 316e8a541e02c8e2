//! Per-sample simulation step
//!
//! Advances the game state by one tilt sample: bounds clamp, axis-separated
//! wall collision, then the goal check.

use glam::Vec2;

use super::collision::{circle_overlaps_rect, circles_overlap, penetration};
use super::input::{InputMapper, TiltSample};
use super::layout::LevelLayout;
use super::shapes::Circle;
use super::state::GameState;

/// Static level geometry plus the ball size it is resolved against
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionWorld {
    pub layout: LevelLayout,
    pub ball_radius: f32,
}

impl CollisionWorld {
    pub fn new(layout: LevelLayout, ball_radius: f32) -> Self {
        Self {
            layout,
            ball_radius,
        }
    }

    /// Resolve one frame of motion
    ///
    /// X is resolved and committed before Y, and the Y candidate is tested at
    /// the already-updated X. That fixed order decides which axis wins when
    /// the ball drives diagonally into a wall corner; keep it.
    ///
    /// No-op when the state is already won, when the layout has no size yet,
    /// or when `delta` is not finite. The won check comes first: a won state
    /// stays won even against an unmeasured layout. A state that is not won
    /// never becomes won against an unmeasured layout.
    pub fn resolve(&self, state: &GameState, delta: Vec2) -> GameState {
        if state.won {
            return *state;
        }
        if self.layout.is_degenerate() {
            log::trace!("Skipping resolve: layout bounds {:?}", self.layout.bounds);
            return GameState::new(state.ball);
        }
        if !delta.is_finite() {
            log::debug!("Skipping resolve: non-finite delta {:?}", delta);
            return *state;
        }

        let r = self.ball_radius;
        let target = state.ball + delta;
        let mut pos = state.ball;

        let new_x = clamp_axis(target.x, r, self.layout.width());
        let candidate = Vec2::new(new_x, pos.y);
        if !self.blocked(pos, candidate) {
            pos.x = new_x;
        }

        let new_y = clamp_axis(target.y, r, self.layout.height());
        let candidate = Vec2::new(pos.x, new_y);
        if !self.blocked(pos, candidate) {
            pos.y = new_y;
        }

        let won = self.reaches_goal(pos);
        if won {
            log::info!("Goal reached at ({:.1}, {:.1})", pos.x, pos.y);
        }

        GameState { ball: pos, won }
    }

    /// Map a tilt sample and resolve it in one go
    pub fn step(&self, state: &GameState, mapper: &InputMapper, sample: TiltSample) -> GameState {
        self.resolve(state, mapper.map(sample))
    }

    /// True if moving the ball from `from` to `candidate` is rejected
    ///
    /// A move is rejected when the candidate overlaps a wall and sits deeper
    /// in it than `from` does. A ball that is clear of every wall can
    /// therefore never enter one; a ball left overlapping a wall (after a
    /// resize) can still slide along or back out of it.
    pub fn blocked(&self, from: Vec2, candidate: Vec2) -> bool {
        let r = self.ball_radius;
        self.layout.obstacles.iter().any(|wall| {
            circle_overlaps_rect(candidate, r, wall)
                && penetration(candidate, r, wall) > penetration(from, r, wall)
        })
    }

    /// True if a ball centered at `ball` strictly overlaps the goal
    pub fn reaches_goal(&self, ball: Vec2) -> bool {
        circles_overlap(&Circle::new(ball, self.ball_radius), &self.layout.goal)
    }
}

/// Clamp one coordinate to `[radius, extent - radius]`
///
/// A playfield narrower than the ball pins it to the middle.
#[inline]
fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    let lo = radius;
    let hi = extent - radius;
    if lo <= hi {
        value.clamp(lo, hi)
    } else {
        extent * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::shapes::Rect;

    fn open_world(width: f32, height: f32, walls: Vec<Rect>) -> CollisionWorld {
        let goal = Circle::new(Vec2::new(width, height) - Vec2::splat(GOAL_INSET), GOAL_RADIUS);
        CollisionWorld::new(
            LevelLayout::new(Vec2::new(width, height), walls, goal),
            BALL_RADIUS,
        )
    }

    #[test]
    fn test_axis_independence_slides_past_wall() {
        let world = open_world(
            1080.0,
            2400.0,
            vec![Rect::from_edges(130.0, 80.0, 300.0, 200.0)],
        );
        let state = GameState::new(Vec2::new(100.0, 100.0));

        let next = world.resolve(&state, Vec2::new(50.0, 50.0));
        assert_eq!(next.ball, Vec2::new(100.0, 150.0));
        assert!(!next.won);
    }

    #[test]
    fn test_diagonal_into_floor_slides_along_it() {
        let world = open_world(
            1080.0,
            2400.0,
            vec![Rect::from_edges(0.0, 300.0, 600.0, 350.0)],
        );
        let state = GameState::new(Vec2::new(300.0, 255.0));

        let next = world.resolve(&state, Vec2::new(10.0, 10.0));
        assert_eq!(next.ball, Vec2::new(310.0, 255.0));
    }

    #[test]
    fn test_x_commits_before_y_at_corner() {
        let world = open_world(
            1080.0,
            2400.0,
            vec![Rect::from_edges(200.0, 200.0, 400.0, 400.0)],
        );
        let state = GameState::new(Vec2::new(150.0, 150.0));

        // Each axis alone is clear, the combined move is not. X goes first
        // and wins; Y is then tested at the new X and rejected.
        let next = world.resolve(&state, Vec2::new(40.0, 40.0));
        assert_eq!(next.ball, Vec2::new(190.0, 150.0));
    }

    #[test]
    fn test_ball_cannot_enter_wall_from_outside() {
        let world = open_world(
            1080.0,
            2400.0,
            vec![Rect::from_edges(200.0, 0.0, 250.0, 2400.0)],
        );
        let state = GameState::new(Vec2::new(100.0, 500.0));

        // Push that would land inside the wall: rejected, not partially applied
        let next = world.resolve(&state, Vec2::new(120.0, 0.0));
        assert_eq!(next.ball, Vec2::new(100.0, 500.0));

        // Stopping exactly at touching distance also counts as overlap
        let next = world.resolve(&state, Vec2::new(60.0, 0.0));
        assert_eq!(next.ball, Vec2::new(100.0, 500.0));

        let next = world.resolve(&state, Vec2::new(59.0, 0.0));
        assert_eq!(next.ball, Vec2::new(159.0, 500.0));
    }

    #[test]
    fn test_bounds_clamp() {
        let world = open_world(1080.0, 2400.0, Vec::new());

        let next = world.resolve(&GameState::new(Vec2::new(50.0, 50.0)), Vec2::new(-100.0, -100.0));
        assert_eq!(next.ball, Vec2::new(BALL_RADIUS, BALL_RADIUS));

        let next = world.resolve(
            &GameState::new(Vec2::new(1000.0, 100.0)),
            Vec2::new(500.0, 0.0),
        );
        assert_eq!(next.ball, Vec2::new(1040.0, 100.0));
    }

    #[test]
    fn test_narrow_playfield_pins_ball_to_middle() {
        let world = open_world(60.0, 2400.0, Vec::new());
        let next = world.resolve(&GameState::new(Vec2::new(30.0, 500.0)), Vec2::new(20.0, 0.0));
        assert_eq!(next.ball, Vec2::new(30.0, 500.0));
    }

    #[test]
    fn test_shrunk_playfield_clamps_on_next_resolve() {
        let world = open_world(800.0, 2400.0, Vec::new());
        // Ball left outside by a resize
        let next = world.resolve(&GameState::new(Vec2::new(1000.0, 100.0)), Vec2::ZERO);
        assert_eq!(next.ball, Vec2::new(760.0, 100.0));
    }

    #[test]
    fn test_win_requires_strict_overlap() {
        // Goal at (980, 1820), radius sum 100
        let world = open_world(1080.0, 1920.0, Vec::new());
        let state = GameState::new(Vec2::new(860.0, 1820.0));

        let touching = world.resolve(&state, Vec2::new(20.0, 0.0));
        assert_eq!(touching.ball, Vec2::new(880.0, 1820.0));
        assert!(!touching.won);

        let inside = world.resolve(&state, Vec2::new(20.1, 0.0));
        assert!(inside.won);
    }

    #[test]
    fn test_win_is_sticky() {
        let world = open_world(1080.0, 1920.0, Vec::new());
        let won = world.resolve(&GameState::new(Vec2::new(900.0, 1820.0)), Vec2::ZERO);
        assert!(won.won);

        let after = world.resolve(&won, Vec2::new(-300.0, -300.0));
        assert_eq!(after, won);
        let after = world.resolve(&after, Vec2::new(f32::NAN, 5.0));
        assert_eq!(after, won);
    }

    #[test]
    fn test_win_uses_post_clamp_position() {
        // Goal sits past the right edge clamp; only the clamped ball can reach it
        let goal = Circle::new(Vec2::new(1100.0, 500.0), GOAL_RADIUS);
        let world = CollisionWorld::new(
            LevelLayout::new(Vec2::new(1080.0, 1920.0), Vec::new(), goal),
            BALL_RADIUS,
        );
        let next = world.resolve(&GameState::new(Vec2::new(900.0, 500.0)), Vec2::new(400.0, 0.0));
        assert_eq!(next.ball.x, 1040.0);
        assert!(next.won);
    }

    #[test]
    fn test_degenerate_layout_is_noop() {
        let world = CollisionWorld::new(LevelLayout::uninitialized(), BALL_RADIUS);
        let state = GameState::new(Vec2::new(100.0, 100.0));

        for delta in [Vec2::ZERO, Vec2::new(50.0, -20.0), Vec2::splat(1e6)] {
            let next = world.resolve(&state, delta);
            assert_eq!(next.ball, state.ball);
            assert!(!next.won);
        }
    }

    #[test]
    fn test_won_state_survives_unmeasured_layout() {
        let world = CollisionWorld::new(LevelLayout::uninitialized(), BALL_RADIUS);
        let won = GameState {
            ball: Vec2::new(5.0, 5.0),
            won: true,
        };
        assert_eq!(world.resolve(&won, Vec2::new(30.0, 30.0)), won);
    }

    #[test]
    fn test_touching_ball_slides_along_wall() {
        // Left face of the wall at x = 200; ball exactly one radius away
        let world = open_world(
            1080.0,
            2400.0,
            vec![Rect::from_edges(200.0, 0.0, 250.0, 2400.0)],
        );
        let state = GameState::new(Vec2::new(160.0, 500.0));

        // Moving parallel keeps the same contact depth: allowed
        let next = world.resolve(&state, Vec2::new(0.0, 30.0));
        assert_eq!(next.ball, Vec2::new(160.0, 530.0));
        let next = world.resolve(&next, Vec2::new(0.0, -60.0));
        assert_eq!(next.ball, Vec2::new(160.0, 470.0));

        // Pressing into the face is not, and pulling away is
        let next = world.resolve(&state, Vec2::new(1.0, 0.0));
        assert_eq!(next.ball, Vec2::new(160.0, 500.0));
        let next = world.resolve(&state, Vec2::new(-1.0, 0.0));
        assert_eq!(next.ball, Vec2::new(159.0, 500.0));
    }

    #[test]
    fn test_non_finite_delta_is_noop() {
        let world = open_world(1080.0, 2400.0, Vec::new());
        let state = GameState::new(Vec2::new(500.0, 500.0));
        assert_eq!(world.resolve(&state, Vec2::new(f32::NAN, 0.0)), state);
        assert_eq!(world.resolve(&state, Vec2::new(0.0, f32::INFINITY)), state);
    }

    #[test]
    fn test_step_maps_tilt_through_resolve() {
        let world = open_world(1080.0, 2400.0, Vec::new());
        let state = GameState::new(Vec2::new(500.0, 500.0));
        let mapper = InputMapper::default();

        // Positive x tilt rolls left, positive y tilt rolls down
        let next = world.step(&state, &mapper, TiltSample::new(2.0, 1.0));
        assert_eq!(next.ball, Vec2::new(484.0, 508.0));

        let still = world.step(&state, &mapper, TiltSample::new(f32::NAN, 1.0));
        assert_eq!(still, state);
    }

    #[test]
    fn test_standard_maze_first_wall_blocks_descent() {
        let world = CollisionWorld::new(
            LevelLayout::maze(1080.0, 2400.0, GOAL_RADIUS, GOAL_INSET),
            BALL_RADIUS,
        );
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        // Tilt straight down for a while: the top wall stops the ball
        for _ in 0..100 {
            state = world.step(&state, &mapper, TiltSample::new(0.0, 9.8));
        }
        assert_eq!(state.ball.x, 100.0);
        assert!(state.ball.y < 300.0 - BALL_RADIUS);
        assert!(!state.won);
    }
}
