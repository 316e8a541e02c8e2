//! Game state and core simulation types
//!
//! The state is a small value owned by the frame loop and replaced once per
//! tilt sample.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball responds to tilt
    Playing,
    /// Ball reached the goal; frozen until reset
    Won,
}

/// Per-playthrough state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ball center
    pub ball: Vec2,
    /// Sticky: only `reset` clears it
    pub won: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Vec2::new(START_X, START_Y))
    }
}

impl GameState {
    /// Fresh state with the ball at `start`
    pub fn new(start: Vec2) -> Self {
        Self {
            ball: start,
            won: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Restore the initial state for `start`
    pub fn reset(&mut self, start: Vec2) {
        *self = Self::new(start);
    }
}
