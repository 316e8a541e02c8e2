//! Frame-loop side of the game
//!
//! `Game` owns the settings, the current level and the game state, and is the
//! only writer of that state: the host calls `resize` when the container is
//! measured, `on_tilt` for every sensor sample and `reset` from the UI.
//! A renderer reads a `Snapshot`.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{
    Circle, CollisionWorld, GamePhase, GameState, InputMapper, LevelLayout, Rect, TiltSample,
};

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub ball: Circle,
    pub obstacles: &'a [Rect],
    pub goal: Circle,
    pub won: bool,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    mapper: InputMapper,
    world: CollisionWorld,
    state: GameState,
    /// Samples accepted since the last reset
    samples: u64,
}

impl Game {
    /// New game waiting for its first `resize`; tilt is ignored until then
    pub fn new(settings: Settings) -> Self {
        let world = CollisionWorld::new(LevelLayout::uninitialized(), settings.ball_radius);
        Self {
            mapper: settings.input_mapper(),
            state: settings.initial_state(),
            world,
            settings,
            samples: 0,
        }
    }

    /// Rebuild the level for a new container size
    ///
    /// The ball keeps its position; if it is now out of range the next
    /// resolve clamps it back in. Unchanged sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.world.layout.width() == width && self.world.layout.height() == height {
            return;
        }
        log::info!("Playfield resized to {}x{}", width, height);
        self.world = self.settings.world(width, height);
    }

    /// Feed one tilt sample; returns the updated state
    pub fn on_tilt(&mut self, sample: TiltSample) -> &GameState {
        let was_won = self.state.won;
        self.state = self.world.step(&self.state, &self.mapper, sample);
        self.samples += 1;
        if self.state.won && !was_won {
            log::info!("Won after {} samples", self.samples);
        }
        &self.state
    }

    /// Restore the starting state; the level is untouched
    pub fn reset(&mut self) {
        log::info!("Game reset");
        self.state.reset(self.settings.start_position);
        self.samples = 0;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.world.layout
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Samples fed since the last reset
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ball: Circle::new(self.state.ball, self.world.ball_radius),
            obstacles: &self.world.layout.obstacles,
            goal: self.world.layout.goal,
            won: self.state.won,
        }
    }
}
