//! Tilt Maze - A tilt-controlled ball maze
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input mapping, collisions, win detection)
//! - `game`: Frame-loop holder that owns layout + state and feeds the sim
//! - `sensor`: Tilt sample sources for headless runs
//! - `settings`: Data-driven tuning loaded from JSON

pub mod game;
pub mod sensor;
pub mod settings;
pub mod sim;

pub use game::{Game, Snapshot};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Displacement per unit of tilt per sample
    pub const SPEED_GAIN: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 40.0;
    /// Ball starts near the top-left corner
    pub const START_X: f32 = 100.0;
    pub const START_Y: f32 = 100.0;

    /// Goal defaults (bottom-right corner, inset from both edges)
    pub const GOAL_RADIUS: f32 = 60.0;
    pub const GOAL_INSET: f32 = 100.0;

    /// Maze wall thickness
    pub const WALL_THICKNESS: f32 = 50.0;
}
