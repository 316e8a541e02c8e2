//! Game settings and tuning
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{CollisionWorld, GameState, InputMapper, LevelLayout};

/// Errors from loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Displacement per unit of tilt per sample
    pub speed_gain: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Goal radius
    pub goal_radius: f32,
    /// Where the ball starts and returns to on reset
    pub start_position: Vec2,
    /// Goal center distance from the right and bottom edges
    pub goal_inset: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_gain: SPEED_GAIN,
            ball_radius: BALL_RADIUS,
            goal_radius: GOAL_RADIUS,
            start_position: Vec2::new(START_X, START_Y),
            goal_inset: GOAL_INSET,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would corrupt the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.speed_gain.is_finite() && self.speed_gain >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "speed_gain",
                reason: "must be finite and non-negative",
            });
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(SettingsError::Invalid {
                field: "ball_radius",
                reason: "must be finite and positive",
            });
        }
        if !(self.goal_radius.is_finite() && self.goal_radius > 0.0) {
            return Err(SettingsError::Invalid {
                field: "goal_radius",
                reason: "must be finite and positive",
            });
        }
        if !self.start_position.is_finite() {
            return Err(SettingsError::Invalid {
                field: "start_position",
                reason: "must be finite",
            });
        }
        if !self.goal_inset.is_finite() {
            return Err(SettingsError::Invalid {
                field: "goal_inset",
                reason: "must be finite",
            });
        }
        Ok(())
    }

    pub fn input_mapper(&self) -> InputMapper {
        InputMapper::new(self.speed_gain)
    }

    /// The standard maze for a container of the given size
    pub fn world(&self, width: f32, height: f32) -> CollisionWorld {
        CollisionWorld::new(
            LevelLayout::maze(width, height, self.goal_radius, self.goal_inset),
            self.ball_radius,
        )
    }

    pub fn initial_state(&self) -> GameState {
        GameState::new(self.start_position)
    }
}
