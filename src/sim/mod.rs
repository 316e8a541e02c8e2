//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One resolve per tilt sample, no internal clock
//! - Stable obstacle order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod layout;
pub mod shapes;
pub mod state;
pub mod tick;

pub use collision::{circle_overlaps_rect, circles_overlap, sd_rect};
pub use input::{InputMapper, TiltSample};
pub use layout::LevelLayout;
pub use shapes::{Circle, Rect};
pub use state::{GamePhase, GameState};
pub use tick::CollisionWorld;
