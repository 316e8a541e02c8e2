//! Tilt input mapping
//!
//! Turns a raw accelerometer-style reading into a proposed ball displacement
//! for the current sample.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SPEED_GAIN;

/// One raw 2-axis tilt reading
///
/// Device convention: a positive `x` reading means the device is tilted so
/// the ball should roll toward negative screen-x; positive `y` rolls toward
/// positive screen-y (down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
}

impl TiltSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Maps tilt samples to displacements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputMapper {
    /// Displacement per unit of tilt
    pub speed_gain: f32,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self {
            speed_gain: SPEED_GAIN,
        }
    }
}

impl InputMapper {
    pub fn new(speed_gain: f32) -> Self {
        Self { speed_gain }
    }

    /// Proposed displacement `(-x * gain, y * gain)`
    ///
    /// A sample with any NaN/infinite component yields `Vec2::ZERO`; a bad
    /// reading costs one frame of motion and never reaches the ball position.
    pub fn map(&self, sample: TiltSample) -> Vec2 {
        if !sample.is_finite() {
            log::debug!("Dropping non-finite tilt sample {:?}", sample);
            return Vec2::ZERO;
        }
        let delta = Vec2::new(-sample.x * self.speed_gain, sample.y * self.speed_gain);
        // Finite inputs can still overflow with an extreme gain
        if delta.is_finite() { delta } else { Vec2::ZERO }
    }
}
