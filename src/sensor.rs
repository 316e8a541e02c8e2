//! Tilt sample sources
//!
//! The simulation only sees a stream of `TiltSample`s. On a device they come
//! from the accelerometer; for headless runs and tests they come from a
//! script, optionally passed through seeded noise that mimics a real sensor
//! feed (jitter, dropped and duplicated samples).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::TiltSample;

/// Anything that yields tilt samples in arrival order
pub trait TiltSource {
    /// Next sample, or `None` when the source is exhausted
    fn next_sample(&mut self) -> Option<TiltSample>;
}

/// Replays a fixed list of (sample, repeat count) segments
#[derive(Debug, Clone)]
pub struct ScriptedTilt {
    segments: Vec<(TiltSample, u32)>,
    index: usize,
    emitted: u32,
}

impl ScriptedTilt {
    pub fn new(segments: Vec<(TiltSample, u32)>) -> Self {
        Self {
            segments,
            index: 0,
            emitted: 0,
        }
    }

    /// A route that solves the standard maze on a 1080x2400 playfield
    ///
    /// Every segment except the second overshoots and relies on an edge or
    /// a wall to stop the ball, leaving slack for dropped samples. The second
    /// must land in the gap between the first two walls; its nominal stop is
    /// centered in that gap.
    pub fn maze_route() -> Self {
        const TILT: f32 = 5.0;
        let right = TiltSample::new(-TILT, 0.0);
        let left = TiltSample::new(TILT, 0.0);
        let down = TiltSample::new(0.0, TILT);
        Self::new(vec![
            // Along the top, past the first wall
            (right, 35),
            // Into the gap between the first and second walls
            (down, 12),
            // Back across above the second wall
            (left, 35),
            // Down the left side until the bottom wall stops us
            (down, 45),
            // Under the vertical barrier, over the bottom wall
            (right, 35),
            // Drop into the goal
            (down, 30),
        ])
    }

    /// Total samples the script will emit
    pub fn len(&self) -> usize {
        self.segments.iter().map(|(_, n)| *n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TiltSource for ScriptedTilt {
    fn next_sample(&mut self) -> Option<TiltSample> {
        loop {
            let (sample, count) = *self.segments.get(self.index)?;
            if self.emitted < count {
                self.emitted += 1;
                return Some(sample);
            }
            self.index += 1;
            self.emitted = 0;
        }
    }
}

/// Wraps a source with deterministic sensor noise
#[derive(Debug, Clone)]
pub struct NoisyTilt<S> {
    inner: S,
    rng: Pcg32,
    /// Max absolute jitter added to each axis
    jitter: f32,
    drop_chance: f64,
    duplicate_chance: f64,
    pending: Option<TiltSample>,
}

impl<S: TiltSource> NoisyTilt<S> {
    pub fn new(inner: S, seed: u64, jitter: f32, drop_chance: f64, duplicate_chance: f64) -> Self {
        Self {
            inner,
            rng: Pcg32::seed_from_u64(seed),
            jitter: if jitter.is_finite() { jitter.abs() } else { 0.0 },
            drop_chance: clamp_chance(drop_chance),
            duplicate_chance: clamp_chance(duplicate_chance),
            pending: None,
        }
    }

    fn perturb(&mut self, sample: TiltSample) -> TiltSample {
        if self.jitter == 0.0 {
            return sample;
        }
        let j = self.jitter;
        TiltSample::new(
            sample.x + self.rng.random_range(-j..=j),
            sample.y + self.rng.random_range(-j..=j),
        )
    }
}

impl<S: TiltSource> TiltSource for NoisyTilt<S> {
    fn next_sample(&mut self) -> Option<TiltSample> {
        if let Some(sample) = self.pending.take() {
            return Some(sample);
        }
        loop {
            let sample = self.inner.next_sample()?;
            if self.rng.random_bool(self.drop_chance) {
                continue;
            }
            let sample = self.perturb(sample);
            if self.rng.random_bool(self.duplicate_chance) {
                self.pending = Some(sample);
            }
            return Some(sample);
        }
    }
}

#[inline]
fn clamp_chance(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
