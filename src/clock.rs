//! Frame clock feeding `(time, delta)` into field updates.
//!
//! `Instant`-based, so deltas are never negative. A fixed delta can be set
//! for deterministic stepping in tests and offline rendering.
//!
//! # Example
//!
//! ```ignore
//! use pixelfield::clock::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     let (time, delta) = clock.tick();
//!     field.update(time, delta);
//! }
//! ```

use std::time::Instant;

/// Per-frame time source for a particle field.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Advance to the current frame. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)`, the pair
    /// [`ParticleField::update`](crate::field::ParticleField::update) expects.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_frame = now;

        self.elapsed_secs = match self.fixed_delta {
            Some(_) => self.elapsed_secs + self.delta_secs,
            None => now.duration_since(self.start).as_secs_f32(),
        };

        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Elapsed time of the last tick, in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Delta of the last tick, in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Step with a fixed delta instead of wall time.
    ///
    /// Pass `None` to return to real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_frame = now;
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
