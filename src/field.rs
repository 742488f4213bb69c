//! The live particle field: select-weight state and the per-frame update.
//!
//! A [`ParticleField`] owns the fixed attribute arrays plus the single
//! mutable per-particle array, the select weight. The weight blends each
//! particle between its deselected (0.0) and selected (1.0) appearance.
//! Calling [`select`](ParticleField::select) or
//! [`deselect`](ParticleField::deselect) sets a global target; each frame,
//! [`update`](ParticleField::update) relaxes every weight toward that
//! target with a per-particle randomized rate, giving a staggered, organic
//! settle instead of a uniform snap.
//!
//! Once every weight is within tolerance of the target, the field goes
//! idle and update calls cost two scalar additions and nothing else.
//!
//! # Quick Start
//!
//! ```ignore
//! use pixelfield::prelude::*;
//!
//! let mut field = ParticleField::new(&base, &radial)?;
//! field.deselect();
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     let (time, delta) = clock.tick();
//!     field.update(time, delta);
//!     // upload field.select_weights() when field.take_needs_upload()
//! }
//! ```

use crate::attributes::ParticleAttributes;
use crate::easing;
use crate::error::FieldError;
use crate::raster::RasterSource;
use crate::tween::{MaskDriver, MaskFade};
use crate::uniforms::FieldUniforms;

/// Convergence tolerance for the select-weight relaxation.
pub const SELECT_TOLERANCE: f32 = 1e-4;

/// Duration of the mask cross-fade started by select/deselect, in seconds.
pub const MASK_FADE_SECS: f32 = 1.0;

/// Whether the field still has per-particle relaxation work to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FieldPhase {
    /// All weights are at the target; update touches no particle data.
    #[default]
    Idle,
    /// At least one weight was outside tolerance last frame.
    Converging,
}

/// A raster-sampled point field with an animated selection state.
pub struct ParticleField {
    attributes: ParticleAttributes,
    select_weights: Vec<f32>,
    target_weight: f32,
    phase: FieldPhase,
    needs_upload: bool,
    simulated_time: f32,
    accumulated_delta: f32,
    mask: Box<dyn MaskDriver>,
}

impl ParticleField {
    /// Build a field from two rasters covering the same grid.
    ///
    /// Randomized attributes use an entropy-seeded RNG; for deterministic
    /// construction build the attributes yourself with
    /// [`ParticleAttributes::build`] and use [`with_attributes`](Self::with_attributes).
    pub fn new(base: &RasterSource, radial: &RasterSource) -> Result<Self, FieldError> {
        Ok(Self::with_attributes(ParticleAttributes::from_rasters(
            base, radial,
        )?))
    }

    /// Build a field around already-constructed attributes.
    ///
    /// Every weight starts at 1.0, the fully selected look, with the field
    /// idle; the first visible motion requires a call to
    /// [`deselect`](Self::deselect).
    pub fn with_attributes(attributes: ParticleAttributes) -> Self {
        let count = attributes.len();
        Self {
            attributes,
            select_weights: vec![1.0; count],
            target_weight: 1.0,
            phase: FieldPhase::Idle,
            needs_upload: false,
            simulated_time: 0.0,
            accumulated_delta: 0.0,
            mask: Box::new(MaskFade::new()),
        }
    }

    /// Replace the built-in mask fade with a host-provided tween driver.
    pub fn with_mask_driver(mut self, driver: Box<dyn MaskDriver>) -> Self {
        self.mask = driver;
        self
    }

    /// Target the selected look.
    ///
    /// Sets the global target weight to 1.0, marks the field converging,
    /// and restarts the mask fade toward 0.0 (cancel-then-start; fades are
    /// never queued). Calling this twice is equivalent to calling it once,
    /// apart from the fade restarting.
    pub fn select(&mut self) {
        self.target_weight = 1.0;
        self.phase = FieldPhase::Converging;

        self.mask.cancel();
        self.mask.fade_to(0.0, MASK_FADE_SECS, easing::quartic_out);
    }

    /// Target the deselected look.
    ///
    /// Symmetric to [`select`](Self::select): target weight 0.0, mask fade
    /// toward 1.0.
    pub fn deselect(&mut self) {
        self.target_weight = 0.0;
        self.phase = FieldPhase::Converging;

        self.mask.cancel();
        self.mask.fade_to(1.0, MASK_FADE_SECS, easing::quartic_out);
    }

    /// Advance the field by one frame.
    ///
    /// `time` is the absolute, monotonically non-decreasing frame time and
    /// `delta` the seconds since the previous call. A negative `delta`
    /// (clock jitter) contributes no progress rather than erroring.
    ///
    /// The time accumulators and the mask fade always advance. Particle
    /// weights are only touched while the field is converging: each weight
    /// moves toward the target by its own relaxation rate, and once every
    /// weight is within [`SELECT_TOLERANCE`] the field goes idle in the
    /// same frame. The relaxation step is deliberately not delta-scaled;
    /// convergence speed tracks frame rate, matching the field's original
    /// tuning.
    pub fn update(&mut self, time: f32, delta: f32) {
        let delta = delta.max(0.0);
        self.accumulated_delta += delta;
        self.simulated_time = time;
        self.mask.advance(delta);

        if self.phase == FieldPhase::Idle {
            return;
        }

        let target = self.target_weight;
        let mut converged = true;
        for (weight, rate) in self
            .select_weights
            .iter_mut()
            .zip(self.attributes.relax_rates())
        {
            *weight += (target - *weight) * rate;
            if (target - *weight).abs() > SELECT_TOLERANCE {
                converged = false;
            }
        }

        // The pass is complete before the dirty flag is raised, so a
        // consumer never observes a half-updated array.
        self.needs_upload = true;
        if converged {
            self.phase = FieldPhase::Idle;
        }
    }

    /// The fixed per-particle attributes.
    #[inline]
    pub fn attributes(&self) -> &ParticleAttributes {
        &self.attributes
    }

    /// The live select-weight array, one weight per particle.
    #[inline]
    pub fn select_weights(&self) -> &[f32] {
        &self.select_weights
    }

    /// Number of particles.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.attributes.len()
    }

    /// Last requested target weight, 0.0 or 1.0.
    #[inline]
    pub fn target_weight(&self) -> f32 {
        self.target_weight
    }

    /// Whether per-particle relaxation is still running.
    #[inline]
    pub fn is_converging(&self) -> bool {
        self.phase == FieldPhase::Converging
    }

    /// Current phase of the field.
    #[inline]
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    /// Current mask cross-fade value.
    #[inline]
    pub fn mask(&self) -> f32 {
        self.mask.value()
    }

    /// Absolute time of the last update.
    #[inline]
    pub fn simulated_time(&self) -> f32 {
        self.simulated_time
    }

    /// Sum of all (non-negative) deltas seen so far.
    #[inline]
    pub fn accumulated_delta(&self) -> f32 {
        self.accumulated_delta
    }

    /// The scalar uniforms for the current frame.
    pub fn uniforms(&self) -> FieldUniforms {
        FieldUniforms::new(self.simulated_time, self.accumulated_delta, self.mask.value())
    }

    /// Whether the select-weight array changed since the last call, and
    /// clear the flag. Call after `update`, before uploading.
    pub fn take_needs_upload(&mut self) -> bool {
        std::mem::take(&mut self.needs_upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_field(width: u32, height: u32) -> ParticleField {
        let base = RasterSource::solid(width, height, [255, 255, 255, 255]).unwrap();
        let radial = RasterSource::solid(width, height, [0, 0, 0, 255]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let attrs = ParticleAttributes::build(&base, &radial, &mut rng).unwrap();
        ParticleField::with_attributes(attrs)
    }

    #[test]
    fn test_initial_state() {
        let field = test_field(4, 4);
        assert_eq!(field.phase(), FieldPhase::Idle);
        assert_eq!(field.target_weight(), 1.0);
        assert!(field.select_weights().iter().all(|&w| w == 1.0));
        assert_eq!(field.mask(), 0.0);
    }

    #[test]
    fn test_idle_update_touches_no_weights() {
        let mut field = test_field(4, 4);
        let before = field.select_weights().to_vec();

        for frame in 0..10 {
            field.update(frame as f32 / 60.0, 1.0 / 60.0);
        }

        // Bit-for-bit identical: the idle path never runs the arithmetic.
        assert_eq!(field.select_weights(), &before[..]);
        assert!(!field.take_needs_upload());
        assert!(field.accumulated_delta() > 0.0);
    }

    #[test]
    fn test_deselect_converges_and_goes_idle() {
        let mut field = test_field(8, 8);
        field.deselect();
        assert!(field.is_converging());

        // Slowest admissible rate is 0.01; ln(1e-4)/ln(0.99) < 920 frames.
        let mut frames = 0;
        while field.is_converging() {
            field.update(frames as f32 / 60.0, 1.0 / 60.0);
            frames += 1;
            assert!(frames < 1000, "did not converge");
        }

        for &w in field.select_weights() {
            assert!(w.abs() <= SELECT_TOLERANCE);
        }
        assert_eq!(field.phase(), FieldPhase::Idle);
    }

    #[test]
    fn test_convergence_is_monotonic() {
        let mut field = test_field(8, 8);
        field.deselect();

        let mut prev: Vec<f32> = field.select_weights().to_vec();
        for frame in 0..200 {
            field.update(frame as f32 / 60.0, 1.0 / 60.0);
            for (before, after) in prev.iter().zip(field.select_weights()) {
                assert!(after <= before, "overshoot: {before} -> {after}");
                assert!(*after >= 0.0);
            }
            prev.copy_from_slice(field.select_weights());
        }
    }

    #[test]
    fn test_update_sets_dirty_flag_only_while_converging() {
        let mut field = test_field(4, 4);
        field.deselect();

        field.update(0.0, 1.0 / 60.0);
        assert!(field.take_needs_upload());
        assert!(!field.take_needs_upload());

        while field.is_converging() {
            field.update(0.0, 1.0 / 60.0);
        }
        field.take_needs_upload();

        field.update(0.0, 1.0 / 60.0);
        assert!(!field.take_needs_upload());
    }

    #[test]
    fn test_reselect_while_idle_is_harmless() {
        let mut field = test_field(4, 4);

        // Already fully selected; selecting again flips the phase, runs
        // one pass that moves nothing, and settles back to idle.
        field.select();
        assert!(field.is_converging());
        field.update(0.0, 1.0 / 60.0);
        assert_eq!(field.phase(), FieldPhase::Idle);
        assert!(field.select_weights().iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_retarget_mid_convergence_keeps_current_weights() {
        let mut field = test_field(4, 4);
        field.deselect();
        for frame in 0..20 {
            field.update(frame as f32 / 60.0, 1.0 / 60.0);
        }
        let partial = field.select_weights().to_vec();
        assert!(partial.iter().any(|&w| w > 0.0 && w < 1.0));

        // Flipping back relaxes from the partial weights, not from 0 or 1.
        field.select();
        field.update(0.4, 1.0 / 60.0);
        for (was, now) in partial.iter().zip(field.select_weights()) {
            assert!(now >= was, "restarted below the partial weight");
            assert!(*now <= 1.0);
        }
    }

    #[test]
    fn test_negative_delta_is_inert() {
        let mut field = test_field(2, 2);
        field.update(1.0, 0.5);
        field.update(2.0, -0.25);
        assert_eq!(field.accumulated_delta(), 0.5);
        assert_eq!(field.simulated_time(), 2.0);
    }

    #[test]
    fn test_select_and_deselect_drive_mask() {
        let mut field = test_field(2, 2);

        field.deselect();
        for frame in 0..120 {
            field.update(frame as f32 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(field.mask(), 1.0);

        field.select();
        for frame in 0..120 {
            field.update(2.0 + frame as f32 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(field.mask(), 0.0);
    }

    #[test]
    fn test_uniforms_reflect_frame_state() {
        let mut field = test_field(2, 2);
        field.update(0.5, 0.25);
        field.update(0.75, 0.25);

        let uniforms = field.uniforms();
        assert_eq!(uniforms.time, 0.75);
        assert_eq!(uniforms.delta, 0.5);
        assert_eq!(uniforms.mask, 0.0);
    }
}
