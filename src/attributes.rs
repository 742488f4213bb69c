//! Per-particle attribute construction.
//!
//! One particle exists per grid cell of the source rasters. All attributes
//! are built in a single grid walk and stored as parallel flat arrays
//! (one array per attribute, not an array of structs) so each can be
//! uploaded to a GPU vertex buffer without repacking.
//!
//! # Indexing
//!
//! Rows are visited top to bottom, columns left to right. The horizontal
//! axis is mirrored: column `j` lands at `x = (width - j) - width / 2`,
//! while pixels are read in plain raster order. The geometry therefore
//! appears horizontally flipped relative to the source image. This is the
//! intended look, not an off-by-one; reproducing it exactly is what keeps
//! the field visually faithful.
//!
//! # Randomized attributes
//!
//! Direction, speed, orbit radius, phase offset, and the relaxation rate
//! are drawn from a caller-supplied RNG so tests can rebuild identical
//! fields from a fixed seed:
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let attrs = ParticleAttributes::build(&base, &radial, &mut rng)?;
//! ```

use glam::{Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::FieldError;
use crate::raster::RasterSource;

/// Scale applied to grid coordinates to produce world positions.
pub const POSITION_SCALE: f32 = 1.3;

/// Per-particle exponential-approach coefficient range.
pub const RELAX_RATE_MIN: f32 = 0.01;
/// See [`RELAX_RATE_MIN`].
pub const RELAX_RATE_MAX: f32 = 0.07;

/// Jitter speed range for shader-side motion.
pub const SPEED_MIN: f32 = 0.3;
/// See [`SPEED_MIN`].
pub const SPEED_MAX: f32 = 1.0;

/// Orbit radius range for shader-side motion.
pub const RADIUS_MAX: f32 = 50.0;

/// Phase offset range for shader-side motion.
pub const PHASE_MIN: f32 = -1000.0;
/// See [`PHASE_MIN`].
pub const PHASE_MAX: f32 = 1000.0;

/// Fixed per-particle attributes, one parallel array per attribute.
///
/// Everything here is immutable after construction; the only mutable
/// per-particle state (the select weight) lives on
/// [`ParticleField`](crate::field::ParticleField).
#[derive(Debug, Clone)]
pub struct ParticleAttributes {
    width: u32,
    height: u32,
    /// xyz per particle.
    positions: Vec<f32>,
    /// rgba per particle, from the base raster.
    base_colors: Vec<f32>,
    /// rgba per particle, from the radial raster.
    radial_colors: Vec<f32>,
    /// -1.0 or +1.0 per particle.
    directions: Vec<f32>,
    speeds: Vec<f32>,
    radii: Vec<f32>,
    phases: Vec<f32>,
    relax_rates: Vec<f32>,
}

impl ParticleAttributes {
    /// Build attributes from two rasters covering the same grid.
    ///
    /// Fails with [`FieldError::DimensionMismatch`] if the rasters differ
    /// in width or height. Randomized attributes are drawn from `rng`.
    pub fn build<R: Rng>(
        base: &RasterSource,
        radial: &RasterSource,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        if base.width() != radial.width() || base.height() != radial.height() {
            return Err(FieldError::DimensionMismatch {
                base: (base.width(), base.height()),
                radial: (radial.width(), radial.height()),
            });
        }

        let width = base.width();
        let height = base.height();
        let count = base.len();

        let mut positions = Vec::with_capacity(count * 3);
        let mut base_colors = Vec::with_capacity(count * 4);
        let mut radial_colors = Vec::with_capacity(count * 4);
        let mut directions = Vec::with_capacity(count);
        let mut speeds = Vec::with_capacity(count);
        let mut radii = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        let mut relax_rates = Vec::with_capacity(count);

        let half_w = width as f32 * 0.5;
        let half_h = height as f32 * 0.5;

        let mut pixel = 0usize;
        for i in 0..height {
            let y = i as f32 - half_h;
            for j in 0..width {
                // Mirrored horizontal axis; pixel reads stay in raster order.
                let x = (width - j) as f32 - half_w;

                positions.push(x * POSITION_SCALE);
                positions.push(y * POSITION_SCALE);
                positions.push(0.0);

                base_colors.extend_from_slice(&base.pixel_normalized(pixel));
                radial_colors.extend_from_slice(&radial.pixel_normalized(pixel));

                directions.push(if rng.gen::<f32>() <= 0.5 { -1.0 } else { 1.0 });
                speeds.push(rng.gen_range(SPEED_MIN..SPEED_MAX));
                radii.push(rng.gen_range(0.0..RADIUS_MAX));
                phases.push(rng.gen_range(PHASE_MIN..PHASE_MAX));
                relax_rates.push(rng.gen_range(RELAX_RATE_MIN..RELAX_RATE_MAX));

                pixel += 1;
            }
        }

        Ok(Self {
            width,
            height,
            positions,
            base_colors,
            radial_colors,
            directions,
            speeds,
            radii,
            phases,
            relax_rates,
        })
    }

    /// Build with an entropy-seeded RNG.
    pub fn from_rasters(base: &RasterSource, radial: &RasterSource) -> Result<Self, FieldError> {
        let mut rng = SmallRng::from_entropy();
        Self::build(base, radial, &mut rng)
    }

    /// Number of particles (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the field holds no particles. Always false once built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat xyz position array, length `3 * len()`.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat rgba base-color array, length `4 * len()`.
    #[inline]
    pub fn base_colors(&self) -> &[f32] {
        &self.base_colors
    }

    /// Flat rgba radial-color array, length `4 * len()`.
    #[inline]
    pub fn radial_colors(&self) -> &[f32] {
        &self.radial_colors
    }

    /// Direction signs, one per particle, each -1.0 or +1.0.
    #[inline]
    pub fn directions(&self) -> &[f32] {
        &self.directions
    }

    /// Jitter speeds, one per particle.
    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    /// Orbit radii, one per particle.
    #[inline]
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    /// Phase offsets, one per particle.
    #[inline]
    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Relaxation rates, one per particle, each between
    /// [`RELAX_RATE_MIN`] (inclusive) and [`RELAX_RATE_MAX`] (exclusive).
    #[inline]
    pub fn relax_rates(&self) -> &[f32] {
        &self.relax_rates
    }

    /// Position of particle `index` as a vector.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        let at = index * 3;
        Vec3::new(
            self.positions[at],
            self.positions[at + 1],
            self.positions[at + 2],
        )
    }

    /// Base color of particle `index` as an rgba vector.
    #[inline]
    pub fn base_color(&self, index: usize) -> Vec4 {
        let at = index * 4;
        Vec4::new(
            self.base_colors[at],
            self.base_colors[at + 1],
            self.base_colors[at + 2],
            self.base_colors[at + 3],
        )
    }

    /// Radial color of particle `index` as an rgba vector.
    #[inline]
    pub fn radial_color(&self, index: usize) -> Vec4 {
        let at = index * 4;
        Vec4::new(
            self.radial_colors[at],
            self.radial_colors[at + 1],
            self.radial_colors[at + 2],
            self.radial_colors[at + 3],
        )
    }
}
