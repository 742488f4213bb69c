//! # pixelfield - raster-sampled point-sprite fields
//!
//! Renders a large static-layout point cloud whose per-point attributes are
//! sampled once from two raster images, then animated between two visual
//! states ("selected" and "deselected") with a per-particle randomized
//! relaxation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pixelfield::prelude::*;
//!
//! let base = RasterSource::from_file("assets/label.png")?;
//! let radial = RasterSource::from_file("assets/label_radial.png")?;
//!
//! let mut field = ParticleField::new(&base, &radial)?;
//! let buffers = AttributeBuffers::new(&device, &field);
//!
//! field.deselect();
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     let (time, delta) = clock.tick();
//!     field.update(time, delta);
//!     buffers.sync(&queue, &mut field);
//!     // bind buffers and draw field.particle_count() points
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Attributes
//!
//! One particle exists per pixel of the source rasters. Position, the two
//! colors, and the motion seeds (direction, speed, radius, phase) are fixed
//! at construction and stored as parallel flat arrays ready for vertex-buffer
//! upload; see [`attributes`].
//!
//! ### Select weight
//!
//! The single mutable per-particle scalar. [`ParticleField::select`] and
//! [`ParticleField::deselect`] set a global target; each frame every weight
//! relaxes toward it at its own randomized rate, and once all weights are
//! within tolerance the field goes idle and per-frame cost drops to two
//! scalar additions. See [`field`].
//!
//! ### Mask fade
//!
//! Select and deselect also cross-fade a mask scalar the shading stage reads
//! as a uniform. The fade runs on the injectable [`tween::MaskDriver`] seam,
//! with [`tween::MaskFade`] as the built-in engine.

pub mod attributes;
pub mod clock;
pub mod easing;
mod error;
pub mod field;
pub mod raster;
pub mod tween;
mod uniforms;
pub mod upload;

pub use attributes::ParticleAttributes;
pub use clock::FrameClock;
pub use error::{FieldError, RasterError};
pub use field::{FieldPhase, ParticleField};
pub use glam::{Vec3, Vec4};
pub use raster::RasterSource;
pub use tween::{MaskDriver, MaskFade};
pub use uniforms::FieldUniforms;
pub use upload::AttributeBuffers;

pub use bytemuck;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use pixelfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attributes::ParticleAttributes;
    pub use crate::clock::FrameClock;
    pub use crate::error::{FieldError, RasterError};
    pub use crate::field::{FieldPhase, ParticleField};
    pub use crate::raster::RasterSource;
    pub use crate::tween::{MaskDriver, MaskFade};
    pub use crate::uniforms::FieldUniforms;
    pub use crate::upload::AttributeBuffers;
    pub use crate::{Vec3, Vec4};
}
