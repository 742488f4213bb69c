//! Raster sources sampled into particle attributes.
//!
//! A [`RasterSource`] is an RGBA pixel buffer over a width x height grid.
//! A particle field is built from two of them covering the same grid: a
//! "base" image giving each particle its primary color and a "radial" image
//! giving its alternate color.
//!
//! # Quick Start
//!
//! ```ignore
//! use pixelfield::RasterSource;
//!
//! let base = RasterSource::from_file("assets/label.png")?;
//! let radial = RasterSource::from_file("assets/label_radial.png")?;
//! ```
//!
//! Procedural constructors are available for tests and demos:
//!
//! ```ignore
//! let base = RasterSource::solid(512, 512, [255, 255, 255, 255]);
//! let radial = RasterSource::vertical_gradient(512, 512, [255, 0, 0, 255], [0, 0, 255, 255]);
//! ```

use std::path::Path;

use crate::error::{FieldError, RasterError};

/// One RGBA pixel buffer with its grid dimensions.
///
/// Channels are stored 0-255 in row-major order, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub struct RasterSource {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterSource {
    /// Create a raster source from raw RGBA data.
    ///
    /// Fails if either dimension is zero or if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(FieldError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Load a raster source from an image file.
    ///
    /// Supports PNG and JPEG. The image is converted to RGBA8.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let img = image::open(path.as_ref())?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// Create a raster filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, FieldError> {
        let count = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(count * 4);
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
        Self::from_rgba(data, width, height)
    }

    /// Create a raster with a top-to-bottom gradient from `top` to `bottom`.
    pub fn vertical_gradient(
        width: u32,
        height: u32,
        top: [u8; 4],
        bottom: [u8; 4],
    ) -> Result<Self, FieldError> {
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for row in 0..height {
            let t = if height > 1 {
                row as f32 / (height - 1) as f32
            } else {
                0.0
            };
            let mut rgba = [0u8; 4];
            for (c, slot) in rgba.iter_mut().enumerate() {
                let v = top[c] as f32 + (bottom[c] as f32 - top[c] as f32) * t;
                *slot = v.round() as u8;
            }
            for _ in 0..width {
                data.extend_from_slice(&rgba);
            }
        }
        Self::from_rgba(data, width, height)
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the raster has no pixels. Always false for a validated raster.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw RGBA bytes in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA channels of pixel `index`, normalized to 0.0-1.0.
    #[inline]
    pub fn pixel_normalized(&self, index: usize) -> [f32; 4] {
        let at = index * 4;
        [
            self.data[at] as f32 / 255.0,
            self.data[at + 1] as f32 / 255.0,
            self.data[at + 2] as f32 / 255.0,
            self.data[at + 3] as f32 / 255.0,
        ]
    }
}
