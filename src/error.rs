//! Error types for pixelfield.
//!
//! Construction is the only fallible stage: raster buffers are validated once
//! when a field is built, and raster files can fail to load. The per-frame
//! update path is pure arithmetic on fixed-size arrays and cannot fail.

use std::fmt;

/// Errors raised while validating the raster inputs of a particle field.
#[derive(Debug)]
pub enum FieldError {
    /// The base and radial rasters do not cover the same grid.
    DimensionMismatch {
        /// (width, height) of the base raster.
        base: (u32, u32),
        /// (width, height) of the radial raster.
        radial: (u32, u32),
    },
    /// A raster was declared with a zero width or height.
    InvalidDimensions { width: u32, height: u32 },
    /// An RGBA buffer's length does not match width * height * 4.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DimensionMismatch { base, radial } => write!(
                f,
                "Base raster is {}x{} but radial raster is {}x{}; both must cover the same grid",
                base.0, base.1, radial.0, radial.1
            ),
            FieldError::InvalidDimensions { width, height } => write!(
                f,
                "Raster dimensions must be positive, got {}x{}",
                width, height
            ),
            FieldError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "RGBA buffer holds {} bytes but the grid needs {} (width * height * 4)",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for FieldError {}

/// Errors that can occur while loading a raster source from disk.
#[derive(Debug)]
pub enum RasterError {
    /// Failed to decode the image file.
    ImageLoad(image::ImageError),
    /// Failed to read the file from disk.
    Io(std::io::Error),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::ImageLoad(e) => write!(f, "Failed to decode raster image: {}", e),
            RasterError::Io(e) => write!(f, "Failed to read raster file: {}", e),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::ImageLoad(e) => Some(e),
            RasterError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::ImageLoad(e)
    }
}

impl From<std::io::Error> for RasterError {
    fn from(e: std::io::Error) -> Self {
        RasterError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = FieldError::DimensionMismatch {
            base: (512, 512),
            radial: (256, 512),
        };
        let msg = err.to_string();
        assert!(msg.contains("512x512"));
        assert!(msg.contains("256x512"));
    }

    #[test]
    fn test_buffer_size_mismatch_message() {
        let err = FieldError::BufferSizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert!(err.to_string().contains("16"));
    }
}
