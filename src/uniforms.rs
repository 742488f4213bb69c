//! The per-frame uniform block consumed by the shading stage.

use bytemuck::{Pod, Zeroable};

/// Scalar uniforms produced once per frame.
///
/// Matches the point material's uniform block: the simulated time, the
/// monotonically accumulating delta, and the tween-driven mask value.
/// Padded to 16 bytes for uniform-buffer alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FieldUniforms {
    /// Absolute simulation time of the current frame.
    pub time: f32,
    /// Sum of all frame deltas since construction.
    pub delta: f32,
    /// Mask cross-fade value, 0.0 (selected) to 1.0 (deselected).
    pub mask: f32,
    _pad: f32,
}

impl FieldUniforms {
    pub fn new(time: f32, delta: f32, mask: f32) -> Self {
        Self {
            time,
            delta,
            mask,
            _pad: 0.0,
        }
    }

    /// Raw bytes for upload to a uniform buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
